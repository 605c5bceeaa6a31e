//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutations go
//! through the pure helpers in `tasks` and persist inside the same borrow.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::idgen::TaskIdGen;
use crate::models::Task;
use crate::storage;
use crate::tasks;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered shot list
    pub tasks: Vec<Task>,
    /// Whether the new-task input row is shown
    pub input_visible: bool,
    /// Pending new-task text
    pub new_task_text: String,
}

impl AppState {
    /// Initial state: saved list if usable, default seed otherwise
    pub fn load() -> Self {
        Self {
            tasks: storage::load_tasks(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle completion of the task with the given id
pub fn store_toggle_task(store: &AppStore, id: u32) {
    let binding = store.tasks();
    let mut tasks = binding.write();
    tasks::toggle_task(&mut tasks, id);
    storage::save_tasks(&tasks);
}

/// Create a task from the pending input text. Blank input is a silent
/// no-op; on success the input row is cleared and hidden.
pub fn store_add_task(store: &AppStore, ids: &TaskIdGen) {
    let text = store.new_task_text().get_untracked();
    let added = {
        let binding = store.tasks();
        let mut tasks = binding.write();
        let added = tasks::append_task(&mut tasks, ids, &text);
        if added {
            storage::save_tasks(&tasks);
        }
        added
    };
    if added {
        store.new_task_text().set(String::new());
        store.input_visible().set(false);
    }
}

/// Commit a drag reorder: move the task at `from` to `to`
pub fn store_reorder_task(store: &AppStore, from: usize, to: usize) {
    let binding = store.tasks();
    let mut tasks = binding.write();
    tasks::move_task(&mut tasks, from, to);
    storage::save_tasks(&tasks);
}

/// Show the new-task input row
pub fn store_show_input(store: &AppStore) {
    store.input_visible().set(true);
}

/// Hide the input row and discard any pending text
pub fn store_hide_input(store: &AppStore) {
    store.input_visible().set(false);
    store.new_task_text().set(String::new());
}
