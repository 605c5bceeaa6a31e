//! Shot List App
//!
//! Root component: restores persisted state, provides the store, and
//! lays out the checklist.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, TaskListView};
use crate::context::AppContext;
use crate::idgen::TaskIdGen;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Restore persisted state once at startup
    let state = AppState::load();
    let ids = TaskIdGen::seeded_from(&state.tasks);
    web_sys::console::log_1(&format!("[APP] Starting with {} tasks", state.tasks.len()).into());

    let store = Store::new(state);

    // Provide store and context to all children
    provide_context(store);
    provide_context(AppContext::new(ids));

    view! {
        <main class="app-layout">
            <h1>"촬영 컷 리스트"</h1>

            <TaskListView />

            <p class="task-count">
                {move || {
                    let tasks = store.tasks().get();
                    let done = tasks.iter().filter(|t| t.completed).count();
                    format!("{} / {} shots done", done, tasks.len())
                }}
            </p>

            <NewTaskForm />
        </main>
    }
}
