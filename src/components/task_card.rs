//! Task Card Component
//!
//! A single shot entry: drag handle, checkbox, text.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_toggle_task, use_app_store};

/// One row of the shot list
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let text = task.text.clone();

    view! {
        <div class=move || if completed { "task-row completed" } else { "task-row" }>
            <span class="drag-handle">"⠿"</span>

            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_toggle_task(&store, id)
            />

            <span class="task-text">{text}</span>
        </div>
    }
}
