//! New Task Form Component
//!
//! Floating add button plus the input row for new shots.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::store::{
    store_add_task, store_hide_input, store_show_input, use_app_store, AppStateStoreFields,
};

const INPUT_ID: &str = "new-task-input";

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Focus the input whenever it becomes visible
    Effect::new(move |_| {
        if store.input_visible().get() {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(input) = doc.get_element_by_id(INPUT_ID) {
                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                        let _ = input.focus();
                    }
                }
            }
        }
    });

    let ids = ctx.ids;

    view! {
        <div class="new-task">
            {move || if store.input_visible().get() {
                let ids = ids.clone();
                view! {
                    <form
                        class="new-task-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            store_add_task(&store, &ids);
                        }
                    >
                        <input
                            type="text"
                            id=INPUT_ID
                            placeholder="새 촬영 컷..."
                            prop:value=move || store.new_task_text().get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                store.new_task_text().set(input.value());
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    store_hide_input(&store);
                                }
                            }
                        />
                        <button type="submit">"Add"</button>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| store_hide_input(&store)
                        >
                            "Cancel"
                        </button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="fab" on:click=move |_| store_show_input(&store)>"+"</button>
                }.into_any()
            }}
        </div>
    }
}
