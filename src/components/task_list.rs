//! Task List View Component
//!
//! Displays the ordered shot list with drag-and-drop reordering.
//! Uses leptos-sortable with explicit DropZones between cards.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::config::ANIMATION_DURATION_MS;
use crate::store::{store_reorder_task, use_app_store, AppStateStoreFields};

use leptos_sortable::*;

/// Shot list view with DnD support
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    // Sort signals plus the frame-throttled push preview
    let sort = create_sort_signals();
    let preview = PushPreview::new();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(sort, preview.clone(), move |from, to| {
        web_sys::console::log_1(&format!("[DND] Drop: from={}, to={}", from, to).into());
        store_reorder_task(&store, from, to);
    });

    let indexed_tasks = move || {
        store
            .tasks()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    let row_preview = preview.clone();

    view! {
        <div class="task-list">
            // Initial drop zone at top (slot 0)
            <DropZone sort=sort preview=preview.clone() position=0 />

            <For
                each=indexed_tasks
                key=|(index, task)| {
                    // Key on every rendered field so reorders and edits recreate the row
                    (*index, task.id, task.text.clone(), task.completed)
                }
                children=move |(index, task)| {
                    let id = task.id;

                    let on_mousedown = make_on_mousedown(sort, id, index);
                    let on_mouseenter =
                        make_on_card_mouseenter(sort, row_preview.clone(), id, index);
                    let on_mouseleave = make_on_mouseleave(sort);

                    let is_dragging = move || {
                        matches!(sort.dragging_read.get(), Some(src) if src.id == id)
                    };
                    let card_class = move || {
                        if is_dragging() {
                            "task-card dragging"
                        } else {
                            "task-card"
                        }
                    };

                    view! {
                        <div
                            class=card_class
                            style=format!("transition-duration: {}ms;", ANIMATION_DURATION_MS)
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <TaskCard task=task />
                        </div>

                        // Drop zone after this card (slot index + 1)
                        <DropZone sort=sort preview=row_preview.clone() position=index + 1 />
                    }
                }
            />
        </div>
    }
}

/// Drop zone between cards - highlights when hovered during a drag
#[component]
pub fn DropZone(sort: SortSignals, preview: PushPreview, position: usize) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(sort, preview, position);
    let on_mouseleave = make_on_mouseleave(sort);

    // Is this zone the current drop target?
    let is_active = move || sort.drop_zone_read.get() == Some(position);

    // Only show while dragging
    let is_dragging = move || sort.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() {
            c.push_str(" hidden");
        }
        if is_active() {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
