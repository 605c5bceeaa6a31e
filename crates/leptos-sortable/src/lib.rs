//! Leptos Sortable Utilities
//!
//! Flat-list drag-to-reorder for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod preview;

pub use preview::PushPreview;

/// The card being dragged: its id and list index at drag start
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSource {
    pub id: u32,
    pub index: usize,
}

/// Sort state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    /// Candidate insertion slot (0..=len), set while hovering a drop zone
    pub drop_zone_read: ReadSignal<Option<usize>>,
    pub drop_zone_write: WriteSignal<Option<usize>>,
    /// Pending card (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_zone_read, drop_zone_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_read,
        dragging_write,
        drop_zone_read,
        drop_zone_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Final list index for a drop: a zone past the source shifts down by one
/// once the dragged card is removed
pub fn target_index(from: usize, zone: usize) -> usize {
    if zone > from {
        zone - 1
    } else {
        zone
    }
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_write.set(None);
    sort.drop_zone_write.set(None);
    sort.pending_write.set(None);
}

/// Create mousedown handler for draggable cards.
/// Records pending drag with start position.
pub fn make_on_mousedown(
    sort: SortSignals,
    id: u32,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            // Record pending drag with position
            sort.pending_write.set(Some(DragSource { id, index }));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.dragging_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop zones.
/// Marks the candidate slot and schedules a push-preview update from the
/// zone's flanking cards.
pub fn make_on_zone_mouseenter(
    sort: SortSignals,
    preview: PushPreview,
    position: usize,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_none() {
            return;
        }
        sort.drop_zone_write.set(Some(position));
        if let Some(zone) = event_element(&ev) {
            preview.schedule_from_zone(&zone);
        }
    }
}

/// Create mouseenter handler for cards.
/// Hovering another card targets the slot before it when dragging up and
/// the slot after it when dragging down, like hovering the matching zone.
pub fn make_on_card_mouseenter(
    sort: SortSignals,
    preview: PushPreview,
    id: u32,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        let source = match sort.dragging_read.get_untracked() {
            Some(source) => source,
            None => return,
        };
        if source.id == id {
            return;
        }
        let insert_after = index > source.index;
        let zone = if insert_after { index + 1 } else { index };
        sort.drop_zone_write.set(Some(zone));
        if let Some(card) = event_element(&ev) {
            preview.schedule(card, insert_after);
        }
    }
}

/// Create mouseleave handler for cards and drop zones
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_some() {
            sort.drop_zone_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop commit.
/// Cancels any queued preview work, clears the push cues, and commits the
/// reorder exactly once per drag.
pub fn bind_global_mouseup<F>(sort: SortSignals, preview: PushPreview, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = sort.dragging_read.get_untracked();
        let zone = sort.drop_zone_read.get_untracked();

        preview.cancel();
        preview.clear_push();

        // If we were actually dragging (not just clicking)
        if let (Some(source), Some(zone)) = (dragging, zone) {
            end_drag(&sort);
            on_drop(source.index, target_index(source.index, zone));
        } else {
            // Not dragging - just end any pending state
            end_drag(&sort);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sort);
}

fn event_element(ev: &web_sys::MouseEvent) -> Option<web_sys::Element> {
    ev.current_target()?.dyn_into::<web_sys::Element>().ok()
}

#[cfg(test)]
mod tests {
    use super::target_index;

    #[test]
    fn test_zone_at_or_before_source_is_unchanged() {
        assert_eq!(target_index(3, 0), 0);
        assert_eq!(target_index(3, 3), 3);
    }

    #[test]
    fn test_zone_past_source_shifts_down() {
        assert_eq!(target_index(0, 1), 0);
        assert_eq!(target_index(2, 5), 4);
    }

    #[test]
    fn test_drop_first_card_at_bottom_of_eight() {
        // Eight cards have nine zones; the bottom zone lands the card last
        assert_eq!(target_index(0, 8), 7);
    }
}
