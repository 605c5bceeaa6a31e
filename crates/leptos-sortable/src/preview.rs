//! Push Preview
//!
//! Transient "will move" affordance shown while dragging: the cards that
//! would flank the dropped card get push-up / push-down classes. DOM
//! updates are coalesced to one per animation frame; the newest request
//! wins.

use std::cell::RefCell;
use std::rc::Rc;

use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Class marking a real sortable card
const CARD_CLASS: &str = "task-card";
/// Classes marking transient drag artifacts to skip when searching
const IGNORED_CLASSES: &[&str] = &["dragging", "drop-zone"];
const PUSH_UP_CLASS: &str = "push-up";
const PUSH_DOWN_CLASS: &str = "push-down";

/// Single-slot pending job: a newly scheduled job replaces any
/// unexecuted one
#[derive(Debug)]
struct PreviewSlot<T> {
    pending: Option<T>,
}

impl<T> PreviewSlot<T> {
    fn new() -> Self {
        Self { pending: None }
    }

    fn set(&mut self, job: T) {
        self.pending = Some(job);
    }

    fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    fn clear(&mut self) {
        self.pending = None;
    }
}

struct PreviewState {
    slot: PreviewSlot<(Element, bool)>,
    raf_id: Option<i32>,
    /// Card currently marked push-up
    push_prev: Option<Element>,
    /// Card currently marked push-down
    push_next: Option<Element>,
}

/// Frame-throttled push-cue driver
#[derive(Clone)]
pub struct PushPreview {
    state: SendWrapper<Rc<RefCell<PreviewState>>>,
}

impl Default for PushPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl PushPreview {
    pub fn new() -> Self {
        Self {
            state: SendWrapper::new(Rc::new(RefCell::new(PreviewState {
                slot: PreviewSlot::new(),
                raf_id: None,
                push_prev: None,
                push_next: None,
            }))),
        }
    }

    /// Queue a cue update from a hovered drop zone.
    /// The zone resolves to its neighboring card plus insertion side.
    pub fn schedule_from_zone(&self, zone: &Element) {
        let (rel, insert_after) = match zone.next_element_sibling() {
            Some(next) => (next, false),
            None => match zone.previous_element_sibling() {
                Some(prev) => (prev, true),
                None => return,
            },
        };
        self.schedule(rel, insert_after);
    }

    /// Queue a cue update; at most one DOM update runs per frame and the
    /// newest request wins
    pub fn schedule(&self, rel: Element, insert_after: bool) {
        let mut state = self.state.borrow_mut();
        state.slot.set((rel, insert_after));
        if state.raf_id.is_some() {
            return;
        }

        let preview = self.clone();
        let cb = Closure::once_into_js(move || preview.on_frame());
        if let Some(win) = web_sys::window() {
            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                state.raf_id = Some(id);
            }
        }
    }

    /// Drop any queued update and cancel the in-flight frame callback
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.slot.clear();
        if let Some(id) = state.raf_id.take() {
            if let Some(win) = web_sys::window() {
                let _ = win.cancel_animation_frame(id);
            }
        }
    }

    /// Remove both push cues
    pub fn clear_push(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(el) = state.push_prev.take() {
            remove_push(&el);
        }
        if let Some(el) = state.push_next.take() {
            remove_push(&el);
        }
    }

    fn on_frame(&self) {
        let job = {
            let mut state = self.state.borrow_mut();
            state.raf_id = None;
            state.slot.take()
        };
        if let Some((rel, insert_after)) = job {
            self.apply(&rel, insert_after);
        }
    }

    /// Compute and mark the cards flanking the insertion point.
    /// The walk skips drag artifacts; a single flanking card gets only
    /// the downward cue.
    fn apply(&self, rel: &Element, insert_after: bool) {
        let upper_start = if insert_after {
            Some(rel.clone())
        } else {
            rel.previous_element_sibling()
        };
        let lower_start = if insert_after {
            rel.next_element_sibling()
        } else {
            Some(rel.clone())
        };
        let mut upper = find_card(upper_start, Element::previous_element_sibling);
        let lower = find_card(lower_start, Element::next_element_sibling);
        if upper == lower {
            upper = None;
        }

        let mut state = self.state.borrow_mut();

        // Unmark cards that are no longer flanking
        if let Some(prev) = state.push_prev.take() {
            if upper.as_ref() != Some(&prev) {
                remove_push(&prev);
            }
        }
        if let Some(next) = state.push_next.take() {
            if lower.as_ref() != Some(&next) {
                remove_push(&next);
            }
        }

        if let Some(ref el) = upper {
            let _ = el.class_list().add_1(PUSH_UP_CLASS);
            let _ = el.class_list().remove_1(PUSH_DOWN_CLASS);
        }
        if let Some(ref el) = lower {
            let _ = el.class_list().add_1(PUSH_DOWN_CLASS);
            let _ = el.class_list().remove_1(PUSH_UP_CLASS);
        }

        state.push_prev = upper;
        state.push_next = lower;
    }
}

/// Walk element siblings from `start` until a real, non-transient card
fn find_card<F>(start: Option<Element>, step: F) -> Option<Element>
where
    F: Fn(&Element) -> Option<Element>,
{
    let mut current = start;
    while let Some(el) = current {
        if is_card(&el) && !is_ignored(&el) {
            return Some(el);
        }
        current = step(&el);
    }
    None
}

fn is_card(el: &Element) -> bool {
    el.class_list().contains(CARD_CLASS)
}

fn is_ignored(el: &Element) -> bool {
    IGNORED_CLASSES.iter().any(|c| el.class_list().contains(c))
}

fn remove_push(el: &Element) {
    let _ = el.class_list().remove_2(PUSH_UP_CLASS, PUSH_DOWN_CLASS);
}

#[cfg(test)]
mod tests {
    use super::PreviewSlot;

    #[test]
    fn test_latest_scheduled_job_wins() {
        let mut slot = PreviewSlot::new();

        slot.set(1);
        slot.set(2);
        slot.set(3);

        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_clear_drops_pending_job() {
        let mut slot = PreviewSlot::new();
        slot.set(1);
        slot.clear();
        assert_eq!(slot.take(), None);
    }
}
