//! Task Id Generation
//!
//! Monotonic per-session id counter. Starts above anything already in the
//! list so ids loaded from storage are never reissued.

use std::cell::Cell;
use std::rc::Rc;

use send_wrapper::SendWrapper;

use crate::models::Task;

/// Hands out unique task ids; clones share one counter
#[derive(Clone, Debug)]
pub struct TaskIdGen {
    next: SendWrapper<Rc<Cell<u32>>>,
}

impl TaskIdGen {
    /// Start counting above the highest id present
    pub fn seeded_from(tasks: &[Task]) -> Self {
        let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            next: SendWrapper::new(Rc::new(Cell::new(max + 1))),
        }
    }

    pub fn generate(&self) -> u32 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32) -> Task {
        Task {
            id,
            text: format!("Shot {}", id),
            completed: false,
        }
    }

    #[test]
    fn test_empty_list_starts_at_one() {
        let ids = TaskIdGen::seeded_from(&[]);
        assert_eq!(ids.generate(), 1);
        assert_eq!(ids.generate(), 2);
    }

    #[test]
    fn test_seeded_above_existing_ids() {
        let tasks = vec![make_task(3), make_task(8), make_task(1)];
        let ids = TaskIdGen::seeded_from(&tasks);
        assert_eq!(ids.generate(), 9);
        assert_eq!(ids.generate(), 10);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let ids = TaskIdGen::seeded_from(&[make_task(1)]);
        let other = ids.clone();
        assert_eq!(ids.generate(), 2);
        assert_eq!(other.generate(), 3);
        assert_eq!(ids.generate(), 4);
    }
}
