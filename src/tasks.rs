//! Task List Operations
//!
//! Pure helpers mutating the ordered task list. Unknown ids and
//! out-of-range indices are silent no-ops.

use crate::idgen::TaskIdGen;
use crate::models::Task;

/// Flip the completed flag of the task with the given id
pub fn toggle_task(tasks: &mut [Task], id: u32) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
}

/// Append a new task if the text has any content after trimming.
/// Returns whether a task was added.
pub fn append_task(tasks: &mut Vec<Task>, ids: &TaskIdGen, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    tasks.push(Task {
        id: ids.generate(),
        text: trimmed.to_string(),
        completed: false,
    });
    true
}

/// Move the task at `from` so it ends up at `to`; the cards in between
/// shift contiguously (a move, not a swap)
pub fn move_task(tasks: &mut Vec<Task>, from: usize, to: usize) {
    if from >= tasks.len() || to >= tasks.len() {
        return;
    }
    let task = tasks.remove(from);
    tasks.insert(to, task);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_tasks;

    fn make_task(id: u32, text: &str) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed: false,
        }
    }

    fn ids_of(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_toggle_flips_and_restores() {
        let mut tasks = vec![make_task(1, "A"), make_task(2, "B")];

        toggle_task(&mut tasks, 2);
        assert!(tasks[1].completed);

        toggle_task(&mut tasks, 2);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut tasks = vec![make_task(1, "A")];
        toggle_task(&mut tasks, 99);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_append_trims_text() {
        let mut tasks = vec![make_task(1, "A")];
        let ids = TaskIdGen::seeded_from(&tasks);

        assert!(append_task(&mut tasks, &ids, "  부케 던지기  "));

        assert_eq!(tasks.len(), 2);
        let last = tasks.last().unwrap();
        assert_eq!(last.id, 2);
        assert_eq!(last.text, "부케 던지기");
        assert!(!last.completed);
    }

    #[test]
    fn test_append_rejects_blank_text() {
        let mut tasks = vec![make_task(1, "A")];
        let ids = TaskIdGen::seeded_from(&tasks);

        assert!(!append_task(&mut tasks, &ids, ""));
        assert!(!append_task(&mut tasks, &ids, "   "));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_move_preserves_length_and_ids() {
        let mut tasks = vec![
            make_task(1, "A"),
            make_task(2, "B"),
            make_task(3, "C"),
            make_task(4, "D"),
        ];

        move_task(&mut tasks, 1, 3);

        assert_eq!(tasks.len(), 4);
        assert_eq!(ids_of(&tasks), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_move_is_not_a_swap() {
        let mut tasks = vec![make_task(1, "A"), make_task(2, "B"), make_task(3, "C")];

        move_task(&mut tasks, 0, 2);

        // 1 went to the end; 2 and 3 kept their relative order
        assert_eq!(ids_of(&tasks), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut tasks = vec![make_task(1, "A"), make_task(2, "B")];

        move_task(&mut tasks, 5, 0);
        move_task(&mut tasks, 0, 2);

        assert_eq!(ids_of(&tasks), vec![1, 2]);
    }

    #[test]
    fn test_move_first_seed_item_to_end() {
        let mut tasks = default_tasks();
        assert_eq!(tasks.len(), 8);

        move_task(&mut tasks, 0, 7);

        assert_eq!(tasks[0].id, 2);
        assert_eq!(tasks[7].id, 1);
    }
}
