//! App Configuration
//!
//! Fixed defaults used when storage has nothing usable.

use crate::models::Task;

/// Drag-and-drop push/reorder transition duration in milliseconds
pub const ANIMATION_DURATION_MS: u32 = 200;

/// Shot names seeded on first launch, with their initial completion state
const DEFAULT_SHOTS: &[(&str, bool)] = &[
    ("신랑신부 포즈컷", false),
    ("신부 포즈컷", false),
    ("신랑신부 정면", false),
    ("양가 촬주", false),
    ("신랑측 직계가족", true),
    ("신부측 직계가족", true),
    ("직장동료 우인", false),
    ("부케 던지기", false),
];

/// Build the default seed list (ids 1..)
pub fn default_tasks() -> Vec<Task> {
    DEFAULT_SHOTS
        .iter()
        .enumerate()
        .map(|(i, (text, completed))| Task {
            id: i as u32 + 1,
            text: (*text).to_string(),
            completed: *completed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_shape() {
        let tasks = default_tasks();

        assert_eq!(tasks.len(), 8);
        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        // Family group shots start checked off
        let completed: Vec<u32> = tasks.iter().filter(|t| t.completed).map(|t| t.id).collect();
        assert_eq!(completed, vec![5, 6]);
    }
}
