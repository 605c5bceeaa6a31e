//! Local Storage Persistence
//!
//! Reads the saved shot list once at startup and writes it back after
//! every mutation. A malformed payload is treated as absent.

use crate::config;
use crate::models::Task;

/// Storage slot holding the serialized task list
const STORAGE_KEY: &str = "tasks";

/// Load the saved list, falling back to the default seed
pub fn load_tasks() -> Vec<Task> {
    let raw = read_slot();
    match parse_saved(raw.as_deref()) {
        Some(tasks) => {
            web_sys::console::log_1(&format!("[STORE] Loaded {} saved tasks", tasks.len()).into());
            tasks
        }
        None => {
            web_sys::console::log_1(&"[STORE] No usable saved tasks, using default seed".into());
            config::default_tasks()
        }
    }
}

/// Serialize and write the list; failures log and degrade
pub fn save_tasks(tasks: &[Task]) {
    let json = match serde_json::to_string(tasks) {
        Ok(json) => json,
        Err(_) => return,
    };
    if let Some(storage) = local_storage() {
        if storage.set_item(STORAGE_KEY, &json).is_err() {
            web_sys::console::log_1(&"[STORE] Failed to persist tasks".into());
        }
    }
}

fn read_slot() -> Option<String> {
    local_storage()?.get_item(STORAGE_KEY).ok().flatten()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Parse a saved payload; `None` unless it is a proper sequence of tasks
fn parse_saved(raw: Option<&str>) -> Option<Vec<Task>> {
    serde_json::from_str(raw?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved_single_item() {
        let parsed = parse_saved(Some(r#"[{"id":1,"text":"A","completed":true}]"#)).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 1);
        assert_eq!(parsed[0].text, "A");
        assert!(parsed[0].completed);
    }

    #[test]
    fn test_parse_saved_rejects_malformed() {
        assert!(parse_saved(None).is_none());
        assert!(parse_saved(Some("not json")).is_none());
        // Non-sequence payloads are treated as absent
        assert!(parse_saved(Some(r#"{"id":1,"text":"A","completed":false}"#)).is_none());
        assert!(parse_saved(Some("42")).is_none());
        // A sequence of the wrong records is also absent
        assert!(parse_saved(Some(r#"[{"id":1}]"#)).is_none());
    }

    #[test]
    fn test_parse_saved_roundtrips_serializer_output() {
        let tasks = vec![
            Task {
                id: 7,
                text: "신부 포즈컷".to_string(),
                completed: false,
            },
            Task {
                id: 9,
                text: "부케 던지기".to_string(),
                completed: true,
            },
        ];

        let json = serde_json::to_string(&tasks).unwrap();
        assert_eq!(parse_saved(Some(&json)).unwrap(), tasks);
    }
}
