//! Task Model
//!
//! Data structures for the shot list.

use serde::{Deserialize, Serialize};

/// One checklist entry: a single shot to capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}
