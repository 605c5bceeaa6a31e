//! Application Context
//!
//! Non-reactive shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::idgen::TaskIdGen;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Id source for new tasks
    pub ids: TaskIdGen,
}

impl AppContext {
    pub fn new(ids: TaskIdGen) -> Self {
        Self { ids }
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
