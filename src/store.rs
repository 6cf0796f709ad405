//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use chrono::{DateTime, Local};
use leptos::prelude::*;
use reactive_stores::Store;

/// Widget state shared across components.
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The committed deadline the countdown runs against.
    pub deadline: DateTime<Local>,
    /// Uncommitted text from the deadline field. Only a successful commit
    /// clears it; a rejected submit leaves it in place.
    pub pending: Option<String>,
    /// Message shown after a rejected submit, replaced on every attempt.
    pub error: Option<String>,
}

impl AppState {
    pub fn new(deadline: DateTime<Local>) -> Self {
        Self {
            deadline,
            pending: None,
            error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
