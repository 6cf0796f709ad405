//! UI Components
//!
//! Reusable Leptos components.

mod countdown_clock;
mod deadline_form;
mod progress_ring;
mod time_unit;

pub use countdown_clock::CountdownClock;
pub use deadline_form::DeadlineForm;
pub use progress_ring::ProgressRing;
pub use time_unit::TimeUnit;
