//! Countdown Frontend App
//!
//! Root component: owns the committed deadline and renders the title, the
//! clock, the form, and the error message.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CountdownClock, DeadlineForm};
use crate::deadline::parse_deadline;
use crate::store::{AppState, AppStateStoreFields};
use crate::time_source::TimeSource;

/// Deadline used when the embedder does not supply one.
pub const DEFAULT_DEADLINE: &str = "2027-1-1";

#[component]
pub fn App(#[prop(optional)] initial_deadline: Option<String>) -> impl IntoView {
    let text = initial_deadline.unwrap_or_else(|| DEFAULT_DEADLINE.to_string());
    let deadline = parse_deadline(&text).unwrap_or_else(|err| {
        web_sys::console::warn_1(
            &format!("[APP] initial deadline {text:?} rejected: {err}").into(),
        );
        parse_deadline(DEFAULT_DEADLINE).expect("built-in default deadline must parse")
    });

    let store = Store::new(AppState::new(deadline));

    // Provide context to all children
    provide_context(store);
    provide_context(TimeSource::system());

    web_sys::console::log_1(&format!("[APP] counting down to {deadline}").into());

    view! {
        <div class="app">
            <h1 class="app__title">
                "Countdown to "
                {move || store.deadline().get().format("%a %b %d %Y").to_string()}
            </h1>

            <CountdownClock deadline=Signal::derive(move || store.deadline().get()) />

            <DeadlineForm />

            {move || {
                store.error().get().map(|message| {
                    view! { <div class="message message--error">{message}</div> }
                })
            }}
        </div>
    }
}
