//! Deadline Form Component
//!
//! Text field and submit button for replacing the committed deadline.

use leptos::html;
use leptos::prelude::*;

use crate::deadline::validate_deadline;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::time_source::use_time_source;

/// Form for validating and committing a new deadline
#[component]
pub fn DeadlineForm() -> impl IntoView {
    let store = use_app_store();
    let time = use_time_source();
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_input = move |ev: web_sys::Event| {
        store
            .pending()
            .set(Some(event_target_value(&ev).trim().to_string()));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = store.pending().get().unwrap_or_default();
        match validate_deadline(&text, time.now()) {
            Ok(instant) => {
                store.deadline().set(instant);
                store.error().set(None);
                store.pending().set(None);
                web_sys::console::log_1(&format!("[FORM] deadline set to {instant}").into());
            }
            Err(err) => {
                store.error().set(Some(err.to_string()));
            }
        }

        // The visible field is wiped on every attempt while `pending`
        // survives a failed one, so resubmitting the blanked field retries
        // the same text. Odd, but changing it would change resubmit behavior.
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <input
                class="form__field"
                type="text"
                placeholder="Set new deadline"
                node_ref=input_ref
                on:input=on_input
            />
            <button class="btn" type="submit">
                "Set Date"
            </button>
        </form>
    }
}
