//! Countdown Clock Component
//!
//! Recomputes the remaining-time tuple once per second and renders one
//! unit display per field.

use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::TimeUnit;
use crate::countdown::TimeLeft;
use crate::time_source::use_time_source;

const TICK_MS: u32 = 1_000;

/// Four-ring countdown against `deadline`.
///
/// The interval handle lives exactly as long as the component: created on
/// mount, cancelled by the `on_cleanup` drop.
#[component]
pub fn CountdownClock(#[prop(into)] deadline: Signal<DateTime<Local>>) -> impl IntoView {
    let time = use_time_source();

    // First tuple is computed before the first paint, not a second after.
    let (remaining, set_remaining) = signal(TimeLeft::until(deadline.get_untracked(), time.now()));

    // The handle is a JS-side value, so it lives in local storage; the
    // cleanup drop cancels the underlying browser interval.
    let interval = StoredValue::new_local(Some(Interval::new(TICK_MS, move || {
        // A deadline committed between ticks is picked up here.
        set_remaining.set(TimeLeft::until(deadline.get_untracked(), time.now()));
    })));
    on_cleanup(move || interval.update_value(|interval| drop(interval.take())));

    view! {
        <div class="clock">
            <TimeUnit amount=Signal::derive(move || remaining.get().days) max=365.0 unit="days" />
            <TimeUnit amount=Signal::derive(move || remaining.get().hours) max=24.0 unit="hours" />
            <TimeUnit amount=Signal::derive(move || remaining.get().minutes) max=60.0 unit="minutes" />
            <TimeUnit amount=Signal::derive(move || remaining.get().seconds) max=60.0 unit="seconds" />
        </div>
    }
}
