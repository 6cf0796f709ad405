//! Time Unit Display Component
//!
//! One countdown unit: a progress ring wrapped around a zero-padded
//! amount and its label.

use leptos::prelude::*;

use crate::components::ProgressRing;

/// Pads single-digit non-negative amounts to two characters. Wider and
/// negative amounts render unchanged.
fn zerofill(amount: i64) -> String {
    if (0..10).contains(&amount) {
        format!("0{amount}")
    } else {
        amount.to_string()
    }
}

/// Ring plus text for one unit of remaining time
#[component]
pub fn TimeUnit(
    #[prop(into)] amount: Signal<i64>,
    max: f64,
    unit: &'static str,
) -> impl IntoView {
    view! {
        <div class="clock__display">
            <ProgressRing
                class="clock__circle"
                done=Signal::derive(move || amount.get() as f64)
                max=max
            />
            <div class=format!("clock__text clock__text--{unit}")>
                <span class="clock__amount">{move || zerofill(amount.get())}</span>
                <span class="clock__unit">{unit}</span>
            </div>
        </div>
    }
}
