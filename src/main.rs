#![allow(warnings)]
//! Countdown Frontend Entry Point

mod countdown;
mod deadline;
mod time_source;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}
