#![allow(warnings)]
//! Campaign Roster Dashboard Entry Point

mod config;
mod error;
mod models;
mod normalize;
mod aggregate;
mod format;
mod autocomplete;
mod history;
mod roster;
mod api;
mod notify;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("roster-dashboard") {
        web_sys::console::error_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    log::info!("[APP] Starting roster dashboard");
    mount_to_body(App);
}
