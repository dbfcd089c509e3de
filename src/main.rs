//! Gamerfeeds Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod dates;
mod error;
mod filters;
mod models;
mod pages;
mod store;
mod url_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
