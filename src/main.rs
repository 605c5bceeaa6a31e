//! Shot List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod idgen;
mod models;
mod storage;
mod store;
mod tasks;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
