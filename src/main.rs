//! Task Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod models;
mod render;
mod session;
mod stats;
mod storage;
mod store;
mod tasks;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();
    mount_to_body(App);
}
