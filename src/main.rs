//! FinBoard
//!
//! Personal finance dashboard frontend. Talks to the FinBoard REST API,
//! keeps the session token in localStorage, and renders portfolio,
//! budget, goal, and transaction data. Built with Leptos (WASM).

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod session;
mod state;
mod viewmodel;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(|| view! { <app::App /> });
}
