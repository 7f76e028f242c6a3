//! Outlay
//!
//! Expense tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Record expenses with a title, amount and category
//! - Running total of everything spent
//! - Delete entries you no longer need
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Outlay REST API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
