//! WASM entry point for the landing page
//!
//! Trunk compiles this to WASM; it mounts the Leptos `App` to the document body.

use leptos::prelude::*;
use reel_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
