//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it mounts the App component to the body.

use leptos::prelude::*;
use studypilot_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    // Route `log` macros to the browser console
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
