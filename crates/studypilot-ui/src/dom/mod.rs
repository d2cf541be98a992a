//! Browser bindings
//!
//! Thin web-sys adapters that plug the browser into the pure traits in
//! [`crate::interaction`]. Nothing here holds state beyond the callback
//! handles the browser needs back on removal.

pub mod document;
pub mod frame;
pub mod intersection;
pub mod scroll_listener;

pub use document::DocumentSections;
pub use frame::after_first_paint;
pub use intersection::{ElementIntersection, ObserverBinding, observe_visibility};
pub use scroll_listener::{DocumentScroll, ScrollCallback, watch_scroll};

use crate::error::{Result, UiError};

/// The global `window`
///
/// # Errors
///
/// Returns `UiError::NoWindow` outside a browser context.
pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// The window's `document`
///
/// # Errors
///
/// Returns `UiError::NoWindow` or `UiError::NoDocument` when either is
/// missing.
pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// Current vertical scroll offset of the page, `0.0` if unreadable
#[must_use]
pub fn scroll_offset() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}
