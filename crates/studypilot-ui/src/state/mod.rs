//! View-local state for the landing page
//!
//! Every type here is a plain value with pure transitions. Components wrap
//! them in signals; nothing is shared between component instances.
//!
//! - [`ScrollState`]: navbar "scrolled past threshold" flag
//! - [`RevealState`]: one-shot reveal lifecycle for a content block
//! - [`MobileMenu`]: open/closed flag for the narrow-viewport nav panel

pub mod menu;
pub mod reveal;
pub mod scroll;

pub use menu::MobileMenu;
pub use reveal::{DEFAULT_REVEAL_INSET, RevealOptions, RevealState};
pub use scroll::{DEFAULT_SCROLL_THRESHOLD, ScrollState};
