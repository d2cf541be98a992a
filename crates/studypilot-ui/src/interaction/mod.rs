//! Interaction module for user input handling
//!
//! Browser-independent pieces of the page's interactive behavior: scoped
//! listener lifetimes and in-page navigation.

pub mod navigation;
pub mod subscription;

pub use navigation::{NavigationOutcome, SectionLookup, navigate_to};
pub use subscription::{ListenerHost, Subscription};
