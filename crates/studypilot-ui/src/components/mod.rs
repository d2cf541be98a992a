//! Reusable UI components for the landing page

pub mod card;
pub mod discover_button;
pub mod icon;
pub mod navbar;
pub mod reveal;

pub use card::{Card, CardContent};
pub use discover_button::DiscoverButton;
pub use icon::Icon;
pub use navbar::Navbar;
pub use reveal::Reveal;
