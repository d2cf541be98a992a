//! Page components
//!
//! This module contains the top-level page components for each route.

pub mod landing;
pub mod not_found;

pub use landing::Landing;
pub use not_found::NotFound;
