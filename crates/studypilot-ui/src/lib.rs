//! Leptos 0.7 CSR landing page for StudyPilot
//!
//! A single marketing page for a tutoring service: a fixed navbar over
//! stacked sections (hero, about, services, results, contact, footer).
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7, built by Trunk
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Content and behavior knobs embedded from `site.json`
//! - Animations are CSS transitions driven by discrete state flips
//!
//! ## Module Structure
//! - `app`: Root component, config loading
//! - `router`: Route definitions
//! - `pages`: Landing and 404 pages
//! - `sections`: Section ids and the section components
//! - `components`: Navbar, reveal wrapper, cards, icons
//! - `hooks`: Reactive glue binding browser listeners to component lifetimes
//! - `state`: Pure scroll, reveal and menu state
//! - `interaction`: Scoped subscriptions and in-page navigation
//! - `dom`: web-sys bindings behind the `interaction` traits
//! - `motion`: State-to-style mapping for transitions
//! - `models`, `config`: Site content and its loader
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod interaction;
pub mod models;
pub mod motion;
pub mod pages;
pub mod router;
pub mod sections;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
