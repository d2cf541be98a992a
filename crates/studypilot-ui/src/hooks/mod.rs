//! Reactive hooks wiring browser events into component state
//!
//! Each hook owns its subscription for the lifetime of the calling
//! component's reactive owner: the listener is attached when the hook runs
//! and detached from `on_cleanup` when the owner is disposed.

pub mod use_mounted;
pub mod use_navigator;
pub mod use_reveal;
pub mod use_scrolled;

pub use use_mounted::use_mounted;
pub use use_navigator::{Navigator, provide_navigator, use_navigator};
pub use use_reveal::use_reveal;
pub use use_scrolled::use_scrolled;

use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;

use crate::interaction::{ListenerHost, Subscription};

/// Keeps `subscription` alive until the current reactive owner is cleaned up
///
/// Browser handles aren't `Send`; the wrapper satisfies `on_cleanup`'s
/// bounds and is only ever touched on the UI thread.
pub(crate) fn hold_until_cleanup<H>(subscription: Subscription<H>)
where
    H: ListenerHost + 'static,
    H::Listener: 'static,
{
    let held = SendWrapper::new(subscription);
    on_cleanup(move || {
        if let Err(err) = held.take().release() {
            log::warn!("failed to release subscription: {err}");
        }
    });
}
