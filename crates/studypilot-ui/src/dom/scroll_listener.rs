//! Document scroll listener

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{document, scroll_offset};
use crate::error::{Result, UiError};
use crate::interaction::{ListenerHost, Subscription};

/// Callback handle registered for `scroll` events
pub type ScrollCallback = Closure<dyn FnMut()>;

/// The document as a host for `scroll` listeners
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScroll;

impl ListenerHost for DocumentScroll {
    type Listener = ScrollCallback;

    fn attach(&self, listener: &ScrollCallback) -> Result<()> {
        document()?
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|e| UiError::ListenerAttach(format!("scroll: {e:?}")))
    }

    fn detach(&self, listener: &ScrollCallback) -> Result<()> {
        document()?
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|e| UiError::ListenerDetach(format!("scroll: {e:?}")))
    }

    fn label(&self) -> &'static str {
        "document scroll listener"
    }
}

/// Calls `on_offset` with the page's vertical offset on every scroll event
///
/// The listener stays registered until the returned subscription is
/// released or dropped.
///
/// # Errors
///
/// Returns an error if:
/// - No window or document is available
/// - Event listener attachment fails
///
/// # Example
///
/// ```no_run
/// use studypilot_ui::dom::watch_scroll;
///
/// # fn example() -> studypilot_ui::error::Result<()> {
/// let subscription = watch_scroll(|offset| log::debug!("scrolled to {offset}"))?;
/// // ... later when the component unmounts ...
/// subscription.release()?;
/// # Ok(())
/// # }
/// ```
pub fn watch_scroll<F>(mut on_offset: F) -> Result<Subscription<DocumentScroll>>
where
    F: FnMut(f64) + 'static,
{
    let closure = Closure::wrap(Box::new(move || on_offset(scroll_offset())) as Box<dyn FnMut()>);
    Subscription::acquire(DocumentScroll, closure)
}
