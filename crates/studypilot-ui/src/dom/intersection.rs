//! Viewport intersection observer for reveal-on-view blocks

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{Result, UiError};
use crate::interaction::{ListenerHost, Subscription};
use crate::state::RevealOptions;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer together with the callback it invokes
///
/// The callback must outlive the observer, so both travel together.
pub struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ObserverBinding {
    /// Root margin as normalized by the browser, e.g. `-100px -100px -100px -100px`
    #[must_use]
    pub fn root_margin(&self) -> String {
        self.observer.root_margin()
    }
}

/// A single element watched for viewport intersection
#[derive(Debug, Clone)]
pub struct ElementIntersection {
    element: Element,
}

impl ElementIntersection {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ListenerHost for ElementIntersection {
    type Listener = ObserverBinding;

    fn attach(&self, binding: &ObserverBinding) -> Result<()> {
        binding.observer.observe(&self.element);
        Ok(())
    }

    fn detach(&self, binding: &ObserverBinding) -> Result<()> {
        // disconnect() on an already disconnected observer is a no-op
        binding.observer.disconnect();
        Ok(())
    }

    fn label(&self) -> &'static str {
        "intersection observer"
    }
}

/// Watches `element` and reports intersection changes to `on_change`
///
/// The root box is the viewport contracted by `options.inset_px`. The
/// observer disconnects itself after the first intersecting entry.
///
/// # Errors
///
/// Returns `UiError::Observer` if the browser refuses to construct the
/// observer (unsupported, or an invalid root margin).
pub fn observe_visibility<F>(
    element: Element,
    options: RevealOptions,
    mut on_change: F,
) -> Result<Subscription<ElementIntersection>>
where
    F: FnMut(bool) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let intersecting = entry.is_intersecting();
            on_change(intersecting);
            if intersecting {
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin());

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| UiError::Observer(format!("{e:?}")))?;

    Subscription::acquire(
        ElementIntersection::new(element),
        ObserverBinding {
            observer,
            _callback: callback,
        },
    )
}
