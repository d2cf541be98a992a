//! Scoped listener registration
//!
//! Browser event listeners and observers are registered against some host
//! (the document, an element) and must be removed with the exact same
//! callback handle. [`Subscription`] owns both halves: it attaches on
//! [`acquire`](Subscription::acquire) and detaches on
//! [`release`](Subscription::release) or drop, so a component that stores
//! the subscription for its lifetime can never leak a callback into a
//! removed view or register twice.

use crate::error::Result;

/// Something listeners can be attached to and detached from
///
/// Implementations must treat detaching a listener that was never attached
/// as a no-op.
pub trait ListenerHost {
    /// Handle identifying the registered callback
    type Listener;

    /// Registers the listener with the host
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the registration.
    fn attach(&self, listener: &Self::Listener) -> Result<()>;

    /// Removes a previously attached listener
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to remove the registration.
    fn detach(&self, listener: &Self::Listener) -> Result<()>;

    /// Short label used in log lines
    fn label(&self) -> &'static str {
        "listener"
    }
}

/// An attached listener, detached when released or dropped
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription<H: ListenerHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: ListenerHost> Subscription<H> {
    /// Attaches `listener` to `host`
    ///
    /// # Errors
    ///
    /// Returns the host's error if attaching fails; nothing is registered
    /// in that case.
    pub fn acquire(host: H, listener: H::Listener) -> Result<Self> {
        host.attach(&listener)?;
        log::debug!("attached {}", host.label());
        Ok(Self {
            host,
            listener: Some(listener),
        })
    }

    /// The attached listener, `None` once released
    #[must_use]
    pub const fn listener(&self) -> Option<&H::Listener> {
        self.listener.as_ref()
    }

    /// Detaches the listener now and reports any failure
    ///
    /// # Errors
    ///
    /// Returns the host's error if detaching fails.
    pub fn release(mut self) -> Result<()> {
        self.detach_listener()
    }

    fn detach_listener(&mut self) -> Result<()> {
        let Some(listener) = self.listener.take() else {
            return Ok(());
        };
        self.host.detach(&listener)?;
        log::debug!("detached {}", self.host.label());
        Ok(())
    }
}

impl<H: ListenerHost> Drop for Subscription<H> {
    fn drop(&mut self) {
        if let Err(err) = self.detach_listener() {
            log::warn!("{} teardown failed: {err}", self.host.label());
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::UiError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counter {
        active: Rc<Cell<i32>>,
        fail_attach: bool,
    }

    impl ListenerHost for Counter {
        type Listener = ();

        fn attach(&self, _listener: &()) -> Result<()> {
            if self.fail_attach {
                return Err(UiError::ListenerAttach("refused".to_string()));
            }
            self.active.set(self.active.get() + 1);
            Ok(())
        }

        fn detach(&self, _listener: &()) -> Result<()> {
            self.active.set(self.active.get() - 1);
            Ok(())
        }
    }

    #[test]
    fn test_acquire_attaches_and_drop_detaches() {
        let host = Counter::default();
        let subscription = Subscription::acquire(host.clone(), ()).unwrap();
        assert!(subscription.listener().is_some());
        assert_eq!(host.active.get(), 1);

        drop(subscription);
        assert_eq!(host.active.get(), 0);
    }

    #[test]
    fn test_release_detaches_exactly_once() {
        let host = Counter::default();
        let subscription = Subscription::acquire(host.clone(), ()).unwrap();
        subscription.release().unwrap();
        assert_eq!(host.active.get(), 0);
    }

    #[test]
    fn test_failed_attach_registers_nothing() {
        let host = Counter {
            fail_attach: true,
            ..Counter::default()
        };
        let result = Subscription::acquire(host.clone(), ());
        assert!(matches!(result, Err(UiError::ListenerAttach(_))));
        assert_eq!(host.active.get(), 0);
    }
}
