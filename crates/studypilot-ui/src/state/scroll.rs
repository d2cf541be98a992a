//! Scroll-position tracking for the navigation bar
//!
//! The navbar switches from a transparent to a solid treatment once the
//! page has scrolled past a small threshold. [`ScrollState`] holds that
//! single flag; the browser binding feeds it raw offsets and only pushes a
//! new value into the reactive graph when the flag actually flips.

/// Vertical offset (logical pixels) past which the page counts as scrolled
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 10.0;

/// Whether the page is scrolled past the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    scrolled: bool,
    threshold: f64,
}

impl ScrollState {
    /// Creates an unscrolled state with the given threshold
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            threshold,
        }
    }

    /// True when the last observed offset was strictly past the threshold
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Folds a new scroll offset into the state
    ///
    /// Returns `Some(next)` only when the scrolled flag changes, so callers
    /// can skip notifying dependents for offsets that keep the same side of
    /// the threshold. A non-finite offset compares false and reads as
    /// unscrolled.
    ///
    /// # Examples
    ///
    /// ```
    /// use studypilot_ui::state::ScrollState;
    ///
    /// let state = ScrollState::new(10.0);
    /// assert!(state.observe(5.0).is_none());
    ///
    /// let next = state.observe(11.0).map(|s| s.is_scrolled());
    /// assert_eq!(next, Some(true));
    /// ```
    #[must_use]
    pub fn observe(self, offset: f64) -> Option<Self> {
        let scrolled = offset > self.threshold;
        (scrolled != self.scrolled).then_some(Self { scrolled, ..self })
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}
