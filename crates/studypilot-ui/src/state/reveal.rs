//! One-shot reveal state for content blocks entering the viewport

/// Default inset (logical pixels) pulling the trigger line inside the viewport
pub const DEFAULT_REVEAL_INSET: f64 = 100.0;

/// Lifecycle of a block that animates in when scrolled into view
///
/// `Unobserved -> Hidden` when the observer is attached,
/// `Hidden -> Visible` on the first qualifying intersection. `Visible` is
/// terminal: scrolling the block back out of view never hides it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Mounted, no observer attached yet
    #[default]
    Unobserved,
    /// Observer attached, block has not entered the viewport
    Hidden,
    /// Block has entered the viewport
    Visible,
}

impl RevealState {
    /// Transition taken when the intersection observer is attached
    #[must_use]
    pub const fn attach(self) -> Self {
        match self {
            Self::Unobserved => Self::Hidden,
            other => other,
        }
    }

    /// Transition taken for each intersection notification
    ///
    /// Notifications arriving before [`attach`](Self::attach) are ignored.
    #[must_use]
    pub const fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (Self::Hidden, true) => Self::Visible,
            (state, _) => state,
        }
    }

    #[must_use]
    pub const fn has_entered_view(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Observer configuration for a revealed block
///
/// Observation always stops after the first reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// How far inside the viewport edge the block must be before it reveals
    pub inset_px: f64,
}

impl RevealOptions {
    #[must_use]
    pub const fn new(inset_px: f64) -> Self {
        Self { inset_px }
    }

    /// CSS root margin for the intersection observer
    ///
    /// A positive inset contracts the root box, e.g. `100.0` becomes
    /// `"-100px"`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        if self.inset_px > 0.0 {
            format!("-{}px", self.inset_px)
        } else {
            "0px".to_string()
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_INSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_moves_unobserved_to_hidden() {
        assert_eq!(RevealState::Unobserved.attach(), RevealState::Hidden);
        assert_eq!(RevealState::Visible.attach(), RevealState::Visible);
    }

    #[test]
    fn test_intersection_before_attach_is_ignored() {
        let state = RevealState::Unobserved.observe(true);
        assert_eq!(state, RevealState::Unobserved);
    }

    #[test]
    fn test_first_intersection_reveals() {
        let state = RevealState::Unobserved.attach().observe(true);
        assert!(state.has_entered_view());
    }

    #[test]
    fn test_visible_survives_leaving_the_viewport() {
        let state = RevealState::Hidden.observe(true).observe(false);
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn test_root_margin_format() {
        assert_eq!(RevealOptions::default().root_margin(), "-100px");
        assert_eq!(RevealOptions::new(24.5).root_margin(), "-24.5px");
        assert_eq!(RevealOptions::new(0.0).root_margin(), "0px");
    }
}
