//! Declarative motion: discrete state in, inline style out
//!
//! Components never drive animations imperatively. They flip a boolean (or a
//! [`RevealState`]) and [`Variants::style`] maps it to target CSS values plus
//! a `transition` declaration; the browser interpolates between them.

use crate::state::RevealState;

/// CSS timing function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Target visual values for one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStyle {
    pub opacity: f32,
    /// Vertical offset in logical pixels
    pub translate_y: f32,
    pub scale: f32,
}

impl MotionStyle {
    /// Fully shown, in place
    pub const REST: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Transparent and shifted vertically by `translate_y`
    #[must_use]
    pub const fn offset(translate_y: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y,
            scale: 1.0,
        }
    }

    /// Transparent and shrunk to `scale`
    #[must_use]
    pub const fn shrunk(scale: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y: 0.0,
            scale,
        }
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({})",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// Timing applied when moving between variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    #[must_use]
    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.as_css(),
            self.delay_ms
        );
        format!("transition: opacity {timing}, transform {timing}")
    }
}

/// A hidden/visible pair with the transition between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: MotionStyle,
    pub visible: MotionStyle,
    pub transition: Transition,
}

impl Variants {
    /// Content block sliding up 50px as it scrolls into view
    #[must_use]
    pub const fn section_reveal() -> Self {
        Self {
            hidden: MotionStyle::offset(50.0),
            visible: MotionStyle::REST,
            transition: Transition::new(600, Easing::EaseOut),
        }
    }

    /// Card in a grid, staggered 200ms per position
    #[must_use]
    pub const fn card_reveal(index: u32) -> Self {
        Self {
            hidden: MotionStyle::offset(30.0),
            visible: MotionStyle::REST,
            transition: Transition::new(600, Easing::EaseOut).delayed(index.saturating_mul(200)),
        }
    }

    /// Navbar dropping in from above on first paint
    #[must_use]
    pub const fn navbar_entrance() -> Self {
        Self {
            hidden: MotionStyle::offset(-50.0),
            visible: MotionStyle::REST,
            transition: Transition::new(500, Easing::EaseOut),
        }
    }

    /// Hero copy rising into place after `delay_ms`
    #[must_use]
    pub const fn hero_entrance(delay_ms: u32) -> Self {
        Self {
            hidden: MotionStyle::offset(30.0),
            visible: MotionStyle::REST,
            transition: Transition::new(800, Easing::EaseInOut).delayed(delay_ms),
        }
    }

    /// Hero badge row growing in last
    #[must_use]
    pub const fn hero_badges() -> Self {
        Self {
            hidden: MotionStyle::shrunk(0.8),
            visible: MotionStyle::REST,
            transition: Transition::new(1000, Easing::EaseInOut).delayed(1200),
        }
    }

    /// Inline style for the given visibility
    #[must_use]
    pub fn style(&self, shown: bool) -> String {
        let target = if shown { self.visible } else { self.hidden };
        format!("{}; {}", target.to_css(), self.transition.to_css())
    }

    /// Inline style for a reveal lifecycle state; anything short of
    /// `Visible` renders hidden
    #[must_use]
    pub fn style_for(&self, state: RevealState) -> String {
        self.style(state.has_entered_view())
    }
}
