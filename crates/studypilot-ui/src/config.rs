//! Site configuration
//!
//! Copy, asset URLs and the two behavior knobs (navbar scroll threshold,
//! reveal inset) live in `site.json`, embedded at compile time. The app
//! parses it once at startup and provides the result as Leptos context.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::models::{Contact, Service, Stat, Testimonial, Tutor};
use crate::state::{DEFAULT_REVEAL_INSET, DEFAULT_SCROLL_THRESHOLD, RevealOptions};

const EMBEDDED_SITE: &str = include_str!("../site.json");

/// Tunables for the page's interactive behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    /// Navbar turns solid once the page scrolls strictly past this offset
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,
    /// Content blocks reveal once this far inside the viewport
    #[serde(default = "default_reveal_inset")]
    pub reveal_inset_px: f64,
}

const fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}

const fn default_reveal_inset() -> f64 {
    DEFAULT_REVEAL_INSET
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD,
            reveal_inset_px: DEFAULT_REVEAL_INSET,
        }
    }
}

impl Behavior {
    #[must_use]
    pub const fn reveal_options(&self) -> RevealOptions {
        RevealOptions::new(self.reveal_inset_px)
    }
}

/// Static assets the page loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub hero_background: String,
    pub profile_image: String,
    pub font_stylesheet: String,
}

/// Everything the landing page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub subtitle: String,
    /// Underlined phrase in the hero copy, e.g. `20+ subjects`
    pub hero_accent: String,
    pub hero_blurb: String,
    pub copyright_year: u16,
    #[serde(default)]
    pub behavior: Behavior,
    pub assets: Assets,
    pub tutor: Tutor,
    pub services: Vec<Service>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub contact: Contact,
}

impl SiteConfig {
    /// Parses and validates the configuration compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `UiError::ConfigParse` or `UiError::InvalidConfig`, see
    /// [`from_json`](Self::from_json).
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SITE)
    }

    /// Parses and validates a configuration document
    ///
    /// # Errors
    ///
    /// Returns `UiError::ConfigParse` if `json` does not match the expected
    /// shape, or `UiError::InvalidConfig` if [`validate`](Self::validate)
    /// rejects it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| UiError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde can't express
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` if:
    /// - The brand name is blank
    /// - The scroll threshold or reveal inset is negative or not finite
    /// - There are no services
    /// - A testimonial rating is outside `1..=5`
    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            return Err(UiError::InvalidConfig("brand must not be empty".to_string()));
        }

        let Behavior {
            scroll_threshold_px,
            reveal_inset_px,
        } = self.behavior;
        if !scroll_threshold_px.is_finite() || scroll_threshold_px < 0.0 {
            return Err(UiError::InvalidConfig(format!(
                "scroll threshold must be a non-negative number, got {scroll_threshold_px}"
            )));
        }
        if !reveal_inset_px.is_finite() || reveal_inset_px < 0.0 {
            return Err(UiError::InvalidConfig(format!(
                "reveal inset must be a non-negative number, got {reveal_inset_px}"
            )));
        }

        if self.services.is_empty() {
            return Err(UiError::InvalidConfig(
                "at least one service is required".to_string(),
            ));
        }

        if let Some(bad) = self.testimonials.iter().find(|t| !t.has_valid_rating()) {
            return Err(UiError::InvalidConfig(format!(
                "testimonial from '{}' has rating {}",
                bad.name, bad.rating
            )));
        }

        Ok(())
    }
}
