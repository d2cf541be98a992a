//! Tutor profile, headline stats and contact details

use serde::{Deserialize, Serialize};

use super::IconKind;

/// A single credential line on the tutor card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub icon: IconKind,
    pub text: String,
}

/// The tutor introduced in the about section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutor {
    pub name: String,
    #[serde(default)]
    pub credentials: Vec<Credential>,
    pub bio: String,
    pub philosophy: String,
}

/// Headline number in the results grid, e.g. `3000+ Tutoring Hours`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Call-to-action details for the contact section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub pitch: String,
    pub phone_display: String,
    /// `tel:` URI dialed by the call button
    pub phone_href: String,
    pub availability: String,
}

impl Contact {
    #[must_use]
    pub fn has_dialable_phone(&self) -> bool {
        self.phone_href.starts_with("tel:") && self.phone_href.len() > "tel:".len()
    }
}
