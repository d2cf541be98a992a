//! Tutoring service tiers shown in the services grid

use serde::{Deserialize, Serialize};

use super::IconKind;

/// One service tier card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub icon: IconKind,
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub subjects: Vec<String>,
}
