//! Landing page sections
//!
//! Each section renders a `<section>` carrying one of the fixed
//! [`SectionId`]s; nav links resolve targets by exact id match, so the ids
//! here and in the markup must stay in lockstep.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod results;
pub mod services;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use results::Results;
pub use services::Services;

/// Navigable sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Services,
    Results,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear (and are linked) on the page
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::About,
        Self::Services,
        Self::Results,
        Self::Contact,
    ];

    /// Element id of the section
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Results => "results",
            Self::Contact => "contact",
        }
    }

    /// Text of the nav link pointing here
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Results => "Results",
            Self::Contact => "Contact",
        }
    }

    /// Fragment href, e.g. `#about`
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids() {
        let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["hero", "about", "services", "results", "contact"]);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let unique: HashSet<_> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(unique.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_anchor_format() {
        assert_eq!(SectionId::Results.anchor(), "#results");
        assert_eq!(SectionId::Hero.nav_label(), "Home");
    }

    #[test]
    fn test_anchors_match_ids() {
        for section in SectionId::ALL {
            assert_eq!(section.anchor().strip_prefix('#'), Some(section.id()));
        }
    }
}
