//! In-page navigation between landing sections
//!
//! Nav links don't change the route; they smooth-scroll a section into
//! view and close the mobile overlay. The document lookup sits behind
//! [`SectionLookup`] so the behavior can be exercised without a browser.

use crate::error::Result;
use crate::state::MobileMenu;

/// Resolves section ids and scrolls them into view
pub trait SectionLookup {
    /// Smooth-scrolls the element with `id` into view
    ///
    /// Returns `Ok(false)` when no element carries that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the document itself is unavailable.
    fn scroll_into_view(&self, id: &str) -> Result<bool>;
}

/// What a navigation request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Target found and scrolled into view
    Scrolled,
    /// Target id did not resolve; nothing scrolled
    TargetMissing,
}

/// Scrolls to the section named `id` and closes the mobile menu
///
/// A missing target or unavailable document is logged and reported as
/// [`NavigationOutcome::TargetMissing`]; the menu closes either way.
pub fn navigate_to<L>(lookup: &L, menu: &mut MobileMenu, id: &str) -> NavigationOutcome
where
    L: SectionLookup + ?Sized,
{
    let outcome = match lookup.scroll_into_view(id) {
        Ok(true) => NavigationOutcome::Scrolled,
        Ok(false) => {
            log::warn!("no section with id '{id}'");
            NavigationOutcome::TargetMissing
        }
        Err(err) => {
            log::warn!("navigation to '{id}' skipped: {err}");
            NavigationOutcome::TargetMissing
        }
    };
    menu.close();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    struct NoDocument;

    impl SectionLookup for NoDocument {
        fn scroll_into_view(&self, _id: &str) -> Result<bool> {
            Err(UiError::NoDocument)
        }
    }

    struct Only(&'static str);

    impl SectionLookup for Only {
        fn scroll_into_view(&self, id: &str) -> Result<bool> {
            Ok(id == self.0)
        }
    }

    #[test]
    fn test_found_target_scrolls() {
        let mut menu = MobileMenu::new();
        let outcome = navigate_to(&Only("about"), &mut menu, "about");
        assert_eq!(outcome, NavigationOutcome::Scrolled);
    }

    #[test]
    fn test_missing_document_degrades_silently() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        let outcome = navigate_to(&NoDocument, &mut menu, "about");
        assert_eq!(outcome, NavigationOutcome::TargetMissing);
        assert!(!menu.is_open());
    }
}
