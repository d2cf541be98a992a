//! Behavioral tests for in-page navigation and the mobile menu

use std::cell::RefCell;

use studypilot_ui::error::Result;
use studypilot_ui::interaction::{NavigationOutcome, SectionLookup, navigate_to};
use studypilot_ui::sections::SectionId;
use studypilot_ui::state::MobileMenu;

/// In-memory document holding the landing page's section ids
struct FakeDocument {
    scrolled_to: RefCell<Vec<String>>,
}

impl FakeDocument {
    fn landing() -> Self {
        Self {
            scrolled_to: RefCell::new(Vec::new()),
        }
    }
}

impl SectionLookup for FakeDocument {
    fn scroll_into_view(&self, id: &str) -> Result<bool> {
        if !SectionId::ALL.iter().any(|section| section.id() == id) {
            return Ok(false);
        }
        self.scrolled_to.borrow_mut().push(id.to_string());
        Ok(true)
    }
}

fn menu(open: bool) -> MobileMenu {
    let mut menu = MobileMenu::new();
    if open {
        menu.toggle();
    }
    menu
}

// ============================================================================
// NAVIGATION BEHAVIORS
// ============================================================================

#[test]
fn given_existing_section_when_navigating_then_scrolls_and_closes_menu() {
    for open in [true, false] {
        let document = FakeDocument::landing();
        let mut menu = menu(open);

        let outcome = navigate_to(&document, &mut menu, "about");

        assert_eq!(outcome, NavigationOutcome::Scrolled);
        assert_eq!(*document.scrolled_to.borrow(), ["about"]);
        assert!(!menu.is_open(), "menu should close (started open: {open})");
    }
}

#[test]
fn given_unknown_section_when_navigating_then_no_scroll_and_menu_closes() {
    for open in [true, false] {
        let document = FakeDocument::landing();
        let mut menu = menu(open);

        let outcome = navigate_to(&document, &mut menu, "nonexistent");

        assert_eq!(outcome, NavigationOutcome::TargetMissing);
        assert!(document.scrolled_to.borrow().is_empty());
        assert!(!menu.is_open());
    }
}

#[test]
fn given_every_nav_link_when_followed_then_each_target_resolves() {
    let document = FakeDocument::landing();
    let mut menu = MobileMenu::new();

    for section in SectionId::ALL {
        assert_eq!(
            navigate_to(&document, &mut menu, section.id()),
            NavigationOutcome::Scrolled
        );
    }
    assert_eq!(document.scrolled_to.borrow().len(), SectionId::ALL.len());
}

// ============================================================================
// MOBILE MENU BEHAVIORS
// ============================================================================

#[test]
fn given_closed_menu_when_toggled_twice_then_closed() {
    let mut menu = MobileMenu::new();
    menu.toggle();
    menu.toggle();
    assert!(!menu.is_open());
}

#[test]
fn given_closed_menu_when_toggled_three_times_then_open() {
    let mut menu = MobileMenu::new();
    for _ in 0..3 {
        menu.toggle();
    }
    assert!(menu.is_open());
}
