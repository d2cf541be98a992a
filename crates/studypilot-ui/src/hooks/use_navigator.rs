use leptos::prelude::*;

use crate::dom::DocumentSections;
use crate::interaction::{NavigationOutcome, navigate_to};
use crate::sections::SectionId;
use crate::state::MobileMenu;

/// Shared handle for in-page navigation and the mobile menu it closes
///
/// Provided once per page so the navbar and the hero call to action act
/// on the same menu state.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    menu: RwSignal<MobileMenu>,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            menu: RwSignal::new(MobileMenu::new()),
        }
    }

    /// Smooth-scrolls to `section` and closes the mobile menu
    pub fn go(self, section: SectionId) -> NavigationOutcome {
        self.menu
            .try_update(|menu| navigate_to(&DocumentSections, menu, section.id()))
            .unwrap_or(NavigationOutcome::TargetMissing)
    }

    pub fn toggle_menu(self) {
        self.menu.update(MobileMenu::toggle);
    }

    /// Reactive read of the menu flag
    #[must_use]
    pub fn is_menu_open(self) -> bool {
        self.menu.get().is_open()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a [`Navigator`] and provides it to descendants
pub fn provide_navigator() -> Navigator {
    let navigator = Navigator::new();
    provide_context(navigator);
    navigator
}

/// The page's [`Navigator`], or a fresh one when none was provided
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(provide_navigator)
}
