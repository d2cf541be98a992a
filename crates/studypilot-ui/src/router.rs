//! Router configuration
//!
//! The site is a single landing page; every other path falls through to
//! the 404 page. In-page movement between sections is handled by
//! [`crate::interaction::navigation`], not the router.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Landing, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Landing />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::HOME, "/");
    }

    #[test]
    fn test_router_component_exists() {
        let _component = AppRouter;
    }
}
