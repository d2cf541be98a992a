//! Main application component
//!
//! Loads the embedded site configuration, provides it (and the meta
//! context) to the tree, and hands off to the router.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::config::SiteConfig;
use crate::router::AppRouter;

/// Root component
///
/// A configuration that fails to parse or validate is logged and left out
/// of context; the landing page then renders its unavailable notice.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match SiteConfig::embedded() {
        Ok(site) => {
            log::debug!(
                "site config loaded: {} services, {} testimonials",
                site.services.len(),
                site.testimonials.len()
            );
            provide_context(site);
        }
        Err(err) => log::error!("site config rejected: {err}"),
    }

    view! { <AppRouter /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}
