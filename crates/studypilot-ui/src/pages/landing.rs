//! The StudyPilot landing page

use leptos::prelude::*;
use leptos_meta::{Link, Title};

use crate::components::Navbar;
use crate::config::SiteConfig;
use crate::hooks::provide_navigator;
use crate::sections::{About, ContactSection, Footer, Hero, Results, Services};

/// Navbar plus the stacked content sections
///
/// Reads [`SiteConfig`] from context; without it the page renders a short
/// notice instead of an empty shell.
#[component]
pub fn Landing() -> impl IntoView {
    let Some(site) = use_context::<SiteConfig>() else {
        return view! { <ContentUnavailable /> }.into_any();
    };

    provide_context(site.behavior);
    provide_navigator();

    let SiteConfig {
        brand,
        tagline,
        subtitle,
        hero_accent,
        hero_blurb,
        copyright_year,
        behavior,
        assets,
        tutor,
        services,
        testimonials,
        stats,
        contact,
    } = site;
    let badges: Vec<_> = stats.iter().take(3).cloned().collect();

    view! {
        <Title text=brand.clone() />
        <Link rel="stylesheet" href=assets.font_stylesheet />

        <div class="min-h-screen">
            <Navbar brand=brand.clone() scroll_threshold=behavior.scroll_threshold_px />
            <Hero
                brand=brand.clone()
                tagline=tagline.clone()
                subtitle=subtitle
                accent=hero_accent
                blurb=hero_blurb
                background=assets.hero_background
                badges=badges
            />
            <About tutor=tutor profile_image=assets.profile_image />
            <Services services=services />
            <Results testimonials=testimonials stats=stats />
            <ContactSection contact=contact />
            <Footer brand=brand tagline=tagline year=copyright_year />
        </div>
    }
    .into_any()
}

/// Shown when the site configuration failed to load
#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-white">
            <p class="text-gray-600">"This page is temporarily unavailable. Please try again later."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_component_exists() {
        let _component = Landing;
    }
}
