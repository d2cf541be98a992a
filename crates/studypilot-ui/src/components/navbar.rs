//! Fixed top navigation bar

use leptos::prelude::*;

use crate::components::Icon;
use crate::hooks::{Navigator, use_mounted, use_navigator, use_scrolled};
use crate::models::IconKind;
use crate::motion::Variants;
use crate::sections::SectionId;

/// Background treatment for the bar
///
/// Solid once the page is scrolled or while the mobile panel is open, so
/// the panel never floats over hero content on a transparent bar.
#[must_use]
pub const fn chrome_class(scrolled: bool, menu_open: bool) -> &'static str {
    if scrolled || menu_open {
        "bg-white/95 shadow-md backdrop-blur-sm"
    } else {
        "bg-transparent"
    }
}

#[component]
fn NavLink(section: SectionId, navigator: Navigator) -> impl IntoView {
    view! {
        <a
            href=section.anchor()
            on:click=move |ev| {
                ev.prevent_default();
                navigator.go(section);
            }
            class="text-gray-600 hover:text-emerald-600 transition-colors duration-300 font-medium"
        >
            {section.nav_label()}
        </a>
    }
}

fn nav_links(navigator: Navigator) -> impl IntoView {
    SectionId::ALL
        .into_iter()
        .map(|section| view! { <NavLink section=section navigator=navigator /> })
        .collect_view()
}

/// Top navigation with desktop links and a collapsible mobile panel
#[component]
pub fn Navbar(#[prop(into)] brand: String, scroll_threshold: f64) -> impl IntoView {
    let navigator = use_navigator();
    let scrolled = use_scrolled(scroll_threshold);
    let mounted = use_mounted();
    let entrance = Variants::navbar_entrance();

    let chrome = move || {
        format!(
            "transition-all duration-300 {}",
            chrome_class(scrolled.get(), navigator.is_menu_open())
        )
    };

    view! {
        <nav
            class="fixed top-0 left-0 right-0 z-50"
            style=move || entrance.style(mounted.get())
        >
            <div class=chrome>
                <div class="container mx-auto px-6">
                    <div class="flex justify-between items-center h-20">
                        <a
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                navigator.go(SectionId::Hero);
                            }
                            class="text-2xl font-bold text-primary"
                        >
                            {brand}
                        </a>

                        <div class="hidden md:flex items-center space-x-8">
                            {nav_links(navigator)}
                        </div>

                        <div class="md:hidden">
                            <button
                                type="button"
                                aria-label="Toggle navigation"
                                aria-expanded=move || navigator.is_menu_open().to_string()
                                on:click=move |_| navigator.toggle_menu()
                                class="text-gray-600 hover:text-emerald-600 focus:outline-none"
                            >
                                {move || {
                                    let kind = if navigator.is_menu_open() {
                                        IconKind::X
                                    } else {
                                        IconKind::Menu
                                    };
                                    view! { <Icon kind=kind class="w-6 h-6" /> }
                                }}
                            </button>
                        </div>
                    </div>
                </div>

                <Show when=move || navigator.is_menu_open()>
                    <div class="md:hidden bg-white py-4">
                        <div class="flex flex-col items-center space-y-4">
                            {nav_links(navigator)}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
