//! Full-height hero with staggered entrance

use leptos::prelude::*;

use super::SectionId;
use crate::components::DiscoverButton;
use crate::hooks::use_mounted;
use crate::models::Stat;
use crate::motion::Variants;

#[component]
pub fn Hero(
    #[prop(into)] brand: String,
    #[prop(into)] tagline: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] accent: String,
    #[prop(into)] blurb: String,
    #[prop(into)] background: String,
    #[prop(optional)] badges: Vec<Stat>,
) -> impl IntoView {
    let mounted = use_mounted();
    let outer = Variants::hero_entrance(200);
    let copy = Variants::hero_entrance(400);
    let cta = Variants::hero_entrance(1000);
    let badge_row = Variants::hero_badges();

    view! {
        <section
            id=SectionId::Hero.id()
            class="min-h-screen flex items-center justify-center relative bg-cover bg-center bg-no-repeat"
            style=format!("background-image: url('{background}')")
        >
            <div class="absolute inset-0 bg-white/80 pointer-events-none z-0"></div>
            <div class="container mx-auto px-4 sm:px-6 relative z-10">
                <div class="flex flex-col items-center justify-center text-center min-h-screen">
                    <div class="w-full max-w-4xl" style=move || outer.style(mounted.get())>
                        <div class="text-center" style=move || copy.style(mounted.get())>
                            <h1 class="text-4xl sm:text-6xl md:text-7xl font-bold text-gray-900 mb-4">
                                {brand}
                            </h1>
                            <p class="text-xl sm:text-3xl md:text-4xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-primary to-primary/70 mb-4">
                                {tagline}
                            </p>
                            <p class="text-2xl sm:text-3xl md:text-4xl font-semibold text-gray-700 mb-6">
                                {subtitle}
                            </p>
                            <p class="mx-auto max-w-xs sm:max-w-2xl text-base sm:text-lg text-gray-500 mb-8 sm:mb-12 leading-relaxed">
                                "Expert tutor in "
                                <span class="relative inline-block align-baseline">
                                    {accent}
                                    <svg
                                        viewBox="0 0 110 8"
                                        width="90"
                                        height="8"
                                        class="absolute left-0 w-full h-2 bottom-[-2px]"
                                        aria-hidden="true"
                                    >
                                        <line
                                            x1="0"
                                            y1="6"
                                            x2="110"
                                            y2="6"
                                            stroke="#e3342f"
                                            stroke-width="4"
                                            stroke-linecap="round"
                                        />
                                    </svg>
                                </span>
                                " "
                                <br class="hidden sm:block" />
                                {blurb}
                            </p>
                        </div>

                        <div
                            class="flex justify-center mb-10 sm:mb-16"
                            style=move || cta.style(mounted.get())
                        >
                            <DiscoverButton />
                        </div>
                    </div>

                    <div class="w-full flex justify-center" style=move || badge_row.style(mounted.get())>
                        <div class="flex justify-center items-center space-x-8 text-primary">
                            {badges
                                .into_iter()
                                .map(|badge| {
                                    view! {
                                        <div class="flex items-center space-x-2 text-sm sm:text-base">
                                            <span class="font-bold">{badge.value}</span>
                                            <span class="text-gray-600">{badge.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
