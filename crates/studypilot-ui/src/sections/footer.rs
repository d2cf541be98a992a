use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(into)] brand: String, #[prop(into)] tagline: String, year: u16) -> impl IntoView {
    let copyright = format!("\u{a9} {year} {brand}. All rights reserved.");

    view! {
        <footer class="bg-gray-900 text-white py-8 text-center text-sm sm:text-base">
            <div class="container mx-auto px-6">
                <div class="text-center">
                    <h3 class="text-2xl font-bold mb-4 text-primary/70">{brand}</h3>
                    <p class="text-gray-400 mb-4">{tagline}</p>
                    <div class="text-gray-500 text-sm">{copyright}</div>
                </div>
            </div>
        </footer>
    }
}
