use leptos::prelude::*;

use super::SectionId;
use crate::components::{Card, CardContent, Icon, Reveal};
use crate::models::Tutor;

/// Tutor introduction card
#[component]
pub fn About(tutor: Tutor, #[prop(into)] profile_image: String) -> impl IntoView {
    let Tutor {
        name,
        credentials,
        bio,
        philosophy,
    } = tutor;

    view! {
        <section id=SectionId::About.id() class="pt-8 pb-16 bg-white scroll-mt-24">
            <div class="container mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-12">
                        <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                            "Meet Your " <span class="text-primary">"Dedicated Tutor"</span>
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Run by experienced educators who understand the Ontario curriculum inside and out."
                        </p>
                    </div>

                    <div class="max-w-4xl mx-auto">
                        <Card class="overflow-hidden shadow-xl border-0 bg-gradient-to-br from-primary/10 to-white">
                            <CardContent class="p-4 sm:p-6 md:p-8">
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 items-center mb-6">
                                    <div class="w-32 h-32 sm:w-40 sm:h-40 mx-auto bg-gradient-to-br from-primary/70 to-primary rounded-full flex items-center justify-center shadow-2xl transition-transform duration-300 hover:scale-105">
                                        <img
                                            src=profile_image
                                            alt=format!("{name}, tutor")
                                            class="w-24 h-24 sm:w-32 sm:h-32 object-cover rounded-full border-4 border-white shadow-lg"
                                        />
                                    </div>

                                    <div class="text-left mt-6 md:mt-0">
                                        <h3 class="text-xl sm:text-2xl font-bold text-gray-900 mb-3">
                                            {name.clone()}
                                        </h3>
                                        <div class="space-y-2 mb-4">
                                            {credentials
                                                .into_iter()
                                                .map(|credential| {
                                                    view! {
                                                        <div class="flex items-center justify-start space-x-3">
                                                            <Icon kind=credential.icon class="w-6 h-6 text-primary" />
                                                            <span class="text-gray-700 text-base sm:text-lg">
                                                                {credential.text}
                                                            </span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>

                                <div class="mb-6">
                                    <h3 class="text-xl sm:text-2xl font-bold text-gray-900 mb-3 text-center">
                                        "About Me"
                                    </h3>
                                    <p class="text-gray-600 leading-relaxed text-left text-sm sm:text-base">
                                        {bio}
                                    </p>
                                </div>

                                <div class="bg-primary/10 p-4 sm:p-6 rounded-lg">
                                    <h3 class="text-lg sm:text-xl font-bold text-primary mb-3 text-center">
                                        "Our Philosophy"
                                    </h3>
                                    <p class="text-primary/80 leading-relaxed text-center text-sm sm:text-base">
                                        {format!("\u{201c}{philosophy}\u{201d}")}
                                    </p>
                                </div>
                            </CardContent>
                        </Card>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
