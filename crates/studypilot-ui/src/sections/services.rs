use leptos::prelude::*;

use super::SectionId;
use crate::components::{Card, CardContent, Icon, Reveal};
use crate::models::Service;
use crate::motion::Variants;

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let Service {
        icon,
        title,
        tagline,
        subjects,
    } = service;

    view! {
        <Card class="h-full bg-white shadow-lg hover:shadow-xl transition-all duration-300 border-0 hover:-translate-y-1 hover:scale-[1.02]">
            <CardContent class="p-8">
                <div class="text-center">
                    <div class="w-16 h-16 mx-auto mb-6 bg-gradient-to-br from-primary/70 to-primary rounded-full flex items-center justify-center">
                        <Icon kind=icon class="w-8 h-8 text-white" />
                    </div>
                    <h3 class="text-2xl font-bold text-gray-900 mb-4">{title}</h3>
                    <p class="mb-4 font-semibold text-primary text-lg">{tagline}</p>
                    <ul class="text-left mx-auto max-w-xs space-y-2">
                        {subjects
                            .into_iter()
                            .map(|subject| {
                                view! {
                                    <li class="text-primary font-medium pl-4 relative before:content-['•'] before:absolute before:left-0 before:text-primary/60">
                                        {subject}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </CardContent>
        </Card>
    }
}

/// Service tiers, each card revealed with a stagger
#[component]
pub fn Services(services: Vec<Service>) -> impl IntoView {
    view! {
        <section id=SectionId::Services.id() class="pt-28 pb-20 gradient-secondary">
            <div class="container mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                            <span class="text-primary">"The courses I cover:"</span>
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto mb-8">
                            "Proven results in weeks, not semesters"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {services
                            .into_iter()
                            .zip(0u32..)
                            .map(|(service, index)| {
                                view! {
                                    <Reveal variants=Variants::card_reveal(index) inset=0.0>
                                        <ServiceCard service=service />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
