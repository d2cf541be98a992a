use leptos::prelude::*;

use super::SectionId;
use crate::components::{Card, CardContent, Icon, Reveal};
use crate::models::{IconKind, Stat, Testimonial};
use crate::motion::Variants;

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = testimonial.stars();

    view! {
        <Card class="h-full bg-gradient-to-br from-primary/10 to-white shadow-lg hover:shadow-xl transition-all duration-300 border-primary/10 hover:-translate-y-1">
            <CardContent class="p-8 flex flex-col h-full">
                <div class="text-center mb-6">
                    <div class="flex justify-center mb-4" aria-label=format!("{stars} out of 5 stars")>
                        {(0..stars)
                            .map(|_| {
                                view! { <Icon kind=IconKind::Star class="w-5 h-5 text-yellow-400 fill-current" /> }
                            })
                            .collect_view()}
                    </div>
                </div>
                <blockquote class="text-gray-700 italic mb-6 leading-relaxed">
                    {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                </blockquote>
                <div class="text-center mt-auto">
                    <div class="font-semibold text-gray-900">{testimonial.name}</div>
                </div>
            </CardContent>
        </Card>
    }
}

/// Testimonials followed by the headline stats grid
#[component]
pub fn Results(testimonials: Vec<Testimonial>, stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section id=SectionId::Results.id() class="pt-24 pb-20 bg-white">
            <div class="container mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                            <span class="text-primary">"Proven Results"</span>
                            " That Speak Volumes"
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Over 95% of our students report higher confidence and improved performance after just one month"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-16">
                        {testimonials
                            .into_iter()
                            .zip(0u32..)
                            .map(|(testimonial, index)| {
                                view! {
                                    <Reveal variants=Variants::card_reveal(index) inset=0.0>
                                        <TestimonialCard testimonial=testimonial />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="text-center">
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-3xl mx-auto">
                            {stats
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="text-4xl font-bold text-primary mb-2">{stat.value}</div>
                                            <div class="text-gray-600">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
