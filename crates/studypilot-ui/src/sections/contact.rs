use leptos::prelude::*;

use super::SectionId;
use crate::components::{Icon, Reveal};
use crate::models::{Contact, IconKind};

/// Closing call to action with a tap-to-call button
#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    if !contact.has_dialable_phone() {
        log::warn!("contact phone link '{}' is not a tel: URI", contact.phone_href);
    }

    view! {
        <section id=SectionId::Contact.id() class="py-20 gradient-primary text-white">
            <div class="container mx-auto px-6">
                <Reveal>
                    <div class="text-center">
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">
                            "Ready to Transform Your Grades?"
                        </h2>
                        <p class="text-xl mb-8 opacity-90 max-w-2xl mx-auto">{contact.pitch}</p>

                        <div class="inline-block transition-transform duration-300 hover:scale-105 active:scale-95">
                            <a
                                href=contact.phone_href
                                class="inline-flex items-center space-x-3 bg-white text-primary px-8 py-4 rounded-lg font-bold text-xl shadow-lg hover:shadow-xl transition-all duration-300"
                            >
                                <Icon kind=IconKind::Phone class="w-6 h-6" />
                                <span>{contact.phone_display}</span>
                            </a>
                        </div>

                        <div class="mt-8 text-center opacity-75">
                            <p class="text-lg">{contact.availability}</p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
