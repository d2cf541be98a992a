//! Reveal-on-view wrapper

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::Behavior;
use crate::hooks::use_reveal;
use crate::motion::Variants;
use crate::state::RevealOptions;

/// Fades and slides its children in the first time they scroll into view
///
/// Defaults to [`Variants::section_reveal`] and the page's configured
/// reveal inset; `inset` overrides the latter (cards in a grid pass `0.0`
/// so they trigger as soon as any edge is visible).
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    #[prop(optional)] variants: Option<Variants>,
    #[prop(optional)] inset: Option<f64>,
    children: Children,
) -> impl IntoView {
    let behavior = use_context::<Behavior>().unwrap_or_default();
    let variants = variants.unwrap_or_else(Variants::section_reveal);
    let options = inset.map_or_else(|| behavior.reveal_options(), RevealOptions::new);

    let node_ref = NodeRef::<Div>::new();
    let state = use_reveal(node_ref, options);

    view! {
        <div node_ref=node_ref class=class style=move || variants.style_for(state.get())>
            {children()}
        </div>
    }
}
