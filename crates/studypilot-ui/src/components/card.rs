use leptos::prelude::*;

/// Rounded panel used for the tutor, service and testimonial cards
#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border bg-card text-card-foreground shadow-sm {class}")>
            {children()}
        </div>
    }
}

/// Padded body of a [`Card`]
#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() { "p-6".to_string() } else { class };
    view! { <div class=class>{children()}</div> }
}
