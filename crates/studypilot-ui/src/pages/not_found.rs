//! 404 Not Found page component

use leptos::prelude::*;

use crate::router::routes;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-white text-center px-6">
            <h1 class="text-4xl font-bold text-gray-900">"404 - Page Not Found"</h1>
            <p class="text-gray-600">"The page you're looking for doesn't exist."</p>
            <a href=routes::HOME class="text-primary font-semibold hover:underline">
                "Back to StudyPilot"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
