use leptos::prelude::*;

use crate::hooks::use_navigator;
use crate::sections::SectionId;

/// Hero call to action; scrolls to the about section
#[component]
pub fn DiscoverButton(#[prop(default = "Discover More")] label: &'static str) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <button
            type="button"
            on:click=move |_| {
                navigator.go(SectionId::About);
            }
            class="group relative inline-flex items-center gap-3 overflow-hidden rounded-full \
                   bg-primary px-8 py-4 text-lg font-semibold text-white shadow-lg \
                   transition-transform duration-300 hover:scale-105 active:scale-95 \
                   before:absolute before:inset-0 before:bg-white/20 before:translate-x-[-100%] \
                   hover:before:translate-x-[100%] before:transition-transform before:duration-700"
        >
            <span class="absolute inset-0 rounded-full bg-white/10 animate-soft-pulse"></span>
            <span class="relative">{label}</span>
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="relative h-5 w-5 transition-transform duration-300 group-hover:translate-y-1"
                aria-hidden="true"
            >
                <path d="m6 9 6 6 6-6" />
            </svg>
        </button>
    }
}
