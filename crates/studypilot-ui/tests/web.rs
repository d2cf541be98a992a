//! Browser tests for the web-sys bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/studypilot-ui`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::expect_used)]

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Promise;
use leptos::prelude::request_animation_frame;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use studypilot_ui::dom::{self, DocumentSections, after_first_paint, observe_visibility, watch_scroll};
use studypilot_ui::interaction::{NavigationOutcome, SectionLookup, navigate_to};
use studypilot_ui::state::{MobileMenu, RevealOptions};

wasm_bindgen_test_configure!(run_in_browser);

fn add_section(id: &str) -> web_sys::Element {
    let document = dom::document().expect("document");
    let section = document.create_element("section").expect("create section");
    section.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&section)
        .expect("append section");
    section
}

/// Resolves after `count` animation frames
async fn frames(count: u32) {
    for _ in 0..count {
        let frame = Promise::new(&mut |resolve, _reject| {
            dom::window()
                .expect("window")
                .request_animation_frame(&resolve)
                .expect("request frame");
        });
        JsFuture::from(frame).await.expect("frame");
    }
}

#[wasm_bindgen_test]
fn existing_section_resolves_and_scrolls() {
    let section = add_section("about");

    assert_eq!(DocumentSections.scroll_into_view("about"), Ok(true));

    section.remove();
}

#[wasm_bindgen_test]
fn missing_section_is_reported_not_raised() {
    let mut menu = MobileMenu::new();
    menu.toggle();

    let outcome = navigate_to(&DocumentSections, &mut menu, "nonexistent");

    assert_eq!(outcome, NavigationOutcome::TargetMissing);
    assert!(!menu.is_open());
}

#[wasm_bindgen_test]
fn released_scroll_listener_stops_receiving_events() {
    let document = dom::document().expect("document");
    let calls = Rc::new(Cell::new(0));

    let counter = calls.clone();
    let subscription = watch_scroll(move |_| counter.set(counter.get() + 1)).expect("attach");

    let event = web_sys::Event::new("scroll").expect("event");
    document.dispatch_event(&event).expect("dispatch");
    assert_eq!(calls.get(), 1);

    subscription.release().expect("detach");
    document.dispatch_event(&event).expect("dispatch");
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
async fn entrance_flip_runs_after_a_rendered_frame() {
    let rendered = Rc::new(Cell::new(0u32));
    let seen = Rc::new(Cell::new(None));

    let flipped = Promise::new(&mut |resolve, _reject| {
        let rendered = rendered.clone();
        let seen = seen.clone();
        after_first_paint(move || {
            seen.set(Some(rendered.get()));
            let _ = resolve.call0(&JsValue::NULL);
        });
    });
    // Registered second, so it runs after any flip scheduled for the same frame
    let counter = rendered.clone();
    request_animation_frame(move || counter.set(counter.get() + 1));

    JsFuture::from(flipped).await.expect("flip");
    assert_eq!(seen.get(), Some(1), "flip must land after the first frame renders");
}

#[wasm_bindgen_test]
async fn observer_uses_inset_root_margin_and_reports_entries() {
    let section = add_section("reveal-live");
    let calls = Rc::new(Cell::new(0));

    let counter = calls.clone();
    let subscription = observe_visibility(section.clone(), RevealOptions::default(), move |_| {
        counter.set(counter.get() + 1);
    })
    .expect("observer");

    let margin = subscription.listener().map(|binding| binding.root_margin());
    assert!(margin.is_some_and(|m| m.starts_with("-100px")));

    frames(4).await;
    assert!(calls.get() >= 1, "observer delivers its initial entry");

    drop(subscription);
    section.remove();
}

#[wasm_bindgen_test]
async fn released_observer_stops_receiving_entries() {
    let section = add_section("reveal-released");
    let calls = Rc::new(Cell::new(0));

    let counter = calls.clone();
    let subscription = observe_visibility(section.clone(), RevealOptions::default(), move |_| {
        counter.set(counter.get() + 1);
    })
    .expect("observer");
    subscription.release().expect("disconnect");

    frames(4).await;
    assert_eq!(calls.get(), 0);

    section.remove();
}
