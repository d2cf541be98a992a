//! Behavioral tests for navbar scroll tracking

use studypilot_ui::state::{DEFAULT_SCROLL_THRESHOLD, ScrollState};

/// Folds offsets through the state the way the scroll listener does
fn track(offsets: &[f64]) -> Vec<bool> {
    let mut state = ScrollState::new(DEFAULT_SCROLL_THRESHOLD);
    offsets
        .iter()
        .map(|&offset| {
            if let Some(next) = state.observe(offset) {
                state = next;
            }
            state.is_scrolled()
        })
        .collect()
}

#[test]
fn given_any_offset_when_processed_then_scrolled_matches_threshold() {
    let offsets: Vec<f64> = (0..=40).map(|i| f64::from(i) * 0.5).chain([250.0, 3.0, 10.0, 10.01, 0.0]).collect();
    let observed = track(&offsets);

    for (offset, scrolled) in offsets.iter().zip(observed) {
        assert_eq!(scrolled, *offset > 10.0, "offset {offset}");
    }
}

#[test]
fn given_page_load_when_no_scroll_yet_then_not_scrolled() {
    assert!(!ScrollState::default().is_scrolled());
}

#[test]
fn given_scrolled_page_when_more_scrolling_then_no_redundant_updates() {
    let mut updates = 0;
    let mut state = ScrollState::default();
    for offset in [20.0, 40.0, 80.0, 160.0] {
        if let Some(next) = state.observe(offset) {
            updates += 1;
            state = next;
        }
    }
    assert_eq!(updates, 1);
}

#[test]
fn given_custom_threshold_when_crossing_then_flag_follows_it() {
    let state = ScrollState::new(64.0);
    assert!(state.observe(64.0).is_none());
    assert_eq!(state.observe(65.0).map(|s| s.is_scrolled()), Some(true));
}
