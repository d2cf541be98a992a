//! Behavioral tests for reveal-on-view blocks

use studypilot_ui::motion::Variants;
use studypilot_ui::state::{RevealOptions, RevealState};

fn replay(events: &[bool]) -> Vec<RevealState> {
    let mut state = RevealState::Unobserved.attach();
    events
        .iter()
        .map(|&intersecting| {
            state = state.observe(intersecting);
            state
        })
        .collect()
}

#[test]
fn given_mounted_block_when_observer_attached_then_hidden() {
    assert_eq!(RevealState::default(), RevealState::Unobserved);
    assert_eq!(RevealState::Unobserved.attach(), RevealState::Hidden);
}

#[test]
fn given_revealed_block_when_scrolled_away_then_stays_visible() {
    let history = replay(&[false, false, true, false, true, false, false]);

    let first_visible = history
        .iter()
        .position(|s| s.has_entered_view())
        .unwrap_or(history.len());
    assert_eq!(first_visible, 2);
    assert!(history.iter().skip(first_visible).all(|s| s.has_entered_view()));
    assert!(history.iter().take(first_visible).all(|s| *s == RevealState::Hidden));
}

#[test]
fn given_block_never_intersecting_when_observed_then_stays_hidden() {
    let history = replay(&[false; 5]);
    assert!(history.iter().all(|s| *s == RevealState::Hidden));
}

#[test]
fn given_default_options_when_building_observer_then_inward_margin() {
    let options = RevealOptions::default();
    assert_eq!(options.root_margin(), "-100px");
}

#[test]
fn given_reveal_state_when_styled_then_hidden_and_visible_map_to_variants() {
    let variants = Variants::section_reveal();

    let hidden = variants.style_for(RevealState::Hidden);
    assert!(hidden.contains("opacity: 0"));
    assert!(hidden.contains("translateY(50px)"));
    assert!(hidden.contains("600ms ease-out"));

    let visible = variants.style_for(RevealState::Visible);
    assert!(visible.contains("opacity: 1"));
    assert!(visible.contains("translateY(0px)"));
}
