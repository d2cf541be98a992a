use leptos::html::Div;
use leptos::prelude::*;

use super::hold_until_cleanup;
use crate::dom::observe_visibility;
use crate::state::{RevealOptions, RevealState};

/// Hook driving a one-shot reveal for the element behind `node_ref`
///
/// The observer is attached once the element is mounted, moving the state
/// from `Unobserved` to `Hidden`. If the browser can't provide an
/// observer the block is shown immediately rather than left invisible.
pub fn use_reveal(node_ref: NodeRef<Div>, options: RevealOptions) -> Signal<RevealState> {
    let state = RwSignal::new(RevealState::Unobserved);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };

        let on_change = move |intersecting: bool| {
            let Some(current) = state.try_get_untracked() else {
                return;
            };
            let next = current.observe(intersecting);
            if next != current {
                log::debug!("reveal {current:?} -> {next:?}");
                state.set(next);
            }
        };

        match observe_visibility(element.into(), options, on_change) {
            Ok(subscription) => {
                if let Some(binding) = subscription.listener() {
                    log::debug!("reveal observer attached, root margin {}", binding.root_margin());
                }
                state.update(|s| *s = s.attach());
                hold_until_cleanup(subscription);
            }
            Err(err) => {
                log::warn!("reveal observer unavailable, showing content: {err}");
                state.set(RevealState::Visible);
            }
        }
    });

    state.into()
}
