use leptos::prelude::*;

use super::hold_until_cleanup;
use crate::dom::watch_scroll;
use crate::state::ScrollState;

/// Hook tracking whether the page is scrolled past `threshold`
///
/// Starts `false` and is updated on each document scroll event. The
/// underlying signal is only written when the flag flips, so dependents
/// re-render at most once per threshold crossing.
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    let state = RwSignal::new(ScrollState::new(threshold));

    let on_offset = move |offset: f64| {
        if let Some(next) = state.try_get_untracked().and_then(|s| s.observe(offset)) {
            state.set(next);
        }
    };

    match watch_scroll(on_offset) {
        Ok(subscription) => hold_until_cleanup(subscription),
        Err(err) => log::warn!("scroll tracking disabled: {err}"),
    }

    Memo::new(move |_| state.get().is_scrolled()).into()
}
