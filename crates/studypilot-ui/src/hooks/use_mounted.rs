use leptos::prelude::*;

use crate::dom::after_first_paint;

/// Hook that flips to `true` once the mounted view has been rendered hidden
///
/// Entrance animations render their hidden variant first and switch on
/// this signal, so the browser has a painted frame to transition from.
pub fn use_mounted() -> Signal<bool> {
    let mounted = RwSignal::new(false);
    after_first_paint(move || {
        let _ = mounted.try_set(true);
    });
    mounted.into()
}
