//! Frame scheduling for entrance transitions

use leptos::prelude::request_animation_frame;

/// Runs `f` on the second animation frame from now
///
/// Nodes inserted in the current task get their first computed style in
/// the rendering step of the next frame, after that frame's callbacks have
/// run. Flipping to a visible style any earlier leaves the transition
/// without a starting style.
pub fn after_first_paint<F>(f: F)
where
    F: FnOnce() + 'static,
{
    request_animation_frame(move || request_animation_frame(f));
}
