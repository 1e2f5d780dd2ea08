//! Scroll restoration on route changes

use auric_core::scroll::{ScrollTarget, ANCHOR_DELAY};
use leptos::*;
use leptos_router::use_location;

use crate::browser;

/// Jumps to the top on navigation, or to the `#hash` target once the new
/// page has rendered.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        location.pathname.track();
        match ScrollTarget::for_hash(&location.hash.get()) {
            ScrollTarget::Top => browser::scroll_to(&ScrollTarget::Top),
            target => set_timeout(move || browser::scroll_to(&target), ANCHOR_DELAY),
        }
    });
}
