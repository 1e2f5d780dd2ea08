//! Viewport context
//!
//! Components read the window size from here rather than from the global
//! window. Server renders and the first client render see
//! [`Viewport::DESKTOP`], so hydration matches; the real size is applied on
//! mount and on every resize.

use auric_core::Viewport;
use leptos::*;

use crate::browser;

#[derive(Debug, Clone, Copy)]
pub struct ViewportContext(pub RwSignal<Viewport>);

pub fn provide_viewport_context() {
    let viewport = create_rw_signal(Viewport::DESKTOP);

    create_effect(move |_| {
        if let Some(measured) = browser::window_viewport() {
            viewport.set(measured);
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(measured) = browser::window_viewport() {
            viewport.set(measured);
        }
    });
    on_cleanup(move || resize.remove());

    provide_context(ViewportContext(viewport));
}

/// Current viewport, or the desktop default outside the app root.
pub fn use_viewport() -> Signal<Viewport> {
    match use_context::<ViewportContext>() {
        Some(ViewportContext(viewport)) => viewport.into(),
        None => Signal::derive(|| Viewport::DESKTOP),
    }
}
