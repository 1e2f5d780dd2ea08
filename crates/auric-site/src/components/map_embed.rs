//! Lazily loaded map embed
//!
//! Renders a placeholder until the container comes within the observer
//! margin of the viewport, then the map frame. A frame load error swaps in
//! a static card linking out to the map service.

use auric_core::map::{
    GateState, LocationReference, MapPresentation, ResolvedLocation, FALLBACK_ACTION, FALLBACK_MESSAGE,
};
use leptos::*;
use tracing::warn;

use crate::browser;

#[component]
pub fn MapEmbed(
    location: LocationReference,
    #[prop(default = 480)] height: u32,
    #[prop(default = "Location map")] title: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let resolved = ResolvedLocation::resolve(&location);
    let gate = create_rw_signal(GateState::Pending);
    let load_error = create_rw_signal(false);
    let container = create_node_ref::<html::Div>();

    browser::gate_on_visibility(container, gate);

    let presentation = move || resolved.presentation(gate.get(), load_error.get());

    view! {
        <div node_ref=container class=format!("map-embed {class}") style=format!("height:{height}px")>
            {move || match presentation() {
                MapPresentation::Placeholder => view! {
                    <div class="map-placeholder" aria-hidden="true"></div>
                }.into_view(),
                MapPresentation::Frame { src } => view! {
                    <iframe
                        src=src
                        title=title
                        width="100%"
                        height=height
                        style="border:0"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                        on:error=move |_| {
                            warn!("Map frame failed to load, showing fallback link");
                            load_error.set(true);
                        }
                    ></iframe>
                }.into_view(),
                MapPresentation::Fallback { href } => view! {
                    <div class="map-fallback">
                        <p>{FALLBACK_MESSAGE}</p>
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            {FALLBACK_ACTION}
                        </a>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(location: LocationReference) -> String {
        leptos::ssr::render_to_string(move || view! { <MapEmbed location=location/> }).to_string()
    }

    #[test]
    fn test_server_render_shows_placeholder() {
        let html = render(LocationReference::from_coordinates(22.24, 70.78));
        assert!(html.contains("map-placeholder"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_unresolvable_location_never_renders_frame() {
        let html = render(LocationReference::default());
        assert!(html.contains("map-placeholder"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_container_height() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <MapEmbed location=LocationReference::from_url("https://maps.google.com/?q=Rajkot") height=320/> }
        })
        .to_string();
        assert!(html.contains("height:320px"));
    }
}
