//! Map embedding
//!
//! A map widget goes through three independent pieces:
//! - [`embed`] turns a [`LocationReference`] into an iframe URL (or nothing),
//! - [`gate`] defers creating the iframe until its container nears the viewport,
//! - [`ResolvedLocation::presentation`] picks what to render, including the
//!   fallback link shown when the frame reports a load error.

pub mod embed;
pub mod gate;
pub mod location;

pub use embed::{canonical_embed_url, fallback_link, resolve_embed_url};
pub use gate::{GateState, Observation, ObserverOptions, ViewportHost, VisibilityGate};
pub use location::{Coordinates, LocationReference, DEFAULT_ZOOM};

/// Text shown above the fallback link.
pub const FALLBACK_MESSAGE: &str = "Map failed to load.";

/// Label of the fallback link.
pub const FALLBACK_ACTION: &str = "Open in Google Maps";

/// What the map widget should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapPresentation {
    /// Pulsing placeholder: not visible yet, or nothing to embed.
    Placeholder,
    /// The embedded map frame.
    Frame { src: String },
    /// Static card with an outbound link after the frame failed.
    Fallback { href: String },
}

/// A location reference resolved once for the lifetime of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub embed_url: Option<String>,
    pub fallback_link: String,
}

impl ResolvedLocation {
    pub fn resolve(reference: &LocationReference) -> Self {
        Self {
            embed_url: reference.embed_url(),
            fallback_link: fallback_link(reference),
        }
    }

    /// Render decision for the current gate state and frame error flag.
    ///
    /// Load errors are terminal: there is no retry, so once `load_error` is
    /// set the fallback card stays.
    pub fn presentation(&self, gate: GateState, load_error: bool) -> MapPresentation {
        if gate == GateState::Pending {
            return MapPresentation::Placeholder;
        }
        if load_error {
            return MapPresentation::Fallback {
                href: self.fallback_link.clone(),
            };
        }
        match &self.embed_url {
            Some(src) => MapPresentation::Frame { src: src.clone() },
            None => MapPresentation::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_gate_renders_placeholder() {
        let resolved = ResolvedLocation::resolve(&LocationReference::from_coordinates(22.24, 70.78));
        assert_eq!(resolved.presentation(GateState::Pending, false), MapPresentation::Placeholder);
    }

    #[test]
    fn test_visible_gate_renders_frame() {
        let resolved = ResolvedLocation::resolve(&LocationReference::from_coordinates(22.24, 70.78));
        match resolved.presentation(GateState::Visible, false) {
            MapPresentation::Frame { src } => assert!(src.contains("output=embed")),
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolvable_location_never_renders_frame() {
        let resolved = ResolvedLocation::resolve(&LocationReference::default());
        assert_eq!(resolved.embed_url, None);
        assert_eq!(resolved.presentation(GateState::Visible, false), MapPresentation::Placeholder);
    }

    #[test]
    fn test_load_error_switches_to_fallback() {
        let reference = LocationReference::from_url("https://www.google.com/maps/place/Foo/@22.2459909,70.7835601,17z")
            .with_directions("https://www.google.com/maps/dir//Foo");
        let resolved = ResolvedLocation::resolve(&reference);
        assert_eq!(
            resolved.presentation(GateState::Visible, true),
            MapPresentation::Fallback {
                href: "https://www.google.com/maps/dir//Foo".to_string()
            }
        );
    }
}
