//! Embed URL classification
//!
//! Supported external URL shapes, checked in order:
//! 1. already embeddable (`/embed/`, `output=embed`, `google.com/maps/embed`),
//! 2. contains an `@lat,lng` pair,
//! 3. parses as a URL with a non-empty `q` parameter,
//! 4. anything else is passed through unchanged.
//!
//! Without an external URL, explicit coordinates build the canonical URL.
//! The classifier never fails; it returns `Some(url)` or `None`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use super::location::{LocationReference, MapTarget};

const MAP_SERVICE_BASE: &str = "https://www.google.com/maps";

static PRE_EMBEDDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/embed/|output=embed|google\.com/maps/embed").expect("valid regex"));

static AT_COORDINATES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").expect("valid regex"));

/// Resolve the iframe `src` for a location reference.
pub fn resolve_embed_url(reference: &LocationReference, zoom: u8) -> Option<String> {
    match reference.target()? {
        MapTarget::External(src) => Some(classify_external(src, zoom)),
        MapTarget::Coordinates(coords) => {
            debug!(lat = coords.lat, lng = coords.lng, "Embedding explicit coordinates");
            Some(canonical_embed_url(&coords.to_query(), zoom))
        }
    }
}

fn classify_external(src: &str, zoom: u8) -> String {
    if PRE_EMBEDDED.is_match(src) {
        debug!(src, "External map URL is already embeddable");
        return src.to_string();
    }

    if let Some(caps) = AT_COORDINATES.captures(src) {
        // Keep the captured digits verbatim so trailing zeros survive.
        let query = format!("{},{}", &caps[1], &caps[2]);
        debug!(query = %query, "Extracted @lat,lng from external map URL");
        return canonical_embed_url(&query, zoom);
    }

    if let Some(query) = query_param(src) {
        debug!(query = %query, "Using q parameter from external map URL");
        return canonical_embed_url(&query, zoom);
    }

    debug!(src, "No known map URL shape matched, embedding as-is");
    src.to_string()
}

/// First non-empty `q` value of a well-formed URL.
fn query_param(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    let query = url
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())?;
    (!query.is_empty()).then_some(query)
}

/// `https://www.google.com/maps?q=<query>&z=<zoom>&output=embed`
pub fn canonical_embed_url(query: &str, zoom: u8) -> String {
    let params = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .append_pair("z", &zoom.to_string())
        .append_pair("output", "embed")
        .finish();
    format!("{}?{}", MAP_SERVICE_BASE, params)
}

/// Outbound link for the fallback card.
///
/// Priority: directions override, then the external URL, then a `q=lat,lng`
/// search link, then `#`.
pub fn fallback_link(reference: &LocationReference) -> String {
    if let Some(directions) = reference.directions() {
        return directions.to_string();
    }
    if let Some(external) = reference.external() {
        return external.to_string();
    }
    if let Some(coords) = reference.coords() {
        return format!("{}?q={}", MAP_SERVICE_BASE, coords.to_query());
    }
    "#".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(reference: LocationReference) -> Option<String> {
        resolve_embed_url(&reference, reference.zoom)
    }

    #[test]
    fn test_output_embed_is_returned_unchanged() {
        let src = "https://www.google.com/maps?q=Rajkot&output=embed";
        assert_eq!(resolve(LocationReference::from_url(src)).as_deref(), Some(src));
    }

    #[test]
    fn test_embed_path_is_returned_unchanged() {
        let src = "https://www.google.com/maps/embed?pb=!1m18!1m12";
        assert_eq!(resolve(LocationReference::from_url(src)).as_deref(), Some(src));
    }

    #[test]
    fn test_at_coordinates_are_extracted() {
        let reference = LocationReference::from_url("https://www.google.com/maps/place/X/@12.345,-67.890,15z").with_zoom(15);
        let url = resolve(reference).unwrap();
        assert!(url.contains("q=12.345%2C-67.890"), "{}", url);
        assert!(url.contains("z=15"));
        assert!(url.ends_with("output=embed"));
    }

    #[test]
    fn test_q_parameter_is_reused() {
        let url = resolve(LocationReference::from_url("https://maps.google.com/?q=Some+Place")).unwrap();
        assert_eq!(url, "https://www.google.com/maps?q=Some+Place&z=17&output=embed");
    }

    #[test]
    fn test_empty_q_parameter_falls_through() {
        let src = "https://maps.google.com/?q=";
        assert_eq!(resolve(LocationReference::from_url(src)).as_deref(), Some(src));
    }

    #[test]
    fn test_unparseable_url_is_returned_unchanged() {
        let src = "maps.google.com/?q=Some+Place";
        assert_eq!(resolve(LocationReference::from_url(src)).as_deref(), Some(src));
    }

    #[test]
    fn test_explicit_coordinates() {
        let url = resolve(LocationReference::from_coordinates(22.24, 70.78)).unwrap();
        assert!(url.contains("22.24"));
        assert!(url.contains("70.78"));
        assert!(url.contains("z=17"));
    }

    #[test]
    fn test_nothing_to_resolve() {
        assert_eq!(resolve(LocationReference::default()), None);
    }

    #[test]
    fn test_zoom_argument_overrides_reference() {
        let reference = LocationReference::from_coordinates(1.5, 2.5);
        let url = resolve_embed_url(&reference, 9).unwrap();
        assert!(url.contains("z=9"));
    }

    #[test]
    fn test_fallback_link_priority() {
        let full = LocationReference::from_url("https://maps.example/x")
            .with_coordinates(1.0, 2.0)
            .with_directions("https://maps.example/dir");
        assert_eq!(fallback_link(&full), "https://maps.example/dir");

        let url_only = LocationReference::from_url("https://maps.example/x").with_coordinates(1.0, 2.0);
        assert_eq!(fallback_link(&url_only), "https://maps.example/x");

        let coords = LocationReference::from_coordinates(22.24, 70.78);
        assert_eq!(fallback_link(&coords), "https://www.google.com/maps?q=22.24,70.78");

        assert_eq!(fallback_link(&LocationReference::default()), "#");
    }

    #[test]
    fn test_fallback_link_accepts_zero_coordinates() {
        let reference = LocationReference::from_coordinates(0.0, 0.0);
        assert_eq!(fallback_link(&reference), "https://www.google.com/maps?q=0,0");
    }
}
