//! Location references handed to the map widget by pages

use serde::{Deserialize, Serialize};

/// Zoom used when a page does not pick one.
pub const DEFAULT_ZOOM: u8 = 17;

/// Latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// `lat,lng` as the map service expects it in a `q` parameter.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// How a page points the map widget at a place.
///
/// Either an external map-service URL, explicit coordinates, or both. When
/// neither is present the widget has nothing to embed and stays on its
/// placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReference {
    pub external_url: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub zoom: u8,
    pub directions_url: Option<String>,
}

/// Borrowed view of the source the classifier works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapTarget<'a> {
    External(&'a str),
    Coordinates(Coordinates),
}

impl Default for LocationReference {
    fn default() -> Self {
        Self {
            external_url: None,
            coordinates: None,
            zoom: DEFAULT_ZOOM,
            directions_url: None,
        }
    }
}

impl LocationReference {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            external_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn from_coordinates(lat: f64, lng: f64) -> Self {
        Self {
            coordinates: Some(Coordinates { lat, lng }),
            ..Self::default()
        }
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_directions(mut self, url: impl Into<String>) -> Self {
        self.directions_url = Some(url.into());
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }

    /// Non-empty external URL, if any.
    pub fn external(&self) -> Option<&str> {
        self.external_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Usable coordinates, if any. Non-finite values count as absent.
    pub fn coords(&self) -> Option<Coordinates> {
        self.coordinates.filter(Coordinates::is_finite)
    }

    /// Non-empty directions override, if any.
    pub fn directions(&self) -> Option<&str> {
        self.directions_url.as_deref().filter(|url| !url.is_empty())
    }

    /// The source the classifier resolves from. An external URL wins over
    /// coordinates.
    pub fn target(&self) -> Option<MapTarget<'_>> {
        match (self.external(), self.coords()) {
            (Some(url), _) => Some(MapTarget::External(url)),
            (None, Some(coords)) => Some(MapTarget::Coordinates(coords)),
            (None, None) => None,
        }
    }

    /// Embed URL at this reference's own zoom.
    pub fn embed_url(&self) -> Option<String> {
        super::resolve_embed_url(self, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom() {
        assert_eq!(LocationReference::default().zoom, 17);
        assert_eq!(LocationReference::from_url("https://example.com").zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn test_external_url_takes_precedence() {
        let reference = LocationReference::from_url("https://maps.google.com/?q=Rajkot").with_coordinates(1.0, 2.0);
        assert_eq!(reference.target(), Some(MapTarget::External("https://maps.google.com/?q=Rajkot")));
    }

    #[test]
    fn test_empty_and_non_finite_inputs_are_absent() {
        let reference = LocationReference {
            external_url: Some(String::new()),
            coordinates: Some(Coordinates { lat: f64::NAN, lng: 70.0 }),
            ..LocationReference::default()
        };
        assert_eq!(reference.target(), None);
    }

    #[test]
    fn test_coordinate_query_formatting() {
        let coords = Coordinates { lat: 22.24, lng: 70.78 };
        assert_eq!(coords.to_query(), "22.24,70.78");
    }
}
