//! Background luminance detection for the navigation bar
//!
//! The navbar switches between light and dark text depending on the page
//! body's computed background colour.

use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{CoreError, CoreResult};

static RGB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([\d.]+)\s*)?\)\s*$")
        .expect("valid regex")
});

/// Luminance below which a background counts as dark.
pub const DARK_THRESHOLD: f64 = 0.5;

/// Delay after a route change before sampling the new page's background.
pub const CONTRAST_DELAY: Duration = Duration::from_millis(60);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl FromStr for Rgb {
    type Err = CoreError;

    /// Parses computed-style colours: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidColor(s.to_string());
        let caps = RGB_PATTERN.captures(s).ok_or_else(invalid)?;

        let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
        let alpha = match caps.get(4) {
            Some(a) => a.as_str().parse::<f64>().map_err(|_| invalid())?,
            None => 1.0,
        };

        Ok(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
            alpha,
        })
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    pub fn is_dark(&self) -> bool {
        self.alpha > 0.0 && self.relative_luminance() < DARK_THRESHOLD
    }
}

/// Whether a computed `background-color` value is dark.
///
/// Unparseable and fully transparent values count as light.
pub fn is_dark_background(css: &str) -> bool {
    css.parse::<Rgb>().map(|rgb| rgb.is_dark()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(
            "rgb(10, 20, 30)".parse::<Rgb>().unwrap(),
            Rgb { r: 10, g: 20, b: 30, alpha: 1.0 }
        );
        let rgba: Rgb = "rgba(0, 0, 0, 0.5)".parse().unwrap();
        assert_eq!(rgba.alpha, 0.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("#ffffff".parse::<Rgb>(), Err(CoreError::InvalidColor(_))));
        assert!("rgb(300, 0, 0)".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_luminance_extremes() {
        let black: Rgb = "rgb(0, 0, 0)".parse().unwrap();
        let white: Rgb = "rgb(255, 255, 255)".parse().unwrap();
        assert!(black.relative_luminance() < 1e-9);
        assert!((white.relative_luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dark_background_detection() {
        assert!(is_dark_background("rgb(23, 23, 23)"));
        assert!(!is_dark_background("rgb(245, 245, 245)"));
        assert!(!is_dark_background("rgba(0, 0, 0, 0)"));
        assert!(!is_dark_background("transparent"));
    }
}
