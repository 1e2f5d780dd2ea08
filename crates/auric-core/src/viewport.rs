//! Viewport model and the decorative particle field

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Particle count used on mobile regardless of what a page asks for.
pub const MOBILE_PARTICLES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Assumed for server renders and the first client render so hydration
    /// sees the same markup.
    pub const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    pub fn particle_count(&self, requested: usize) -> usize {
        self.scaled_count(requested, MOBILE_PARTICLES)
    }

    pub fn scaled_count(&self, desktop: usize, mobile: usize) -> usize {
        if self.is_mobile() {
            mobile
        } else {
            desktop
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DESKTOP
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: usize,
    /// Diameter in px.
    pub size: f64,
    /// Percent of the container.
    pub left: f64,
    pub top: f64,
    /// Seconds.
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "width:{size:.2}px;height:{size:.2}px;left:{left:.2}%;top:{top:.2}%;\
             animation:float {duration:.2}s infinite ease-in-out;animation-delay:{delay:.2}s",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Generate `count` particles from a fixed seed.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|id| Particle {
            id,
            size: rng.random_range(4.0..12.0),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            duration: rng.random_range(10.0..20.0),
            delay: rng.random_range(0.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_breakpoint() {
        assert!(Viewport::new(767.0, 900.0).is_mobile());
        assert!(!Viewport::new(768.0, 900.0).is_mobile());
        assert!(!Viewport::default().is_mobile());
    }

    #[test]
    fn test_particle_count_caps_on_mobile() {
        assert_eq!(Viewport::new(375.0, 812.0).particle_count(30), 8);
        assert_eq!(Viewport::DESKTOP.particle_count(30), 30);
        assert_eq!(Viewport::new(375.0, 812.0).scaled_count(6, 3), 3);
    }

    #[test]
    fn test_particle_field_is_deterministic() {
        assert_eq!(particle_field(15, 7), particle_field(15, 7));
        assert_ne!(particle_field(15, 7), particle_field(15, 8));
    }

    #[test]
    fn test_particle_ranges() {
        for p in particle_field(200, 42) {
            assert!((4.0..12.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((10.0..20.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_particle_style() {
        let p = Particle { id: 0, size: 4.5, left: 10.0, top: 20.0, duration: 12.0, delay: 1.0 };
        assert!(p.style().starts_with("width:4.50px;height:4.50px;left:10.00%;top:20.00%;"));
    }
}
