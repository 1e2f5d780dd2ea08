//! Scroll-driven navbar state and route-change scroll restoration

use std::time::Duration;

/// Offset past which the bar gets its solid, blurred background.
pub const SCROLLED_OFFSET: f64 = 20.0;

/// Offset past which scrolling down hides the bar.
pub const HIDE_THRESHOLD: f64 = 100.0;

pub const HIDE_DELAY: Duration = Duration::from_millis(150);

/// Delay before scrolling to a `#hash` target, so the page can render it.
pub const ANCHOR_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Show,
    /// Hide once the delay elapses, unless another update arrives first.
    HideAfter(Duration),
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub scrolled: bool,
    pub visibility: VisibilityChange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    last_y: f64,
    threshold: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(HIDE_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self { last_y: 0.0, threshold }
    }

    /// Feed the current vertical scroll offset.
    ///
    /// Any pending hide should be cancelled before acting on the result.
    pub fn update(&mut self, y: f64) -> ScrollUpdate {
        let visibility = if y > self.last_y && y > self.threshold {
            VisibilityChange::HideAfter(HIDE_DELAY)
        } else if y < self.last_y {
            VisibilityChange::Show
        } else {
            VisibilityChange::Keep
        };
        self.last_y = y;

        ScrollUpdate {
            scrolled: y > SCROLLED_OFFSET,
            visibility,
        }
    }
}

/// Where to scroll after a route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    /// Element id, tried after [`ANCHOR_DELAY`]; top if it is missing.
    Anchor(String),
}

impl ScrollTarget {
    /// From a location hash, with or without the leading `#`.
    pub fn for_hash(hash: &str) -> Self {
        let id = hash.trim_start_matches('#');
        if id.is_empty() {
            ScrollTarget::Top
        } else {
            ScrollTarget::Anchor(id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_flag() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.update(20.0).scrolled);
        assert!(tracker.update(21.0).scrolled);
    }

    #[test]
    fn test_hide_only_past_threshold() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.update(80.0).visibility, VisibilityChange::Keep);
        assert_eq!(
            tracker.update(150.0).visibility,
            VisibilityChange::HideAfter(Duration::from_millis(150))
        );
    }

    #[test]
    fn test_scrolling_up_shows() {
        let mut tracker = ScrollTracker::default();
        tracker.update(500.0);
        assert_eq!(tracker.update(450.0).visibility, VisibilityChange::Show);
        assert_eq!(tracker.update(450.0).visibility, VisibilityChange::Keep);
    }

    #[test]
    fn test_scroll_target_for_hash() {
        assert_eq!(ScrollTarget::for_hash(""), ScrollTarget::Top);
        assert_eq!(ScrollTarget::for_hash("#"), ScrollTarget::Top);
        assert_eq!(
            ScrollTarget::for_hash("#contact-form"),
            ScrollTarget::Anchor("contact-form".to_string())
        );
    }
}
