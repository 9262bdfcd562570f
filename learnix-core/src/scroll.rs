//! Scroll-driven decorations: header look, parallax, scroll-to-top, anchors.

use crate::config::ScrollConfig;
use crate::theme::Theme;

/// Inline style the header should carry at a given scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyle {
    /// Mirrors the `scrolled` class.
    pub scrolled: bool,
    pub background: String,
    pub backdrop_filter: &'static str,
    pub box_shadow: &'static str,
}

impl HeaderStyle {
    #[must_use]
    pub fn for_scroll(offset: f64, theme: Theme, cfg: &ScrollConfig) -> Self {
        let scrolled = offset > cfg.header_threshold;
        let alpha = if scrolled { "0.95" } else { "0.8" };
        let tint = match theme {
            Theme::Light => "255, 255, 255",
            Theme::Dark => "17, 24, 39",
        };
        Self {
            scrolled,
            background: format!("rgba({tint}, {alpha})"),
            backdrop_filter: if scrolled { "blur(20px)" } else { "blur(12px)" },
            box_shadow: if scrolled {
                "0 4px 6px -1px rgba(0, 0, 0, 0.1)"
            } else {
                "none"
            },
        }
    }
}

/// Vertical offset for the `index`-th decorative element.
///
/// Later elements move faster: speed is `base + step * index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parallax_offset(index: usize, scroll: f64, cfg: &ScrollConfig) -> f64 {
    let speed = cfg.parallax_speed_step.mul_add(index as f64, cfg.parallax_base_speed);
    let offset = -(scroll * speed);
    // keep "-0" out of the rendered transform
    if offset == 0.0 { 0.0 } else { offset }
}

#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[must_use]
pub fn scroll_top_visible(offset: f64, cfg: &ScrollConfig) -> bool {
    offset > cfg.scroll_top_threshold
}

/// Document offset to scroll to so an anchor target clears the fixed header.
#[must_use]
pub fn anchor_target(element_top: f64, header_height: f64, cfg: &ScrollConfig) -> f64 {
    element_top - header_height - cfg.anchor_gap
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn header_switches_strictly_past_threshold() {
        let cfg = ScrollConfig::default();
        let at = HeaderStyle::for_scroll(100.0, Theme::Light, &cfg);
        assert!(!at.scrolled);
        assert_eq!(at.background, "rgba(255, 255, 255, 0.8)");
        assert_eq!(at.backdrop_filter, "blur(12px)");
        assert_eq!(at.box_shadow, "none");

        let past = HeaderStyle::for_scroll(101.0, Theme::Light, &cfg);
        assert!(past.scrolled);
        assert_eq!(past.background, "rgba(255, 255, 255, 0.95)");
        assert_eq!(past.backdrop_filter, "blur(20px)");
    }

    #[test]
    fn dark_theme_tints_header() {
        let cfg = ScrollConfig::default();
        assert_eq!(
            HeaderStyle::for_scroll(0.0, Theme::Dark, &cfg).background,
            "rgba(17, 24, 39, 0.8)"
        );
        assert_eq!(
            HeaderStyle::for_scroll(500.0, Theme::Dark, &cfg).background,
            "rgba(17, 24, 39, 0.95)"
        );
    }

    #[test]
    fn parallax_speed_grows_with_index() {
        let cfg = ScrollConfig::default();
        assert!(approx(parallax_offset(0, 100.0, &cfg), -50.0));
        assert!(approx(parallax_offset(1, 100.0, &cfg), -60.0));
        assert!(approx(parallax_offset(5, 100.0, &cfg), -100.0));
    }

    #[test]
    fn parallax_at_origin_renders_plain_zero() {
        let cfg = ScrollConfig::default();
        assert_eq!(parallax_transform(parallax_offset(3, 0.0, &cfg)), "translateY(0px)");
        assert_eq!(parallax_transform(-50.0), "translateY(-50px)");
    }

    #[test]
    fn scroll_top_shows_past_two_hundred() {
        let cfg = ScrollConfig::default();
        assert!(!scroll_top_visible(200.0, &cfg));
        assert!(scroll_top_visible(200.5, &cfg));
    }

    #[test]
    fn anchor_clears_header_and_gap() {
        let cfg = ScrollConfig::default();
        assert!(approx(anchor_target(1000.0, 80.0, &cfg), 900.0));
    }

    #[test]
    fn throttle_allows_one_pending_frame() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());
        throttle.complete();
        assert!(throttle.request());
    }
}
