//! Cached layout values read from the stylesheet.
//!
//! Reading computed style forces a style recalculation, so the action width
//! is read once at setup and again only when the viewport resizes. Pointer
//! moves use the cached number.

use crate::gesture_constants::DEFAULT_ACTION_WIDTH;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCache {
    action_width: f32,
    fallback: f32,
}

impl LayoutCache {
    pub fn new(fallback: f32) -> Self {
        Self {
            action_width: fallback,
            fallback,
        }
    }

    pub fn action_width(&self) -> f32 {
        self.action_width
    }

    /// Re-reads the action width from a raw custom property value.
    ///
    /// Missing or unparsable values fall back to the default rather than
    /// leaving a NaN in the physics.
    pub fn refresh(&mut self, raw: Option<&str>) -> f32 {
        self.action_width = match raw.and_then(parse_css_int) {
            Some(width) => width as f32,
            None => {
                log::debug!("swipe action width unreadable ({raw:?}), using {}", self.fallback);
                self.fallback
            }
        };
        self.action_width
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(DEFAULT_ACTION_WIDTH)
    }
}

/// Integer prefix parse in the manner of `parseInt(value, 10)`.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit, so `" 72px"` yields 72 and `"auto"` yields `None`.
pub fn parse_css_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_fallback() {
        assert_eq!(LayoutCache::default().action_width(), 60.0);
        assert_eq!(LayoutCache::new(80.0).action_width(), 80.0);
    }

    #[test]
    fn refresh_parses_pixel_values() {
        let mut cache = LayoutCache::default();
        assert_eq!(cache.refresh(Some(" 72px")), 72.0);
        assert_eq!(cache.refresh(Some("88")), 88.0);
        assert_eq!(cache.refresh(Some("64.9px")), 64.0);
    }

    #[test]
    fn refresh_falls_back_when_unreadable() {
        let mut cache = LayoutCache::default();
        cache.refresh(Some("90px"));
        assert_eq!(cache.refresh(Some("auto")), 60.0);
        cache.refresh(Some("90px"));
        assert_eq!(cache.refresh(Some("")), 60.0);
        cache.refresh(Some("90px"));
        assert_eq!(cache.refresh(None), 60.0);
    }

    #[test]
    fn parse_matches_parse_int_prefix_rules() {
        assert_eq!(parse_css_int("12px"), Some(12));
        assert_eq!(parse_css_int("  -8"), Some(-8));
        assert_eq!(parse_css_int("+5rem"), Some(5));
        assert_eq!(parse_css_int("px12"), None);
        assert_eq!(parse_css_int("-"), None);
    }
}
