//! Swipe controller configuration.

use crate::gesture_constants::{
    CLICK_GUARD_TIMEOUT, DEFAULT_ACTION_WIDTH, INTENT_THRESHOLD, OVERSCROLL_RESISTANCE, SNAP_RATIO,
    TAP_SLOP,
};
use web_time::Duration;

/// Markup contract and gesture tuning for a swipe controller.
///
/// The defaults match the habit list stylesheet. Hosts with other markup
/// override the selectors and marker classes with the `with_*` builders.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Selector that identifies a swipeable card.
    pub card_selector: String,
    /// Selector for the element inside a card that actually translates.
    pub content_selector: String,
    /// Pointer-downs landing inside an element matching this are left alone.
    pub button_selector: String,
    /// Marker class for a card resting open with its left action revealed.
    pub open_left_class: String,
    /// Marker class for a card resting open with its right action revealed.
    pub open_right_class: String,
    /// Marker class present while a horizontal drag is in progress.
    pub swiping_class: String,
    /// CSS custom property on the document root holding the action width.
    pub action_width_property: String,
    /// Action width used when the custom property cannot be parsed.
    pub default_action_width: f32,
    pub intent_threshold: f32,
    pub tap_slop: f32,
    pub resistance: f32,
    pub snap_ratio: f32,
    pub click_guard_timeout: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            card_selector: ".habit-card".into(),
            content_selector: ".habit-card-content".into(),
            button_selector: "button".into(),
            open_left_class: "open-left".into(),
            open_right_class: "open-right".into(),
            swiping_class: "swiping".into(),
            action_width_property: "--swipe-action-width".into(),
            default_action_width: DEFAULT_ACTION_WIDTH,
            intent_threshold: INTENT_THRESHOLD,
            tap_slop: TAP_SLOP,
            resistance: OVERSCROLL_RESISTANCE,
            snap_ratio: SNAP_RATIO,
            click_guard_timeout: CLICK_GUARD_TIMEOUT,
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_selector(mut self, selector: impl Into<String>) -> Self {
        self.card_selector = selector.into();
        self
    }

    pub fn with_content_selector(mut self, selector: impl Into<String>) -> Self {
        self.content_selector = selector.into();
        self
    }

    pub fn with_button_selector(mut self, selector: impl Into<String>) -> Self {
        self.button_selector = selector.into();
        self
    }

    /// Set the open-left, open-right and swiping marker classes.
    pub fn with_marker_classes(
        mut self,
        open_left: impl Into<String>,
        open_right: impl Into<String>,
        swiping: impl Into<String>,
    ) -> Self {
        self.open_left_class = open_left.into();
        self.open_right_class = open_right.into();
        self.swiping_class = swiping.into();
        self
    }

    pub fn with_action_width_property(mut self, property: impl Into<String>) -> Self {
        self.action_width_property = property.into();
        self
    }

    pub fn with_default_action_width(mut self, width: f32) -> Self {
        self.default_action_width = width;
        self
    }

    pub fn with_intent_threshold(mut self, threshold: f32) -> Self {
        self.intent_threshold = threshold;
        self
    }

    pub fn with_tap_slop(mut self, slop: f32) -> Self {
        self.tap_slop = slop;
        self
    }

    pub fn with_resistance(mut self, resistance: f32) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_snap_ratio(mut self, ratio: f32) -> Self {
        self.snap_ratio = ratio;
        self
    }

    pub fn with_click_guard_timeout(mut self, timeout: Duration) -> Self {
        self.click_guard_timeout = timeout;
        self
    }
}
