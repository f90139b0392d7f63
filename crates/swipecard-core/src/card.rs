//! Per-card resting state and haptic levels.

use crate::config::SwipeConfig;

/// Where a card rests when no gesture is acting on it.
///
/// Hosts encode this as two mutually exclusive marker classes; `Closed` is
/// the absence of both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardOpenState {
    #[default]
    Closed,
    /// Dragged right; the action on the left edge is revealed.
    OpenLeft,
    /// Dragged left; the action on the right edge is revealed.
    OpenRight,
}

impl CardOpenState {
    pub fn is_open(self) -> bool {
        !matches!(self, CardOpenState::Closed)
    }

    /// Reads the state back from marker presence. Left wins if both are set.
    pub fn from_markers(open_left: bool, open_right: bool) -> Self {
        if open_left {
            CardOpenState::OpenLeft
        } else if open_right {
            CardOpenState::OpenRight
        } else {
            CardOpenState::Closed
        }
    }

    /// Translation the card sits at in this state.
    pub fn resting_offset(self, action_width: f32) -> f32 {
        match self {
            CardOpenState::Closed => 0.0,
            CardOpenState::OpenLeft => action_width,
            CardOpenState::OpenRight => -action_width,
        }
    }

    pub fn marker_class(self, config: &SwipeConfig) -> Option<&str> {
        match self {
            CardOpenState::Closed => None,
            CardOpenState::OpenLeft => Some(config.open_left_class.as_str()),
            CardOpenState::OpenRight => Some(config.open_right_class.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

impl HapticIntensity {
    /// Vibration length for hosts that only expose a duration-based API.
    pub fn vibration_millis(self) -> u32 {
        match self {
            HapticIntensity::Light => 10,
            HapticIntensity::Medium => 20,
            HapticIntensity::Heavy => 40,
        }
    }
}
