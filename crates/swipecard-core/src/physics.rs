//! Swipe physics: direction locking, elastic overshoot and snap resolution.
//!
//! Everything here is a pure function of its inputs so the controller can
//! run it on every pointer move without touching layout.

use crate::card::CardOpenState;
use crate::geometry::Point;

/// Direction a gesture has committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureIntent {
    Undecided,
    Horizontal,
    Vertical,
}

impl GestureIntent {
    /// Classifies the cumulative displacement of a pointer since it went down.
    ///
    /// Vertical only wins while it dominates the horizontal delta, so a
    /// diagonal that crosses the threshold on both axes at once resolves to
    /// whichever axis moved further.
    pub fn classify(delta: Point, threshold: f32) -> Self {
        let dx = delta.x.abs();
        let dy = delta.y.abs();
        if dy > dx && dy > threshold {
            GestureIntent::Vertical
        } else if dx > threshold {
            GestureIntent::Horizontal
        } else {
            GestureIntent::Undecided
        }
    }
}

/// Translation to display for a drag of `dx` starting at `initial`.
///
/// Inside `±limit` the card tracks the pointer 1:1. Past the limit only
/// `resistance` of the overshoot is applied, so the card keeps moving but
/// lags further and further behind the finger.
pub fn damped_translation(initial: f32, dx: f32, limit: f32, resistance: f32) -> f32 {
    let target = initial + dx;
    if target > limit {
        limit + (target - limit) * resistance
    } else if target < -limit {
        -limit + (target + limit) * resistance
    } else {
        target
    }
}

/// Resting state a card snaps to when released at `translation`.
pub fn resolve_open_state(translation: f32, action_width: f32, snap_ratio: f32) -> CardOpenState {
    let threshold = action_width * snap_ratio;
    if translation > threshold {
        CardOpenState::OpenLeft
    } else if translation < -threshold {
        CardOpenState::OpenRight
    } else {
        CardOpenState::Closed
    }
}

/// CSS transform value for a horizontal translation.
pub fn translate_x(translation: f32) -> String {
    format!("translateX({translation}px)")
}

#[cfg(test)]
#[path = "tests/physics_tests.rs"]
mod tests;
