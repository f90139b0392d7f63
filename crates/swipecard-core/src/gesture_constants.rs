//! Shared gesture constants for swipe-to-reveal cards.
//!
//! All distances are in logical (CSS) pixels.

use web_time::Duration;

/// Distance either axis must travel before the gesture commits to a direction.
///
/// Whichever axis crosses this first (and dominates the other) wins; the
/// loser is ignored for the rest of the interaction.
pub const INTENT_THRESHOLD: f32 = 10.0;

/// Movement below this on both axes counts as a tap rather than a drag.
pub const TAP_SLOP: f32 = 5.0;

/// Fraction of the overshoot past the action width that is applied to the card.
pub const OVERSCROLL_RESISTANCE: f32 = 0.3;

/// Fraction of the action width a card must travel to snap open.
pub const SNAP_RATIO: f32 = 0.5;

/// Action width used until (or whenever) the stylesheet value is unreadable.
pub const DEFAULT_ACTION_WIDTH: f32 = 60.0;

/// How long a post-drag click blocker stays installed if no click arrives.
pub const CLICK_GUARD_TIMEOUT: Duration = Duration::from_millis(100);
