//! Swipe-to-reveal gestures for list cards.
//!
//! This crate holds the platform-agnostic part: direction locking, elastic
//! overshoot, snapping to open or closed, and the one-shot click guard that
//! follows a drag. Platform adapters implement [`SwipeHost`] and feed
//! [`PointerEvent`]s into a [`SwipeController`].

pub mod card;
pub mod click_guard;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod gesture_constants;
pub mod host;
pub mod input;
pub mod layout_cache;
pub mod physics;

pub use card::{CardOpenState, HapticIntensity};
pub use click_guard::ClickGuard;
pub use config::SwipeConfig;
pub use controller::{DownOutcome, GestureSession, MoveOutcome, ReleaseOutcome, SwipeController};
pub use geometry::Point;
pub use host::{HostError, OpenCards, SwipeHost};
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerTarget};
pub use layout_cache::LayoutCache;
pub use physics::GestureIntent;

pub mod prelude {
    pub use super::card::{CardOpenState, HapticIntensity};
    pub use super::config::SwipeConfig;
    pub use super::controller::{DownOutcome, MoveOutcome, ReleaseOutcome, SwipeController};
    pub use super::host::{HostError, SwipeHost};
    pub use super::input::{PointerEvent, PointerTarget};
}
