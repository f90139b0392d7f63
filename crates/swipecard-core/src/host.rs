//! Host abstraction for the swipe controller.
//!
//! The controller decides *what* happens to a card; a host applies it to a
//! concrete view tree (the DOM in the browser, an in-memory model in tests).
//! Hosts only toggle markers and inline transforms, the stylesheet owns the
//! animation between resting states.

use crate::card::{CardOpenState, HapticIntensity};
use crate::input::PointerId;
use smallvec::SmallVec;

/// Open cards are rare; more than a handful means something else is wrong.
pub type OpenCards<C> = SmallVec<[C; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The card is no longer attached to the container.
    Detached,
    /// The platform rejected pointer capture for this pointer.
    PointerCapture { pointer: PointerId, reason: String },
    /// A style or class mutation failed.
    Style { property: &'static str, reason: String },
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Detached => write!(f, "card detached from container"),
            HostError::PointerCapture { pointer, reason } => {
                write!(f, "pointer capture failed for pointer {pointer}: {reason}")
            }
            HostError::Style { property, reason } => {
                write!(f, "failed to update {property}: {reason}")
            }
        }
    }
}

impl std::error::Error for HostError {}

pub trait SwipeHost {
    /// Handle to a card element.
    type Card: Clone + PartialEq + std::fmt::Debug;
    /// Handle to the translating wrapper inside a card.
    type Content: Clone + std::fmt::Debug;

    /// Finds the content wrapper of `card`, if it has one.
    fn content(&self, card: &Self::Card) -> Option<Self::Content>;

    fn open_state(&self, card: &Self::Card) -> CardOpenState;

    /// Clears both open markers and applies the one for `state`, if any.
    fn set_open_state(&mut self, card: &Self::Card, state: CardOpenState);

    /// Every card in the container currently carrying an open marker.
    fn open_cards(&self) -> OpenCards<Self::Card>;

    /// Writes an inline translation, or clears it with `None`.
    fn set_translation(&mut self, content: &Self::Content, translation: Option<f32>);

    /// Enables or disables the CSS transition on the content wrapper.
    fn set_transition_enabled(&mut self, content: &Self::Content, enabled: bool);

    fn set_swiping(&mut self, card: &Self::Card, swiping: bool);

    fn capture_pointer(&mut self, card: &Self::Card, pointer: PointerId) -> Result<(), HostError>;

    fn release_pointer(&mut self, card: &Self::Card, pointer: PointerId) -> Result<(), HostError>;

    fn haptic(&mut self, intensity: HapticIntensity);

    /// Raw value of the action width custom property.
    fn read_action_width(&self) -> Option<String>;
}
