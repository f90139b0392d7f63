//! Pointer events as seen by the swipe controller.
//!
//! Platform adapters translate native events into these types. Coordinates
//! are client coordinates in CSS pixels so that a gesture stays consistent
//! even if the card scrolls underneath the pointer.

use crate::geometry::Point;

pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point) -> Self {
        Self { id, kind, position }
    }

    pub fn down(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(id: PointerId, x: f32, y: f32) -> Self {
        Self::new(id, PointerEventKind::Cancel, Point::new(x, y))
    }
}

/// What a pointer-down landed on, resolved by the platform.
///
/// The controller never inspects selectors itself; the host decides whether
/// the event target sits inside a card, inside a button within a card, or
/// somewhere else in the container.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget<C> {
    Card(C),
    Button(C),
    Outside,
}

impl<C> PointerTarget<C> {
    pub fn card(&self) -> Option<&C> {
        match self {
            PointerTarget::Card(card) => Some(card),
            PointerTarget::Button(_) | PointerTarget::Outside => None,
        }
    }
}
