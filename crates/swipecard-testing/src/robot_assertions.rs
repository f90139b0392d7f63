//! Assertion utilities for robot testing

use crate::fake_host::CardId;
use crate::robot::SwipeRobot;
use swipecard_core::CardOpenState;

/// Assert that a card's translation landed within `tolerance` pixels of
/// `expected`.
///
/// Damped translations are products of float scaling, so exact comparison
/// only holds inside the action width.
pub fn assert_translation_near(actual: f32, expected: f32, tolerance: f32, what: &str) {
    let off_by = (actual - expected).abs();
    assert!(
        off_by <= tolerance,
        "{what}: card sits at translateX({actual}px), expected {expected}px ±{tolerance}px"
    );
}

/// Assert that `card` is the only open card and rests in `state`.
pub fn assert_only_open(robot: &SwipeRobot, card: CardId, state: CardOpenState) {
    let open: Vec<CardId> = robot
        .host()
        .card_ids()
        .filter(|id| robot.open_state(*id).is_open())
        .collect();
    assert_eq!(open, vec![card], "only {card:?} should be open");
    assert_eq!(robot.open_state(card), state, "{card:?} open state");
}

/// Assert that no card is open and no inline transform is left behind.
pub fn assert_all_at_rest(robot: &SwipeRobot) {
    for id in robot.host().card_ids() {
        assert_eq!(
            robot.open_state(id),
            CardOpenState::Closed,
            "{id:?} should be closed"
        );
        assert_eq!(
            robot.host().card(id).transform,
            None,
            "{id:?} should have no inline transform"
        );
    }
}

/// Assert that a card was handed back to the stylesheet after a gesture.
pub fn assert_released(robot: &SwipeRobot, card: CardId) {
    let fake = robot.host().card(card);
    assert!(fake.transition_enabled, "{card:?} transition restored");
    assert!(
        !robot
            .host()
            .has_class(card, &robot.controller().config().swiping_class),
        "{card:?} swiping marker cleared"
    );
    assert_eq!(fake.transform, None, "{card:?} inline transform cleared");
    assert!(!robot.controller().is_swiping(), "swipe flag cleared");
}
