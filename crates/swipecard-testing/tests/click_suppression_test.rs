//! Click handling around swipe releases and taps.

use swipecard_core::{CardOpenState, ReleaseOutcome};
use swipecard_testing::{CardId, SwipeRobot};

#[test]
fn tap_on_closed_card_lets_click_through() {
    let mut robot = SwipeRobot::new(2);
    assert_eq!(robot.tap(CardId(1)), ReleaseOutcome::Tap);
    assert!(!robot.controller().is_click_guard_armed(robot.now()));
    assert!(robot.click(CardId(1)));
    assert_eq!(robot.delivered_clicks(), &[CardId(1)]);
    assert_eq!(robot.open_state(CardId(1)), CardOpenState::Closed);
}

#[test]
fn tap_on_open_card_closes_it_and_eats_one_click() {
    let mut robot = SwipeRobot::new(1);
    robot.swipe_and_click(CardId(0), 45.0);
    assert_eq!(robot.open_state(CardId(0)), CardOpenState::OpenLeft);

    assert!(!robot.tap_and_click(CardId(0)));
    assert_eq!(robot.open_state(CardId(0)), CardOpenState::Closed);
    assert_eq!(robot.swallowed_clicks(), 2);

    // The next tap behaves normally again.
    assert!(robot.tap_and_click(CardId(0)));
    assert_eq!(robot.delivered_clicks(), &[CardId(0)]);
}

#[test]
fn swipe_release_swallows_exactly_one_click() {
    let mut robot = SwipeRobot::new(1);
    assert!(!robot.swipe_and_click(CardId(0), -40.0));
    assert!(robot.click(CardId(0)));
    assert_eq!(robot.swallowed_clicks(), 1);
}

#[test]
fn snapping_closed_still_swallows_click() {
    let mut robot = SwipeRobot::new(1);
    assert!(!robot.swipe_and_click(CardId(0), 15.0));
    assert_eq!(robot.open_state(CardId(0)), CardOpenState::Closed);
}

#[test]
fn guard_expires_when_no_click_arrives() {
    let mut robot = SwipeRobot::new(1);
    robot.swipe(CardId(0), 40.0);
    assert!(robot.controller().is_click_guard_armed(robot.now()));

    robot.advance_time(100);
    assert!(!robot.controller().is_click_guard_armed(robot.now()));
    assert!(robot.click(CardId(0)));
}

#[test]
fn vertical_scroll_does_not_guard_clicks() {
    let mut robot = SwipeRobot::new(1);
    robot.press(CardId(0));
    robot.drag_by(0.0, 30.0);
    assert_eq!(robot.release_at(0.0, 30.0), ReleaseOutcome::Scrolled);
    assert!(robot.click(CardId(0)));
}
