use super::*;

const WIDTH: f32 = 60.0;
const RESISTANCE: f32 = 0.3;

#[test]
fn drag_inside_limit_tracks_pointer_exactly() {
    for dx in [-60.0, -45.5, -1.0, 0.0, 12.25, 40.0, 60.0] {
        assert_eq!(damped_translation(0.0, dx, WIDTH, RESISTANCE), dx);
    }
    // From an open card the limit is still absolute.
    assert_eq!(damped_translation(60.0, -100.0, WIDTH, RESISTANCE), -40.0);
}

#[test]
fn overshoot_is_scaled_by_resistance() {
    let shown = damped_translation(0.0, 90.0, WIDTH, RESISTANCE);
    assert!((shown - 69.0).abs() < 1e-4);

    let shown = damped_translation(0.0, -160.0, WIDTH, RESISTANCE);
    assert!((shown + 90.0).abs() < 1e-4);

    // Open-left card dragged further right keeps resisting.
    let shown = damped_translation(60.0, 20.0, WIDTH, RESISTANCE);
    assert!((shown - 66.0).abs() < 1e-4);
}

#[test]
fn overshoot_never_hard_stops() {
    let a = damped_translation(0.0, 200.0, WIDTH, RESISTANCE);
    let b = damped_translation(0.0, 400.0, WIDTH, RESISTANCE);
    assert!(b > a);
    assert!(a > WIDTH);
    assert!(a < 200.0);
}

#[test]
fn snap_thresholds_are_half_the_action_width() {
    assert_eq!(resolve_open_state(40.0, WIDTH, 0.5), CardOpenState::OpenLeft);
    assert_eq!(resolve_open_state(69.0, WIDTH, 0.5), CardOpenState::OpenLeft);
    assert_eq!(resolve_open_state(30.0, WIDTH, 0.5), CardOpenState::Closed);
    assert_eq!(resolve_open_state(-30.0, WIDTH, 0.5), CardOpenState::Closed);
    assert_eq!(resolve_open_state(-30.5, WIDTH, 0.5), CardOpenState::OpenRight);
    assert_eq!(resolve_open_state(0.0, WIDTH, 0.5), CardOpenState::Closed);
}

#[test]
fn snap_is_deterministic() {
    for translation in [-75.0, -31.0, -12.0, 0.0, 29.9, 30.1, 90.0] {
        let first = resolve_open_state(translation, WIDTH, 0.5);
        let second = resolve_open_state(translation, WIDTH, 0.5);
        assert_eq!(first, second);
    }
}

#[test]
fn intent_waits_for_threshold() {
    assert_eq!(
        GestureIntent::classify(Point::new(6.0, 8.0), 10.0),
        GestureIntent::Undecided
    );
    assert_eq!(
        GestureIntent::classify(Point::new(10.0, 0.0), 10.0),
        GestureIntent::Undecided
    );
}

#[test]
fn intent_picks_dominant_axis() {
    assert_eq!(
        GestureIntent::classify(Point::new(-11.0, 3.0), 10.0),
        GestureIntent::Horizontal
    );
    assert_eq!(
        GestureIntent::classify(Point::new(4.0, -14.0), 10.0),
        GestureIntent::Vertical
    );
    assert_eq!(
        GestureIntent::classify(Point::new(12.0, 15.0), 10.0),
        GestureIntent::Vertical
    );
    assert_eq!(
        GestureIntent::classify(Point::new(15.0, 12.0), 10.0),
        GestureIntent::Horizontal
    );
}

#[test]
fn transform_value_is_css() {
    assert_eq!(translate_x(12.5), "translateX(12.5px)");
    assert_eq!(translate_x(-60.0), "translateX(-60px)");
}
