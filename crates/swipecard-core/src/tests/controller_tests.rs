use super::*;
use crate::host::{HostError, OpenCards};
use std::cell::Cell;
use std::collections::HashMap;
use web_time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Transition(usize, bool),
    Translate(usize, Option<f32>),
    Swiping(usize, bool),
    Capture(usize),
    Release(usize),
    Haptic(HapticIntensity),
}

// Mock host: cards are indices, card 99 has no content wrapper.
#[derive(Default)]
struct MockHost {
    states: HashMap<usize, CardOpenState>,
    calls: Vec<Call>,
    width: Option<String>,
    refuse_capture: bool,
    content_lookups: Cell<usize>,
}

impl MockHost {
    fn with_width(width: &str) -> Self {
        Self {
            width: Some(width.into()),
            ..Default::default()
        }
    }

    fn haptics(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Haptic(_)))
            .count()
    }

    fn last_translation(&self, card: usize) -> Option<Option<f32>> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Translate(id, value) if *id == card => Some(*value),
            _ => None,
        })
    }
}

impl SwipeHost for MockHost {
    type Card = usize;
    type Content = usize;

    fn content(&self, card: &usize) -> Option<usize> {
        self.content_lookups.set(self.content_lookups.get() + 1);
        (*card != 99).then_some(*card)
    }

    fn open_state(&self, card: &usize) -> CardOpenState {
        self.states.get(card).copied().unwrap_or_default()
    }

    fn set_open_state(&mut self, card: &usize, state: CardOpenState) {
        self.states.insert(*card, state);
    }

    fn open_cards(&self) -> OpenCards<usize> {
        let mut open: OpenCards<usize> = self
            .states
            .iter()
            .filter(|(_, state)| state.is_open())
            .map(|(card, _)| *card)
            .collect();
        open.sort_unstable();
        open
    }

    fn set_translation(&mut self, content: &usize, translation: Option<f32>) {
        self.calls.push(Call::Translate(*content, translation));
    }

    fn set_transition_enabled(&mut self, content: &usize, enabled: bool) {
        self.calls.push(Call::Transition(*content, enabled));
    }

    fn set_swiping(&mut self, card: &usize, swiping: bool) {
        self.calls.push(Call::Swiping(*card, swiping));
    }

    fn capture_pointer(&mut self, card: &usize, pointer: PointerId) -> Result<(), HostError> {
        if self.refuse_capture {
            return Err(HostError::PointerCapture {
                pointer,
                reason: "refused".into(),
            });
        }
        self.calls.push(Call::Capture(*card));
        Ok(())
    }

    fn release_pointer(&mut self, card: &usize, _pointer: PointerId) -> Result<(), HostError> {
        self.calls.push(Call::Release(*card));
        Ok(())
    }

    fn haptic(&mut self, intensity: HapticIntensity) {
        self.calls.push(Call::Haptic(intensity));
    }

    fn read_action_width(&self) -> Option<String> {
        self.width.clone()
    }
}

fn controller() -> SwipeController<MockHost> {
    SwipeController::with_setup(MockHost::with_width("60px"), SwipeConfig::default())
}

fn drag(c: &mut SwipeController<MockHost>, card: usize, dx: f32) -> ReleaseOutcome {
    let now = Instant::now();
    c.on_pointer_down(PointerTarget::Card(card), PointerEvent::down(1, 100.0, 100.0));
    c.on_pointer_move(PointerEvent::moved(1, 100.0 + dx / 2.0, 100.0));
    c.on_pointer_move(PointerEvent::moved(1, 100.0 + dx, 100.0));
    c.on_pointer_up(PointerEvent::up(1, 100.0 + dx, 100.0), now)
}

#[test]
fn setup_reads_action_width() {
    let c = SwipeController::with_setup(MockHost::with_width("72px"), SwipeConfig::default());
    assert_eq!(c.cached_width(), 72.0);

    let c = SwipeController::with_setup(MockHost::default(), SwipeConfig::default());
    assert_eq!(c.cached_width(), 60.0);
}

#[test]
fn refresh_layout_picks_up_new_width() {
    let mut c = controller();
    c.host_mut().width = Some("90px".into());
    assert_eq!(c.refresh_layout(), 90.0);
    assert_eq!(c.cached_width(), 90.0);
}

#[test]
fn pointer_down_arms_session() {
    let mut c = controller();
    let outcome = c.on_pointer_down(PointerTarget::Card(3), PointerEvent::down(7, 10.0, 20.0));
    assert_eq!(outcome, DownOutcome::Started);

    let session = c.session().expect("session started");
    assert_eq!(session.card, 3);
    assert_eq!(session.pointer, 7);
    assert_eq!(session.start, Point::new(10.0, 20.0));
    assert_eq!(session.initial_offset, 0.0);
    assert_eq!(session.intent, GestureIntent::Undecided);
    assert!(!c.is_swiping());
    assert_eq!(
        c.host().calls,
        vec![Call::Transition(3, false), Call::Capture(3)]
    );
}

#[test]
fn pointer_down_on_open_card_starts_from_its_offset() {
    let mut c = controller();
    c.host_mut().set_open_state(&2, CardOpenState::OpenRight);
    c.on_pointer_down(PointerTarget::Card(2), PointerEvent::down(1, 0.0, 0.0));
    assert_eq!(c.session().map(|s| s.initial_offset), Some(-60.0));
}

#[test]
fn button_and_outside_targets_are_ignored() {
    let mut c = controller();
    assert_eq!(
        c.on_pointer_down(PointerTarget::Button(1), PointerEvent::down(1, 0.0, 0.0)),
        DownOutcome::Ignored
    );
    assert_eq!(
        c.on_pointer_down(PointerTarget::Outside, PointerEvent::down(1, 0.0, 0.0)),
        DownOutcome::Ignored
    );
    assert!(c.session().is_none());
    assert!(c.host().calls.is_empty());
}

#[test]
fn missing_content_wrapper_aborts_silently() {
    let mut c = controller();
    let outcome = c.on_pointer_down(PointerTarget::Card(99), PointerEvent::down(1, 0.0, 0.0));
    assert_eq!(outcome, DownOutcome::Ignored);
    assert!(c.session().is_none());
    assert!(c.host().calls.is_empty());
}

#[test]
fn capture_failure_does_not_abort_session() {
    let mut c = controller();
    c.host_mut().refuse_capture = true;
    let outcome = c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    assert_eq!(outcome, DownOutcome::Started);
}

#[test]
fn small_moves_stay_pending() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    assert_eq!(
        c.on_pointer_move(PointerEvent::moved(1, 6.0, 7.0)),
        MoveOutcome::Pending
    );
    assert!(!c.is_swiping());
}

#[test]
fn horizontal_lock_starts_drag_and_marks_swiping() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    let outcome = c.on_pointer_move(PointerEvent::moved(1, 12.0, 2.0));
    assert_eq!(outcome, MoveOutcome::Dragged { translation: 12.0 });
    assert!(outcome.should_prevent_default());
    assert!(c.is_swiping());
    assert!(c.host().calls.contains(&Call::Swiping(1, true)));
    assert_eq!(c.host().last_translation(1), Some(Some(12.0)));
}

#[test]
fn vertical_lock_yields_to_scroll_for_the_rest_of_the_session() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    let outcome = c.on_pointer_move(PointerEvent::moved(1, 3.0, 15.0));
    assert_eq!(outcome, MoveOutcome::ScrollYielded);
    assert!(!outcome.should_prevent_default());
    assert!(c.host().calls.contains(&Call::Release(1)));

    // Later horizontal movement no longer drags the card.
    assert_eq!(
        c.on_pointer_move(PointerEvent::moved(1, 80.0, 15.0)),
        MoveOutcome::ScrollYielded
    );
    assert!(!c.is_swiping());
    assert_eq!(
        c.on_pointer_up(PointerEvent::up(1, 80.0, 15.0), Instant::now()),
        ReleaseOutcome::Scrolled
    );
    assert_eq!(c.open_state(&1), CardOpenState::Closed);
}

#[test]
fn drag_translation_is_damped_past_action_width() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 20.0, 0.0));
    match c.on_pointer_move(PointerEvent::moved(1, 90.0, 0.0)) {
        MoveOutcome::Dragged { translation } => assert!((translation - 69.0).abs() < 1e-4),
        other => panic!("expected drag, got {other:?}"),
    }
}

#[test]
fn moves_from_other_pointers_are_ignored() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    assert_eq!(
        c.on_pointer_move(PointerEvent::moved(2, 50.0, 0.0)),
        MoveOutcome::Ignored
    );
    assert_eq!(
        c.on_pointer_up(PointerEvent::up(2, 50.0, 0.0), Instant::now()),
        ReleaseOutcome::Ignored
    );
    assert!(c.session().is_some());
}

#[test]
fn release_past_half_width_opens_left_with_haptic() {
    let mut c = controller();
    assert_eq!(drag(&mut c, 1, 40.0), ReleaseOutcome::Snapped(CardOpenState::OpenLeft));
    assert_eq!(c.open_state(&1), CardOpenState::OpenLeft);
    assert_eq!(c.host().haptics(), 1);
    assert!(c.host().calls.contains(&Call::Haptic(HapticIntensity::Medium)));
    assert_eq!(c.host().last_translation(1), Some(None));
    assert!(!c.is_swiping());
    assert!(c.session().is_none());
}

#[test]
fn overshoot_release_still_opens() {
    let mut c = controller();
    assert_eq!(drag(&mut c, 1, 90.0), ReleaseOutcome::Snapped(CardOpenState::OpenLeft));
}

#[test]
fn release_to_the_left_opens_right() {
    let mut c = controller();
    assert_eq!(drag(&mut c, 1, -45.0), ReleaseOutcome::Snapped(CardOpenState::OpenRight));
    assert_eq!(c.open_state(&1), CardOpenState::OpenRight);
}

#[test]
fn short_release_snaps_closed_without_haptic() {
    let mut c = controller();
    assert_eq!(drag(&mut c, 1, 25.0), ReleaseOutcome::Snapped(CardOpenState::Closed));
    assert_eq!(c.host().haptics(), 0);
}

#[test]
fn dragging_open_card_back_closes_it() {
    let mut c = controller();
    c.host_mut().set_open_state(&1, CardOpenState::OpenLeft);
    assert_eq!(drag(&mut c, 1, -45.0), ReleaseOutcome::Snapped(CardOpenState::Closed));
    assert_eq!(c.open_state(&1), CardOpenState::Closed);
}

#[test]
fn drag_release_arms_click_guard() {
    let mut c = controller();
    let now = Instant::now();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 40.0, 0.0));
    let outcome = c.on_pointer_up(PointerEvent::up(1, 40.0, 0.0), now);
    assert!(outcome.suppresses_click());
    assert!(c.is_click_guard_armed(now));
    assert!(c.intercept_click(now + Duration::from_millis(10)));
    assert!(!c.intercept_click(now + Duration::from_millis(11)));
}

#[test]
fn release_restores_transition_and_swiping_marker() {
    let mut c = controller();
    drag(&mut c, 4, 40.0);
    let calls = &c.host().calls;
    let restore = calls
        .iter()
        .position(|call| *call == Call::Transition(4, true))
        .expect("transition restored");
    let unmark = calls
        .iter()
        .position(|call| *call == Call::Swiping(4, false))
        .expect("swiping marker cleared");
    assert!(restore > 0 && unmark > restore);
}

#[test]
fn cancel_finalizes_like_release() {
    let mut c = controller();
    let now = Instant::now();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, -50.0, 0.0));
    let outcome = c.on_pointer_cancel(PointerEvent::cancel(1, -50.0, 0.0), now);
    assert_eq!(outcome, ReleaseOutcome::Snapped(CardOpenState::OpenRight));
    assert!(c.session().is_none());
    assert!(!c.is_swiping());
}

#[test]
fn tap_on_closed_card_changes_nothing() {
    let mut c = controller();
    let now = Instant::now();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 2.0, 1.0));
    let outcome = c.on_pointer_up(PointerEvent::up(1, 3.0, -2.0), now);
    assert_eq!(outcome, ReleaseOutcome::Tap);
    assert!(!outcome.suppresses_click());
    assert_eq!(c.open_state(&1), CardOpenState::Closed);
    assert!(!c.is_click_guard_armed(now));
    assert_eq!(c.host().last_translation(1), Some(None));
}

#[test]
fn tap_on_open_card_closes_it_and_guards_click() {
    let mut c = controller();
    let now = Instant::now();
    c.host_mut().set_open_state(&1, CardOpenState::OpenLeft);
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    let outcome = c.on_pointer_up(PointerEvent::up(1, 1.0, 1.0), now);
    assert_eq!(outcome, ReleaseOutcome::TapClosed);
    assert!(outcome.suppresses_click());
    assert_eq!(c.open_state(&1), CardOpenState::Closed);
    assert_eq!(c.host().haptics(), 0);
    assert!(c.intercept_click(now));
    assert!(!c.intercept_click(now));
}

#[test]
fn undecided_release_beyond_tap_slop_settles() {
    let mut c = controller();
    c.host_mut().set_open_state(&1, CardOpenState::OpenLeft);
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    let outcome = c.on_pointer_up(PointerEvent::up(1, 7.0, 0.0), Instant::now());
    assert_eq!(outcome, ReleaseOutcome::Settled);
    assert_eq!(c.open_state(&1), CardOpenState::OpenLeft);
}

#[test]
fn pointer_down_closes_other_open_cards() {
    let mut c = controller();
    c.host_mut().set_open_state(&1, CardOpenState::OpenLeft);
    c.host_mut().set_open_state(&2, CardOpenState::OpenRight);
    c.host_mut().set_open_state(&3, CardOpenState::OpenLeft);
    c.on_pointer_down(PointerTarget::Card(3), PointerEvent::down(1, 0.0, 0.0));
    assert_eq!(c.open_state(&1), CardOpenState::Closed);
    assert_eq!(c.open_state(&2), CardOpenState::Closed);
    assert_eq!(c.open_state(&3), CardOpenState::OpenLeft);
}

#[test]
fn new_pointer_down_abandons_unfinished_session() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 30.0, 0.0));
    assert!(c.is_swiping());

    c.on_pointer_down(PointerTarget::Card(2), PointerEvent::down(2, 0.0, 0.0));
    assert!(!c.is_swiping());
    assert_eq!(c.active_card(), Some(&2));
    assert!(c.host().calls.contains(&Call::Swiping(1, false)));
    assert!(c.host().calls.contains(&Call::Transition(1, true)));
    assert!(c.host().calls.contains(&Call::Release(1)));
}

#[test]
fn button_or_outside_down_keeps_active_drag_releasable() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 30.0, 0.0));

    assert_eq!(
        c.on_pointer_down(PointerTarget::Button(2), PointerEvent::down(2, 5.0, 5.0)),
        DownOutcome::Ignored
    );
    assert_eq!(
        c.on_pointer_down(PointerTarget::Outside, PointerEvent::down(3, 5.0, 5.0)),
        DownOutcome::Ignored
    );
    assert_eq!(c.active_card(), Some(&1));
    assert!(c.is_swiping());
    assert!(!c.host().calls.contains(&Call::Release(1)));

    assert_eq!(
        c.on_pointer_move(PointerEvent::moved(1, 40.0, 0.0)),
        MoveOutcome::Dragged { translation: 40.0 }
    );
    let outcome = c.on_pointer_up(PointerEvent::up(1, 40.0, 0.0), Instant::now());
    assert_eq!(outcome, ReleaseOutcome::Snapped(CardOpenState::OpenLeft));
    assert!(c.session().is_none());
    assert!(!c.is_swiping());
}

#[test]
fn release_reuses_session_content_wrapper() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 40.0, 0.0));
    let lookups = c.host().content_lookups.get();

    c.on_pointer_up(PointerEvent::up(1, 40.0, 0.0), Instant::now());
    assert_eq!(c.host().content_lookups.get(), lookups);
    assert_eq!(c.host().last_translation(1), Some(None));
}

#[test]
fn finalize_is_idempotent() {
    let mut c = controller();
    for translation in [69.0, 31.0, 30.0, -30.0, -31.0] {
        let first = c.finalize(&5, translation);
        let second = c.finalize(&5, translation);
        assert_eq!(first, second);
        assert_eq!(c.open_state(&5), first);
    }
}

#[test]
fn close_all_resets_every_card() {
    let mut c = controller();
    c.host_mut().set_open_state(&1, CardOpenState::OpenLeft);
    c.host_mut().set_open_state(&2, CardOpenState::OpenRight);
    c.close_all();
    assert!(c.host().open_cards().is_empty());
}

#[test]
fn resize_mid_drag_applies_new_width_on_next_move() {
    let mut c = controller();
    c.on_pointer_down(PointerTarget::Card(1), PointerEvent::down(1, 0.0, 0.0));
    c.on_pointer_move(PointerEvent::moved(1, 20.0, 0.0));
    c.host_mut().width = Some("100px".into());
    c.refresh_layout();
    assert_eq!(
        c.on_pointer_move(PointerEvent::moved(1, 90.0, 0.0)),
        MoveOutcome::Dragged { translation: 90.0 }
    );
}
