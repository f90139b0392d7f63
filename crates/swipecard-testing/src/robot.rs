//! Robot-style driver for swipe gesture tests.
//!
//! The robot plays the browser's part: it resolves what a pointer landed
//! on, feeds the controller pointer events in small steps, releases pointer
//! capture on pointer-up, synthesizes the click that follows a release, and
//! fires the click-guard timeout when virtual time passes it.
//!
//! # Example
//!
//! ```
//! use swipecard_core::CardOpenState;
//! use swipecard_testing::{CardId, SwipeRobot};
//!
//! let mut robot = SwipeRobot::new(3);
//! robot.swipe(CardId(0), 40.0);
//! assert_eq!(robot.open_state(CardId(0)), CardOpenState::OpenLeft);
//! ```

use crate::fake_host::{CardId, FakeHost};
use swipecard_core::{
    CardOpenState, DownOutcome, MoveOutcome, PointerEvent, PointerId, PointerTarget,
    ReleaseOutcome, SwipeConfig, SwipeController,
};
use web_time::{Duration, Instant};

/// Where on a card a robot gesture starts.
const ORIGIN_X: f32 = 160.0;
const ORIGIN_Y: f32 = 40.0;
/// Step size for interpolated moves, roughly one frame of a fast swipe.
const STEP: f32 = 4.0;

pub struct SwipeRobot {
    controller: SwipeController<FakeHost>,
    now: Instant,
    next_pointer: PointerId,
    pointer: Option<(PointerId, f32, f32)>,
    delivered_clicks: Vec<CardId>,
    swallowed_clicks: usize,
    scroll_defaults_prevented: usize,
}

impl SwipeRobot {
    /// Robot over `card_count` closed cards with the default stylesheet width.
    pub fn new(card_count: usize) -> Self {
        Self::with_config(card_count, SwipeConfig::default())
    }

    pub fn with_config(card_count: usize, config: SwipeConfig) -> Self {
        let mut host = FakeHost::new(card_count, config.clone());
        host.set_root_property(&config.action_width_property, "60px");
        Self::with_host(host, config)
    }

    pub fn with_host(host: FakeHost, config: SwipeConfig) -> Self {
        Self {
            controller: SwipeController::with_setup(host, config),
            now: Instant::now(),
            next_pointer: 1,
            pointer: None,
            delivered_clicks: Vec::new(),
            swallowed_clicks: 0,
            scroll_defaults_prevented: 0,
        }
    }

    pub fn controller(&self) -> &SwipeController<FakeHost> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController<FakeHost> {
        &mut self.controller
    }

    pub fn host(&self) -> &FakeHost {
        self.controller.host()
    }

    pub fn host_mut(&mut self) -> &mut FakeHost {
        self.controller.host_mut()
    }

    pub fn open_state(&self, card: CardId) -> CardOpenState {
        self.controller.open_state(&card)
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Puts a card into a resting state directly, as a re-render would.
    pub fn set_open_state(&mut self, card: CardId, state: CardOpenState) {
        use swipecard_core::SwipeHost;
        self.host_mut().set_open_state(&card, state);
    }

    /// Changes the stylesheet width and fires a resize.
    pub fn resize(&mut self, action_width: &str) -> f32 {
        let property = self.controller.config().action_width_property.clone();
        self.host_mut().set_root_property(&property, action_width);
        self.controller.refresh_layout()
    }

    /// Advances virtual time, firing the click-guard timeout if it is due.
    pub fn advance_time(&mut self, millis: u64) {
        self.now += Duration::from_millis(millis);
        if self.controller.expire_click_guard(self.now) {
            log::trace!("click guard timed out");
        }
    }

    /// Pointer-down on the body of `card`.
    pub fn press(&mut self, card: CardId) -> DownOutcome {
        self.press_target(PointerTarget::Card(card))
    }

    /// Pointer-down on a button inside `card`.
    pub fn press_button(&mut self, card: CardId) -> DownOutcome {
        self.press_target(PointerTarget::Button(card))
    }

    pub fn press_target(&mut self, target: PointerTarget<CardId>) -> DownOutcome {
        let id = self.next_pointer;
        self.next_pointer += 1;
        self.pointer = Some((id, ORIGIN_X, ORIGIN_Y));
        self.controller
            .on_pointer_down(target, PointerEvent::down(id, ORIGIN_X, ORIGIN_Y))
    }

    /// Moves the active pointer by `(dx, dy)` relative to where it went down,
    /// in small interpolated steps. Returns the last move's outcome.
    pub fn drag_by(&mut self, dx: f32, dy: f32) -> MoveOutcome {
        let Some((id, x0, y0)) = self.pointer else {
            return MoveOutcome::Ignored;
        };
        let steps = ((dx.abs().max(dy.abs()) / STEP).ceil() as usize).max(1);
        let mut outcome = MoveOutcome::Ignored;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            outcome = self
                .controller
                .on_pointer_move(PointerEvent::moved(id, x0 + dx * t, y0 + dy * t));
            if outcome.should_prevent_default() {
                self.scroll_defaults_prevented += 1;
            }
        }
        outcome
    }

    /// Lifts the active pointer at `(dx, dy)` from where it went down.
    pub fn release_at(&mut self, dx: f32, dy: f32) -> ReleaseOutcome {
        let Some((id, x0, y0)) = self.pointer.take() else {
            return ReleaseOutcome::Ignored;
        };
        let outcome = self
            .controller
            .on_pointer_up(PointerEvent::up(id, x0 + dx, y0 + dy), self.now);
        self.release_captures(id);
        outcome
    }

    pub fn cancel_at(&mut self, dx: f32, dy: f32) -> ReleaseOutcome {
        let Some((id, x0, y0)) = self.pointer.take() else {
            return ReleaseOutcome::Ignored;
        };
        let outcome = self
            .controller
            .on_pointer_cancel(PointerEvent::cancel(id, x0 + dx, y0 + dy), self.now);
        self.release_captures(id);
        outcome
    }

    /// Full horizontal swipe on `card`: press, drag, release.
    pub fn swipe(&mut self, card: CardId, dx: f32) -> ReleaseOutcome {
        self.press(card);
        self.drag_by(dx, 0.0);
        self.release_at(dx, 0.0)
    }

    /// Swipe followed by the click the browser synthesizes on release.
    /// Returns whether that click reached the card.
    pub fn swipe_and_click(&mut self, card: CardId, dx: f32) -> bool {
        self.swipe(card, dx);
        self.click(card)
    }

    /// Press and release in place, without the follow-up click.
    pub fn tap(&mut self, card: CardId) -> ReleaseOutcome {
        self.press(card);
        self.release_at(1.0, 1.0)
    }

    /// Tap followed by its click. Returns whether the click reached the card.
    pub fn tap_and_click(&mut self, card: CardId) -> bool {
        self.tap(card);
        self.click(card)
    }

    /// Dispatches a click on `card`, passing through the window capture phase
    /// first. Returns whether the card's own click handler ran.
    pub fn click(&mut self, card: CardId) -> bool {
        if self.controller.intercept_click(self.now) {
            self.swallowed_clicks += 1;
            return false;
        }
        self.delivered_clicks.push(card);
        true
    }

    pub fn delivered_clicks(&self) -> &[CardId] {
        &self.delivered_clicks
    }

    pub fn swallowed_clicks(&self) -> usize {
        self.swallowed_clicks
    }

    /// Moves during which native scrolling would have been suppressed.
    pub fn scroll_defaults_prevented(&self) -> usize {
        self.scroll_defaults_prevented
    }

    fn release_captures(&mut self, pointer: PointerId) {
        let ids: Vec<CardId> = self.host().card_ids().collect();
        for id in ids {
            let card = self.host_mut().card_mut(id);
            if card.captured_pointer == Some(pointer) {
                card.captured_pointer = None;
            }
        }
    }
}

impl std::fmt::Debug for SwipeRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeRobot")
            .field("controller", &self.controller)
            .field("delivered_clicks", &self.delivered_clicks)
            .field("swallowed_clicks", &self.swallowed_clicks)
            .finish()
    }
}
