//! Swipe gesture controller.
//!
//! One controller serves a whole container of cards. Each pointer-down on a
//! card opens a [`GestureSession`]; moves classify the gesture as a
//! horizontal swipe or a vertical scroll, and the release either snaps the
//! card to a resting state or is treated as a tap.
//!
//! ```text
//! Idle ──down on card──▶ Armed ──|Δx| > 10──▶ Dragging ──up/cancel──▶ Idle
//!                          │                                   (snap + guard)
//!                          ├──|Δy| > 10──▶ VerticalScroll ──up/cancel──▶ Idle
//!                          └──up/cancel──▶ Idle (tap when < 5px)
//! ```

use crate::card::{CardOpenState, HapticIntensity};
use crate::click_guard::ClickGuard;
use crate::config::SwipeConfig;
use crate::geometry::Point;
use crate::host::SwipeHost;
use crate::input::{PointerEvent, PointerId, PointerTarget};
use crate::layout_cache::LayoutCache;
use crate::physics::{damped_translation, resolve_open_state, GestureIntent};
use web_time::Instant;

/// State held for the duration of one pointer interaction.
#[derive(Clone, Debug)]
pub struct GestureSession<C, W> {
    pub card: C,
    pub content: W,
    pub pointer: PointerId,
    pub start: Point,
    /// Translation the card rested at when the pointer went down.
    pub initial_offset: f32,
    pub intent: GestureIntent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownOutcome {
    /// No session was started; the event should be left alone.
    Ignored,
    /// A session started; the platform should start tracking this pointer.
    Started,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No session, or a different pointer.
    Ignored,
    /// Still below the intent threshold.
    Pending,
    /// The gesture is a vertical scroll; the platform scrolls natively.
    ScrollYielded,
    /// The card was moved to `translation`.
    Dragged { translation: f32 },
}

impl MoveOutcome {
    /// Only an active horizontal drag suppresses native scrolling.
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, MoveOutcome::Dragged { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No session, or a different pointer.
    Ignored,
    /// The session ended as a vertical scroll.
    Scrolled,
    /// The pointer moved too far for a tap but never committed to a direction.
    Settled,
    /// A tap on a closed card; the click proceeds normally.
    Tap,
    /// A tap on an open card closed it.
    TapClosed,
    /// A drag finished and the card snapped to this state.
    Snapped(CardOpenState),
}

impl ReleaseOutcome {
    /// Whether the click the platform synthesizes next must be swallowed.
    pub fn suppresses_click(&self) -> bool {
        matches!(self, ReleaseOutcome::TapClosed | ReleaseOutcome::Snapped(_))
    }

    /// Whether the session was torn down by this release.
    pub fn ended_session(&self) -> bool {
        !matches!(self, ReleaseOutcome::Ignored)
    }
}

pub struct SwipeController<H: SwipeHost> {
    host: H,
    config: SwipeConfig,
    layout: LayoutCache,
    click_guard: ClickGuard,
    session: Option<GestureSession<H::Card, H::Content>>,
    is_swiping: bool,
}

impl<H: SwipeHost> SwipeController<H> {
    pub fn new(host: H, config: SwipeConfig) -> Self {
        let layout = LayoutCache::new(config.default_action_width);
        let click_guard = ClickGuard::new(config.click_guard_timeout);
        Self {
            host,
            config,
            layout,
            click_guard,
            session: None,
            is_swiping: false,
        }
    }

    /// Creates a controller and primes the layout cache.
    pub fn with_setup(host: H, config: SwipeConfig) -> Self {
        let mut controller = Self::new(host, config);
        controller.setup();
        controller
    }

    pub fn setup(&mut self) {
        let width = self.refresh_layout();
        log::debug!("swipe controller ready, action width {width}px");
    }

    /// Re-reads the action width. Called at setup and on every resize.
    ///
    /// A drag in progress picks up the new width on its next move.
    pub fn refresh_layout(&mut self) -> f32 {
        let raw = self.host.read_action_width();
        self.layout.refresh(raw.as_deref())
    }

    pub fn cached_width(&self) -> f32 {
        self.layout.action_width()
    }

    /// True between the horizontal intent lock and the release.
    pub fn is_swiping(&self) -> bool {
        self.is_swiping
    }

    pub fn session(&self) -> Option<&GestureSession<H::Card, H::Content>> {
        self.session.as_ref()
    }

    pub fn active_card(&self) -> Option<&H::Card> {
        self.session.as_ref().map(|session| &session.card)
    }

    pub fn open_state(&self, card: &H::Card) -> CardOpenState {
        self.host.open_state(card)
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn on_pointer_down(
        &mut self,
        target: PointerTarget<H::Card>,
        event: PointerEvent,
    ) -> DownOutcome {
        let card = match target {
            PointerTarget::Card(card) => card,
            PointerTarget::Button(_) => {
                log::trace!("pointer {} went down on a button, not swiping", event.id);
                return DownOutcome::Ignored;
            }
            PointerTarget::Outside => return DownOutcome::Ignored,
        };

        if let Some(previous) = self.session.take() {
            log::debug!("abandoning unfinished swipe on {:?}", previous.card);
            self.restore(&previous);
            self.host.set_translation(&previous.content, None);
            if let Err(err) = self.host.release_pointer(&previous.card, previous.pointer) {
                log::warn!("{err}");
            }
        }

        let Some(content) = self.host.content(&card) else {
            log::debug!("card {card:?} has no content wrapper, not swiping");
            return DownOutcome::Ignored;
        };

        let initial_offset = self
            .host
            .open_state(&card)
            .resting_offset(self.layout.action_width());

        self.host.set_transition_enabled(&content, false);
        if let Err(err) = self.host.capture_pointer(&card, event.id) {
            log::warn!("{err}");
        }
        self.close_others(&card);

        self.session = Some(GestureSession {
            card,
            content,
            pointer: event.id,
            start: event.position,
            initial_offset,
            intent: GestureIntent::Undecided,
        });
        DownOutcome::Started
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) -> MoveOutcome {
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Ignored;
        };
        if session.pointer != event.id {
            return MoveOutcome::Ignored;
        }

        let delta = event.position.delta_from(session.start);
        match session.intent {
            GestureIntent::Vertical => return MoveOutcome::ScrollYielded,
            GestureIntent::Horizontal => {}
            GestureIntent::Undecided => {
                match GestureIntent::classify(delta, self.config.intent_threshold) {
                    GestureIntent::Undecided => return MoveOutcome::Pending,
                    GestureIntent::Vertical => {
                        session.intent = GestureIntent::Vertical;
                        log::trace!("pointer {} locked to vertical scroll", event.id);
                        if let Err(err) = self.host.release_pointer(&session.card, event.id) {
                            log::warn!("{err}");
                        }
                        return MoveOutcome::ScrollYielded;
                    }
                    GestureIntent::Horizontal => {
                        session.intent = GestureIntent::Horizontal;
                        log::trace!("pointer {} locked to horizontal swipe", event.id);
                        self.is_swiping = true;
                        self.host.set_swiping(&session.card, true);
                    }
                }
            }
        }

        let translation = damped_translation(
            session.initial_offset,
            delta.x,
            self.layout.action_width(),
            self.config.resistance,
        );
        self.host.set_translation(&session.content, Some(translation));
        MoveOutcome::Dragged { translation }
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent, now: Instant) -> ReleaseOutcome {
        self.end_session(event, now)
    }

    /// Cancellation tears down exactly like a release.
    pub fn on_pointer_cancel(&mut self, event: PointerEvent, now: Instant) -> ReleaseOutcome {
        self.end_session(event, now)
    }

    fn end_session(&mut self, event: PointerEvent, now: Instant) -> ReleaseOutcome {
        let session = match self.session.take() {
            Some(session) if session.pointer == event.id => session,
            other => {
                self.session = other;
                return ReleaseOutcome::Ignored;
            }
        };

        self.restore(&session);
        let delta = event.position.delta_from(session.start);

        let outcome = match session.intent {
            GestureIntent::Horizontal => {
                let translation = damped_translation(
                    session.initial_offset,
                    delta.x,
                    self.layout.action_width(),
                    self.config.resistance,
                );
                let state = self.finalize_with(&session.card, &session.content, translation);
                self.click_guard.arm(now);
                ReleaseOutcome::Snapped(state)
            }
            GestureIntent::Vertical => {
                self.host.set_translation(&session.content, None);
                ReleaseOutcome::Scrolled
            }
            GestureIntent::Undecided => {
                self.host.set_translation(&session.content, None);
                if !delta.within(self.config.tap_slop) {
                    ReleaseOutcome::Settled
                } else if self.host.open_state(&session.card).is_open() {
                    self.host.set_open_state(&session.card, CardOpenState::Closed);
                    self.click_guard.arm(now);
                    ReleaseOutcome::TapClosed
                } else {
                    ReleaseOutcome::Tap
                }
            }
        };
        log::debug!("swipe on {:?} ended: {outcome:?}", session.card);
        outcome
    }

    /// Snaps `card` to the resting state for `translation`.
    ///
    /// Clears the inline transform so the stylesheet transition animates the
    /// card to its marker position. Opening fires a medium haptic pulse;
    /// closing does not.
    pub fn finalize(&mut self, card: &H::Card, translation: f32) -> CardOpenState {
        match self.host.content(card) {
            Some(content) => self.finalize_with(card, &content, translation),
            None => self.snap(card, translation),
        }
    }

    fn finalize_with(
        &mut self,
        card: &H::Card,
        content: &H::Content,
        translation: f32,
    ) -> CardOpenState {
        self.host.set_translation(content, None);
        self.snap(card, translation)
    }

    fn snap(&mut self, card: &H::Card, translation: f32) -> CardOpenState {
        let state = resolve_open_state(
            translation,
            self.layout.action_width(),
            self.config.snap_ratio,
        );
        self.host.set_open_state(card, state);
        if state.is_open() {
            self.host.haptic(HapticIntensity::Medium);
        }
        state
    }

    /// Closes every open card in the container.
    pub fn close_all(&mut self) {
        for card in self.host.open_cards() {
            self.host.set_open_state(&card, CardOpenState::Closed);
        }
    }

    /// Called for every click reaching the window in the capture phase.
    ///
    /// Returns `true` exactly once per armed guard, and only before it
    /// expires.
    pub fn intercept_click(&mut self, now: Instant) -> bool {
        let swallowed = self.click_guard.intercept(now);
        if swallowed {
            log::trace!("swallowed click following a swipe");
        }
        swallowed
    }

    /// Drops a guard whose deadline passed without a click.
    pub fn expire_click_guard(&mut self, now: Instant) -> bool {
        self.click_guard.expire(now)
    }

    /// Drops the guard unconditionally, for platform timers that fire at
    /// the deadline.
    pub fn disarm_click_guard(&mut self) {
        self.click_guard.disarm();
    }

    pub fn is_click_guard_armed(&self, now: Instant) -> bool {
        self.click_guard.is_armed(now)
    }

    fn close_others(&mut self, card: &H::Card) {
        for other in self.host.open_cards() {
            if &other != card {
                self.host.set_open_state(&other, CardOpenState::Closed);
            }
        }
    }

    fn restore(&mut self, session: &GestureSession<H::Card, H::Content>) {
        self.host.set_transition_enabled(&session.content, true);
        self.host.set_swiping(&session.card, false);
        self.is_swiping = false;
    }
}

impl<H> std::fmt::Debug for SwipeController<H>
where
    H: SwipeHost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeController")
            .field("action_width", &self.layout.action_width())
            .field("session", &self.session)
            .field("is_swiping", &self.is_swiping)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
