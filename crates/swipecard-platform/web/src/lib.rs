//! Web platform adapter for swipecard.
//!
//! [`setup_swipe_handler`] wires a [`SwipeController`] to a container of
//! cards: a `pointerdown` listener on the container starts sessions,
//! per-card `pointermove`/`pointerup`/`pointercancel` listeners live only as
//! long as the session, and a window `resize` listener refreshes the cached
//! action width.
//!
//! The stylesheet is expected to set `touch-action: pan-y` on cards so the
//! browser keeps vertical scrolling while horizontal drags reach us, and to
//! transition the content wrapper's `transform` between the open markers.

mod dom_host;
mod listener;

pub use dom_host::DomHost;
pub use listener::{EventListener, ListenerOptions};

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use swipecard_core::{DownOutcome, Point, PointerEventKind, SwipeConfig, SwipeController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};
use web_time::Instant;

struct ClickBlocker {
    listener: EventListener,
    timeout: Option<Timeout>,
}

struct SwipeState {
    controller: SwipeController<DomHost>,
    /// Listeners of the current (or last) session. Detached when the session
    /// ends, dropped when the next one starts.
    session_listeners: Vec<EventListener>,
    click_blocker: Option<ClickBlocker>,
}

type SharedState = Rc<RefCell<SwipeState>>;

/// Keeps a container's swipe handling alive. Dropping it detaches every
/// listener it installed.
pub struct SwipeHandle {
    state: SharedState,
    _listeners: Vec<EventListener>,
}

impl SwipeHandle {
    /// Whether a horizontal swipe is currently in progress.
    pub fn is_swiping(&self) -> bool {
        self.state
            .try_borrow()
            .map(|state| state.controller.is_swiping())
            .unwrap_or(false)
    }

    /// Closes every open card, e.g. after the list re-rendered.
    pub fn close_all(&self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.controller.close_all();
        }
    }

    /// Re-reads the action width without waiting for a resize.
    pub fn refresh_layout(&self) -> Option<f32> {
        self.state
            .try_borrow_mut()
            .ok()
            .map(|mut state| state.controller.refresh_layout())
    }
}

impl Drop for SwipeHandle {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.session_listeners.clear();
            state.click_blocker = None;
        }
    }
}

impl std::fmt::Debug for SwipeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeHandle")
            .field("listeners", &self._listeners)
            .finish()
    }
}

/// Attaches swipe handling to `container` with the default markup contract.
pub fn setup_swipe_handler(container: &HtmlElement) -> Result<SwipeHandle, JsValue> {
    setup_swipe_handler_with_config(container, SwipeConfig::default())
}

pub fn setup_swipe_handler_with_config(
    container: &HtmlElement,
    config: SwipeConfig,
) -> Result<SwipeHandle, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let host = DomHost::new(window.clone(), document, container.clone(), config.clone());
    let state = Rc::new(RefCell::new(SwipeState {
        controller: SwipeController::with_setup(host, config),
        session_listeners: Vec::new(),
        click_blocker: None,
    }));

    let pointer_down = {
        let weak = Rc::downgrade(&state);
        EventListener::new(
            container.as_ref(),
            "pointerdown",
            ListenerOptions::active(),
            move |event| {
                if let Some(state) = weak.upgrade() {
                    on_pointer_down(&state, &event);
                }
            },
        )?
    };

    let resize = {
        let weak = Rc::downgrade(&state);
        EventListener::new(
            window.as_ref(),
            "resize",
            ListenerOptions::default(),
            move |_event| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.controller.refresh_layout();
                };
            },
        )?
    };

    log::debug!("swipe handling attached to container");
    Ok(SwipeHandle {
        state,
        _listeners: vec![pointer_down, resize],
    })
}

fn pointer_event(
    event: &web_sys::PointerEvent,
    kind: PointerEventKind,
) -> swipecard_core::PointerEvent {
    swipecard_core::PointerEvent::new(
        event.pointer_id(),
        kind,
        Point::new(event.client_x() as f32, event.client_y() as f32),
    )
}

fn on_pointer_down(state: &SharedState, event: &Event) {
    let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        log::warn!("pointerdown re-entered swipe handling, ignoring");
        return;
    };

    let target = guard.controller.host().resolve_target(event.target());
    let card = target.card().cloned();
    let down = pointer_event(event, PointerEventKind::Down);
    if guard.controller.on_pointer_down(target, down) != DownOutcome::Started {
        return;
    }
    let Some(card) = card else {
        return;
    };

    // Only a started session replaces the previous one's listeners. They are
    // already detached or belong to the abandoned session, and we are outside
    // their callbacks here.
    guard.session_listeners.clear();

    match attach_session_listeners(Rc::downgrade(state), &card) {
        Ok(listeners) => guard.session_listeners = listeners,
        Err(err) => {
            log::warn!("failed to track swipe pointer: {err:?}");
            let cancel = pointer_event(event, PointerEventKind::Cancel);
            guard.controller.on_pointer_cancel(cancel, Instant::now());
        }
    }
}

fn attach_session_listeners(
    state: Weak<RefCell<SwipeState>>,
    card: &HtmlElement,
) -> Result<Vec<EventListener>, JsValue> {
    let on_move = {
        let state = state.clone();
        EventListener::new(
            card.as_ref(),
            "pointermove",
            ListenerOptions::active(),
            move |event| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() else {
                    return;
                };
                let Ok(mut state) = state.try_borrow_mut() else {
                    return;
                };
                let outcome = state
                    .controller
                    .on_pointer_move(pointer_event(event, PointerEventKind::Move));
                if outcome.should_prevent_default() {
                    event.prevent_default();
                }
            },
        )?
    };

    let mut listeners = vec![on_move];
    for (event_type, kind) in [
        ("pointerup", PointerEventKind::Up),
        ("pointercancel", PointerEventKind::Cancel),
    ] {
        let state = state.clone();
        listeners.push(EventListener::new(
            card.as_ref(),
            event_type,
            ListenerOptions::default(),
            move |event| {
                if let Some(state) = state.upgrade() {
                    on_pointer_end(&state, &event, kind);
                }
            },
        )?);
    }
    Ok(listeners)
}

fn on_pointer_end(state: &SharedState, event: &Event, kind: PointerEventKind) {
    let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        return;
    };

    let now = Instant::now();
    let pointer = pointer_event(event, kind);
    let outcome = match kind {
        PointerEventKind::Cancel => guard.controller.on_pointer_cancel(pointer, now),
        _ => guard.controller.on_pointer_up(pointer, now),
    };
    if !outcome.ended_session() {
        return;
    }

    for listener in &guard.session_listeners {
        listener.detach();
    }
    if outcome.suppresses_click() {
        if let Err(err) = install_click_blocker(state, &mut guard) {
            log::warn!("failed to install click blocker: {err:?}");
        }
    }
}

/// Swallows the click the browser synthesizes after a swipe or a
/// tap-to-close. The window capture phase runs before any listener on the
/// card, so the card's own click handler never sees it.
fn install_click_blocker(state: &SharedState, guard: &mut SwipeState) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    guard.click_blocker = None;

    let listener = {
        let weak = Rc::downgrade(state);
        EventListener::new(
            window.as_ref(),
            "click",
            ListenerOptions::capture(),
            move |event| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let Ok(mut state) = state.try_borrow_mut() else {
                    return;
                };
                if state.controller.intercept_click(Instant::now()) {
                    event.stop_propagation();
                    event.prevent_default();
                }
                if let Some(blocker) = state.click_blocker.as_mut() {
                    blocker.listener.detach();
                    blocker.timeout = None;
                }
            },
        )?
    };

    let millis = guard.controller.config().click_guard_timeout.as_millis();
    let timeout = {
        let weak = Rc::downgrade(state);
        Timeout::new(u32::try_from(millis).unwrap_or(u32::MAX), move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let Ok(mut state) = state.try_borrow_mut() else {
                return;
            };
            state.controller.disarm_click_guard();
            if let Some(blocker) = state.click_blocker.as_ref() {
                blocker.listener.detach();
            }
        })
    };

    guard.click_blocker = Some(ClickBlocker {
        listener,
        timeout: Some(timeout),
    });
    Ok(())
}
