//! Scoped DOM event listener registration.
//!
//! An [`EventListener`] owns its closure and removes itself from the target
//! when dropped, so every exit path of a gesture detaches what it attached.
//! Callbacks that need to unregister themselves call [`EventListener::detach`]
//! instead of dropping: the closure stays alive until its owner is dropped
//! from outside the callback.

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub capture: bool,
    pub passive: bool,
}

impl ListenerOptions {
    /// Non-passive bubbling listener, so `prevent_default` takes effect.
    pub const fn active() -> Self {
        Self {
            capture: false,
            passive: false,
        }
    }

    /// Capture-phase listener.
    pub const fn capture() -> Self {
        Self {
            capture: true,
            passive: false,
        }
    }
}

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
    attached: Cell<bool>,
}

impl EventListener {
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        options: ListenerOptions,
        callback: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let js_options = AddEventListenerOptions::new();
        js_options.set_capture(options.capture);
        js_options.set_passive(options.passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &js_options,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            capture: options.capture,
            closure,
            attached: Cell::new(true),
        })
    }

    /// Removes the listener from its target. Safe to call from inside the
    /// listener's own callback and safe to call twice.
    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        if let Err(err) = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        ) {
            log::warn!("failed to remove {} listener: {err:?}", self.event_type);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .field("capture", &self.capture)
            .field("attached", &self.attached.get())
            .finish()
    }
}
