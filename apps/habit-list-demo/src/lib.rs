//! Habit list page entry point.
//!
//! Build with `wasm-pack build --target web apps/habit-list-demo` and serve
//! `www/` next to the generated `pkg/`.

use std::cell::RefCell;
use swipecard_core::SwipeConfig;
use swipecard_platform_web::{setup_swipe_handler_with_config, SwipeHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const CONTAINER_ID: &str = "habit-list";

thread_local! {
    static SWIPE: RefCell<Option<SwipeHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| format!("container with id '{}' not found", CONTAINER_ID))?
        .dyn_into::<HtmlElement>()?;

    let handle = setup_swipe_handler_with_config(&container, SwipeConfig::default())?;
    SWIPE.with(|swipe| *swipe.borrow_mut() = Some(handle));
    log::info!("habit list ready");
    Ok(())
}

/// Lets page scripts skip their own tap handling while a card is dragged.
#[wasm_bindgen(js_name = isSwiping)]
pub fn is_swiping() -> bool {
    SWIPE.with(|swipe| {
        swipe
            .borrow()
            .as_ref()
            .is_some_and(|handle| handle.is_swiping())
    })
}

/// Closes every open card, e.g. after a habit was deleted or toggled.
#[wasm_bindgen(js_name = closeAllCards)]
pub fn close_all_cards() {
    SWIPE.with(|swipe| {
        if let Some(handle) = swipe.borrow().as_ref() {
            handle.close_all();
        }
    });
}

/// Detaches all swipe listeners.
#[wasm_bindgen(js_name = teardownSwipe)]
pub fn teardown_swipe() {
    SWIPE.with(|swipe| swipe.borrow_mut().take());
}
