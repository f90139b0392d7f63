//! [`SwipeHost`] over real DOM elements.

use swipecard_core::physics::translate_x;
use swipecard_core::{
    CardOpenState, HapticIntensity, HostError, OpenCards, PointerId, PointerTarget, SwipeConfig,
    SwipeHost,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

#[derive(Debug, Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
    container: HtmlElement,
    config: SwipeConfig,
    open_selector: String,
}

impl DomHost {
    pub fn new(
        window: Window,
        document: Document,
        container: HtmlElement,
        config: SwipeConfig,
    ) -> Self {
        let open_selector = format!(
            "{card}.{left}, {card}.{right}",
            card = config.card_selector,
            left = config.open_left_class,
            right = config.open_right_class,
        );
        Self {
            window,
            document,
            container,
            config,
            open_selector,
        }
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Resolves the element a pointer went down on.
    ///
    /// Buttons inside a card keep their own interactions, so a target inside
    /// one is reported as [`PointerTarget::Button`].
    pub fn resolve_target(
        &self,
        target: Option<web_sys::EventTarget>,
    ) -> PointerTarget<HtmlElement> {
        let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
            return PointerTarget::Outside;
        };
        let Some(card) = closest_html(&element, &self.config.card_selector) else {
            return PointerTarget::Outside;
        };
        if !self.container.contains(Some(card.as_ref())) {
            return PointerTarget::Outside;
        }
        match closest_html(&element, &self.config.button_selector) {
            Some(button) if card.contains(Some(button.as_ref())) => PointerTarget::Button(card),
            _ => PointerTarget::Card(card),
        }
    }

    fn set_style(&self, element: &HtmlElement, property: &'static str, value: Option<&str>) {
        let style = element.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(err) = result {
            let err = HostError::Style {
                property,
                reason: format!("{err:?}"),
            };
            log::warn!("{err}");
        }
    }

    fn toggle_class(&self, element: &HtmlElement, class: &str, on: bool) {
        let classes = element.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(err) = result {
            log::warn!("failed to toggle class {class}: {err:?}");
        }
    }
}

fn closest_html(element: &Element, selector: &str) -> Option<HtmlElement> {
    element
        .closest(selector)
        .ok()
        .flatten()
        .and_then(|found| found.dyn_into::<HtmlElement>().ok())
}

impl SwipeHost for DomHost {
    type Card = HtmlElement;
    type Content = HtmlElement;

    fn content(&self, card: &HtmlElement) -> Option<HtmlElement> {
        card.query_selector(&self.config.content_selector)
            .ok()
            .flatten()
            .and_then(|found| found.dyn_into::<HtmlElement>().ok())
    }

    fn open_state(&self, card: &HtmlElement) -> CardOpenState {
        let classes = card.class_list();
        CardOpenState::from_markers(
            classes.contains(&self.config.open_left_class),
            classes.contains(&self.config.open_right_class),
        )
    }

    fn set_open_state(&mut self, card: &HtmlElement, state: CardOpenState) {
        let classes = card.class_list();
        if let Err(err) =
            classes.remove_2(&self.config.open_left_class, &self.config.open_right_class)
        {
            log::warn!("failed to clear open markers: {err:?}");
        }
        if let Some(marker) = state.marker_class(&self.config) {
            self.toggle_class(card, marker, true);
        }
    }

    fn open_cards(&self) -> OpenCards<HtmlElement> {
        let Ok(nodes) = self.container.query_selector_all(&self.open_selector) else {
            return OpenCards::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn set_translation(&mut self, content: &HtmlElement, translation: Option<f32>) {
        match translation {
            Some(translation) => {
                self.set_style(content, "transform", Some(&translate_x(translation)))
            }
            None => self.set_style(content, "transform", None),
        }
    }

    fn set_transition_enabled(&mut self, content: &HtmlElement, enabled: bool) {
        let value = if enabled { None } else { Some("none") };
        self.set_style(content, "transition", value);
    }

    fn set_swiping(&mut self, card: &HtmlElement, swiping: bool) {
        self.toggle_class(card, &self.config.swiping_class, swiping);
    }

    fn capture_pointer(&mut self, card: &HtmlElement, pointer: PointerId) -> Result<(), HostError> {
        if !card.is_connected() {
            return Err(HostError::Detached);
        }
        card.set_pointer_capture(pointer)
            .map_err(|err| HostError::PointerCapture {
                pointer,
                reason: format!("{err:?}"),
            })
    }

    fn release_pointer(&mut self, card: &HtmlElement, pointer: PointerId) -> Result<(), HostError> {
        if !card.has_pointer_capture(pointer) {
            return Ok(());
        }
        card.release_pointer_capture(pointer)
            .map_err(|err| HostError::PointerCapture {
                pointer,
                reason: format!("{err:?}"),
            })
    }

    fn haptic(&mut self, intensity: HapticIntensity) {
        // Unsupported on most desktop browsers; `false` there is expected.
        let _ = self
            .window
            .navigator()
            .vibrate_with_duration(intensity.vibration_millis());
    }

    fn read_action_width(&self) -> Option<String> {
        let root = self.document.document_element()?;
        let style = self.window.get_computed_style(&root).ok().flatten()?;
        style
            .get_property_value(&self.config.action_width_property)
            .ok()
    }
}
