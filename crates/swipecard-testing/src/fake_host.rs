//! In-memory stand-in for a container of card elements.
//!
//! Mirrors what the DOM host does with class lists and inline styles, so the
//! controller can be driven end to end without a browser.

use std::collections::{BTreeSet, HashMap};
use swipecard_core::{
    CardOpenState, HapticIntensity, HostError, OpenCards, PointerId, SwipeConfig, SwipeHost,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Clone, Debug)]
pub struct FakeCard {
    pub classes: BTreeSet<String>,
    pub has_content: bool,
    pub attached: bool,
    /// Inline `translateX` on the content wrapper, if any.
    pub transform: Option<f32>,
    pub transition_enabled: bool,
    pub captured_pointer: Option<PointerId>,
}

impl Default for FakeCard {
    fn default() -> Self {
        Self {
            classes: BTreeSet::new(),
            has_content: true,
            attached: true,
            transform: None,
            transition_enabled: true,
            captured_pointer: None,
        }
    }
}

#[derive(Debug)]
pub struct FakeHost {
    config: SwipeConfig,
    cards: Vec<FakeCard>,
    root_style: HashMap<String, String>,
    haptics: Vec<HapticIntensity>,
    transform_writes: usize,
}

impl FakeHost {
    pub fn new(card_count: usize, config: SwipeConfig) -> Self {
        Self {
            config,
            cards: vec![FakeCard::default(); card_count],
            root_style: HashMap::new(),
            haptics: Vec::new(),
            transform_writes: 0,
        }
    }

    pub fn card(&self, id: CardId) -> &FakeCard {
        &self.cards[id.0]
    }

    pub fn card_mut(&mut self, id: CardId) -> &mut FakeCard {
        &mut self.cards[id.0]
    }

    pub fn card_ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len()).map(CardId)
    }

    pub fn has_class(&self, id: CardId, class: &str) -> bool {
        self.card(id).classes.contains(class)
    }

    /// Sets a custom property on the document root.
    pub fn set_root_property(&mut self, name: &str, value: impl Into<String>) {
        self.root_style.insert(name.to_owned(), value.into());
    }

    pub fn remove_root_property(&mut self, name: &str) {
        self.root_style.remove(name);
    }

    pub fn haptics(&self) -> &[HapticIntensity] {
        &self.haptics
    }

    /// Number of inline transform writes, cleared or not.
    pub fn transform_writes(&self) -> usize {
        self.transform_writes
    }

    fn card_for(&self, id: &CardId) -> Option<&FakeCard> {
        self.cards.get(id.0).filter(|card| card.attached)
    }
}

impl SwipeHost for FakeHost {
    type Card = CardId;
    type Content = CardId;

    fn content(&self, card: &CardId) -> Option<CardId> {
        self.card_for(card)
            .filter(|fake| fake.has_content)
            .map(|_| *card)
    }

    fn open_state(&self, card: &CardId) -> CardOpenState {
        match self.card_for(card) {
            Some(fake) => CardOpenState::from_markers(
                fake.classes.contains(&self.config.open_left_class),
                fake.classes.contains(&self.config.open_right_class),
            ),
            None => CardOpenState::Closed,
        }
    }

    fn set_open_state(&mut self, card: &CardId, state: CardOpenState) {
        let marker = state.marker_class(&self.config).map(str::to_owned);
        let left = self.config.open_left_class.clone();
        let right = self.config.open_right_class.clone();
        if let Some(fake) = self.cards.get_mut(card.0) {
            fake.classes.remove(&left);
            fake.classes.remove(&right);
            if let Some(marker) = marker {
                fake.classes.insert(marker);
            }
        }
    }

    fn open_cards(&self) -> OpenCards<CardId> {
        self.card_ids()
            .filter(|id| self.open_state(id).is_open())
            .collect()
    }

    fn set_translation(&mut self, content: &CardId, translation: Option<f32>) {
        self.transform_writes += 1;
        if let Some(fake) = self.cards.get_mut(content.0) {
            fake.transform = translation;
        }
    }

    fn set_transition_enabled(&mut self, content: &CardId, enabled: bool) {
        if let Some(fake) = self.cards.get_mut(content.0) {
            fake.transition_enabled = enabled;
        }
    }

    fn set_swiping(&mut self, card: &CardId, swiping: bool) {
        let class = self.config.swiping_class.clone();
        if let Some(fake) = self.cards.get_mut(card.0) {
            if swiping {
                fake.classes.insert(class);
            } else {
                fake.classes.remove(&class);
            }
        }
    }

    fn capture_pointer(&mut self, card: &CardId, pointer: PointerId) -> Result<(), HostError> {
        match self.cards.get_mut(card.0) {
            Some(fake) if fake.attached => {
                fake.captured_pointer = Some(pointer);
                Ok(())
            }
            _ => Err(HostError::Detached),
        }
    }

    fn release_pointer(&mut self, card: &CardId, pointer: PointerId) -> Result<(), HostError> {
        match self.cards.get_mut(card.0) {
            Some(fake) if fake.captured_pointer == Some(pointer) => {
                fake.captured_pointer = None;
                Ok(())
            }
            Some(_) => Err(HostError::PointerCapture {
                pointer,
                reason: "pointer not captured".into(),
            }),
            None => Err(HostError::Detached),
        }
    }

    fn haptic(&mut self, intensity: HapticIntensity) {
        self.haptics.push(intensity);
    }

    fn read_action_width(&self) -> Option<String> {
        self.root_style
            .get(&self.config.action_width_property)
            .cloned()
    }
}
