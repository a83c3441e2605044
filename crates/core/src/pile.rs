use crate::{
    AssetError, Card, CardCode, CardCollection, CardFactory, CardHolder, Offset, Point, Rect,
    RngState, Size, SizeSpec, Surface,
};
use thiserror::Error;
use tracing::debug;

/// Number of cards, counted from index 0, that a pile lays out, paints and
/// hit-tests.
pub const VISIBLE_WINDOW: usize = 5;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PileError {
    #[error("pile is empty")]
    Empty,
}

/// A stack of cards of which only the first [`VISIBLE_WINDOW`] slots are on
/// screen.
///
/// Two ends matter here and they are not the same: the visible window is the
/// prefix `0..window` of the sequence, while [`draw_top_card`] takes from the
/// end (highest index). Cards past the window keep whatever position and
/// face they last had and are never painted or hit-tested.
///
/// [`draw_top_card`]: Pile::draw_top_card
#[derive(Debug, Clone)]
pub struct Pile {
    anchor: Point,
    offset: Offset,
    slot: Size,
    facedown: bool,
    window: usize,
    cards: CardHolder,
}

impl Pile {
    pub fn new(anchor: Point, offset: Offset, slot: Size, facedown: bool, cards: CardHolder) -> Self {
        let mut pile = Self {
            anchor,
            offset,
            slot,
            facedown,
            window: VISIBLE_WINDOW,
            cards,
        };
        pile.layout();
        pile
    }

    pub fn with_visible_window(mut self, window: usize) -> Self {
        self.window = window;
        self.layout();
        self
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn slot_size(&self) -> Size {
        self.slot
    }

    pub fn is_facedown(&self) -> bool {
        self.facedown
    }

    pub fn visible_window(&self) -> usize {
        self.window
    }

    pub fn set_facedown(&mut self, facedown: bool) {
        self.facedown = facedown;
        self.layout();
    }

    /// The laid-out prefix of the sequence.
    pub fn visible(&self) -> &[Card] {
        let end = self.window.min(self.cards.len());
        &self.cards.as_slice()[..end]
    }

    /// Permute the whole sequence, not only the window.
    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(self.cards.as_mut_slice());
        self.layout();
        debug!(cards = self.cards.len(), seed = rng.seed(), "pile shuffled");
    }

    /// Remove and return the last card of the sequence. When that leaves
    /// fewer cards than the window, the window is laid out again.
    pub fn draw_top_card(&mut self) -> Result<Card, PileError> {
        let card = self.cards.pop().ok_or(PileError::Empty)?;
        if self.cards.len() < self.window {
            self.layout();
        }
        Ok(card)
    }
}

impl CardCollection for Pile {
    fn holder(&self) -> &CardHolder {
        &self.cards
    }

    fn holder_mut(&mut self) -> &mut CardHolder {
        &mut self.cards
    }

    fn layout(&mut self) {
        let (anchor, offset, slot, facedown) = (self.anchor, self.offset, self.slot, self.facedown);
        for (idx, card) in self.cards.iter_mut().take(self.window).enumerate() {
            card.set_face_down(facedown);
            card.place(Rect::new(anchor + offset * idx, slot));
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for card in self.visible() {
            card.draw(surface);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        self.visible().iter().any(|card| card.hit_test(point))
    }
}

/// Factory for piles seeded with a standard card set.
pub struct Deck;

impl Deck {
    pub const OFFSET: Offset = Offset::new(2, 0);

    /// All 52 rank x suit cards, face down.
    pub fn standard(
        factory: &mut CardFactory,
        anchor: Point,
        slot: Size,
        card_size: Option<SizeSpec>,
    ) -> Result<Pile, AssetError> {
        Self::standard_plus_extras(factory, anchor, slot, Vec::new(), card_size)
    }

    /// The standard 52 followed by `extras` in the given order.
    pub fn standard_plus_extras(
        factory: &mut CardFactory,
        anchor: Point,
        slot: Size,
        extras: Vec<Card>,
        card_size: Option<SizeSpec>,
    ) -> Result<Pile, AssetError> {
        let mut cards = factory.create_all(CardCode::standard_set(), card_size)?;
        cards.extend(extras);
        Ok(Pile::new(anchor, Self::OFFSET, slot, true, cards.into()))
    }

    pub fn standard_with_jokers(
        factory: &mut CardFactory,
        anchor: Point,
        slot: Size,
        card_size: Option<SizeSpec>,
    ) -> Result<Pile, AssetError> {
        let jokers = factory.create_all(CardCode::JOKERS, card_size)?;
        Self::standard_plus_extras(factory, anchor, slot, jokers, card_size)
    }
}
