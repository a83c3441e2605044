use crate::{
    AssetError, Card, CardCode, CardCollection, CardFactory, CardHolder, Deck, EventBus, Group,
    Offset, Pile, PileError, Point, RngState, SizeSpec, Surface, TableConfig, TableEvent,
};
use tracing::{debug, info};

/// Everything on screen: the fanned hand, an optional draw pile, and cards
/// that were detached from either and left where they were released.
#[derive(Debug, Clone)]
pub struct Table {
    pub hand: Group,
    pub pile: Option<Pile>,
    pub loose: Vec<Card>,
    draw_offset: Offset,
}

impl Table {
    pub fn new(hand: Group, pile: Option<Pile>) -> Self {
        Self {
            hand,
            pile,
            loose: Vec::new(),
            draw_offset: Offset::new(150, 0),
        }
    }

    pub fn with_draw_offset(mut self, offset: Offset) -> Self {
        self.draw_offset = offset;
        self
    }

    /// Build a fresh table from `config`. A missing asset aborts the deal.
    pub fn deal(
        config: &TableConfig,
        factory: &mut CardFactory,
        rng: &mut RngState,
    ) -> Result<Self, AssetError> {
        let size = Some(SizeSpec::Exact(config.card_size));
        let hand_cards = factory.create_all(config.hand.cards.iter().copied(), size)?;
        let hand = Group::new(
            config.hand.anchor,
            config.hand.offset,
            config.card_size,
            CardHolder::from(hand_cards),
        )
        .with_border_pad(config.hand.border_pad);

        let pile = if config.deck.enabled {
            let anchor = config.deck.anchor;
            let mut pile = if config.deck.jokers {
                Deck::standard_with_jokers(factory, anchor, config.card_size, size)?
            } else {
                Deck::standard(factory, anchor, config.card_size, size)?
            }
            .with_visible_window(config.deck.visible_window);
            pile.set_facedown(config.deck.facedown);
            if config.deck.shuffle_on_deal {
                pile.shuffle(rng);
            }
            Some(pile)
        } else {
            None
        };

        info!(
            hand = hand.len(),
            pile = pile.as_ref().map_or(0, |pile| pile.len()),
            seed = rng.seed(),
            "table dealt"
        );
        Ok(Self::new(hand, pile).with_draw_offset(config.draw_offset))
    }

    pub fn draw_offset(&self) -> Offset {
        self.draw_offset
    }

    /// Paint in composition order: hand, pile, then loose cards in the
    /// order they were released.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.hand.draw(surface);
        if let Some(pile) = &self.pile {
            pile.draw(surface);
        }
        for card in &self.loose {
            card.draw(surface);
        }
    }

    pub fn pile_hit(&self, point: Point) -> bool {
        self.pile.as_ref().is_some_and(|pile| pile.hit_test(point))
    }

    /// Take the top card of the pile, turn it face up, and leave it beside
    /// the pile.
    pub fn draw_from_pile(&mut self, events: &mut EventBus) -> Result<CardCode, PileError> {
        let drawn = match self.pile.as_mut() {
            Some(pile) => pile.draw_top_card().map(|card| (card, pile.anchor(), pile.len())),
            None => Err(PileError::Empty),
        };
        match drawn {
            Ok((mut card, anchor, remaining)) => {
                card.move_to(anchor + self.draw_offset);
                card.face_up();
                debug!(code = %card.code(), remaining, "drew from pile");
                events.push(TableEvent::DrawnFromPile {
                    code: card.code(),
                    remaining,
                });
                let code = card.code();
                self.loose.push(card);
                Ok(code)
            }
            Err(err) => {
                debug!("draw refused: {err}");
                events.push(TableEvent::DrawRefused);
                Err(err)
            }
        }
    }

    pub fn shuffle_pile(&mut self, rng: &mut RngState, events: &mut EventBus) {
        if let Some(pile) = self.pile.as_mut() {
            pile.shuffle(rng);
            events.push(TableEvent::Shuffled { seed: rng.seed() });
        }
    }

    pub fn flip_hand(&mut self, events: &mut EventBus) {
        self.hand.flip();
        events.push(TableEvent::GroupFlipped {
            cards: self.hand.len(),
        });
    }
}
