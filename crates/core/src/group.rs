use crate::{Card, CardCollection, CardHolder, Offset, Point, Rect, Size, Surface};

pub const DEFAULT_BORDER_PAD: u32 = 5;

/// A fanned row of cards, e.g. a hand. Slot `i` sits at
/// `anchor + i * offset`.
#[derive(Debug, Clone)]
pub struct Group {
    anchor: Point,
    offset: Offset,
    slot: Size,
    border_pad: u32,
    cards: CardHolder,
}

impl Group {
    pub fn new(anchor: Point, offset: Offset, slot: Size, cards: CardHolder) -> Self {
        let mut group = Self {
            anchor,
            offset,
            slot,
            border_pad: DEFAULT_BORDER_PAD,
            cards,
        };
        group.layout();
        group
    }

    pub fn with_border_pad(mut self, pad: u32) -> Self {
        self.border_pad = pad;
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

    pub fn slot_rect(&self, index: usize) -> Rect {
        Rect::new(self.anchor + self.offset * index, self.slot)
    }

    /// Container outline around every slot, padded.
    pub fn bounds(&self) -> Rect {
        let first = self.slot_rect(0);
        let last = self.slot_rect(self.cards.len().saturating_sub(1));
        first.union(&last).inflated(self.border_pad)
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn flip(&mut self) {
        for card in self.cards.iter_mut() {
            card.flip();
        }
    }

    /// Front-most card under `point`. Scans from the highest index down, so
    /// where cards overlap the one painted last wins.
    pub fn topmost_hit(&self, point: Point) -> Option<(usize, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .rev()
            .find(|(_, card)| card.hit_test(point))
    }
}

impl CardCollection for Group {
    fn holder(&self) -> &CardHolder {
        &self.cards
    }

    fn holder_mut(&mut self) -> &mut CardHolder {
        &mut self.cards
    }

    fn layout(&mut self) {
        let (anchor, offset, slot) = (self.anchor, self.offset, self.slot);
        for (idx, card) in self.cards.iter_mut().enumerate() {
            card.place(Rect::new(anchor + offset * idx, slot));
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.stroke_rect(self.bounds());
        for card in &self.cards {
            card.draw(surface);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        self.topmost_hit(point).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardCode, CardFactory, SyntheticAssets};

    fn hand(codes: &[&str]) -> Group {
        let mut factory = CardFactory::new(Box::new(SyntheticAssets::default())).unwrap();
        let cards = factory
            .create_all(codes.iter().map(|code| code.parse::<CardCode>().unwrap()), None)
            .unwrap();
        Group::new(
            Point::new(10, 10),
            Offset::new(18, 0),
            Size::new(100, 145),
            cards.into(),
        )
    }

    #[test]
    fn layout_places_every_slot() {
        let group = hand(&["4D", "5S", "6C"]);
        for (idx, card) in group.cards().iter().enumerate() {
            assert_eq!(card.rect(), group.slot_rect(idx));
        }
    }

    #[test]
    fn bounds_cover_the_row() {
        let group = hand(&["4D", "5S", "6C"]);
        assert_eq!(
            group.bounds(),
            Rect::new(Point::new(5, 5), Size::new(100 + 36 + 10, 145 + 10))
        );
    }

    #[test]
    fn miss_returns_none() {
        let group = hand(&["4D"]);
        assert!(group.topmost_hit(Point::new(0, 0)).is_none());
        assert!(!group.hit_test(Point::new(0, 0)));
    }

    #[test]
    fn flip_turns_every_member() {
        let mut group = hand(&["4D", "5S"]);
        group.flip();
        assert!(group.cards().iter().all(|card| !card.is_face_up()));
    }
}
