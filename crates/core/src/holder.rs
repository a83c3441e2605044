use crate::{Card, CardId, Point, Surface};
use std::fmt;

/// Ordered cards, back to front: index 0 is the bottom of the visual stack,
/// the last index is the front-most.
#[derive(Debug, Default, Clone)]
pub struct CardHolder {
    cards: Vec<Card>,
}

impl CardHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Move every card of `other` onto the end, in order. `other` is left
    /// empty; nothing is appended partially.
    pub fn append(&mut self, other: &mut CardHolder) {
        self.cards.append(&mut other.cards);
    }

    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Card> {
        self.cards.iter_mut()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    /// Resolve `id`, trying `hint` first.
    pub fn locate(&self, id: CardId, hint: usize) -> Option<usize> {
        match self.cards.get(hint) {
            Some(card) if card.id() == id => Some(hint),
            _ => self.position_of(id),
        }
    }
}

impl From<Vec<Card>> for CardHolder {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardHolder {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CardHolder {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardHolder {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Shared capability of every on-screen card collection.
///
/// Layout is recomputed on request, never maintained incrementally: after a
/// structural change the caller runs [`layout`](Self::layout) before the
/// positions can be trusted.
pub trait CardCollection {
    fn holder(&self) -> &CardHolder;
    fn holder_mut(&mut self) -> &mut CardHolder;

    fn layout(&mut self);
    fn draw(&self, surface: &mut dyn Surface);
    fn hit_test(&self, point: Point) -> bool;

    fn add(&mut self, card: Card) {
        self.holder_mut().push(card);
    }

    fn add_all(&mut self, other: &mut CardHolder) {
        self.holder_mut().append(other);
    }

    fn remove_at(&mut self, index: usize) -> Option<Card> {
        self.holder_mut().remove(index)
    }

    fn len(&self) -> usize {
        self.holder().len()
    }

    fn is_empty(&self) -> bool {
        self.holder().is_empty()
    }

    fn cards(&self) -> &[Card] {
        self.holder().as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardCode, CardFactory, SyntheticAssets};

    fn holder(codes: &[&str]) -> CardHolder {
        let mut factory = CardFactory::new(Box::new(SyntheticAssets::default())).unwrap();
        let codes = codes.iter().map(|code| code.parse::<CardCode>().unwrap());
        factory.create_all(codes, None).unwrap().into()
    }

    #[test]
    fn append_moves_everything_in_order() {
        let mut a = holder(&["AS", "2S"]);
        let mut b = holder(&["3S", "4S"]);
        a.append(&mut b);
        assert_eq!(a.to_string(), "[AS, 2S, 3S, 4S]");
        assert!(b.is_empty());
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut a = holder(&["AS"]);
        assert!(a.remove(1).is_none());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn locate_prefers_hint_then_searches() {
        let a = holder(&["AS", "2S", "3S"]);
        let id = a.get(2).unwrap().id();
        assert_eq!(a.locate(id, 2), Some(2));
        assert_eq!(a.locate(id, 0), Some(2));
        assert_eq!(a.locate(id, 9), Some(2));
    }
}
