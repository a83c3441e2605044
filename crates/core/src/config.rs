use crate::{CardCode, Offset, Point, Size, VISIBLE_WINDOW};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandConfig {
    pub anchor: Point,
    pub offset: Offset,
    pub cards: Vec<CardCode>,
    pub border_pad: u32,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            anchor: Point::new(10, 10),
            offset: Offset::new(18, 0),
            cards: ["4D", "5S", "6C", "QS", "JH", "8C"]
                .into_iter()
                .filter_map(|code| code.parse().ok())
                .collect(),
            border_pad: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeckConfig {
    pub enabled: bool,
    pub anchor: Point,
    pub jokers: bool,
    pub facedown: bool,
    pub visible_window: usize,
    pub shuffle_on_deal: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            anchor: Point::new(10, 300),
            jokers: false,
            facedown: true,
            visible_window: VISIBLE_WINDOW,
            shuffle_on_deal: true,
        }
    }
}

/// Table layout. Units are whatever the surface paints in: pixels for an
/// image backend, cells for a terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub card_size: Size,
    pub hand: HandConfig,
    pub deck: DeckConfig,
    /// Where a card drawn from the pile lands, relative to the pile anchor.
    pub draw_offset: Offset,
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            card_size: Size::new(100, 145),
            hand: HandConfig::default(),
            deck: DeckConfig::default(),
            draw_offset: Offset::new(150, 0),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hand_matches_the_demo_row() {
        let hand = HandConfig::default();
        let codes: Vec<String> = hand.cards.iter().map(ToString::to_string).collect();
        assert_eq!(codes, ["4D", "5S", "6C", "QS", "JH", "8C"]);
    }
}
