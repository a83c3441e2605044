use crate::{CardCode, Offset, Point};
use serde::{Deserialize, Serialize};

/// Discrete pointer input, already translated out of the platform's event
/// type. Middle-button and wheel input arrive but are not acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PrimaryDown(Point),
    PrimaryUp,
    SecondaryDown(Point),
    SecondaryUp,
    MiddleDown(Point),
    MiddleUp,
    WheelUp,
    WheelDown,
    PointerMove(Offset),
}

/// What happened to the table as a result of input or a command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TableEvent {
    Picked { code: CardCode, index: usize },
    Dropped { code: CardCode, at: Point },
    Flipped { code: CardCode, face_up: bool },
    DrawnFromPile { code: CardCode, remaining: usize },
    DrawRefused,
    Shuffled { seed: u64 },
    GroupFlipped { cards: usize },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<TableEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: TableEvent) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TableEvent> + '_ {
        self.queue.drain(..)
    }
}
