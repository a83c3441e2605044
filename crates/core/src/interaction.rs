//! Pointer state machine.
//!
//! Primary button drags a card out of the hand: press captures the
//! front-most card under the pointer, motion moves it, release detaches it
//! from the hand and leaves it on the table where it was let go. Secondary
//! button flips the card under the pointer on release, or draws from the
//! pile when the press landed on the pile instead of the hand.
//!
//! Targets are captured as `(index, id)` at press time. On release the
//! captured index is used when it still holds the captured card; otherwise
//! the card is looked up by id. A drag whose card has left the hand is
//! released without touching anything else; a right-clicked card that was
//! dragged out meanwhile is flipped where it now lies.

use crate::{Card, CardCollection, CardId, EventBus, InputEvent, Offset, Point, Table, TableEvent};
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Dragging,
}

/// A card captured at button-press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub index: usize,
    pub id: CardId,
}

/// Session-scoped interaction state. One instance drives one table.
#[derive(Debug, Default, Clone)]
pub struct InteractionController {
    mode: Mode,
    drag: Option<Target>,
    clicked: Option<Target>,
    pile_draw_armed: bool,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag_target(&self) -> Option<Target> {
        self.drag
    }

    pub fn clicked_target(&self) -> Option<Target> {
        self.clicked
    }

    pub fn pile_draw_armed(&self) -> bool {
        self.pile_draw_armed
    }

    pub fn handle(&mut self, table: &mut Table, event: InputEvent, events: &mut EventBus) {
        match event {
            InputEvent::PrimaryDown(point) => self.primary_down(table, point, events),
            InputEvent::PrimaryUp => self.primary_up(table, events),
            InputEvent::SecondaryDown(point) => self.secondary_down(table, point),
            InputEvent::SecondaryUp => self.secondary_up(table, events),
            InputEvent::PointerMove(delta) => self.pointer_move(table, delta),
            InputEvent::MiddleDown(_)
            | InputEvent::MiddleUp
            | InputEvent::WheelUp
            | InputEvent::WheelDown => {}
        }
    }

    /// Feed a frame's worth of events in delivery order.
    pub fn handle_all(
        &mut self,
        table: &mut Table,
        input: impl IntoIterator<Item = InputEvent>,
        events: &mut EventBus,
    ) {
        for event in input {
            self.handle(table, event, events);
        }
    }

    fn primary_down(&mut self, table: &Table, point: Point, events: &mut EventBus) {
        if self.mode != Mode::Idle {
            return;
        }
        self.mode = Mode::Dragging;
        self.drag = table
            .hand
            .topmost_hit(point)
            .map(|(index, card)| {
                events.push(TableEvent::Picked {
                    code: card.code(),
                    index,
                });
                Target {
                    index,
                    id: card.id(),
                }
            });
        debug!(?point, drag = ?self.drag, "primary down");
    }

    fn pointer_move(&mut self, table: &mut Table, delta: Offset) {
        let Some(target) = self.drag else {
            return;
        };
        match table.hand.holder().locate(target.id, target.index) {
            Some(index) => {
                if let Some(card) = table.hand.card_mut(index) {
                    card.move_by(delta);
                }
            }
            None => {
                warn!(?target, "dragged card left the hand mid-gesture");
                self.drag = None;
            }
        }
    }

    fn primary_up(&mut self, table: &mut Table, events: &mut EventBus) {
        if let (Mode::Dragging, Some(target)) = (self.mode, self.drag) {
            match table.hand.holder().locate(target.id, target.index) {
                Some(index) => {
                    if let Some(card) = table.hand.remove_at(index) {
                        table.hand.layout();
                        debug!(code = %card.code(), index, "dropped");
                        events.push(TableEvent::Dropped {
                            code: card.code(),
                            at: card.position(),
                        });
                        table.loose.push(card);
                    }
                }
                None => warn!(?target, "drop target no longer in the hand"),
            }
        }
        self.drag = None;
        self.mode = Mode::Idle;
    }

    fn secondary_down(&mut self, table: &Table, point: Point) {
        if self.mode != Mode::Idle {
            return;
        }
        self.clicked = table
            .hand
            .topmost_hit(point)
            .map(|(index, card)| Target {
                index,
                id: card.id(),
            });
        self.pile_draw_armed = self.clicked.is_none() && table.pile_hit(point);
        debug!(?point, clicked = ?self.clicked, pile = self.pile_draw_armed, "secondary down");
    }

    fn secondary_up(&mut self, table: &mut Table, events: &mut EventBus) {
        if let Some(target) = self.clicked.take() {
            match flip_target(table, target) {
                Some(card) => {
                    card.flip();
                    events.push(TableEvent::Flipped {
                        code: card.code(),
                        face_up: card.is_face_up(),
                    });
                }
                None => warn!(?target, "flip target is no longer on the table"),
            }
        } else if std::mem::take(&mut self.pile_draw_armed) {
            if let Err(err) = table.draw_from_pile(events) {
                debug!("right click on the pile drew nothing: {err}");
            }
        }
    }
}

/// The clicked card, wherever it went since the press. A drag that finished
/// in between leaves it among the loose cards.
fn flip_target(table: &mut Table, target: Target) -> Option<&mut Card> {
    match table.hand.holder().locate(target.id, target.index) {
        Some(index) => table.hand.card_mut(index),
        None => table.loose.iter_mut().find(|card| card.id() == target.id),
    }
}
