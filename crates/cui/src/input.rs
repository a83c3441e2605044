use cardtable_core::{InputEvent, Offset, Point};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    ShufflePile,
    FlipHand,
    Redeal,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Esc => InputAction::ToggleHelp,
        KeyCode::Char('s') => InputAction::ShufflePile,
        KeyCode::Char('f') => InputAction::FlipHand,
        KeyCode::Char('r') => InputAction::Redeal,
        _ => InputAction::None,
    }
}

/// Turns terminal mouse reports, which carry absolute cell positions, into
/// pointer events with relative motion.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<Point>,
}

impl PointerTracker {
    pub fn translate(&mut self, mouse: MouseEvent) -> Option<InputEvent> {
        let point = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        let event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::PrimaryDown(point),
            MouseEventKind::Up(MouseButton::Left) => InputEvent::PrimaryUp,
            MouseEventKind::Down(MouseButton::Right) => InputEvent::SecondaryDown(point),
            MouseEventKind::Up(MouseButton::Right) => InputEvent::SecondaryUp,
            MouseEventKind::Down(MouseButton::Middle) => InputEvent::MiddleDown(point),
            MouseEventKind::Up(MouseButton::Middle) => InputEvent::MiddleUp,
            MouseEventKind::ScrollUp => InputEvent::WheelUp,
            MouseEventKind::ScrollDown => InputEvent::WheelDown,
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                let last = self.last.replace(point)?;
                let delta = Offset::new(point.x - last.x, point.y - last.y);
                if delta == Offset::default() {
                    return None;
                }
                return Some(InputEvent::PointerMove(delta));
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
        };
        self.last = Some(point);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)),
            InputAction::ShufflePile
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            InputAction::None
        );
    }

    #[test]
    fn drag_reports_become_relative_motion() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4)),
            Some(InputEvent::PrimaryDown(Point::new(5, 4)))
        );
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 3)),
            Some(InputEvent::PointerMove(Offset::new(4, -1)))
        );
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 3)),
            None
        );
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::Up(MouseButton::Left), 9, 3)),
            Some(InputEvent::PrimaryUp)
        );
    }

    #[test]
    fn first_motion_only_seeds_the_position() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.translate(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::Moved, 2, 1)),
            Some(InputEvent::PointerMove(Offset::new(1, 0)))
        );
    }

    #[test]
    fn right_and_wheel_buttons() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(InputEvent::SecondaryDown(Point::new(0, 0)))
        );
        assert_eq!(
            tracker.translate(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(InputEvent::WheelDown)
        );
    }
}
