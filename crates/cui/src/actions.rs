use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::ShufflePile => app.shuffle_pile(),
        InputAction::FlipHand => app.flip_hand(),
        InputAction::Redeal => app.redeal(),
    }
}
