use super::super::super::state::{LoadState, ScreenState};
use super::super::action::ScreenAction;
use super::super::command::Command;

pub fn reduce(state: &mut ScreenState, action: ScreenAction) -> Vec<Command> {
    match action {
        ScreenAction::Entered => {
            if state.torn_down || state.load_state != LoadState::NotLoaded {
                return Vec::new();
            }
            state.load_state = LoadState::Loading;
            vec![Command::LoadPosts]
        }
        ScreenAction::TornDown => {
            state.torn_down = true;
            let mut commands = vec![Command::CancelLoad];
            commands.extend(
                state
                    .captures
                    .values_mut()
                    .filter_map(|session| session.abandon())
                    .map(|target| Command::DiscardTarget { target }),
            );
            commands
        }
        ScreenAction::Submit => vec![Command::Submit],
    }
}
