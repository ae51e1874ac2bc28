mod async_handler;
mod capture;
mod response;
mod screen;

use super::super::state::ScreenState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut ScreenState, action: Action) -> Vec<Command> {
    match action {
        Action::Screen(action) => screen::reduce(state, action),
        Action::Response(action) => response::reduce(state, action),
        Action::Capture(action) => capture::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
