//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, CaptureAction, ResponseAction, ScreenAction};
pub use command::Command;

use super::FormScreen;

impl FormScreen {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
