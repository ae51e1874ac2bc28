//! The form screen: state, the action/command store, and async message plumbing.

mod init;
mod polling;
mod root;
mod state;
mod store;

#[cfg(test)]
mod tests;

pub use init::ScreenHosts;
pub use root::FormScreen;
pub use state::{LoadState, ScreenState};
pub use store::{Action, AsyncAction, CaptureAction, Command, ResponseAction, ScreenAction};
