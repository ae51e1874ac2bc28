pub mod application;
pub mod assets;
pub mod domain;
pub mod infra;
pub mod ui;

pub use ui::app::{FormScreen, ScreenHosts};
