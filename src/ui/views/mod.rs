//! Headless views for the form screen.
//!
//! Rendering produces plain view models. Interactive elements carry the
//! [`Action`] they emit, so a host toolkit only has to draw them and feed the
//! actions back into [`FormScreen::dispatch`](crate::ui::app::FormScreen::dispatch).

pub mod choice;
pub mod comment;
pub mod dialog;
pub mod photo;
pub mod post;

pub use choice::{ChoiceView, OptionRow};
pub use comment::CommentView;
pub use dialog::PermissionDialogView;
pub use photo::{PhotoSlot, PhotoView};
pub use post::{PostRenderer, PostView, render_post, renderer_for};

use crate::domain::RenderError;
use crate::ui::app::{Action, LoadState, ScreenAction, ScreenState};

pub const SCREEN_TITLE: &str = "Postform";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedItem {
    Post(PostView),
    /// This post failed to render; the rest of the list is unaffected.
    Unrenderable { post_id: String, error: RenderError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub title: String,
    pub loading: bool,
    pub items: Vec<RenderedItem>,
    pub dialog: Option<PermissionDialogView>,
    /// Top bar submit button.
    pub on_submit: Action,
}

pub fn render_screen(state: &ScreenState) -> ScreenView {
    let items = state
        .posts
        .iter()
        .map(|(id, post)| match render_post(post, state.capture(id)) {
            Ok(view) => RenderedItem::Post(view),
            Err(error) => {
                log::debug!("{error}");
                RenderedItem::Unrenderable {
                    post_id: id.to_string(),
                    error,
                }
            }
        })
        .collect();

    ScreenView {
        title: SCREEN_TITLE.to_string(),
        loading: state.load_state != LoadState::Loaded,
        items,
        dialog: state
            .permission_dialog()
            .and_then(dialog::render_permission_dialog),
        on_submit: Action::Screen(ScreenAction::Submit),
    }
}
