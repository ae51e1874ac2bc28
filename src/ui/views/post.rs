//! Render dispatch: one renderer per post type, selected by `post_type` only.

use crate::application::capture::CaptureSession;
use crate::domain::{Post, PostType, RenderError};

use super::choice::{ChoiceRenderer, ChoiceView};
use super::comment::{CommentRenderer, CommentView};
use super::photo::{PhotoRenderer, PhotoView};

/// View model for one renderable post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostView {
    SingleChoice(ChoiceView),
    Comment(CommentView),
    Photo(PhotoView),
}

impl PostView {
    pub fn post_id(&self) -> &str {
        match self {
            Self::SingleChoice(view) => &view.post_id,
            Self::Comment(view) => &view.post_id,
            Self::Photo(view) => &view.post_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::SingleChoice(view) => &view.title,
            Self::Comment(view) => &view.title,
            Self::Photo(view) => &view.title,
        }
    }
}

/// Renders the fields of a single post variant.
pub trait PostRenderer: Sync {
    /// `capture` is the post's capture session, if one was ever started.
    fn render(&self, post: &Post, capture: Option<&CaptureSession>) -> PostView;
}

pub fn renderer_for(post: &Post) -> Result<&'static dyn PostRenderer, RenderError> {
    match &post.post_type {
        PostType::SingleChoice => Ok(&ChoiceRenderer),
        PostType::Comment => Ok(&CommentRenderer),
        PostType::Photo => Ok(&PhotoRenderer),
        PostType::Unsupported(kind) => Err(RenderError::UnsupportedPostType {
            post_id: post.id.clone(),
            kind: kind.clone(),
        }),
    }
}

pub fn render_post(
    post: &Post,
    capture: Option<&CaptureSession>,
) -> Result<PostView, RenderError> {
    Ok(renderer_for(post)?.render(post, capture))
}
