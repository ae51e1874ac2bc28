use crate::application::capture::CaptureSession;
use crate::domain::Post;
use crate::ui::app::{Action, ResponseAction};

use super::post::{PostRenderer, PostView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub post_id: String,
    pub title: String,
    pub allow_comment: bool,
    /// Only present while the switch is on.
    pub comment: Option<String>,
    pub on_toggle: Action,
}

impl CommentView {
    pub fn shows_text_field(&self) -> bool {
        self.allow_comment
    }

    /// Action for typing into the text field. `None` while the field is hidden.
    pub fn on_input(&self, text: impl Into<String>) -> Option<Action> {
        self.allow_comment.then(|| {
            Action::Response(ResponseAction::SetComment {
                post_id: self.post_id.clone(),
                text: text.into(),
            })
        })
    }
}

/// "Provide a comment" switch with a text field behind it.
pub struct CommentRenderer;

impl PostRenderer for CommentRenderer {
    fn render(&self, post: &Post, _capture: Option<&CaptureSession>) -> PostView {
        PostView::Comment(CommentView {
            post_id: post.id.clone(),
            title: post.title.clone(),
            allow_comment: post.allow_comment,
            comment: post
                .comment
                .clone()
                .filter(|_| post.allow_comment),
            on_toggle: Action::Response(ResponseAction::SetAllowComment {
                post_id: post.id.clone(),
                allow: !post.allow_comment,
            }),
        })
    }
}
