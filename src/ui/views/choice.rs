use crate::application::capture::CaptureSession;
use crate::domain::Post;
use crate::ui::app::{Action, ResponseAction};

use super::post::{PostRenderer, PostView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub selected: bool,
    /// Emitted when the row or its radio button is tapped.
    pub on_select: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub post_id: String,
    pub title: String,
    pub options: Vec<OptionRow>,
}

/// Radio list over `data_map.options`.
pub struct ChoiceRenderer;

impl PostRenderer for ChoiceRenderer {
    fn render(&self, post: &Post, _capture: Option<&CaptureSession>) -> PostView {
        let options = post
            .options()
            .iter()
            .map(|option| OptionRow {
                label: option.clone(),
                selected: post.selected_option.as_deref() == Some(option.as_str()),
                on_select: Action::Response(ResponseAction::SelectOption {
                    post_id: post.id.clone(),
                    option: option.clone(),
                }),
            })
            .collect();

        PostView::SingleChoice(ChoiceView {
            post_id: post.id.clone(),
            title: post.title.clone(),
            options,
        })
    }
}
