use crate::application::responses;
use crate::domain::{Post, PostError};

use super::super::super::state::ScreenState;
use super::super::action::ResponseAction;
use super::super::command::Command;

/// Replace the post `post_id` with `f(current)`, recording a failure instead.
fn update_post(
    state: &mut ScreenState,
    post_id: &str,
    f: impl FnOnce(&Post) -> Result<Post, PostError>,
) {
    let result = state
        .posts
        .get(post_id)
        .ok_or_else(|| PostError::NotFound(post_id.to_string()))
        .and_then(f);
    match result {
        Ok(post) => {
            state.last_error = None;
            state.posts.upsert(post);
        }
        Err(err) => {
            log::debug!("rejected response: {err}");
            state.last_error = Some(err.to_string());
        }
    }
}

pub fn reduce(state: &mut ScreenState, action: ResponseAction) -> Vec<Command> {
    if state.torn_down {
        log::debug!("ignoring response after teardown: {action:?}");
        return Vec::new();
    }
    match action {
        ResponseAction::SelectOption { post_id, option } => {
            update_post(state, &post_id, |post| {
                responses::select_option(post, &option)
            });
        }
        ResponseAction::SetAllowComment { post_id, allow } => {
            update_post(state, &post_id, |post| {
                Ok(responses::set_allow_comment(post, allow))
            });
        }
        ResponseAction::SetComment { post_id, text } => {
            update_post(state, &post_id, |post| Ok(responses::set_comment(post, text)));
        }
        ResponseAction::ClearImage { post_id } => {
            if let Some(session) = state.captures.get_mut(&post_id)
                && let Err(err) = session.clear()
            {
                state.last_error = Some(err.to_string());
                return Vec::new();
            }
            update_post(state, &post_id, |post| Ok(responses::clear_image(post)));
        }
    }
    Vec::new()
}
