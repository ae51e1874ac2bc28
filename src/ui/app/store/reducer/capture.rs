use crate::application::capture::{CaptureSession, CaptureState};
use crate::domain::{CaptureError, PostError, PostType};

use super::super::super::state::ScreenState;
use super::super::action::CaptureAction;
use super::super::command::Command;

/// Look up the capture session of a photo post without creating one.
/// A photo post that never started a capture is idle.
fn existing_session<'a>(
    state: &'a mut ScreenState,
    post_id: &str,
    action: &'static str,
) -> Result<&'a mut CaptureSession, String> {
    match state.posts.get(post_id) {
        None => Err(PostError::NotFound(post_id.to_string()).to_string()),
        Some(post) if post.post_type != PostType::Photo => {
            Err(CaptureError::NotAPhotoPost(post_id.to_string()).to_string())
        }
        Some(_) => state.captures.get_mut(post_id).ok_or_else(|| {
            CaptureError::InvalidTransition {
                action,
                state: CaptureState::Idle.to_string(),
            }
            .to_string()
        }),
    }
}

pub fn reduce(state: &mut ScreenState, action: CaptureAction) -> Vec<Command> {
    if state.torn_down {
        return Vec::new();
    }
    match action {
        CaptureAction::Request { post_id } => {
            let Some(post) = state.posts.get(&post_id) else {
                state.last_error = Some(PostError::NotFound(post_id).to_string());
                return Vec::new();
            };
            if post.post_type != PostType::Photo {
                state.last_error = Some(CaptureError::NotAPhotoPost(post_id).to_string());
                return Vec::new();
            }
            state.last_error = None;
            vec![Command::RequestCapture { post_id }]
        }
        CaptureAction::DismissPermissionDialog { post_id } => {
            let result = existing_session(state, &post_id, "dismiss permission dialog")
                .and_then(|session| {
                    session
                        .dismiss_permission_dialog()
                        .map_err(|err| err.to_string())
                });
            if let Err(err) = result {
                state.last_error = Some(err);
            }
            Vec::new()
        }
        CaptureAction::GrantAndRetry { post_id } => {
            let result = existing_session(state, &post_id, "retry permission")
                .and_then(|session| session.grant_and_retry().map_err(|err| err.to_string()));
            match result {
                Ok(permissions) => vec![Command::PromptPermissions {
                    post_id,
                    permissions,
                }],
                Err(err) => {
                    state.last_error = Some(err);
                    Vec::new()
                }
            }
        }
    }
}
