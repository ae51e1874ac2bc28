use crate::application::capture::CaptureOutcome;
use crate::application::responses;
use crate::domain::PostType;

use super::super::super::state::{LoadState, ScreenState};
use super::super::action::AsyncAction;
use super::super::command::Command;

pub fn reduce(state: &mut ScreenState, action: AsyncAction) -> Vec<Command> {
    if state.torn_down {
        log::debug!("dropping async result after teardown: {action:?}");
        // The camera may have written the target after teardown discarded it.
        if let AsyncAction::CaptureFinished { target, .. } = action {
            return vec![Command::DiscardTarget { target }];
        }
        return Vec::new();
    }
    match action {
        AsyncAction::PostsLoaded(result) => {
            state.load_state = LoadState::Loaded;
            match result {
                Ok(posts) => {
                    log::info!("loaded {} posts", posts.len());
                    for post in &posts {
                        if let PostType::Unsupported(kind) = &post.post_type {
                            log::warn!("Post {} has unsupported type {kind:?}", post.id);
                        }
                    }
                    state.posts.load_batch(posts);
                    state.load_error = None;
                }
                Err(err) => {
                    log::warn!("Failed to load posts: {err}");
                    state.load_error = Some(err);
                }
            }
            Vec::new()
        }
        AsyncAction::PermissionPromptFinished { post_id, granted } => {
            log::debug!("permission prompt for {post_id} finished, granted={granted}");
            vec![Command::ResolvePermission { post_id }]
        }
        AsyncAction::CaptureFinished { post_id, result, .. } => {
            let success = match result {
                Ok(success) => success,
                Err(err) => {
                    log::warn!("Capture for {post_id} failed: {err}");
                    state.last_error = Some(err);
                    false
                }
            };
            let Some(session) = state.captures.get_mut(&post_id) else {
                log::debug!("capture result for unknown session {post_id}");
                return Vec::new();
            };
            match session.complete(success) {
                Ok(CaptureOutcome::Attach(image)) => {
                    // Bind to the current post value, not the one the capture started from.
                    match state.posts.get(&post_id) {
                        Some(post) => {
                            let post = responses::attach_image(post, image);
                            state.posts.upsert(post);
                        }
                        None => log::debug!("captured image for missing post {post_id}"),
                    }
                    Vec::new()
                }
                Ok(CaptureOutcome::Discard(target)) => vec![Command::DiscardTarget { target }],
                Err(err) => {
                    log::debug!("ignoring capture result for {post_id}: {err}");
                    Vec::new()
                }
            }
        }
    }
}
