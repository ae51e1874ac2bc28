use std::path::PathBuf;

use tokio_util::sync::CancellationToken;

use crate::application::submit;
use crate::domain::CaptureError;

use super::super::FormScreen;
use super::action::{Action, AsyncAction};
use super::command::Command;

pub fn run(screen: &mut FormScreen, command: Command) {
    match command {
        Command::LoadPosts => load_posts(screen),
        Command::CancelLoad => cancel_load(screen),
        Command::RequestCapture { post_id } => {
            let session = screen.state.capture_mut(&post_id);
            let result = session.request_capture(
                &screen.storage_permissions,
                screen.permissions.as_ref(),
                screen.targets.as_ref(),
            );
            start_capture(screen, post_id, result);
        }
        Command::ResolvePermission { post_id } => {
            let session = screen.state.capture_mut(&post_id);
            let result = session.resolve_permission(
                &screen.storage_permissions,
                screen.permissions.as_ref(),
                screen.targets.as_ref(),
            );
            start_capture(screen, post_id, result);
        }
        Command::PromptPermissions {
            post_id,
            permissions,
        } => prompt_permissions(screen, post_id, permissions),
        Command::DiscardTarget { target } => screen.targets.discard(&target),
        Command::Submit => {
            let result = submit::report(&screen.state.posts, screen.sink.as_mut());
            match &result {
                Ok(count) => log::info!("submitted {count} posts"),
                Err(err) => log::error!("Submit failed: {err}"),
            }
            screen.state.last_submit = Some(result.map_err(|e| e.to_string()));
        }
    }
}

fn load_posts(screen: &mut FormScreen) {
    let repository = screen.repository.clone();
    let action_tx = screen.action_tx.clone();
    let token = CancellationToken::new();
    let child = token.clone();

    let handle = tokio::spawn(async move {
        tokio::select! {
            _ = child.cancelled() => {
                log::debug!("post load cancelled");
            }
            result = repository.load_posts() => {
                let result = result.map_err(|e| e.to_string());
                let _ = action_tx
                    .send(Action::Async(AsyncAction::PostsLoaded(result)))
                    .await;
            }
        }
    });

    screen.load_cancel_token = Some(token);
    screen.load_task = Some(handle);
}

fn cancel_load(screen: &mut FormScreen) {
    if let Some(token) = screen.load_cancel_token.take() {
        token.cancel();
    }
    if let Some(handle) = screen.load_task.take() {
        handle.abort();
    }
}

fn start_capture(screen: &mut FormScreen, post_id: String, result: Result<PathBuf, CaptureError>) {
    let target = match result {
        Ok(target) => target,
        Err(CaptureError::PermissionDenied { missing }) => {
            log::info!(
                "capture for {post_id} needs permissions: {}",
                missing.join(", ")
            );
            return;
        }
        Err(err) => {
            log::warn!("Could not start capture for {post_id}: {err}");
            screen.state.last_error = Some(err.to_string());
            return;
        }
    };

    let camera = screen.camera.clone();
    let action_tx = screen.action_tx.clone();
    tokio::spawn(async move {
        let result = camera
            .take_picture(&target)
            .await
            .map_err(|e| format!("{e:#}"));
        let _ = action_tx
            .send(Action::Async(AsyncAction::CaptureFinished {
                post_id,
                target,
                result,
            }))
            .await;
    });
}

fn prompt_permissions(screen: &mut FormScreen, post_id: String, permissions: Vec<String>) {
    let host = screen.permissions.clone();
    let action_tx = screen.action_tx.clone();
    tokio::spawn(async move {
        let granted = host.request(&permissions).await;
        let _ = action_tx
            .send(Action::Async(AsyncAction::PermissionPromptFinished {
                post_id,
                granted,
            }))
            .await;
    });
}
