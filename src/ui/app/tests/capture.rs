use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use crate::application::capture::{CaptureState, DenialMessage};
use crate::domain::ImageRef;
use crate::infra::camera::{PicturesDirTargets, PlaceholderCamera};
use crate::ui::app::tests::fixtures::*;
use crate::ui::app::{
    Action, CaptureAction, FormScreen, ResponseAction, ScreenAction, ScreenHosts,
};
use crate::ui::views::{PhotoSlot, PostView, RenderedItem, render_screen};

fn request(post_id: &str) -> Action {
    Action::Capture(CaptureAction::Request {
        post_id: post_id.to_string(),
    })
}

fn capture_state(screen: &FormScreen, post_id: &str) -> CaptureState {
    screen
        .state
        .capture(post_id)
        .map(|s| s.state().clone())
        .unwrap_or_default()
}

fn first_target() -> PathBuf {
    PathBuf::from("/pics/JPEG_20240101_120000_0.jpg")
}

#[tokio::test]
async fn test_granted_capture_attaches_image() {
    let (mut screen, mocks) = loaded_screen(ScreenBuilder::default()).await;

    screen.dispatch(request("pic1"));
    assert_eq!(
        capture_state(&screen, "pic1"),
        CaptureState::Capturing {
            target: first_target()
        }
    );

    assert!(screen.next_action_message().await);
    assert_eq!(
        screen.state.posts.get("pic1").unwrap().image,
        Some(ImageRef::new(first_target()))
    );
    assert!(matches!(
        capture_state(&screen, "pic1"),
        CaptureState::Captured { .. }
    ));
    assert!(mocks.targets.discarded.lock().unwrap().is_empty());

    let view = render_screen(&screen.state);
    let RenderedItem::Post(PostView::Photo(photo)) = &view.items[0] else {
        panic!("expected photo view");
    };
    assert!(matches!(photo.slot, PhotoSlot::Image { .. }));
}

#[tokio::test]
async fn test_cancelled_capture_discards_target() {
    let (mut screen, mocks) = loaded_screen(ScreenBuilder::default().camera(Ok(false))).await;

    screen.dispatch(request("pic1"));
    screen.next_action_message().await;

    assert_eq!(capture_state(&screen, "pic1"), CaptureState::Idle);
    assert_eq!(screen.state.posts.get("pic1").unwrap().image, None);
    assert_eq!(*mocks.targets.discarded.lock().unwrap(), vec![first_target()]);
}

#[tokio::test]
async fn test_camera_failure_is_reported_and_discarded() {
    let (mut screen, mocks) =
        loaded_screen(ScreenBuilder::default().camera(Err("camera busy".into()))).await;

    screen.dispatch(request("pic1"));
    screen.next_action_message().await;

    assert_eq!(capture_state(&screen, "pic1"), CaptureState::Idle);
    assert_eq!(screen.state.last_error.as_deref(), Some("camera busy"));
    assert_eq!(mocks.targets.discarded.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_capture_binds_to_current_post_value() {
    let (mut screen, _mocks) = loaded_screen(ScreenBuilder::default()).await;

    screen.dispatch(request("pic1"));
    // the post changes while the camera is open
    screen.dispatch(Action::Response(ResponseAction::SetComment {
        post_id: "pic1".into(),
        text: "taken at dusk".into(),
    }));
    screen.next_action_message().await;

    let post = screen.state.posts.get("pic1").unwrap();
    assert_eq!(post.comment.as_deref(), Some("taken at dusk"));
    assert!(post.image.is_some());
}

#[tokio::test]
async fn test_denied_permission_shows_dialog_then_dismiss() {
    let (mut screen, mocks) =
        loaded_screen(ScreenBuilder::default().permissions(MockPermissions::default())).await;

    screen.dispatch(request("pic1"));

    let CaptureState::PermissionDenied { missing, message } = capture_state(&screen, "pic1") else {
        panic!("expected permission denied");
    };
    assert_eq!(missing, storage_permissions());
    assert!(matches!(message, DenialMessage::Settings { .. }));
    assert!(mocks.targets.allocated.lock().unwrap().is_empty());

    let view = render_screen(&screen.state);
    let dialog = view.dialog.expect("dialog should be visible");
    assert_eq!(dialog.post_id, "pic1");
    assert!(dialog.message.contains("storage.write"));

    screen.dispatch(dialog.on_dismiss);
    assert_eq!(capture_state(&screen, "pic1"), CaptureState::Idle);
    assert_eq!(render_screen(&screen.state).dialog, None);
}

#[tokio::test]
async fn test_rationale_message_when_prompt_is_possible() {
    let permissions = MockPermissions::default();
    permissions.rationale.store(true, Ordering::SeqCst);
    let (mut screen, _mocks) =
        loaded_screen(ScreenBuilder::default().permissions(permissions)).await;

    screen.dispatch(request("pic1"));

    let dialog = render_screen(&screen.state).dialog.unwrap();
    assert_eq!(dialog.message, DenialMessage::Rationale.text());
}

#[tokio::test]
async fn test_grant_and_retry_continues_into_capture() {
    let permissions = MockPermissions::default();
    permissions.grant_on_request.store(true, Ordering::SeqCst);
    let (mut screen, mocks) =
        loaded_screen(ScreenBuilder::default().permissions(permissions)).await;

    screen.dispatch(request("pic1"));
    let dialog = render_screen(&screen.state).dialog.unwrap();
    screen.dispatch(dialog.on_confirm);
    assert_eq!(capture_state(&screen, "pic1"), CaptureState::PermissionCheck);
    assert_eq!(render_screen(&screen.state).dialog, None);

    // prompt result
    screen.next_action_message().await;
    assert!(matches!(
        capture_state(&screen, "pic1"),
        CaptureState::Capturing { .. }
    ));
    assert_eq!(
        *mocks.permissions.requested.lock().unwrap(),
        vec![storage_permissions()]
    );

    // camera result
    screen.next_action_message().await;
    assert!(screen.state.posts.get("pic1").unwrap().image.is_some());
}

#[tokio::test]
async fn test_refused_prompt_returns_to_dialog() {
    let (mut screen, _mocks) =
        loaded_screen(ScreenBuilder::default().permissions(MockPermissions::default())).await;

    screen.dispatch(request("pic1"));
    screen.dispatch(Action::Capture(CaptureAction::GrantAndRetry {
        post_id: "pic1".into(),
    }));
    screen.next_action_message().await;

    assert!(matches!(
        capture_state(&screen, "pic1"),
        CaptureState::PermissionDenied { .. }
    ));
    assert!(render_screen(&screen.state).dialog.is_some());
}

#[tokio::test]
async fn test_capture_on_non_photo_post_is_rejected() {
    let (mut screen, _mocks) = loaded_screen(ScreenBuilder::default()).await;

    screen.dispatch(request("choice1"));

    assert!(screen.state.capture("choice1").is_none());
    assert_eq!(
        screen.state.last_error.as_deref(),
        Some("Post choice1 is not a photo post")
    );
}

#[tokio::test]
async fn test_clear_image_returns_slot_to_camera() {
    let (mut screen, _mocks) = loaded_screen(ScreenBuilder::default()).await;
    screen.dispatch(request("pic1"));
    screen.next_action_message().await;

    screen.dispatch(Action::Response(ResponseAction::ClearImage {
        post_id: "pic1".into(),
    }));

    assert_eq!(screen.state.posts.get("pic1").unwrap().image, None);
    assert_eq!(capture_state(&screen, "pic1"), CaptureState::Idle);

    // a fresh capture gets a fresh target
    screen.dispatch(request("pic1"));
    let CaptureState::Capturing { target } = capture_state(&screen, "pic1") else {
        panic!("expected capturing");
    };
    assert_ne!(target, first_target());
}

#[tokio::test]
async fn test_teardown_drops_inflight_capture() {
    let (mut screen, mocks) = loaded_screen(ScreenBuilder::default()).await;
    screen.dispatch(request("pic1"));

    screen.dispatch(Action::Screen(ScreenAction::TornDown));
    assert_eq!(*mocks.targets.discarded.lock().unwrap(), vec![first_target()]);

    // the late camera result discards the target again
    screen.next_action_message().await;
    assert_eq!(screen.state.posts.get("pic1").unwrap().image, None);
    assert_eq!(
        *mocks.targets.discarded.lock().unwrap(),
        vec![first_target(), first_target()]
    );
}

#[tokio::test]
async fn test_teardown_removes_picture_written_after_discard() {
    let dir = tempfile::tempdir().unwrap();
    let pictures = dir.path().join("Pictures");
    let mut screen = FormScreen::new(ScreenHosts {
        repository: Arc::new(JsonRepository(MOCK_POSTS.to_string())),
        permissions: Arc::new(MockPermissions::granted()),
        camera: Arc::new(PlaceholderCamera::default()),
        targets: Arc::new(PicturesDirTargets::new(&pictures)),
        sink: Box::new(RecordingSink {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
        }),
        storage_permissions: storage_permissions(),
    });
    screen.dispatch(Action::Screen(ScreenAction::Entered));
    screen.wait_for_load().await;

    screen.dispatch(request("pic1"));
    screen.dispatch(Action::Screen(ScreenAction::TornDown));
    assert!(screen.next_action_message().await);

    let leftover = std::fs::read_dir(&pictures).unwrap().count();
    assert_eq!(leftover, 0);
}

#[tokio::test]
async fn test_dialog_actions_without_session_create_none() {
    let (mut screen, _mocks) = loaded_screen(ScreenBuilder::default()).await;

    screen.dispatch(Action::Capture(CaptureAction::DismissPermissionDialog {
        post_id: "missing".into(),
    }));
    assert_eq!(
        screen.state.last_error.as_deref(),
        Some("Post not found: missing")
    );

    screen.dispatch(Action::Capture(CaptureAction::GrantAndRetry {
        post_id: "choice1".into(),
    }));
    assert_eq!(
        screen.state.last_error.as_deref(),
        Some("Post choice1 is not a photo post")
    );

    screen.dispatch(Action::Capture(CaptureAction::GrantAndRetry {
        post_id: "pic1".into(),
    }));
    assert_eq!(
        screen.state.last_error.as_deref(),
        Some("Cannot retry permission while capture is idle")
    );
    assert!(screen.state.captures.is_empty());
}
