//! Headless driver for the postform screen.
//! Loads the configured posts, answers each one like a first-time user would,
//! and submits through the log sink.

use postform::FormScreen;
use postform::application::capture::CaptureState;
use postform::infra::app_config::load_config;
use postform::ui::app::{Action, ScreenAction};
use postform::ui::views::{PhotoSlot, PostView, RenderedItem, render_post, render_screen};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(run())
}

async fn run() -> anyhow::Result<()> {
    let config = load_config();
    let mut screen = FormScreen::from_config(&config);

    screen.dispatch(Action::Screen(ScreenAction::Entered));
    screen.wait_for_load().await;
    if let Some(err) = &screen.state.load_error {
        log::warn!("Showing an empty form: {err}");
    }

    let view = render_screen(&screen.state);
    log::info!("{}: {} posts", view.title, view.items.len());

    for item in &view.items {
        let post = match item {
            RenderedItem::Post(post) => post,
            RenderedItem::Unrenderable { post_id, error } => {
                log::warn!("Skipping {post_id}: {error}");
                continue;
            }
        };

        match post {
            PostView::SingleChoice(choice) => {
                if let Some(first) = choice.options.first() {
                    screen.dispatch(first.on_select.clone());
                }
            }
            PostView::Comment(comment) => {
                if !comment.allow_comment {
                    screen.dispatch(comment.on_toggle.clone());
                }
                let Some(current) = screen.state.posts.get(&comment.post_id) else {
                    continue;
                };
                if let PostView::Comment(comment) = render_post(current, None)?
                    && let Some(input) = comment.on_input("Answered by the headless driver")
                {
                    screen.dispatch(input);
                }
            }
            PostView::Photo(photo) => {
                let PhotoSlot::Empty { on_capture, .. } = &photo.slot else {
                    continue;
                };
                screen.dispatch(on_capture.clone());
                capture_until_settled(&mut screen, &photo.post_id).await;
            }
        }
    }

    if let Some(err) = &screen.state.last_error {
        log::warn!("Last interaction failed: {err}");
    }

    screen.dispatch(Action::Screen(ScreenAction::Submit));
    let submitted = screen.state.last_submit.clone();
    screen.dispatch(Action::Screen(ScreenAction::TornDown));

    match submitted {
        Some(Ok(count)) => {
            log::info!("Submitted {count} posts");
            Ok(())
        }
        Some(Err(err)) => Err(anyhow::anyhow!(err)),
        None => Ok(()),
    }
}

/// Drive one capture until it lands in a resting state.
async fn capture_until_settled(screen: &mut FormScreen, post_id: &str) {
    loop {
        let state = screen
            .state
            .capture(post_id)
            .map(|session| session.state().clone())
            .unwrap_or_default();

        match state {
            CaptureState::PermissionCheck | CaptureState::Capturing { .. } => {
                if !screen.next_action_message().await {
                    return;
                }
            }
            CaptureState::PermissionDenied { .. } => {
                if let Some(dialog) = render_screen(&screen.state).dialog {
                    log::warn!("{}: {}", dialog.title, dialog.message);
                    screen.dispatch(dialog.on_dismiss);
                }
                return;
            }
            CaptureState::Captured { image } => {
                log::info!("Captured {image} for {post_id}");
                return;
            }
            CaptureState::Idle => return,
        }
    }
}
