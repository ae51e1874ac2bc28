use std::collections::HashMap;

use crate::application::capture::CaptureSession;
use crate::domain::PostStore;

/// Whether the post list has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// All screen state in one struct.
#[derive(Debug, Default)]
pub struct ScreenState {
    pub load_state: LoadState,
    /// Set once the screen goes away; late async results are dropped.
    pub torn_down: bool,
    pub posts: PostStore,
    /// Capture sessions keyed by PHOTO post id, created on first use.
    pub captures: HashMap<String, CaptureSession>,
    /// Why the post list is empty, when loading failed.
    pub load_error: Option<String>,
    /// Last rejected interaction.
    pub last_error: Option<String>,
    /// Outcome of the last submit: number of posts reported, or the sink error.
    pub last_submit: Option<Result<usize, String>>,
}

impl ScreenState {
    pub fn capture(&self, post_id: &str) -> Option<&CaptureSession> {
        self.captures.get(post_id)
    }

    pub fn capture_mut(&mut self, post_id: &str) -> &mut CaptureSession {
        self.captures
            .entry(post_id.to_string())
            .or_insert_with(|| CaptureSession::new(post_id))
    }

    /// The session whose permission dialog is showing, first in display order.
    pub fn permission_dialog(&self) -> Option<&CaptureSession> {
        self.posts
            .iter()
            .filter_map(|(id, _)| self.captures.get(id))
            .find(|session| session.is_dialog_visible())
    }
}
