//! Root form screen struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::submit::SubmitSink;
use crate::infra::assets::PostRepository;
use crate::infra::camera::{CaptureHost, CaptureTargetAllocator};
use crate::infra::permissions::PermissionHost;

use super::state::ScreenState;

/// The single form screen: state plus the host collaborators its commands run against.
pub struct FormScreen {
    pub state: ScreenState,

    pub repository: Arc<dyn PostRepository>,
    pub permissions: Arc<dyn PermissionHost>,
    pub camera: Arc<dyn CaptureHost>,
    pub targets: Arc<dyn CaptureTargetAllocator>,
    pub sink: Box<dyn SubmitSink>,
    /// Capabilities checked before every capture.
    pub storage_permissions: Vec<String>,

    pub action_tx: mpsc::Sender<crate::ui::app::Action>,
    pub action_rx: mpsc::Receiver<crate::ui::app::Action>,

    pub load_task: Option<tokio::task::JoinHandle<()>>,
    pub load_cancel_token: Option<tokio_util::sync::CancellationToken>,
}
