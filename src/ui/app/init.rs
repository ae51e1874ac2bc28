use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::submit::{LogSink, SubmitSink};
use crate::infra::app_config::AppConfig;
use crate::infra::assets::{BundledPostRepository, FilePostRepository, PostRepository};
use crate::infra::camera::{
    CaptureHost, CaptureTargetAllocator, PicturesDirTargets, PlaceholderCamera,
};
use crate::infra::permissions::{PermissionHost, StaticPermissionHost};

use super::FormScreen;
use super::state::ScreenState;

/// Everything the screen talks to outside its own state.
pub struct ScreenHosts {
    pub repository: Arc<dyn PostRepository>,
    pub permissions: Arc<dyn PermissionHost>,
    pub camera: Arc<dyn CaptureHost>,
    pub targets: Arc<dyn CaptureTargetAllocator>,
    pub sink: Box<dyn SubmitSink>,
    pub storage_permissions: Vec<String>,
}

impl ScreenHosts {
    /// Desktop wiring: configured asset, static permissions, placeholder camera, log sink.
    pub fn from_config(config: &AppConfig) -> Self {
        let repository: Arc<dyn PostRepository> = match &config.asset_path {
            Some(path) => Arc::new(FilePostRepository::new(path)),
            None => Arc::new(BundledPostRepository),
        };
        let permissions = match &config.granted_permissions {
            Some(granted) => StaticPermissionHost::with_granted(granted.iter().cloned()),
            None => StaticPermissionHost::grant_all(),
        };

        Self {
            repository,
            permissions: Arc::new(permissions),
            camera: Arc::new(PlaceholderCamera::default()),
            targets: Arc::new(PicturesDirTargets::new(config.pictures_dir())),
            sink: Box::new(LogSink),
            storage_permissions: config.storage_permissions.clone(),
        }
    }
}

impl FormScreen {
    pub fn new(hosts: ScreenHosts) -> Self {
        let (action_tx, action_rx) = mpsc::channel(32);

        Self {
            state: ScreenState::default(),
            repository: hosts.repository,
            permissions: hosts.permissions,
            camera: hosts.camera,
            targets: hosts.targets,
            sink: hosts.sink,
            storage_permissions: hosts.storage_permissions,
            action_tx,
            action_rx,
            load_task: None,
            load_cancel_token: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ScreenHosts::from_config(config))
    }
}
