//! Capture targets on disk and the external capture activity.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use chrono::Local;

use crate::domain::CaptureError;

/// Hands out fresh files for the camera to write into.
pub trait CaptureTargetAllocator: Send + Sync {
    /// Create a new, previously unused target file.
    fn allocate(&self) -> Result<PathBuf, CaptureError>;

    /// Drop a target whose capture was cancelled.
    fn discard(&self, target: &Path);
}

/// Allocates `JPEG_<yyyyMMdd_HHmmss>_<suffix>.jpg` files inside a pictures directory.
#[derive(Debug, Clone)]
pub struct PicturesDirTargets {
    dir: PathBuf,
}

impl PicturesDirTargets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target_error(&self, source: std::io::Error) -> CaptureError {
        CaptureError::Target {
            dir: self.dir.clone(),
            source,
        }
    }
}

impl CaptureTargetAllocator for PicturesDirTargets {
    fn allocate(&self) -> Result<PathBuf, CaptureError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| self.target_error(e))?;

        let prefix = format!("JPEG_{}_", Local::now().format("%Y%m%d_%H%M%S"));
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".jpg")
            .rand_bytes(8)
            .tempfile_in(&self.dir)
            .map_err(|e| self.target_error(e))?;

        // The camera writes into this path after we return, so it must outlive the handle.
        file.into_temp_path()
            .keep()
            .map_err(|e| self.target_error(e.error))
    }

    fn discard(&self, target: &Path) {
        if let Err(err) = std::fs::remove_file(target)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            log::warn!(
                "Failed to remove capture target {}: {}",
                target.display(),
                err
            );
        }
    }
}

/// The external capture activity.
#[async_trait]
pub trait CaptureHost: Send + Sync {
    /// Write a picture into `target`. `Ok(false)` means the user cancelled.
    async fn take_picture(&self, target: &Path) -> anyhow::Result<bool>;
}

/// Desktop stand-in for a camera: writes a small solid-colour JPEG.
#[derive(Debug, Clone)]
pub struct PlaceholderCamera {
    pub width: u32,
    pub height: u32,
    pub color: [u8; 3],
}

impl Default for PlaceholderCamera {
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            color: [0x3a, 0x6e, 0xa5],
        }
    }
}

#[async_trait]
impl CaptureHost for PlaceholderCamera {
    async fn take_picture(&self, target: &Path) -> anyhow::Result<bool> {
        let target = target.to_path_buf();
        let camera = self.clone();
        tokio::task::spawn_blocking(move || {
            let frame = image::RgbImage::from_pixel(
                camera.width,
                camera.height,
                image::Rgb(camera.color),
            );
            frame
                .save_with_format(&target, image::ImageFormat::Jpeg)
                .with_context(|| format!("writing placeholder photo to {}", target.display()))
        })
        .await
        .context("placeholder camera task panicked")??;
        Ok(true)
    }
}
