//! Post definitions from bundled or on-disk JSON.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{AssetError, Post};

/// Decode a JSON array of post definitions.
pub fn decode_posts(json: &str) -> Result<Vec<Post>, AssetError> {
    Ok(serde_json::from_str(json)?)
}

/// Source of the post list shown on the form screen.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn load_posts(&self) -> Result<Vec<Post>, AssetError>;
}

/// Posts compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledPostRepository;

#[async_trait]
impl PostRepository for BundledPostRepository {
    async fn load_posts(&self) -> Result<Vec<Post>, AssetError> {
        let json = crate::assets::get_content(crate::assets::POSTS).ok_or_else(|| {
            AssetError::Read {
                path: PathBuf::from(crate::assets::POSTS),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
        })?;
        decode_posts(json)
    }
}

/// Posts read from a JSON file at load time.
#[derive(Debug, Clone)]
pub struct FilePostRepository {
    path: PathBuf,
}

impl FilePostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostRepository for FilePostRepository {
    async fn load_posts(&self) -> Result<Vec<Post>, AssetError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| AssetError::Read {
                path: self.path.clone(),
                source,
            })?;
        decode_posts(&json)
    }
}
