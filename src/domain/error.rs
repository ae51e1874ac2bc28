//! Error types for the form core.
//!
//! Nothing here is fatal to the whole screen: the worst outcomes are an empty
//! post list or a single post that cannot be rendered.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading or decoding the post asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read post asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode post asset: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors applying a response to a post.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Option {option:?} is not offered by post {post_id}")]
    InvalidOption { post_id: String, option: String },
}

/// Errors selecting a renderer for a post.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Post {post_id} has unsupported type {kind:?}")]
    UnsupportedPostType { post_id: String, kind: String },
}

/// Errors in the photo capture flow.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Storage permission denied: {}", .missing.join(", "))]
    PermissionDenied { missing: Vec<String> },

    #[error("Cannot {action} while capture is {state}")]
    InvalidTransition { action: &'static str, state: String },

    #[error("Post {0} is not a photo post")]
    NotAPhotoPost(String),

    #[error("Failed to allocate capture target in {dir}: {source}")]
    Target {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a submit sink.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submit sink failed on post {post_id}: {source}")]
    Sink {
        post_id: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Unified error type for callers that handle every concern the same way.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Post error: {0}")]
    Post(#[from] PostError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Submit error: {0}")]
    Submit(#[from] SubmitError),
}
