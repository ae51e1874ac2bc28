//! Embedded assets for postform
//! This module provides access to assets embedded in the binary at compile time.

/// Path of the bundled post definitions.
pub const POSTS: &str = "assets/posts.json";

/// Get the content of an asset by its path.
/// Returns None if the asset is not found.
pub fn get_content(path: &str) -> Option<&'static str> {
    match path {
        "assets/posts.json" => Some(include_str!("../assets/posts.json")),
        _ => None,
    }
}
