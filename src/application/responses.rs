//! Response reducers: pure `Post -> Post` transformations, one per interaction.

use crate::domain::{ImageRef, Post, PostError};

/// Select one of the post's options. Unknown options are rejected.
pub fn select_option(post: &Post, option: &str) -> Result<Post, PostError> {
    if !post.has_option(option) {
        return Err(PostError::InvalidOption {
            post_id: post.id.clone(),
            option: option.to_string(),
        });
    }
    Ok(Post {
        selected_option: Some(option.to_string()),
        ..post.clone()
    })
}

/// Turn the comment switch on or off. Switching off drops any typed comment.
pub fn set_allow_comment(post: &Post, allow: bool) -> Post {
    Post {
        allow_comment: allow,
        comment: if allow { post.comment.clone() } else { None },
        ..post.clone()
    }
}

/// Visibility is the renderer's concern; the comment is stored regardless of the switch.
pub fn set_comment(post: &Post, text: impl Into<String>) -> Post {
    Post {
        comment: Some(text.into()),
        ..post.clone()
    }
}

pub fn attach_image(post: &Post, image: ImageRef) -> Post {
    Post {
        image: Some(image),
        ..post.clone()
    }
}

pub fn clear_image(post: &Post) -> Post {
    Post {
        image: None,
        ..post.clone()
    }
}
