use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadPosts,
    CancelLoad,
    /// Start a capture for an idle session. Needs the permission host and target allocator.
    RequestCapture {
        post_id: String,
    },
    PromptPermissions {
        post_id: String,
        permissions: Vec<String>,
    },
    /// Re-check permissions for a session waiting in `PermissionCheck`.
    ResolvePermission {
        post_id: String,
    },
    DiscardTarget {
        target: PathBuf,
    },
    Submit,
}
