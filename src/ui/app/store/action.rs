use std::path::PathBuf;

use crate::domain::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Screen(ScreenAction),
    Response(ResponseAction),
    Capture(CaptureAction),
    Async(AsyncAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// First render; starts the one-off post load.
    Entered,
    TornDown,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseAction {
    SelectOption { post_id: String, option: String },
    SetAllowComment { post_id: String, allow: bool },
    SetComment { post_id: String, text: String },
    ClearImage { post_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureAction {
    Request { post_id: String },
    DismissPermissionDialog { post_id: String },
    GrantAndRetry { post_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    PostsLoaded(Result<Vec<Post>, String>),
    /// The platform permission prompt closed.
    PermissionPromptFinished { post_id: String, granted: bool },
    /// The capture activity returned; `Ok(false)` is a cancel.
    CaptureFinished {
        post_id: String,
        target: PathBuf,
        result: Result<bool, String>,
    },
}
