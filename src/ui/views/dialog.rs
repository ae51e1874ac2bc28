use crate::application::capture::{CaptureSession, CaptureState};
use crate::ui::app::{Action, CaptureAction};

pub const DIALOG_TITLE: &str = "Request permission";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionDialogView {
    pub post_id: String,
    pub title: String,
    pub message: String,
    pub missing: Vec<String>,
    /// Tapping outside the dialog.
    pub on_dismiss: Action,
    /// "OK": hide the dialog and prompt for the missing permissions.
    pub on_confirm: Action,
}

pub fn render_permission_dialog(session: &CaptureSession) -> Option<PermissionDialogView> {
    let CaptureState::PermissionDenied { missing, message } = session.state() else {
        return None;
    };
    let post_id = session.post_id().to_string();
    Some(PermissionDialogView {
        title: DIALOG_TITLE.to_string(),
        message: message.text(),
        missing: missing.clone(),
        on_dismiss: Action::Capture(CaptureAction::DismissPermissionDialog {
            post_id: post_id.clone(),
        }),
        on_confirm: Action::Capture(CaptureAction::GrantAndRetry {
            post_id: post_id.clone(),
        }),
        post_id,
    })
}
