//! Photo capture flow for a single PHOTO post.
//!
//! ```text
//! Idle -> PermissionCheck -> Capturing -> Captured -> Idle (clear)
//!                        \             \-> Idle (cancelled, target discarded)
//!                         -> PermissionDenied -> Idle (dismiss)
//!                                             -> PermissionCheck (grant and retry)
//! ```
//!
//! Host collaborators are passed into the transitions that need them, so the
//! session itself holds no platform handles.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{CaptureError, ImageRef};
use crate::infra::camera::CaptureTargetAllocator;
use crate::infra::permissions::PermissionHost;

/// Explanation shown in the permission dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialMessage {
    /// The user can still be prompted.
    Rationale,
    /// The user has to go to system settings; lists the missing capabilities.
    Settings { permissions: Vec<String> },
}

impl DenialMessage {
    pub fn text(&self) -> String {
        match self {
            Self::Rationale => "The app needs storage access to save the photo you take. \
                                Please grant the permission."
                .to_string(),
            Self::Settings { permissions } => format!(
                "Storage permission was denied. Grant {} in the system settings to take photos.",
                permissions.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// Waiting on the host permission subsystem.
    PermissionCheck,
    /// The external capture activity is writing into `target`.
    Capturing { target: PathBuf },
    Captured { image: ImageRef },
    PermissionDenied {
        missing: Vec<String>,
        message: DenialMessage,
    },
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::PermissionCheck => write!(f, "checking permission"),
            Self::Capturing { .. } => write!(f, "capturing"),
            Self::Captured { .. } => write!(f, "captured"),
            Self::PermissionDenied { .. } => write!(f, "permission denied"),
        }
    }
}

/// Result of a capture attempt finishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Bind this image to the owning post.
    Attach(ImageRef),
    /// Cancelled or failed; the allocated target is no longer needed.
    Discard(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSession {
    post_id: String,
    state: CaptureState,
}

impl CaptureSession {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            state: CaptureState::Idle,
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_dialog_visible(&self) -> bool {
        matches!(self.state, CaptureState::PermissionDenied { .. })
    }

    fn invalid(&self, action: &'static str) -> CaptureError {
        CaptureError::InvalidTransition {
            action,
            state: self.state.to_string(),
        }
    }

    fn transition(&mut self, next: CaptureState) {
        log::debug!("capture[{}]: {} -> {}", self.post_id, self.state, next);
        self.state = next;
    }

    /// Start a capture from Idle. Returns the target the capture activity should write into.
    ///
    /// Denied permissions land in `PermissionDenied` and surface as
    /// [`CaptureError::PermissionDenied`].
    pub fn request_capture(
        &mut self,
        permissions: &[String],
        host: &dyn PermissionHost,
        targets: &dyn CaptureTargetAllocator,
    ) -> Result<PathBuf, CaptureError> {
        if self.state != CaptureState::Idle {
            return Err(self.invalid("request capture"));
        }
        self.transition(CaptureState::PermissionCheck);
        self.resolve_permission(permissions, host, targets)
    }

    /// Finish a pending permission check, either after `request_capture` or
    /// after the platform prompt issued by `grant_and_retry` returned.
    pub fn resolve_permission(
        &mut self,
        permissions: &[String],
        host: &dyn PermissionHost,
        targets: &dyn CaptureTargetAllocator,
    ) -> Result<PathBuf, CaptureError> {
        if self.state != CaptureState::PermissionCheck {
            return Err(self.invalid("resolve permission"));
        }

        let status = host.status(permissions);
        if !status.all_granted() {
            let message = if status.should_show_rationale {
                DenialMessage::Rationale
            } else {
                DenialMessage::Settings {
                    permissions: status.missing.clone(),
                }
            };
            self.transition(CaptureState::PermissionDenied {
                missing: status.missing.clone(),
                message,
            });
            return Err(CaptureError::PermissionDenied {
                missing: status.missing,
            });
        }

        match targets.allocate() {
            Ok(target) => {
                self.transition(CaptureState::Capturing {
                    target: target.clone(),
                });
                Ok(target)
            }
            Err(err) => {
                self.transition(CaptureState::Idle);
                Err(err)
            }
        }
    }

    /// The capture activity reported back.
    pub fn complete(&mut self, success: bool) -> Result<CaptureOutcome, CaptureError> {
        let CaptureState::Capturing { target } = &self.state else {
            return Err(self.invalid("complete capture"));
        };
        let target = target.clone();

        if success {
            let image = ImageRef::new(target);
            self.transition(CaptureState::Captured {
                image: image.clone(),
            });
            Ok(CaptureOutcome::Attach(image))
        } else {
            self.transition(CaptureState::Idle);
            Ok(CaptureOutcome::Discard(target))
        }
    }

    pub fn dismiss_permission_dialog(&mut self) -> Result<(), CaptureError> {
        if !self.is_dialog_visible() {
            return Err(self.invalid("dismiss permission dialog"));
        }
        self.transition(CaptureState::Idle);
        Ok(())
    }

    /// Leave the dialog and hand back the capabilities to prompt for.
    /// Call [`resolve_permission`](Self::resolve_permission) once the prompt returns.
    pub fn grant_and_retry(&mut self) -> Result<Vec<String>, CaptureError> {
        let CaptureState::PermissionDenied { missing, .. } = &self.state else {
            return Err(self.invalid("retry permission"));
        };
        let missing = missing.clone();
        self.transition(CaptureState::PermissionCheck);
        Ok(missing)
    }

    /// Forget a captured image. A no-op when already idle.
    pub fn clear(&mut self) -> Result<(), CaptureError> {
        match self.state {
            CaptureState::Captured { .. } => {
                self.transition(CaptureState::Idle);
                Ok(())
            }
            CaptureState::Idle => Ok(()),
            _ => Err(self.invalid("clear image")),
        }
    }

    /// Drop an in-flight capture, e.g. when the screen goes away.
    pub fn abandon(&mut self) -> Option<PathBuf> {
        match std::mem::take(&mut self.state) {
            CaptureState::Capturing { target } => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::permissions::{PermissionStatus, StaticPermissionHost};
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingTargets {
        next: Mutex<u32>,
        discarded: Mutex<Vec<PathBuf>>,
    }

    impl CaptureTargetAllocator for CountingTargets {
        fn allocate(&self) -> Result<PathBuf, CaptureError> {
            let mut next = self.next.lock().unwrap();
            *next += 1;
            Ok(PathBuf::from(format!("/pics/JPEG_{next}.jpg")))
        }

        fn discard(&self, target: &Path) {
            self.discarded.lock().unwrap().push(target.to_path_buf());
        }
    }

    struct FailingTargets;

    impl CaptureTargetAllocator for FailingTargets {
        fn allocate(&self) -> Result<PathBuf, CaptureError> {
            Err(CaptureError::Target {
                dir: PathBuf::from("/readonly"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }

        fn discard(&self, _target: &Path) {}
    }

    struct RationaleHost;

    #[async_trait]
    impl PermissionHost for RationaleHost {
        fn status(&self, permissions: &[String]) -> PermissionStatus {
            PermissionStatus {
                missing: permissions.to_vec(),
                should_show_rationale: true,
            }
        }

        async fn request(&self, _permissions: &[String]) -> bool {
            false
        }
    }

    fn perms() -> Vec<String> {
        vec!["storage.read".into(), "storage.write".into()]
    }

    #[test]
    fn test_granted_request_lands_in_capturing_with_fresh_target() {
        let targets = CountingTargets::default();
        let host = StaticPermissionHost::grant_all();

        let mut first = CaptureSession::new("p1");
        let a = first.request_capture(&perms(), &host, &targets).unwrap();
        assert_eq!(first.state(), &CaptureState::Capturing { target: a.clone() });

        let mut second = CaptureSession::new("p2");
        let b = second.request_capture(&perms(), &host, &targets).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_denied_request_lists_missing_capabilities() {
        let host = StaticPermissionHost::with_granted(["storage.read"]);
        let mut session = CaptureSession::new("p1");

        let err = session
            .request_capture(&perms(), &host, &CountingTargets::default())
            .unwrap_err();

        assert!(matches!(err, CaptureError::PermissionDenied { ref missing } if missing == &["storage.write"]));
        assert!(session.is_dialog_visible());
        match session.state() {
            CaptureState::PermissionDenied { missing, message } => {
                assert_eq!(missing, &vec!["storage.write".to_string()]);
                assert_eq!(
                    message,
                    &DenialMessage::Settings {
                        permissions: vec!["storage.write".into()]
                    }
                );
                assert!(message.text().contains("storage.write"));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_rationale_message_when_platform_allows_prompt() {
        let mut session = CaptureSession::new("p1");
        let _ = session.request_capture(&perms(), &RationaleHost, &CountingTargets::default());
        assert!(matches!(
            session.state(),
            CaptureState::PermissionDenied {
                message: DenialMessage::Rationale,
                ..
            }
        ));
    }

    #[test]
    fn test_successful_completion_attaches_target() {
        let targets = CountingTargets::default();
        let mut session = CaptureSession::new("p1");
        let target = session
            .request_capture(&perms(), &StaticPermissionHost::grant_all(), &targets)
            .unwrap();

        let outcome = session.complete(true).unwrap();
        assert_eq!(outcome, CaptureOutcome::Attach(ImageRef::new(&target)));
        assert_eq!(
            session.state(),
            &CaptureState::Captured {
                image: ImageRef::new(target)
            }
        );

        session.clear().unwrap();
        assert_eq!(session.state(), &CaptureState::Idle);
    }

    #[test]
    fn test_cancelled_completion_returns_to_idle() {
        let targets = CountingTargets::default();
        let mut session = CaptureSession::new("p1");
        let target = session
            .request_capture(&perms(), &StaticPermissionHost::grant_all(), &targets)
            .unwrap();

        assert_eq!(
            session.complete(false).unwrap(),
            CaptureOutcome::Discard(target)
        );
        assert_eq!(session.state(), &CaptureState::Idle);
    }

    #[test]
    fn test_dismiss_and_retry_from_denied() {
        let denied = StaticPermissionHost::with_granted(Vec::<String>::new());
        let targets = CountingTargets::default();
        let mut session = CaptureSession::new("p1");

        let _ = session.request_capture(&perms(), &denied, &targets);
        session.dismiss_permission_dialog().unwrap();
        assert_eq!(session.state(), &CaptureState::Idle);

        let _ = session.request_capture(&perms(), &denied, &targets);
        let to_request = session.grant_and_retry().unwrap();
        assert_eq!(to_request, perms());
        assert_eq!(session.state(), &CaptureState::PermissionCheck);

        // the user granted in the platform prompt
        let target = session
            .resolve_permission(&perms(), &StaticPermissionHost::grant_all(), &targets)
            .unwrap();
        assert_eq!(session.state(), &CaptureState::Capturing { target });
    }

    #[test]
    fn test_allocation_failure_returns_to_idle() {
        let mut session = CaptureSession::new("p1");
        let err = session
            .request_capture(&perms(), &StaticPermissionHost::grant_all(), &FailingTargets)
            .unwrap_err();
        assert!(matches!(err, CaptureError::Target { .. }));
        assert_eq!(session.state(), &CaptureState::Idle);
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let mut session = CaptureSession::new("p1");
        assert!(session.complete(true).is_err());
        assert!(session.dismiss_permission_dialog().is_err());
        assert!(session.grant_and_retry().is_err());
        assert!(session.clear().is_ok());

        let host = StaticPermissionHost::grant_all();
        let targets = CountingTargets::default();
        session.request_capture(&perms(), &host, &targets).unwrap();
        assert!(session.request_capture(&perms(), &host, &targets).is_err());
        assert!(session.clear().is_err());
    }

    #[test]
    fn test_abandon_hands_back_pending_target() {
        let mut session = CaptureSession::new("p1");
        let target = session
            .request_capture(
                &perms(),
                &StaticPermissionHost::grant_all(),
                &CountingTargets::default(),
            )
            .unwrap();
        assert_eq!(session.abandon(), Some(target));
        assert_eq!(session.abandon(), None);
    }
}
