//! Host permission subsystem.

use std::collections::HashSet;

use async_trait::async_trait;

/// Snapshot of a permission query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermissionStatus {
    /// Requested capability names that are not granted, in request order.
    pub missing: Vec<String>,
    /// The platform still lets us prompt the user with an explanation.
    pub should_show_rationale: bool,
}

impl PermissionStatus {
    pub fn granted() -> Self {
        Self::default()
    }

    pub fn all_granted(&self) -> bool {
        self.missing.is_empty()
    }
}

#[async_trait]
pub trait PermissionHost: Send + Sync {
    /// Query without prompting.
    fn status(&self, permissions: &[String]) -> PermissionStatus;

    /// Show the platform prompt. Resolves to `true` when everything was granted.
    async fn request(&self, permissions: &[String]) -> bool;
}

/// Desktop stand-in with a fixed grant set. Prompts never change it.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissionHost {
    /// `None` grants every capability.
    granted: Option<HashSet<String>>,
}

impl StaticPermissionHost {
    pub fn grant_all() -> Self {
        Self { granted: None }
    }

    pub fn with_granted<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: Some(granted.into_iter().map(Into::into).collect()),
        }
    }

    fn is_granted(&self, permission: &str) -> bool {
        self.granted
            .as_ref()
            .is_none_or(|granted| granted.contains(permission))
    }
}

#[async_trait]
impl PermissionHost for StaticPermissionHost {
    fn status(&self, permissions: &[String]) -> PermissionStatus {
        PermissionStatus {
            missing: permissions
                .iter()
                .filter(|p| !self.is_granted(p))
                .cloned()
                .collect(),
            should_show_rationale: false,
        }
    }

    async fn request(&self, permissions: &[String]) -> bool {
        self.status(permissions).all_granted()
    }
}
