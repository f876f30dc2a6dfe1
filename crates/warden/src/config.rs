//! Policy seed data.
//!
//! [`PolicyConfig`] bundles everything an evaluator reads: the user
//! directory, discretionary file grants, and the ABAC work window. It is
//! built once and handed to [`PolicyEvaluator`](crate::PolicyEvaluator);
//! nothing in it changes afterwards.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use warden_types::{Clearance, Role, UserId};

use crate::directory::{Directory, FilePermissions, UserRecord};
use crate::window::{BUSINESS_HOURS, WorkWindow};

/// Error type for policy seed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A file grant names a user that is not in the directory.
    #[error("file permissions reference unknown user '{0}'")]
    OrphanPermission(UserId),
}

/// Complete policy seed for an evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyConfig {
    pub directory: Directory,
    pub permissions: FilePermissions,
    pub window: WorkWindow,
}

impl PolicyConfig {
    pub fn new(directory: Directory, permissions: FilePermissions, window: WorkWindow) -> Self {
        Self {
            directory,
            permissions,
            window,
        }
    }

    /// The built-in seed: four users, their file grants, and 09-17 hours.
    ///
    /// | user | role      | clearance    | device          | files        |
    /// |------|-----------|--------------|-----------------|--------------|
    /// | deng | doctor    | top-secret   | company-laptop  | file1, file2 |
    /// | red  | admin     | confidential | personal-laptop | file3        |
    /// | keng | nurse     | secret       | company-desktop | file1        |
    /// | luna | assistant | confidential | company-laptop  | file2, file3 |
    pub fn builtin() -> Self {
        let directory = Directory::new()
            .with_user(
                "deng",
                UserRecord::new(Role::Doctor, Clearance::TopSecret, "company-laptop"),
            )
            .with_user(
                "red",
                UserRecord::new(Role::Admin, Clearance::Confidential, "personal-laptop"),
            )
            .with_user(
                "keng",
                UserRecord::new(Role::Nurse, Clearance::Secret, "company-desktop"),
            )
            .with_user(
                "luna",
                UserRecord::new(Role::Assistant, Clearance::Confidential, "company-laptop"),
            );

        let permissions = FilePermissions::new()
            .grant("deng", ["file1", "file2"])
            .grant("red", ["file3"])
            .grant("keng", ["file1"])
            .grant("luna", ["file2", "file3"]);

        debug!(users = directory.len(), "Loaded built-in policy seed");

        Self::new(directory, permissions, BUSINESS_HOURS)
    }

    /// Checks that every file grant belongs to a known user.
    ///
    /// An orphan grant could never be exercised (unknown users always fail
    /// closed), so it almost always indicates a typo in the seed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .permissions
            .holders()
            .find(|user| !self.directory.contains(user))
        {
            Some(orphan) => Err(ConfigError::OrphanPermission(orphan.clone())),
            None => Ok(()),
        }
    }
}
