//! User and file-permission directories.
//!
//! Both directories are plain lookup tables. Every lookup returns an
//! `Option`; callers decide what a missing entry means (the evaluator always
//! treats it as a denial).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use warden_types::{Clearance, Device, FileId, Role, UserId};

// ============================================================================
// User Records
// ============================================================================

/// Attributes bound to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Role used by RBAC.
    pub role: Role,
    /// Clearance label used by MAC.
    pub clearance: Clearance,
    /// Hardware profile used by ABAC.
    pub device: Device,
}

impl UserRecord {
    pub fn new(role: Role, clearance: Clearance, device: impl Into<Device>) -> Self {
        Self {
            role,
            clearance,
            device: device.into(),
        }
    }
}

/// Directory of known users keyed by normalized identity.
///
/// Iteration order is sorted by user id so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    users: BTreeMap<UserId, UserRecord>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a user entry.
    ///
    /// # Example
    ///
    /// ```
    /// use warden::directory::{Directory, UserRecord};
    /// use warden_types::{Clearance, Role, UserId};
    ///
    /// let directory = Directory::new().with_user(
    ///     "Deng",
    ///     UserRecord::new(Role::Doctor, Clearance::TopSecret, "company-laptop"),
    /// );
    /// assert!(directory.contains(&UserId::new("deng")));
    /// ```
    pub fn with_user(mut self, user: impl Into<UserId>, record: UserRecord) -> Self {
        self.users.insert(user.into(), record);
        self
    }

    /// Returns the record for `user`, or `None` if the user is unknown.
    pub fn lookup(&self, user: &UserId) -> Option<&UserRecord> {
        self.users.get(user)
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.users.contains_key(user)
    }

    /// Iterates users in sorted order.
    pub fn users(&self) -> impl Iterator<Item = (&UserId, &UserRecord)> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// ============================================================================
// File Permissions
// ============================================================================

/// Discretionary file grants: which files each user may open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePermissions {
    grants: BTreeMap<UserId, BTreeSet<FileId>>,
}

impl FilePermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `user` access to each of `files`. Duplicate grants are no-ops.
    pub fn grant<I, F>(mut self, user: impl Into<UserId>, files: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FileId>,
    {
        self.grants
            .entry(user.into())
            .or_default()
            .extend(files.into_iter().map(Into::into));
        self
    }

    /// Returns the files granted to `user`, or `None` if the user has no grants.
    pub fn files_for(&self, user: &UserId) -> Option<&BTreeSet<FileId>> {
        self.grants.get(user)
    }

    /// Returns whether `user` holds a grant for `file`.
    pub fn permits(&self, user: &UserId, file: &FileId) -> bool {
        self.files_for(user).is_some_and(|files| files.contains(file))
    }

    /// Iterates the users that hold at least one grant entry.
    pub fn holders(&self) -> impl Iterator<Item = &UserId> {
        self.grants.keys()
    }
}
