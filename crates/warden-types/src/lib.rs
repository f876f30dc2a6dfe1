//! # warden-types: Core types for `Warden`
//!
//! This crate contains the shared vocabulary of the access-control system:
//! - Identities ([`UserId`])
//! - Subject attributes ([`Role`], [`Clearance`], [`Device`])
//! - Resources ([`FileId`])
//! - Evaluation tags ([`AccessModel`], [`Outcome`])
//!
//! Attribute labels are compared by exact text. [`Clearance`] in particular is
//! an unordered tag: `top-secret` does not dominate `secret`.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Identity
// ============================================================================

/// Case-normalized user identity.
///
/// Construction trims surrounding whitespace and lowercases, so `" Deng "`
/// and `"deng"` name the same user.
///
/// # Examples
///
/// ```
/// # use warden_types::UserId;
/// assert_eq!(UserId::new(" Deng "), UserId::new("deng"));
/// assert_eq!(UserId::new("LUNA").as_str(), "luna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

// ============================================================================
// Role
// ============================================================================

/// Organizational role bound to a user.
///
/// The four built-in roles have dedicated variants; any other label is kept
/// verbatim in [`Role::Custom`]. Equality is by text form, so
/// `Role::Custom("admin".into()) == Role::Admin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Doctor,
    Admin,
    Nurse,
    Assistant,
    /// Any role label outside the built-in set.
    Custom(String),
}

impl Role {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Returns the canonical text label.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Doctor => "doctor",
            Role::Admin => "admin",
            Role::Nurse => "nurse",
            Role::Assistant => "assistant",
            Role::Custom(name) => name,
        }
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "doctor" => Role::Doctor,
            "admin" => Role::Admin,
            "nurse" => Role::Nurse,
            "assistant" => Role::Assistant,
            other => Role::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(role) => role,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

// ============================================================================
// Clearance
// ============================================================================

/// Security clearance label.
///
/// Clearances are flat tags: two clearances match only when their labels are
/// identical. No lattice or dominance relation exists between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Clearance {
    TopSecret,
    Secret,
    Confidential,
    /// Any clearance label outside the built-in set.
    Custom(String),
}

impl Clearance {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Clearance::TopSecret => "top-secret",
            Clearance::Secret => "secret",
            Clearance::Confidential => "confidential",
            Clearance::Custom(name) => name,
        }
    }
}

impl PartialEq for Clearance {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Clearance {}

impl Hash for Clearance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Display for Clearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Clearance {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "top-secret" => Clearance::TopSecret,
            "secret" => Clearance::Secret,
            "confidential" => Clearance::Confidential,
            other => Clearance::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Clearance {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(clearance) => clearance,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Clearance {
    fn from(value: String) -> Self {
        Clearance::from(value.as_str())
    }
}

impl From<Clearance> for String {
    fn from(clearance: Clearance) -> Self {
        clearance.as_str().to_string()
    }
}

// ============================================================================
// Device and File - plain labels
// ============================================================================

/// Hardware profile a user is bound to (e.g. `company-laptop`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Device(String);

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Device {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a file guarded by discretionary access control.
///
/// File identifiers are case-sensitive: `File1` and `file1` differ.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Access Model
// ============================================================================

/// Error returned when text names no known access-control model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown access model '{0}' (expected 1-4, mac, dac, rbac or abac)")]
pub struct ParseModelError(pub String);

/// The access-control model an evaluation was performed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessModel {
    /// Mandatory access control: clearance label match.
    Mac,
    /// Discretionary access control: per-user file list.
    Dac,
    /// Role-based access control: role label match.
    Rbac,
    /// Attribute-based access control: work hours plus bound device.
    Abac,
}

impl AccessModel {
    /// All models in menu order.
    pub const ALL: [AccessModel; 4] = [
        AccessModel::Mac,
        AccessModel::Dac,
        AccessModel::Rbac,
        AccessModel::Abac,
    ];

    /// Short tag used in access-log lines.
    pub fn tag(self) -> &'static str {
        match self {
            AccessModel::Mac => "MAC",
            AccessModel::Dac => "DAC",
            AccessModel::Rbac => "RBAC",
            AccessModel::Abac => "ABAC",
        }
    }

    /// Long-form name for menus and help output.
    pub fn description(self) -> &'static str {
        match self {
            AccessModel::Mac => "Mandatory Access Control",
            AccessModel::Dac => "Discretionary Access Control",
            AccessModel::Rbac => "Role-Based Access Control",
            AccessModel::Abac => "Attribute-Based Access Control",
        }
    }

    /// One-based position in the interactive menu.
    pub fn menu_number(self) -> u8 {
        match self {
            AccessModel::Mac => 1,
            AccessModel::Dac => 2,
            AccessModel::Rbac => 3,
            AccessModel::Abac => 4,
        }
    }
}

impl Display for AccessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for AccessModel {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "mac" => Ok(AccessModel::Mac),
            "2" | "dac" => Ok(AccessModel::Dac),
            "3" | "rbac" => Ok(AccessModel::Rbac),
            "4" | "abac" => Ok(AccessModel::Abac),
            _ => Err(ParseModelError(s.to_string())),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a single access evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Granted,
    Denied,
}

impl Outcome {
    pub fn is_granted(self) -> bool {
        matches!(self, Outcome::Granted)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Granted => write!(f, "Access Granted"),
            Outcome::Denied => write!(f, "Access Denied"),
        }
    }
}

impl From<bool> for Outcome {
    fn from(granted: bool) -> Self {
        if granted {
            Outcome::Granted
        } else {
            Outcome::Denied
        }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_granted()
    }
}

#[cfg(test)]
mod tests;
