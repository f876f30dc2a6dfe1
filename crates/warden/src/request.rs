//! Access requests and boundary input parsing.
//!
//! Text arriving from a prompt or command line is turned into typed requests
//! here. Malformed input is an [`InputError`], never a policy decision: the
//! evaluator is not consulted and nothing is logged.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;
use warden_types::{AccessModel, Clearance, Device, FileId, ParseModelError, Role, UserId};

use crate::directory::Directory;

/// Invalid caller input, rejected before evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The claimed identity is not in the directory.
    #[error("Invalid username '{0}'. Access Denied.")]
    UnknownUser(UserId),

    /// The hour is not an integer.
    #[error("Invalid input for hour '{0}'. Please enter a number between 0-23.")]
    InvalidHour(String),

    /// The hour is an integer but not a valid hour of the day.
    #[error("Hour {0} is out of range. Please enter a number between 0-23.")]
    HourOutOfRange(String),

    /// The model choice names no known model.
    #[error(transparent)]
    UnknownModel(#[from] ParseModelError),
}

/// A single typed access request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequest {
    Mac {
        user: UserId,
        clearance: Clearance,
    },
    Dac {
        user: UserId,
        file: FileId,
    },
    Rbac {
        user: UserId,
        role: Role,
    },
    Abac {
        user: UserId,
        hour: u32,
        device: Device,
    },
}

impl AccessRequest {
    pub fn user(&self) -> &UserId {
        match self {
            AccessRequest::Mac { user, .. }
            | AccessRequest::Dac { user, .. }
            | AccessRequest::Rbac { user, .. }
            | AccessRequest::Abac { user, .. } => user,
        }
    }

    pub fn model(&self) -> AccessModel {
        match self {
            AccessRequest::Mac { .. } => AccessModel::Mac,
            AccessRequest::Dac { .. } => AccessModel::Dac,
            AccessRequest::Rbac { .. } => AccessModel::Rbac,
            AccessRequest::Abac { .. } => AccessModel::Abac,
        }
    }
}

// ============================================================================
// Boundary Parsing
// ============================================================================

/// Normalizes a claimed username and checks it against the directory.
///
/// This is the identity gate: unknown users are rejected here and never
/// reach an evaluation.
pub fn parse_user(directory: &Directory, input: &str) -> Result<UserId, InputError> {
    let user = UserId::new(input);
    if directory.contains(&user) {
        Ok(user)
    } else {
        Err(InputError::UnknownUser(user))
    }
}

/// Parses a menu choice or model name.
pub fn parse_model(input: &str) -> Result<AccessModel, InputError> {
    Ok(input.parse::<AccessModel>()?)
}

/// Parses an hour of day, accepting only integers in `0..=23`.
///
/// # Examples
///
/// ```
/// use warden::request::{parse_hour, InputError};
///
/// assert_eq!(parse_hour(" 10 "), Ok(10));
/// assert_eq!(parse_hour("24"), Err(InputError::HourOutOfRange("24".to_string())));
/// assert!(matches!(parse_hour("ten"), Err(InputError::InvalidHour(_))));
/// ```
pub fn parse_hour(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    let out_of_range = || InputError::HourOutOfRange(trimmed.to_string());

    let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => InputError::InvalidHour(trimmed.to_string()),
    })?;

    match u32::try_from(value) {
        Ok(hour) if hour <= 23 => Ok(hour),
        _ => Err(out_of_range()),
    }
}

/// Trims and lowercases a clearance label.
pub fn parse_clearance(input: &str) -> Clearance {
    Clearance::from(input.trim().to_lowercase())
}

/// Trims and lowercases a role label.
pub fn parse_role(input: &str) -> Role {
    Role::from(input.trim().to_lowercase())
}

/// Trims and lowercases a device label.
pub fn parse_device(input: &str) -> Device {
    Device::new(input.trim().to_lowercase())
}

/// Trims a file identifier. Case is preserved.
pub fn parse_file(input: &str) -> FileId {
    FileId::new(input.trim())
}
