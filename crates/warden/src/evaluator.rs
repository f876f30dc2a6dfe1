//! Policy evaluation engine.
//!
//! Each evaluation is a pure function of the policy seed and the request,
//! followed by exactly one append to the access log. Every model fails
//! closed: an unknown user, a missing grant, or any mismatched attribute
//! yields a denial.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use warden_types::{AccessModel, Clearance, Device, FileId, Outcome, Role, UserId};

use crate::audit::{AccessLog, AccessLogEntry};
use crate::config::PolicyConfig;
use crate::request::AccessRequest;
use crate::window::hour_of;

// ============================================================================
// Decision
// ============================================================================

/// The result of evaluating one access request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub outcome: Outcome,
    pub model: AccessModel,
    /// Human-readable explanation of the outcome.
    pub reason: String,
}

impl Decision {
    fn grant(model: AccessModel, reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Granted,
            model,
            reason: reason.into(),
        }
    }

    fn deny(model: AccessModel, reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Denied,
            model,
            reason: reason.into(),
        }
    }

    pub fn is_granted(&self) -> bool {
        self.outcome.is_granted()
    }
}

// ============================================================================
// PolicyEvaluator
// ============================================================================

/// Evaluates MAC, DAC, RBAC and ABAC requests against a fixed policy seed.
///
/// The seed is immutable after construction; only the access log grows.
/// Evaluations take `&mut self` for the log append, so sharing an evaluator
/// across threads requires external synchronization (e.g. a `Mutex`).
#[derive(Debug, Clone)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
    log: AccessLog,
}

impl PolicyEvaluator {
    /// Creates an evaluator over the built-in seed with an empty log.
    pub fn new() -> Self {
        Self::with_config(PolicyConfig::builtin())
    }

    /// Creates an evaluator over an explicit seed with an empty log.
    pub fn with_config(config: PolicyConfig) -> Self {
        debug!(
            users = config.directory.len(),
            window_start = config.window.start_hour(),
            window_end = config.window.end_hour(),
            "Policy evaluator initialized"
        );
        Self {
            config,
            log: AccessLog::new(),
        }
    }

    /// Bounds the access log to `capacity` entries (builder pattern).
    ///
    /// Must be called before any evaluation; existing entries are discarded.
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log = AccessLog::bounded(capacity);
        self
    }

    /// Mandatory access control: grants iff the user's clearance label
    /// equals `required` exactly. No clearance dominance is applied.
    pub fn evaluate_mac(
        &mut self,
        user: impl Into<UserId>,
        required: impl Into<Clearance>,
    ) -> bool {
        self.evaluate(&AccessRequest::Mac {
            user: user.into(),
            clearance: required.into(),
        })
        .is_granted()
    }

    /// Discretionary access control: grants iff `file` is in the user's
    /// permitted-file set.
    pub fn evaluate_dac(&mut self, user: impl Into<UserId>, file: impl Into<FileId>) -> bool {
        self.evaluate(&AccessRequest::Dac {
            user: user.into(),
            file: file.into(),
        })
        .is_granted()
    }

    /// Role-based access control: grants iff the user's role equals
    /// `required` exactly.
    pub fn evaluate_rbac(&mut self, user: impl Into<UserId>, required: impl Into<Role>) -> bool {
        self.evaluate(&AccessRequest::Rbac {
            user: user.into(),
            role: required.into(),
        })
        .is_granted()
    }

    /// Attribute-based access control: grants iff `hour` lies inside the
    /// work window and `device` is the user's bound device.
    ///
    /// Hours outside 0-23 are not rejected here; they simply never fall
    /// inside the window.
    pub fn evaluate_abac(
        &mut self,
        user: impl Into<UserId>,
        hour: u32,
        device: impl Into<Device>,
    ) -> bool {
        self.evaluate(&AccessRequest::Abac {
            user: user.into(),
            hour,
            device: device.into(),
        })
        .is_granted()
    }

    /// Attribute-based access control using the UTC hour of `at`.
    pub fn evaluate_abac_at(
        &mut self,
        user: impl Into<UserId>,
        at: DateTime<Utc>,
        device: impl Into<Device>,
    ) -> bool {
        self.evaluate_abac(user, hour_of(at), device)
    }

    /// Evaluates a typed request, records it, and returns the full decision.
    pub fn evaluate(&mut self, request: &AccessRequest) -> Decision {
        let decision = decide(&self.config, request);
        let user = request.user();

        if decision.is_granted() {
            info!(
                user = %user,
                model = %decision.model,
                reason = %decision.reason,
                "Access granted"
            );
        } else {
            warn!(
                user = %user,
                model = %decision.model,
                reason = %decision.reason,
                "Access denied"
            );
        }

        self.log.record(AccessLogEntry::new(
            user.clone(),
            decision.model,
            decision.outcome,
        ));

        decision
    }

    /// Returns the access log. Reading it has no side effects.
    pub fn access_log(&self) -> &AccessLog {
        &self.log
    }

    /// Returns the policy seed this evaluator was built with.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns whether `user` is in the directory. Not logged.
    pub fn knows_user(&self, user: &UserId) -> bool {
        self.config.directory.contains(user)
    }
}

impl Default for PolicyEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Decision Rules
// ============================================================================

/// Applies the model's rule to the seed. Pure; performs no logging.
fn decide(config: &PolicyConfig, request: &AccessRequest) -> Decision {
    let model = request.model();
    let user = request.user();

    let Some(record) = config.directory.lookup(user) else {
        return Decision::deny(model, format!("unknown user '{user}'"));
    };

    match request {
        AccessRequest::Mac { clearance, .. } => {
            if record.clearance == *clearance {
                Decision::grant(model, format!("clearance '{clearance}' matches"))
            } else {
                Decision::deny(
                    model,
                    format!(
                        "clearance '{}' does not match required '{clearance}'",
                        record.clearance
                    ),
                )
            }
        }
        AccessRequest::Dac { file, .. } => match config.permissions.files_for(user) {
            Some(files) if files.contains(file) => {
                Decision::grant(model, format!("'{file}' is in the permitted files"))
            }
            Some(_) => Decision::deny(model, format!("'{file}' is not in the permitted files")),
            None => Decision::deny(model, "no file permissions recorded"),
        },
        AccessRequest::Rbac { role, .. } => {
            if record.role == *role {
                Decision::grant(model, format!("role '{role}' matches"))
            } else {
                Decision::deny(
                    model,
                    format!("role '{}' does not match required '{role}'", record.role),
                )
            }
        }
        AccessRequest::Abac { hour, device, .. } => {
            let window = config.window;
            if !window.contains(*hour) {
                Decision::deny(
                    model,
                    format!(
                        "hour {hour} is outside the work window {}-{}",
                        window.start_hour(),
                        window.end_hour()
                    ),
                )
            } else if record.device != *device {
                Decision::deny(model, format!("device '{device}' is not the bound device"))
            } else {
                Decision::grant(model, "within work hours on the bound device")
            }
        }
    }
}
