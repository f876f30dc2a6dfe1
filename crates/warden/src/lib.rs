//! # warden: Access control evaluation
//!
//! Evaluates access requests under four classic access-control models
//! against a fixed, in-memory policy seed:
//!
//! - **MAC** (mandatory): the user's clearance label must equal the required one
//! - **DAC** (discretionary): the file must be in the user's permitted set
//! - **RBAC** (role-based): the user's role must equal the required one
//! - **ABAC** (attribute-based): the hour must fall in the work window and the
//!   request must come from the user's bound device
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Boundary (prompt / command line)            │
//! │  ├─ Identity gate (unknown users rejected)   │
//! │  └─ Input parsing (hour, model, labels)      │
//! └─────────────────┬───────────────────────────┘
//!                   │ AccessRequest
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  PolicyEvaluator                             │
//! │  ├─ PolicyConfig (directory, grants, window) │
//! │  ├─ Fail-closed rule per model               │
//! │  └─ One AccessLog append per evaluation      │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  Decision                                    │
//! │  - Outcome (Granted/Denied)                  │
//! │  - Model tag                                 │
//! │  - Human-readable reason                     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//!
//! ```
//! use warden::PolicyEvaluator;
//!
//! let mut evaluator = PolicyEvaluator::new();
//!
//! assert!(evaluator.evaluate_mac("deng", "top-secret"));
//! assert!(!evaluator.evaluate_dac("keng", "file2"));
//! assert!(evaluator.evaluate_rbac("red", "admin"));
//! assert!(!evaluator.evaluate_abac("luna", 20, "company-laptop"));
//!
//! assert_eq!(
//!     evaluator.access_log().lines(),
//!     vec![
//!         "deng tried MAC access: Access Granted",
//!         "keng tried DAC access: Access Denied",
//!         "red tried RBAC access: Access Granted",
//!         "luna tried ABAC access: Access Denied",
//!     ]
//! );
//! ```
//!
//! ### Custom seed
//!
//! ```
//! use warden::{PolicyConfig, PolicyEvaluator};
//! use warden::directory::{Directory, FilePermissions, UserRecord};
//! use warden::window::WorkWindow;
//! use warden_types::{Clearance, Role};
//!
//! let config = PolicyConfig::new(
//!     Directory::new().with_user(
//!         "night-nurse",
//!         UserRecord::new(Role::Nurse, Clearance::Secret, "ward-tablet"),
//!     ),
//!     FilePermissions::new().grant("night-nurse", ["chart-7"]),
//!     WorkWindow::new(20, 24)?,
//! );
//! config.validate()?;
//!
//! let mut evaluator = PolicyEvaluator::with_config(config);
//! assert!(evaluator.evaluate_abac("night-nurse", 22, "ward-tablet"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audit;
pub mod config;
pub mod directory;
pub mod evaluator;
pub mod request;
pub mod window;

// Kani proofs for bounded model checking
#[cfg(any(test, kani))]
mod kani_proofs;

pub use audit::{AccessLog, AccessLogEntry};
pub use config::{ConfigError, PolicyConfig};
pub use evaluator::{Decision, PolicyEvaluator};
pub use request::{AccessRequest, InputError};
pub use window::{WindowError, WorkWindow};
