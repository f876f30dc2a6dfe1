//! One-shot evaluation commands.

use anyhow::Result;
use serde_json::json;
use warden::request::{
    parse_clearance, parse_device, parse_file, parse_hour, parse_role, parse_user,
};
use warden::{AccessRequest, Decision, InputError, PolicyEvaluator};

use crate::style::colors::SemanticStyle;
use crate::style::{styled_outcome, write_access_log};

/// Raw, unvalidated arguments for a single check.
#[derive(Debug, Clone)]
pub enum CheckArgs {
    Mac { user: String, clearance: String },
    Dac { user: String, file: String },
    Rbac { user: String, role: String },
    Abac { user: String, hour: String, device: String },
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    pub show_log: bool,
    pub json: bool,
}

/// Validates the arguments into a typed request.
///
/// Unknown users and malformed hours are rejected here; the evaluator is not
/// consulted and nothing is logged.
pub fn build_request(
    evaluator: &PolicyEvaluator,
    args: &CheckArgs,
) -> Result<AccessRequest, InputError> {
    let directory = &evaluator.config().directory;
    Ok(match args {
        CheckArgs::Mac { user, clearance } => AccessRequest::Mac {
            user: parse_user(directory, user)?,
            clearance: parse_clearance(clearance),
        },
        CheckArgs::Dac { user, file } => AccessRequest::Dac {
            user: parse_user(directory, user)?,
            file: parse_file(file),
        },
        CheckArgs::Rbac { user, role } => AccessRequest::Rbac {
            user: parse_user(directory, user)?,
            role: parse_role(role),
        },
        CheckArgs::Abac { user, hour, device } => AccessRequest::Abac {
            user: parse_user(directory, user)?,
            hour: parse_hour(hour)?,
            device: parse_device(device),
        },
    })
}

/// Evaluates one request and prints the outcome.
pub fn run(
    evaluator: &mut PolicyEvaluator,
    args: &CheckArgs,
    options: CheckOptions,
) -> Result<Result<Decision, InputError>> {
    let request = match build_request(evaluator, args) {
        Ok(request) => request,
        Err(e) => return Ok(Err(e)),
    };

    let decision = evaluator.evaluate(&request);

    if options.json {
        let mut body = json!({
            "user": request.user(),
            "model": decision.model,
            "outcome": decision.outcome,
            "granted": decision.is_granted(),
            "reason": decision.reason,
        });
        if options.show_log {
            body["log"] = serde_json::to_value(
                evaluator.access_log().entries().collect::<Vec<_>>(),
            )?;
        }
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", styled_outcome(decision.outcome));
        println!("{}", decision.reason.muted());
        if options.show_log {
            write_access_log(&mut std::io::stdout(), evaluator.access_log())?;
        }
    }

    Ok(Ok(decision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_types::{AccessModel, UserId};

    #[test]
    fn test_build_request_normalizes_labels() {
        let evaluator = PolicyEvaluator::new();
        let request = build_request(
            &evaluator,
            &CheckArgs::Abac {
                user: "LUNA".to_string(),
                hour: " 10 ".to_string(),
                device: "Company-Laptop".to_string(),
            },
        )
        .unwrap();

        assert_eq!(request.model(), AccessModel::Abac);
        assert_eq!(request.user(), &UserId::new("luna"));
    }

    #[test]
    fn test_build_request_rejects_unknown_user() {
        let evaluator = PolicyEvaluator::new();
        let result = build_request(
            &evaluator,
            &CheckArgs::Rbac {
                user: "mallory".to_string(),
                role: "admin".to_string(),
            },
        );

        assert_eq!(result, Err(InputError::UnknownUser(UserId::new("mallory"))));
    }

    #[test]
    fn test_build_request_rejects_bad_hour() {
        let evaluator = PolicyEvaluator::new();
        let result = build_request(
            &evaluator,
            &CheckArgs::Abac {
                user: "luna".to_string(),
                hour: "late".to_string(),
                device: "company-laptop".to_string(),
            },
        );

        assert!(matches!(result, Err(InputError::InvalidHour(_))));
    }
}
