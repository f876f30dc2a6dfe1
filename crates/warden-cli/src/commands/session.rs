//! Interactive access-control session.
//!
//! Walks a single user through one evaluation:
//! 1. Claim an identity (rejected outright if unknown)
//! 2. Pick a model from the 1-4 menu
//! 3. Supply the model's arguments
//!
//! The result is printed, followed by the session's access log.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use warden::PolicyEvaluator;
use warden::request::{
    parse_clearance, parse_device, parse_file, parse_hour, parse_model, parse_role, parse_user,
};
use warden_types::{AccessModel, Outcome};

use crate::style::colors::SemanticStyle;
use crate::style::{styled_outcome, write_access_log};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The claimed username was not in the directory.
    Rejected,
    /// The menu choice or a model argument was invalid.
    InvalidInput,
    /// An evaluation ran.
    Evaluated(Outcome),
}

pub fn run(evaluator: &mut PolicyEvaluator) -> Result<SessionEnd> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    run_with(evaluator, &mut input, &mut stdout)
}

/// Runs a session over arbitrary input and output streams.
pub fn run_with<R: BufRead, W: Write>(
    evaluator: &mut PolicyEvaluator,
    input: &mut R,
    out: &mut W,
) -> Result<SessionEnd> {
    let claimed = prompt(input, out, "Enter your username: ")?;
    let user = match parse_user(&evaluator.config().directory, &claimed) {
        Ok(user) => user,
        Err(_) => {
            writeln!(out, "{}", "Invalid username. Access Denied.".error())?;
            return Ok(SessionEnd::Rejected);
        }
    };

    writeln!(out)?;
    writeln!(out, "Choose an access control model:")?;
    for model in AccessModel::ALL {
        writeln!(
            out,
            "{}. {} ({})",
            model.menu_number(),
            model,
            model.description()
        )?;
    }

    let choice = prompt(input, out, "Enter your choice (1-4): ")?;

    let end = match parse_model(&choice) {
        Ok(AccessModel::Mac) => {
            let clearance = prompt(
                input,
                out,
                "Enter required clearance (top-secret, confidential, secret): ",
            )?;
            let granted = evaluator.evaluate_mac(user, parse_clearance(&clearance));
            report(out, granted)?
        }
        Ok(AccessModel::Dac) => {
            let file = prompt(input, out, "Enter file name (file1, file2, file3): ")?;
            let granted = evaluator.evaluate_dac(user, parse_file(&file));
            report(out, granted)?
        }
        Ok(AccessModel::Rbac) => {
            let role = prompt(
                input,
                out,
                "Enter required role (doctor, admin, nurse, assistant): ",
            )?;
            let granted = evaluator.evaluate_rbac(user, parse_role(&role));
            report(out, granted)?
        }
        Ok(AccessModel::Abac) => {
            let hour = prompt(input, out, "Enter current hour (0-23): ")?;
            match parse_hour(&hour) {
                Ok(hour) => {
                    let device = prompt(
                        input,
                        out,
                        "Enter your device (company-laptop, personal-laptop, company-desktop): ",
                    )?;
                    let granted = evaluator.evaluate_abac(user, hour, parse_device(&device));
                    report(out, granted)?
                }
                Err(_) => {
                    writeln!(
                        out,
                        "{}",
                        "Invalid input for hour. Please enter a number between 0-23.".error()
                    )?;
                    SessionEnd::InvalidInput
                }
            }
        }
        Err(_) => {
            writeln!(out, "{}", "Invalid choice.".error())?;
            SessionEnd::InvalidInput
        }
    };

    write_access_log(out, evaluator.access_log())?;
    out.flush()?;

    Ok(end)
}

/// Writes `text`, flushes, and reads one line. EOF yields an empty string.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn report<W: Write>(out: &mut W, granted: bool) -> io::Result<SessionEnd> {
    let outcome = Outcome::from(granted);
    writeln!(out, "{}", styled_outcome(outcome))?;
    Ok(SessionEnd::Evaluated(outcome))
}
