//! Output helper functions for consistent styled messages.

use std::io::{self, Write};

use warden::AccessLog;
use warden_types::Outcome;

use super::colors::SemanticStyle;

/// Prints an error message with an X mark.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".error(), msg);
}

/// Prints a hint/suggestion with an arrow.
pub fn print_hint(msg: &str) {
    println!("{} {}", "→".muted(), msg.muted());
}

/// Renders an outcome as `Access Granted` / `Access Denied`, colored.
pub fn styled_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Granted => outcome.success(),
        Outcome::Denied => outcome.error(),
    }
}

/// Writes the access log dump: a blank line, `Access Log:`, then one line
/// per entry, oldest first.
pub fn write_access_log<W: Write>(out: &mut W, log: &AccessLog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Access Log:".header())?;
    for line in log.lines() {
        writeln!(out, "{line}")?;
    }
    if log.evicted() > 0 {
        writeln!(
            out,
            "{}",
            format!("({} older entries evicted)", log.evicted()).muted()
        )?;
    }
    Ok(())
}
