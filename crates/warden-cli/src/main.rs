//! Warden command-line interface.
//!
//! Evaluates access requests against the built-in policy under four models:
//! MAC, DAC, RBAC and ABAC.
//!
//! # Quick Start
//!
//! ```bash
//! # Interactive session
//! warden
//!
//! # One-shot checks
//! warden check mac --user deng --clearance top-secret
//! warden check abac --user luna --hour 10 --device company-laptop --show-log
//!
//! # Seed directory
//! warden users
//! ```

mod commands;
mod style;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use warden::PolicyEvaluator;
use warden_config::{OutputFormat, WardenSettings};
use warden_types::Outcome;

use commands::check::{CheckArgs, CheckOptions};
use commands::session::SessionEnd;

/// Exit code for a denied request.
const EXIT_DENIED: u8 = 1;
/// Exit code for malformed input (unknown user, bad hour, bad choice).
const EXIT_INPUT_ERROR: u8 = 2;

/// Warden - access control evaluation under MAC, DAC, RBAC and ABAC.
#[derive(Parser)]
#[command(name = "warden")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Settings file, or a directory containing warden.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive access-control session (the default).
    Session,

    /// Evaluate a single request.
    #[command(subcommand)]
    Check(CheckCommands),

    /// List the users in the built-in directory.
    Users {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show version information.
    Version,
}

#[derive(Subcommand)]
enum CheckCommands {
    /// Mandatory access control: compare clearance labels.
    Mac {
        #[arg(short, long)]
        user: String,

        /// Required clearance (top-secret, secret, confidential).
        #[arg(short, long)]
        clearance: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Discretionary access control: consult the file grant list.
    Dac {
        #[arg(short, long)]
        user: String,

        /// File name (file1, file2, file3).
        #[arg(short, long)]
        file: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Role-based access control: compare role labels.
    Rbac {
        #[arg(short, long)]
        user: String,

        /// Required role (doctor, admin, nurse, assistant).
        #[arg(short, long)]
        role: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Attribute-based access control: working hours and registered device.
    Abac {
        #[arg(short, long)]
        user: String,

        /// Current hour (0-23).
        #[arg(long, allow_hyphen_values = true)]
        hour: String,

        /// Device in use (company-laptop, personal-laptop, company-desktop).
        #[arg(short, long)]
        device: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Clone, Copy)]
struct OutputArgs {
    /// Print the access log after the decision.
    #[arg(long)]
    show_log: bool,

    /// Print the decision as JSON.
    #[arg(long)]
    json: bool,
}

impl CheckCommands {
    fn split(self) -> (CheckArgs, OutputArgs) {
        match self {
            CheckCommands::Mac {
                user,
                clearance,
                output,
            } => (CheckArgs::Mac { user, clearance }, output),
            CheckCommands::Dac { user, file, output } => (CheckArgs::Dac { user, file }, output),
            CheckCommands::Rbac { user, role, output } => (CheckArgs::Rbac { user, role }, output),
            CheckCommands::Abac {
                user,
                hour,
                device,
                output,
            } => (CheckArgs::Abac { user, hour, device }, output),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref())?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        format = ?settings.output.format,
        color = settings.output.color,
        audit_capacity = settings.audit.capacity,
        "Settings loaded"
    );

    let color_disabled = cli.no_color
        || !settings.output.color
        || std::env::var_os("NO_COLOR").is_some()
        || !std::io::stdout().is_terminal();
    style::set_no_color(color_disabled);

    let mut evaluator = new_evaluator(&settings);

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let end = commands::session::run(&mut evaluator)?;
            debug!(?end, entries = evaluator.access_log().len(), "Session ended");
            Ok(match end {
                SessionEnd::Evaluated(Outcome::Granted) => ExitCode::SUCCESS,
                SessionEnd::Evaluated(Outcome::Denied) | SessionEnd::Rejected => {
                    ExitCode::from(EXIT_DENIED)
                }
                SessionEnd::InvalidInput => ExitCode::from(EXIT_INPUT_ERROR),
            })
        }
        Commands::Check(cmd) => {
            let (args, output) = cmd.split();
            let options = CheckOptions {
                show_log: output.show_log,
                json: output.json || settings.output.format == OutputFormat::Json,
            };
            match commands::check::run(&mut evaluator, &args, options)? {
                Ok(decision) if decision.is_granted() => Ok(ExitCode::SUCCESS),
                Ok(_) => Ok(ExitCode::from(EXIT_DENIED)),
                Err(e) => {
                    style::print_error(&e.to_string());
                    Ok(ExitCode::from(EXIT_INPUT_ERROR))
                }
            }
        }
        Commands::Users { json } => {
            let json = json || settings.output.format == OutputFormat::Json;
            commands::users::run(&evaluator, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            commands::version::run();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<WardenSettings> {
    match path {
        Some(path) if path.is_file() => WardenSettings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        Some(dir) => WardenSettings::load_from_dir(dir)
            .with_context(|| format!("failed to load settings from {}", dir.display())),
        None => WardenSettings::load().context("failed to load settings"),
    }
}

fn new_evaluator(settings: &WardenSettings) -> PolicyEvaluator {
    let evaluator = PolicyEvaluator::new();
    match settings.audit.bound() {
        Some(capacity) => evaluator.with_log_capacity(capacity),
        None => evaluator,
    }
}
