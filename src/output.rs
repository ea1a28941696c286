//! Shared output formatting for taskboard CLI commands.
//!
//! With `--json` every command prints one envelope on stdout:
//!
//! ```json
//! { "schema_version": "taskboard.v1", "command": "init", "status": "success", "data": {...} }
//! { "schema_version": "taskboard.v1", "command": "init", "status": "error", "error": {...} }
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{exit_codes, Error, Result};

pub const SCHEMA_VERSION: &str = "taskboard.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Human-readable command report: a header line, `key: value` summary rows
/// and suggested follow-up commands
#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_next_step(&mut self, value: impl Into<String>) {
        self.next_steps.push(value.into());
    }
}

impl fmt::Display for HumanOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;

        if !self.summary.is_empty() {
            f.write_str("\n\nSummary:")?;
            for (key, value) in &self.summary {
                if value.is_empty() {
                    write!(f, "\n- {key}")?;
                } else {
                    write!(f, "\n- {key}: {value}")?;
                }
            }
        }

        if !self.next_steps.is_empty() {
            f.write_str("\n\nNext steps:")?;
            for step in &self.next_steps {
                write!(f, "\n- {step}")?;
            }
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    schema_version: &'static str,
    command: &'a str,
    #[serde(flatten)]
    outcome: Outcome<'a, T>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome<'a, T: Serialize> {
    Success { data: &'a T },
    Error { error: ErrorBody },
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: i32,
    kind: &'static str,
}

fn print_envelope<T: Serialize>(command: &str, outcome: Outcome<'_, T>) -> Result<()> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        command,
        outcome,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        return print_envelope(command, Outcome::Success { data });
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{human}");
    }
    Ok(())
}

pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    if json {
        let error = ErrorBody {
            message: err.to_string(),
            code: err.exit_code(),
            kind: error_kind(err),
        };
        return print_envelope::<()>(command, Outcome::Error { error });
    }

    eprintln!("error: {err}");
    if let Some(hint) = error_hint(err) {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    output.to_string()
}

/// Subcommand named on the command line, for labelling error output
pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| matches!(arg.as_str(), "serve" | "init"))
        .unwrap_or_else(|| "taskboard".to_string())
}

fn error_kind(err: &Error) -> &'static str {
    if err.exit_code() == exit_codes::USER_ERROR {
        "user_error"
    } else {
        "operation_failed"
    }
}

fn error_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::InvalidConfig(_) | Error::TomlParse(_) => Some("fix taskboard.toml then retry"),
        Error::LockFailed(_) => Some("another taskboard process may be holding the data lock"),
        Error::Io(_) => Some("check that the data directory exists and is writable (taskboard init)"),
        _ => None,
    }
}
