//! taskboard - personal task tracker
//!
//! Serves the task/category JSON API over flat-file storage.

use clap::Parser;
use taskboard::cli::{Cli, Commands};
use taskboard::output::{emit_error, infer_command_name_from_args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SERVE_DEFAULT_FILTER: &str = "taskboard=info,tower_http=info";
const DEFAULT_FILTER: &str = "warn";

fn main() {
    let command = infer_command_name_from_args();
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Serve { .. } => SERVE_DEFAULT_FILTER,
        Commands::Init => DEFAULT_FILTER,
    };
    // RUST_LOG overrides; ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let json = cli.json;
    if let Err(err) = cli.run() {
        let _ = emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}
