//! Command-line interface for taskboard
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use crate::output::OutputOptions;

mod init;
mod serve;

/// taskboard - personal task tracker
///
/// Serves a JSON HTTP API for tasks and categories, persisted as flat JSON
/// documents in a data directory.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (defaults to ./taskboard.toml when present)
    #[arg(long, global = true, env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the collection documents
    #[arg(long, global = true, env = "TASKBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:3000)
        #[arg(long, env = "TASKBOARD_BIND")]
        bind: Option<String>,
    },

    /// Create the data directory and empty collection documents
    Init,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };
        match self.command {
            Commands::Serve { bind } => {
                let config = resolve_config(self.config.as_deref(), self.data_dir, bind)?;
                serve::run(config)
            }
            Commands::Init => {
                let config = resolve_config(self.config.as_deref(), self.data_dir, None)?;
                init::run(&config, options)
            }
        }
    }
}

/// Config file plus command-line overrides
///
/// An explicitly named config file must load; the implicit
/// `./taskboard.toml` falls back to defaults.
pub fn resolve_config(
    path: Option<&Path>,
    data_dir: Option<PathBuf>,
    bind: Option<String>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(CONFIG_FILE)),
    };

    if let Some(data_dir) = data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    config.validate()?;
    Ok(config)
}
