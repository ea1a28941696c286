//! taskboard - personal task tracker library
//!
//! A single-user task list with categories and deadlines, exposed as a JSON
//! HTTP API and persisted as flat JSON documents.
//!
//! # Core Concepts
//!
//! - **Tasks**: titled to-do items with a status, optional deadline and
//!   category ids
//! - **Categories**: named, colored labels; deleting one strips it from
//!   every task
//! - **Collection documents**: one JSON file per collection holding all
//!   records plus the id counter, rewritten whole under a file lock
//!
//! # Module Organization
//!
//! - `api`: axum router and handlers
//! - `category`: category model, validation and store
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `taskboard.toml`
//! - `error`: error types, HTTP status and exit code mapping
//! - `lock`: file locking and atomic writes
//! - `output`: CLI output formatting
//! - `patch`: absent/null/value request fields
//! - `storage`: collection document access
//! - `task`: task model, validation, filter/sort and store
//! - `timestamp`: deadline parsing and canonical timestamps

pub mod api;
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod lock;
pub mod output;
pub mod patch;
pub mod storage;
pub mod task;
pub mod timestamp;

pub use error::{Error, Result};
