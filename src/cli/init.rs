//! taskboard init command implementation
//!
//! Creates the data directory and any missing collection documents.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

#[derive(serde::Serialize)]
struct InitReport {
    data_dir: PathBuf,
    created: Vec<&'static str>,
}

pub fn run(config: &Config, options: OutputOptions) -> Result<()> {
    let storage = config.storage();
    let created: Vec<&'static str> = storage
        .init()?
        .into_iter()
        .map(|kind| kind.file_name())
        .collect();

    let report = InitReport {
        data_dir: storage.data_dir().to_path_buf(),
        created: created.clone(),
    };

    let header = if created.is_empty() {
        "taskboard already initialized"
    } else {
        "taskboard initialized"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("data dir", storage.data_dir().display().to_string());
    if created.is_empty() {
        human.push_summary("created", "nothing");
    } else {
        human.push_summary("created", created.join(", "));
    }
    human.push_next_step("taskboard serve");

    emit_success(options, "init", &report, Some(&human))
}
