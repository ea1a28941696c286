//! taskboard serve command implementation

use tracing::info;

use crate::api::{self, AppState};
use crate::config::Config;
use crate::error::Result;

pub fn run(config: Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let storage = config.storage();

    let created = storage.init()?;
    if !created.is_empty() {
        info!(data_dir = %storage.data_dir().display(), "initialized data directory");
    }

    let state = AppState::from_config(&config);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(api::serve(addr, state))
}
