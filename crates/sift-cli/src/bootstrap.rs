use std::path::Path;

use anyhow::Context;
use sift_config::SiftConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SiftConfig> {
    let mut config = SiftConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(db) = &flags.db {
        config.store.path.clone_from(db);
    }
    ensure_store_dir(&config)?;
    Ok(config)
}

/// Create the parent directory of an on-disk database.
fn ensure_store_dir(config: &SiftConfig) -> anyhow::Result<()> {
    if config.store.is_in_memory() {
        return Ok(());
    }
    if let Some(parent) = Path::new(&config.store.path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
            tracing::debug!(dir = %parent.display(), "created store directory");
        }
    }
    Ok(())
}
