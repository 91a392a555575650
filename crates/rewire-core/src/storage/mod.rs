mod config;
pub mod store;

pub use config::Config;
pub use store::{AppState, FileStore, KvStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/rewire[-<env>]/` based on REWIRE_ENV.
///
/// REWIRE_ENV defaults to `production` (plain `rewire`); any other value
/// gets its own suffixed directory, which keeps dev and test data apart.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("REWIRE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "production" {
        base_dir.join("rewire")
    } else {
        base_dir.join(format!("rewire-{env}"))
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
