mod config;
mod documents;

pub use config::Config;
pub use documents::{Document, DocumentStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/tempo[-dev]/` based on TEMPO_ENV.
///
/// Set TEMPO_ENV=dev to use a development data directory. TEMPO_DATA_DIR
/// overrides the location entirely (used by tests and scripts).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("TEMPO_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TEMPO_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("tempo-dev")
            } else {
                base_dir.join("tempo")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|source| StorageError::DataDir { path: dir.clone(), source })?;
    Ok(dir)
}
