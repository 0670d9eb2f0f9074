//! Platform Path Resolution
//!
//! Computes the OS-conventional location of the engine's per-user data
//! directory. Resolution never touches the filesystem; directory creation
//! is the [`UserDataStore`](super::UserDataStore)'s job.

use std::path::PathBuf;

use crate::errors::{Result, VoltrayError};

/// Name of the engine's directory inside the platform data root.
pub const APP_DIR_NAME: &str = "Voltray";

/// Resolves the per-user application data directory for the engine.
///
/// - Windows: `%APPDATA%\Voltray`
/// - macOS: `~/Library/Application Support/Voltray`
/// - Linux: `$XDG_DATA_HOME/Voltray`, falling back to `~/.local/share/Voltray`
///
/// Returns [`VoltrayError::PathResolutionFailed`] when the OS reports no
/// usable data directory (no home directory, stripped-down environments).
pub fn platform_data_dir() -> Result<PathBuf> {
    match dirs::data_dir() {
        Some(base) => Ok(base.join(APP_DIR_NAME)),
        None => {
            log::error!("Failed to determine the platform app data path");
            Err(VoltrayError::PathResolutionFailed)
        }
    }
}
