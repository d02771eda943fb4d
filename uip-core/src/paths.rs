//! Platform directory resolution for config and data files.

use std::path::PathBuf;

use crate::error::{UipError, UipResult};

/// Directory name used under the platform config/data roots.
const DIR_NAME: &str = "UniqueIP";

/// Platform-specific configuration directory.
///
/// - Windows: `%APPDATA%/UniqueIP`
/// - macOS: `~/Library/Application Support/UniqueIP`
/// - Linux: `~/.config/UniqueIP`
pub fn config_dir() -> UipResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| UipError::Config("could not determine config directory".into()))?;
    Ok(base.join(DIR_NAME))
}

/// Platform-specific data directory (log files live here).
pub fn data_dir() -> UipResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| UipError::Config("could not determine data directory".into()))?;
    Ok(base.join(DIR_NAME))
}
