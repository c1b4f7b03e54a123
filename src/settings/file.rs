//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::Settings;
use crate::error::Result;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut data = serde_json::to_string_pretty(settings)?;
    data.push('\n');
    fs::write(path, data)?;

    debug!("saved settings to {}", path.display());
    Ok(())
}

/// Missing file means defaults; a file that does not parse is an error.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("no settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&data)?;
    Ok(settings.sanitized())
}

#[inline]
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("easypass")
        .join("settings.json")
}
