//! Loading `TerrainSettings` from JSON and writing heightmaps back out.

use std::fmt;
use std::path::Path;

use terrain::{Heightmap, TerrainSettings};

/// Env var naming a JSON settings file.
pub const CONFIG_ENV: &str = "TERRAGEN_CONFIG";
/// Env var naming the file the heightmap JSON is written to.
pub const OUTPUT_ENV: &str = "TERRAGEN_OUTPUT";

#[derive(Debug)]
pub enum SettingsFileError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SettingsFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsFileError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsFileError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for SettingsFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsFileError::Io(e) => Some(e),
            SettingsFileError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsFileError {
    fn from(e: std::io::Error) -> Self {
        SettingsFileError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsFileError {
    fn from(e: serde_json::Error) -> Self {
        SettingsFileError::Json(e)
    }
}

/// Parse settings JSON. Missing fields take their defaults.
pub fn parse_settings(text: &str) -> Result<TerrainSettings, SettingsFileError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_settings(path: &Path) -> Result<TerrainSettings, SettingsFileError> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text)
}

pub fn write_heightmap(path: &Path, heightmap: &Heightmap) -> Result<(), SettingsFileError> {
    let json = serde_json::to_string_pretty(heightmap)?;
    std::fs::write(path, json)?;
    Ok(())
}
