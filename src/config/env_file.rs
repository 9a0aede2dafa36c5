use crate::utils::error::{Result, TaskError};
use std::path::Path;

pub const URL_VAR: &str = "URL";

/// Settings read from the env file (`app.env` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub url: String,
}

impl EnvConfig {
    /// Reads `path` and resolves `URL`.
    ///
    /// The file must exist even when `URL` is already exported; an exported
    /// value wins over the one in the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path.as_ref(), std::env::var(URL_VAR).ok())
    }

    fn load(path: &Path, exported_url: Option<String>) -> Result<Self> {
        let entries = dotenvy::from_path_iter(path).map_err(|e| {
            TaskError::config(format!("missing env file '{}': {}", path.display(), e))
        })?;

        let mut file_url = None;
        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                TaskError::config(format!("invalid env file '{}': {}", path.display(), e))
            })?;
            if key == URL_VAR {
                file_url = Some(value);
            }
        }

        exported_url
            .or(file_url)
            .map(|url| Self { url })
            .ok_or_else(|| TaskError::config(format!("{} variable is not set", URL_VAR)))
    }
}
