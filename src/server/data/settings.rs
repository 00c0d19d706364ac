use std::path::{Path, PathBuf};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::server::error::Error;

#[derive(Serialize, Deserialize, Default)]
struct StoredSettings {
    #[serde(default)]
    game_path: String,
}

/// Persists the accepted game path in `config.json` inside the passport's state directory.
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a new instance of [`SettingsRepository`] for the given settings file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored game path.
    ///
    /// # Returns
    /// - `Ok(Some(path))` - A non-empty game path was stored
    /// - `Ok(None)` - No settings file, an empty path, or a file that could not be parsed
    /// - `Err(Error::IoError)` - The settings file exists but could not be read
    pub async fn load(&self) -> Result<Option<String>, Error> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let settings: StoredSettings = match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring unreadable settings file: {}",
                    e
                );
                return Ok(None);
            }
        };

        Ok(Some(settings.game_path).filter(|path| !path.trim().is_empty()))
    }

    /// Stores the game path, creating the settings directory when needed
    pub async fn save(&self, game_path: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string(&StoredSettings {
            game_path: game_path.to_string(),
        })?;
        tokio::fs::write(&self.path, contents).await?;

        Ok(())
    }

    /// Removes the settings file.
    ///
    /// Returns OK when there was nothing to remove.
    pub async fn clear(&self) -> Result<(), Error> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
