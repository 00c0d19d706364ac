//! Artwork and locale files laid out the way the game ships them.

use std::path::{Path, PathBuf};

use crate::{constant::LOCALE_FILE, error::TestError};

/// Writes artwork fixtures under the static root, the ranks mirror and the game installation
pub struct AssetFixtures {
    static_root: PathBuf,
    ranks_dir: PathBuf,
    game_path: PathBuf,
}

/// Locale file contents naming an asset
pub fn locale_contents(name: &str) -> String {
    format!("&name=\"{}\"\r\n&description=\"\"\r\n", name)
}

async fn write_rank(folder: &Path, name: &str, files: &[&str]) -> Result<(), TestError> {
    tokio::fs::create_dir_all(folder).await?;
    tokio::fs::write(folder.join(LOCALE_FILE), locale_contents(name)).await?;

    for file in files {
        tokio::fs::write(folder.join(file), b"png").await?;
    }

    Ok(())
}

impl AssetFixtures {
    pub fn new(static_root: PathBuf, ranks_dir: PathBuf, game_path: PathBuf) -> Self {
        Self {
            static_root,
            ranks_dir,
            game_path,
        }
    }

    /// `static/squadrons/<config_id>/info.locale=eng.txt` with raw `contents`
    pub async fn write_squadron_info(&self, config_id: i32, contents: &str) -> Result<(), TestError> {
        let folder = self.static_root.join("squadrons").join(config_id.to_string());
        tokio::fs::create_dir_all(&folder).await?;
        tokio::fs::write(folder.join(LOCALE_FILE), contents).await?;

        Ok(())
    }

    /// `static/achievements/<key>/info.locale=eng.txt` naming the award
    pub async fn write_award_info(&self, key: i64, name: &str) -> Result<(), TestError> {
        let folder = self.static_root.join("achievements").join(key.to_string());
        tokio::fs::create_dir_all(&folder).await?;
        tokio::fs::write(folder.join(LOCALE_FILE), locale_contents(name)).await?;

        Ok(())
    }

    /// Stock rank artwork under `static/standard_charactersranks/<folder>`
    pub async fn write_standard_rank(
        &self,
        folder: i32,
        name: &str,
        files: &[&str],
    ) -> Result<(), TestError> {
        let path = self
            .static_root
            .join("standard_charactersranks")
            .join(folder.to_string());

        write_rank(&path, name, files).await
    }

    /// Rank artwork already mirrored from a game mod
    pub async fn write_mirrored_rank(
        &self,
        folder: i32,
        name: &str,
        files: &[&str],
    ) -> Result<(), TestError> {
        write_rank(&self.ranks_dir.join(folder.to_string()), name, files).await
    }

    /// Rank artwork inside the game's `data/swf/il2/charactersranks`
    pub async fn write_modded_rank(
        &self,
        folder: i32,
        name: &str,
        files: &[&str],
    ) -> Result<(), TestError> {
        let path = self
            .game_path
            .join("data")
            .join("swf")
            .join("il2")
            .join("charactersranks")
            .join(folder.to_string());

        write_rank(&path, name, files).await
    }
}
