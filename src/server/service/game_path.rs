use std::path::{Path, PathBuf};

use dioxus_logger::tracing;
use sea_orm::{ConnectOptions, Database};

use crate::server::{
    config::Config,
    data::settings::SettingsRepository,
    error::{game_path::GamePathError, Error},
    model::career::{CareerDatabase, CareerHandle},
};

/// Install folders probed on every drive letter when no game path is stored.
pub static INSTALL_SEARCH_PATHS: &[&str] = &[
    r"Program Files (x86)\1C Game Studios\IL-2 Sturmovik Battle of Stalingrad",
    r"Program Files (x86)\Steam\steamapps\common\IL-2 Sturmovik Battle of Stalingrad",
    r"Games\IL-2 Sturmovik Battle of Stalingrad",
];

/// Location of the career database inside a game installation.
pub fn career_db_path(game_path: &Path) -> PathBuf {
    game_path.join("data").join("Career").join("cp.db")
}

/// Location of the modded rank artwork inside a game installation.
pub fn modded_ranks_path(game_path: &Path) -> PathBuf {
    game_path
        .join("data")
        .join("swf")
        .join("il2")
        .join("charactersranks")
}

/// Standard install folders on every drive letter, in probe order.
pub fn installation_candidates() -> Vec<PathBuf> {
    ('A'..='Z')
        .flat_map(|drive| {
            INSTALL_SEARCH_PATHS
                .iter()
                .map(move |path| PathBuf::from(format!("{}:\\{}", drive, path)))
        })
        .collect()
}

/// First candidate folder holding a career database.
pub fn find_installation(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|candidate| career_db_path(candidate).is_file())
}

/// Mirrors the game's modded rank artwork into `dest`.
///
/// Copies only when the mod's `101000/big.png` sample exists in `mod_src` and `dest` does not
/// already hold it; an outdated `dest` is replaced wholesale.
///
/// # Returns
/// - `Ok(true)` - `dest` holds the modded artwork
/// - `Ok(false)` - The mod is not installed
/// - `Err(std::io::Error)` - Removing or copying failed
pub fn sync_modded_ranks(mod_src: &Path, dest: &Path) -> Result<bool, std::io::Error> {
    if !mod_src.join("101000").join("big.png").is_file() {
        return Ok(false);
    }

    if dest.join("101000").join("big.png").is_file() {
        return Ok(true);
    }

    if dest.exists() {
        std::fs::remove_dir_all(dest)?;
    }

    for entry in walkdir::WalkDir::new(mod_src) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(mod_src)
            .map_err(std::io::Error::other)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }

    Ok(true)
}

pub struct GamePathService<'a> {
    config: &'a Config,
    career: &'a CareerHandle,
}

impl<'a> GamePathService<'a> {
    /// Creates a new instance of [`GamePathService`]
    pub fn new(config: &'a Config, career: &'a CareerHandle) -> Self {
        Self { config, career }
    }

    fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.config.config_file())
    }

    /// Opens the career database of an installation read-only.
    ///
    /// # Returns
    /// - `Ok(CareerDatabase)` - The opened database
    /// - `Err(Error::GamePathError(GamePathError::DatabaseNotFound))` - No `cp.db` in the folder
    /// - `Err(Error::DbErr)` - The file exists but could not be opened
    pub async fn open(game_path: &Path) -> Result<CareerDatabase, Error> {
        let db_path = career_db_path(game_path);
        if !tokio::fs::try_exists(&db_path).await.unwrap_or(false) {
            return Err(GamePathError::DatabaseNotFound(db_path).into());
        }

        let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=ro", db_path.display()));
        opt.sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(CareerDatabase {
            game_path: game_path.to_path_buf(),
            db_path,
            db,
        })
    }

    /// Accepts a game folder submitted by the client.
    ///
    /// The trimmed path must contain `data/Career/cp.db`. On success the database replaces the
    /// active one, the path is stored for the next launch and the modded rank artwork is mirrored.
    ///
    /// # Returns
    /// - `Ok(CareerDatabase)` - The newly active career database
    /// - `Err(Error::GamePathError(GamePathError::NoPathProvided))` - Blank input
    /// - `Err(Error::GamePathError(GamePathError::DatabaseNotFound))` - No `cp.db` in the folder
    /// - `Err(Error)` - Opening the database or writing settings failed
    pub async fn set_game_path(&self, game_path: &str) -> Result<CareerDatabase, Error> {
        let game_path = game_path.trim();
        if game_path.is_empty() {
            return Err(GamePathError::NoPathProvided.into());
        }

        let career = Self::open(Path::new(game_path)).await?;
        self.settings().save(game_path).await?;
        self.career.replace(career.clone()).await;

        tracing::info!(game_path = %game_path, "Game path accepted");

        self.sync_ranks(&career.game_path).await;

        Ok(career)
    }

    /// Restores the career database at startup.
    ///
    /// Tries the stored game path first, then the standard install folders on Windows. A path
    /// found by probing is stored.
    ///
    /// # Returns
    /// - `Ok(true)` - A career database is active
    /// - `Ok(false)` - No usable installation was found
    /// - `Err(Error)` - Reading or writing settings failed
    pub async fn restore(&self) -> Result<bool, Error> {
        if let Some(stored) = self.settings().load().await? {
            match Self::open(Path::new(&stored)).await {
                Ok(career) => {
                    tracing::info!(game_path = %stored, "Restored stored game path");
                    self.career.replace(career).await;
                    return Ok(true);
                }
                Err(e) => {
                    tracing::warn!(game_path = %stored, "Stored game path is unusable: {}", e);
                }
            }
        }

        if !cfg!(windows) {
            return Ok(false);
        }

        let Some(found) = tokio::task::spawn_blocking(|| {
            find_installation(installation_candidates())
        })
        .await
        .map_err(|e| Error::InternalError(e.to_string()))?
        else {
            tracing::info!("No IL-2 installation found in the standard folders");
            return Ok(false);
        };

        let career = Self::open(&found).await?;
        self.settings().save(&found.to_string_lossy()).await?;
        self.career.replace(career).await;

        tracing::info!(game_path = %found.display(), "Detected IL-2 installation");

        self.sync_ranks(&found).await;

        Ok(true)
    }

    /// Returns the active career database if its file still exists.
    ///
    /// # Returns
    /// - `Ok(CareerDatabase)` - The active, still present database
    /// - `Err(Error::GamePathError(GamePathError::NotConfigured))` - No usable database
    pub async fn current(&self) -> Result<CareerDatabase, Error> {
        let career = self.career.current().await?;

        if tokio::fs::try_exists(&career.db_path).await.unwrap_or(false) {
            Ok(career)
        } else {
            Err(GamePathError::NotConfigured.into())
        }
    }

    /// Like [`Self::current`], but clears the slot and the stored path when there is no usable
    /// database.
    pub async fn current_or_forget(&self) -> Result<CareerDatabase, Error> {
        match self.current().await {
            Ok(career) => Ok(career),
            Err(e) => {
                self.forget().await?;
                Err(e)
            }
        }
    }

    /// Drops the active career database and the stored game path
    pub async fn forget(&self) -> Result<(), Error> {
        if let Some(previous) = self.career.clear().await {
            tracing::info!(
                game_path = %previous.game_path.display(),
                "Forgetting game path"
            );
        }

        self.settings().clear().await
    }

    async fn sync_ranks(&self, game_path: &Path) {
        let mod_src = modded_ranks_path(game_path);
        let dest = self.config.charactersranks_dir.clone();

        let result =
            tokio::task::spawn_blocking(move || sync_modded_ranks(&mod_src, &dest)).await;

        match result {
            Ok(Ok(true)) => tracing::debug!("Modded rank artwork available"),
            Ok(Ok(false)) => {
                tracing::debug!("No modded rank artwork installed, using standard artwork")
            }
            Ok(Err(e)) => tracing::error!("Failed to mirror modded rank artwork: {}", e),
            Err(e) => tracing::error!("Rank artwork copy task failed: {}", e),
        }
    }
}
