//! Test environment returned by [`TestBuilder`](crate::TestBuilder).

use std::path::{Path, PathBuf};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::{
    constant::{CONFIG_DIR, GAME_DIR, STATIC_DIR},
    error::TestError,
    fixtures::{assets::AssetFixtures, career::CareerFixtures},
};

/// A temporary game installation with an open career database.
///
/// The temporary directory is removed when the setup is dropped.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_career(1, 10, -1)
///     .with_pilot(factory::pilot(10, "fullname=Ivan%20Petrov"))
///     .build()
///     .await?;
///
/// let config = Config::from_lookup(|key| test.env(key))?;
/// let pilots = PilotRepository::new(&test.db).find_identity(10).await?;
/// ```
pub struct TestSetup {
    /// Read-write connection to `<game>/data/Career/cp.db`
    pub db: DatabaseConnection,
    dir: TempDir,
}

impl TestSetup {
    /// Creates the directory layout and an empty career database
    pub async fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;

        let career_dir = dir.path().join(GAME_DIR).join("data").join("Career");
        tokio::fs::create_dir_all(&career_dir).await?;
        tokio::fs::create_dir_all(dir.path().join(STATIC_DIR)).await?;

        let url = format!("sqlite://{}?mode=rwc", career_dir.join("cp.db").display());
        let db = Database::connect(&url).await?;

        Ok(Self { db, dir })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Root of the temporary directory
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the fake game installation
    pub fn game_path(&self) -> PathBuf {
        self.root().join(GAME_DIR)
    }

    /// Static artwork root
    pub fn static_root(&self) -> PathBuf {
        self.root().join(STATIC_DIR)
    }

    /// Directory modded rank artwork is mirrored into
    pub fn ranks_dir(&self) -> PathBuf {
        self.root().join(CONFIG_DIR).join("charactersranks")
    }

    /// Environment lookup pointing the passport configuration into the test root.
    ///
    /// The idle shutdown is disabled.
    pub fn env(&self, key: &str) -> Option<String> {
        let config_dir = self.root().join(CONFIG_DIR);

        let value = match key {
            "PASSPORT_CONFIG_DIR" => config_dir,
            "PASSPORT_STATIC_ROOT" => self.static_root(),
            "PASSPORT_PHOTO_DIR" => config_dir.join("pilot_photos"),
            "PASSPORT_PING_TIMEOUT_SECS" => return Some("0".to_string()),
            _ => return None,
        };

        Some(value.display().to_string())
    }

    /// Career database fixtures
    pub fn career(&self) -> CareerFixtures<'_> {
        CareerFixtures::new(&self.db)
    }

    /// Filesystem artwork fixtures
    pub fn assets(&self) -> AssetFixtures {
        AssetFixtures::new(self.static_root(), self.ranks_dir(), self.game_path())
    }
}
