use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::error::{game_path::GamePathError, Error};

/// An opened IL-2 career database together with the installation it belongs to.
#[derive(Clone, Debug)]
pub struct CareerDatabase {
    /// Root folder of the game installation
    pub game_path: PathBuf,
    /// Location of `cp.db` inside the installation
    pub db_path: PathBuf,
    pub db: DatabaseConnection,
}

/// Shared slot holding the career database currently in use.
///
/// The slot is empty until a valid game path is restored at startup or submitted by the
/// client, and is swapped whenever a new path is accepted.
#[derive(Clone, Default)]
pub struct CareerHandle(Arc<RwLock<Option<CareerDatabase>>>);

impl CareerHandle {
    pub fn new(career: Option<CareerDatabase>) -> Self {
        Self(Arc::new(RwLock::new(career)))
    }

    /// Returns the active career database or [`GamePathError::NotConfigured`]
    pub async fn current(&self) -> Result<CareerDatabase, Error> {
        self.0
            .read()
            .await
            .clone()
            .ok_or_else(|| GamePathError::NotConfigured.into())
    }

    pub async fn is_configured(&self) -> bool {
        self.0.read().await.is_some()
    }

    /// Replaces the active career database, returning the previous one
    pub async fn replace(&self, career: CareerDatabase) -> Option<CareerDatabase> {
        self.0.write().await.replace(career)
    }

    pub async fn clear(&self) -> Option<CareerDatabase> {
        self.0.write().await.take()
    }
}
