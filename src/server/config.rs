//! Server configuration loaded from environment variables.
//!
//! Every setting has a default so the passport runs without a `.env` file: state lives under a
//! `.il2_pilot_passport` folder in the user's local data directory and static game artwork is
//! read from `./static`.

use std::{path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

/// Folder name of the passport's per-user state directory.
pub static CONFIG_DIR_NAME: &str = ".il2_pilot_passport";

/// Seconds without a client ping before the server exits, unless overridden.
pub const DEFAULT_PING_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the passport server.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding `config.json`
    pub config_dir: PathBuf,
    /// Root of the bundled static artwork (`achievements`, `squadrons`, `images`, ...)
    pub static_root: PathBuf,
    /// Directory pilot photos are written to
    pub pilot_photo_dir: PathBuf,
    /// Directory the game's modded rank artwork is mirrored into
    pub charactersranks_dir: PathBuf,
    /// Exit after this long without a client ping; `None` keeps the server running
    pub ping_timeout: Option<Duration>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Environment
    /// - `PASSPORT_CONFIG_DIR` - state directory (default `<local data dir>/.il2_pilot_passport`)
    /// - `PASSPORT_STATIC_ROOT` - static artwork root (default `static`)
    /// - `PASSPORT_PHOTO_DIR` - pilot photo directory (default `<config dir>/pilot_photos`)
    /// - `PASSPORT_PING_TIMEOUT_SECS` - idle shutdown timeout, `0` disables (default 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_dir = match lookup("PASSPORT_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_config_dir()?,
        };

        let static_root = lookup("PASSPORT_STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let pilot_photo_dir = lookup("PASSPORT_PHOTO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir.join("pilot_photos"));

        let ping_timeout = match lookup("PASSPORT_PING_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "PASSPORT_PING_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })?;

                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(DEFAULT_PING_TIMEOUT_SECS)),
        };

        Ok(Self {
            charactersranks_dir: config_dir.join("charactersranks"),
            config_dir,
            static_root,
            pilot_photo_dir,
            ping_timeout,
        })
    }

    /// Path of the persisted settings file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or(ConfigError::NoHomeDirectory)?;

    Ok(base.join(CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn derives_paths_from_config_dir() {
        let config = Config::from_lookup(lookup(&[("PASSPORT_CONFIG_DIR", "/tmp/passport")])).unwrap();

        assert_eq!(config.config_file(), PathBuf::from("/tmp/passport/config.json"));
        assert_eq!(config.pilot_photo_dir, PathBuf::from("/tmp/passport/pilot_photos"));
        assert_eq!(
            config.charactersranks_dir,
            PathBuf::from("/tmp/passport/charactersranks")
        );
        assert_eq!(config.static_root, PathBuf::from("static"));
        assert_eq!(
            config.ping_timeout,
            Some(Duration::from_secs(DEFAULT_PING_TIMEOUT_SECS))
        );
    }

    #[test]
    fn zero_ping_timeout_disables_shutdown() {
        let config = Config::from_lookup(lookup(&[
            ("PASSPORT_CONFIG_DIR", "/tmp/passport"),
            ("PASSPORT_PING_TIMEOUT_SECS", "0"),
        ]))
        .unwrap();

        assert!(config.ping_timeout.is_none());
    }

    #[test]
    fn rejects_non_numeric_ping_timeout() {
        let result = Config::from_lookup(lookup(&[
            ("PASSPORT_CONFIG_DIR", "/tmp/passport"),
            ("PASSPORT_PING_TIMEOUT_SECS", "soon"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "PASSPORT_PING_TIMEOUT_SECS"
        ));
    }
}
