use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    service::{game_path::GamePathService, liveness::spawn_idle_shutdown},
};

/// Creates the state, photo and rank artwork directories
pub async fn prepare_directories(config: &Config) -> Result<(), Error> {
    for dir in [
        &config.config_dir,
        &config.pilot_photo_dir,
        &config.charactersranks_dir,
    ] {
        tokio::fs::create_dir_all(dir).await?;
    }

    Ok(())
}

/// Builds the application state and reopens the last used career database.
///
/// A missing installation is not an error: the client asks for the game path.
pub async fn build_state(config: Config) -> Result<AppState, Error> {
    prepare_directories(&config).await?;

    let state = AppState::new(config, None);

    let restored = GamePathService::new(&state.config, &state.career)
        .restore()
        .await?;
    if !restored {
        tracing::info!("No game path configured, waiting for the client to provide one");
    }

    Ok(state)
}

/// Starts the idle shutdown monitor unless it is disabled
pub fn start_idle_monitor(state: &AppState) {
    match state.config.ping_timeout {
        Some(timeout) => {
            tracing::info!(
                timeout_secs = timeout.as_secs(),
                "Server exits when the client stops pinging"
            );
            spawn_idle_shutdown(state.liveness.clone(), timeout);
        }
        None => tracing::info!("Idle shutdown disabled"),
    }
}
