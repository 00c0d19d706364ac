//! Builds server state on top of a [`TestSetup`] installation.

use passport_test_utils::TestSetup;
use pilot_passport::server::{
    config::Config, model::app::AppState, service::game_path::GamePathService,
};

#[allow(async_fn_in_trait)]
pub trait TestSetupExt {
    /// Configuration rooted in the test directory, idle shutdown disabled
    fn config(&self) -> Config;

    /// State with no installation configured
    fn unconfigured_state(&self) -> AppState;

    /// State with the test installation opened as the active career database
    async fn app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn config(&self) -> Config {
        Config::from_lookup(|key| self.env(key)).expect("test config")
    }

    fn unconfigured_state(&self) -> AppState {
        AppState::new(self.config(), None)
    }

    async fn app_state(&self) -> AppState {
        let state = self.unconfigured_state();

        GamePathService::new(&state.config, &state.career)
            .set_game_path(&self.game_path().display().to_string())
            .await
            .expect("test installation is accepted");

        state
    }
}
