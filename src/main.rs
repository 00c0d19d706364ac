#![allow(non_snake_case)]

use pilot_passport::client;

#[cfg(feature = "server")]
use pilot_passport::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let state = match startup::build_state(config.clone()).await {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Startup error: {}", e);
                std::process::exit(1);
            }
        };
        startup::start_idle_monitor(&state);

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes(&config).with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
