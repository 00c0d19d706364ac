use dioxus::prelude::*;

use crate::client::{
    controller::PassportController,
    router::Route,
    store::passport::PassportState,
    util::{
        api::HttpPassportApi,
        browser::{LocalPathStore, CROPPER_SCRIPT, CROPPER_STYLESHEET},
    },
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

static DAISYUI_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
static TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Interval of the liveness ping in milliseconds
#[cfg(feature = "web")]
const PING_INTERVAL_MS: u32 = 5_000;

/// Controller the passport components share through context
pub type Controller = PassportController<HttpPassportApi, LocalPathStore, Signal<PassportState>>;

#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| Signal::new(PassportState::default()));
    let controller = use_context_provider(|| {
        PassportController::new(HttpPassportApi, LocalPathStore, state)
    });

    #[cfg(feature = "web")]
    {
        let controller = controller.clone();
        use_future(move || {
            let controller = controller.clone();
            async move { controller.start().await }
        });
    }

    #[cfg(feature = "web")]
    use_future(move || {
        let controller = controller.clone();
        async move {
            loop {
                crate::client::util::browser::sleep_ms(PING_INTERVAL_MS).await;
                controller.ping().await;
            }
        }
    });

    #[cfg(not(feature = "web"))]
    let _ = controller;

    rsx! {
        document::Stylesheet { href: DAISYUI_STYLESHEET }
        document::Stylesheet { href: CROPPER_STYLESHEET }
        document::Stylesheet { href: MAIN_CSS }
        document::Script { src: TAILWIND_SCRIPT }
        document::Script { src: CROPPER_SCRIPT }
        Router::<Route> {}
    }
}
