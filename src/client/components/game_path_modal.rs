use dioxus::prelude::*;

use crate::client::{app::Controller, store::passport::PassportState};

/// Prompt for the game install folder; blocks the page until the backend accepts one
#[component]
pub fn GamePathModal() -> Element {
    let state = use_context::<Signal<PassportState>>();
    let controller = use_context::<Controller>();

    let modal = state.read().modal.clone();
    if !modal.open {
        return rsx!();
    }

    let submit = {
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            spawn(async move { controller.submit_game_path().await });
        }
    };
    let submit_on_enter = submit.clone();
    let submit_on_click = submit;

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-4",
                h3 { class: "text-lg font-bold", "IL-2 Sturmovik game folder" }
                p { class: "text-sm",
                    "Enter the root folder of your IL-2 Sturmovik installation, for example "
                    code { "C:\\Program Files\\IL-2 Sturmovik Great Battles" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Game folder path",
                    autofocus: true,
                    value: "{modal.input}",
                    oninput: move |evt| controller.set_path_input(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit_on_enter();
                        }
                    },
                }
                if let Some(error) = modal.error.as_ref() {
                    div { class: "alert alert-error text-sm",
                        span { "{error}" }
                    }
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| submit_on_click(),
                        "Confirm"
                    }
                }
            }
        }
    )
}
