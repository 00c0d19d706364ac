use dioxus::prelude::*;

use crate::client::{app::Controller, store::passport::PassportState};

/// Roster dropdown; options carry the roster index
#[component]
pub fn PilotSelect() -> Element {
    let state = use_context::<Signal<PassportState>>();
    let controller = use_context::<Controller>();

    let state = state.read();
    let selected = state.selected.map(|index| index.to_string()).unwrap_or_default();

    rsx!(
        div { class: "w-full max-w-[960px] pt-4",
            select {
                class: "select select-bordered w-full",
                disabled: state.roster_loading || state.pilots.is_empty(),
                value: "{selected}",
                onchange: move |evt| {
                    if let Ok(index) = evt.value().parse::<usize>() {
                        let controller = controller.clone();
                        spawn(async move { controller.select_pilot(index).await });
                    }
                },
                if state.roster_loading {
                    option { value: "", "Loading..." }
                } else {
                    for (index, pilot) in state.pilots.iter().enumerate() {
                        option {
                            key: "{index}",
                            value: "{index}",
                            selected: state.selected == Some(index),
                            "{pilot.label()}"
                        }
                    }
                }
            }
        }
    )
}
