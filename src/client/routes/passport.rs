use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{
        CropperModal, GamePathModal, Logbook, Page, PageArrows, PilotSelect, ServiceRecord,
        StatsPage,
    },
    store::passport::{PassportPage, PassportState},
};

#[component]
pub fn Passport() -> Element {
    let state = use_context::<Signal<PassportState>>();
    let page = state.read().page;

    rsx!(
        Title { "Pilot Passport" }
        Meta {
            name: "description",
            content: "Service record, stats, and logbook of IL-2 Sturmovik career pilots."
        }
        Page { class: "flex flex-col items-center gap-4",
            PilotSelect { }
            div { class: "passport relative w-full max-w-[960px]",
                match page {
                    PassportPage::Record => rsx!(ServiceRecord { }),
                    PassportPage::Stats => rsx!(StatsPage { }),
                    PassportPage::Logbook => rsx!(Logbook { }),
                }
                PageArrows { }
            }
        }
        GamePathModal { }
        CropperModal { }
    )
}
