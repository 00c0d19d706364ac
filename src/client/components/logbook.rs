use dioxus::prelude::*;

use crate::client::{
    store::passport::{LogbookView, PassportState},
    util::format::kill_cell,
};

pub static NO_SORTIES_MESSAGE: &str = "No sorties found for this pilot.";
pub static LOGBOOK_FAILED_MESSAGE: &str = "Failed to load logbook.";

const COLUMNS: [&str; 10] = [
    "Date",
    "Aircraft",
    "Mission",
    "Air",
    "Vehicle",
    "Naval",
    "Artillery",
    "Railway",
    "Structure",
    "Flight time",
];

#[component]
pub fn Logbook() -> Element {
    let state = use_context::<Signal<PassportState>>();
    let logbook = state.read().logbook.clone();

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body overflow-x-auto",
                h2 { class: "card-title", "Logbook" }
                match logbook {
                    LogbookView::Idle => rsx!(),
                    LogbookView::Loading => rsx!(
                        div { class: "skeleton h-32 w-full" }
                    ),
                    LogbookView::Empty => rsx!(
                        p { class: "text-center opacity-70", "{NO_SORTIES_MESSAGE}" }
                    ),
                    LogbookView::Failed => rsx!(
                        p { class: "text-center text-error", "{LOGBOOK_FAILED_MESSAGE}" }
                    ),
                    LogbookView::Sorties(sorties) => rsx!(
                        table { class: "table table-zebra table-sm",
                            thead {
                                tr {
                                    for column in COLUMNS {
                                        th { key: "{column}", "{column}" }
                                    }
                                }
                            }
                            tbody {
                                for (index, sortie) in sorties.into_iter().enumerate() {
                                    tr { key: "{index}",
                                        td { "{sortie.date}" }
                                        td { "{sortie.aircraft}" }
                                        td { "{sortie.mission_type}" }
                                        td { {kill_cell(sortie.air_kills)} }
                                        td { {kill_cell(sortie.ground_kills)} }
                                        td { {kill_cell(sortie.naval_kills)} }
                                        td { {kill_cell(sortie.artillery_kills)} }
                                        td { {kill_cell(sortie.railway_kills)} }
                                        td { {kill_cell(sortie.structure_kills)} }
                                        td { "{sortie.flight_time}" }
                                    }
                                }
                            }
                        }
                    ),
                }
            }
        }
    )
}
