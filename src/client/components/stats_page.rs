use dioxus::prelude::*;

use crate::client::{store::passport::PassportState, util::format::format_stat_value};

/// Career statistics in backend order
#[component]
pub fn StatsPage() -> Element {
    let state = use_context::<Signal<PassportState>>();

    let rows: Vec<(String, String)> = state
        .read()
        .stats
        .as_ref()
        .map(|stats| {
            stats
                .0
                .iter()
                .map(|(label, value)| (label.clone(), format_stat_value(label, value)))
                .collect()
        })
        .unwrap_or_default();

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Statistics" }
                div { class: "stats-table flex flex-col",
                    for (label, value) in rows {
                        div { key: "{label}", class: "stats-row flex justify-between border-b border-base-300 py-1",
                            span { class: "stats-label", "{label}:" }
                            span { class: "stats-value font-semibold", "{value}" }
                        }
                    }
                }
            }
        }
    )
}
