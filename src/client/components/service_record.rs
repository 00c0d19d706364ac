use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCamera;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        app::Controller,
        store::passport::PassportState,
        util::browser::{cropper_init, pick_image_data_url},
    },
    model::pilot::{AwardDto, PromotionDto},
};

pub static SAMPLE_PHOTO: &str = "/static/images/sample_photo.jpg";
pub static AWARD_PLACEHOLDER: &str = "/static/images/award_placeholder.png";

/// Passport page: personal details, photo, promotions and awards
#[component]
pub fn ServiceRecord() -> Element {
    let state = use_context::<Signal<PassportState>>();

    let state = state.read();
    let record = state.record.clone().unwrap_or_default();
    let info = record.pilot_info;
    let pilot_id = info.pilot_id.map(|id| id.to_string()).unwrap_or_default();
    let photo_src = state
        .photo_src
        .clone()
        .unwrap_or_else(|| SAMPLE_PHOTO.to_string());

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-6",
                div { class: "flex gap-4",
                    PilotPhoto { src: photo_src }
                    dl { class: "passport-fields",
                        InfoField { label: "Full name", value: info.full_name }
                        InfoField { label: "First name", value: info.first_name }
                        InfoField { label: "Last name", value: info.last_name }
                        InfoField { label: "Date of birth", value: info.birth_date }
                        InfoField { label: "Place of birth", value: info.birth_country }
                        InfoField { label: "Pilot ID", value: pilot_id }
                        InfoField { label: "Squadron", value: info.squadron }
                        InfoField { label: "Rank", value: info.rank_name }
                    }
                }
                div { class: "flex flex-col gap-4",
                    Promotions { promotions: record.promotions }
                    Awards { awards: record.awards }
                }
            }
        }
    )
}

#[component]
fn InfoField(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "passport-field",
            dt { class: "text-xs uppercase opacity-60", "{label}" }
            dd { class: "font-semibold", "{value}" }
        }
    )
}

/// Pilot photo; clicking it starts a new capture
#[component]
fn PilotPhoto(src: String) -> Element {
    let controller = use_context::<Controller>();

    rsx!(
        button {
            class: "pilot-photo group relative",
            title: "Change photo",
            onclick: move |_| {
                let controller = controller.clone();
                spawn(async move {
                    if let Some(data_url) = pick_image_data_url().await {
                        controller.open_cropper();
                        cropper_init(data_url);
                    }
                });
            },
            img { id: "pilot-photo", src: "{src}", alt: "Pilot photo" }
            div { class: "pilot-photo-overlay",
                Icon { width: 24, height: 24, icon: FaCamera }
            }
        }
    )
}

#[component]
fn Promotions(promotions: Vec<PromotionDto>) -> Element {
    rsx!(
        section { class: "relative",
            h3 { class: "font-bold mb-2", "Promotions" }
            if !promotions.is_empty() {
                div { class: "promotion-watermark" }
            }
            ul { class: "flex flex-col gap-1",
                for (index, promotion) in promotions.into_iter().enumerate() {
                    li { key: "{index}", class: "flex items-center gap-2",
                        if let Some(rank_src) = promotion.img {
                            img { class: "rank-image", src: "{rank_src}", alt: "{promotion.desc}" }
                        }
                        span { class: "font-semibold", "{promotion.desc}" }
                        span { class: "text-sm opacity-70", "{promotion.date}" }
                    }
                }
            }
        }
    )
}

#[component]
fn Awards(awards: Vec<AwardDto>) -> Element {
    let keyed = awards
        .into_iter()
        .enumerate()
        .map(|(index, award)| (award_key(index, &award), award));

    rsx!(
        section {
            h3 { class: "font-bold mb-2", "Awards" }
            ul { class: "grid grid-cols-2 gap-2",
                for (key, award) in keyed {
                    AwardItem { key: "{key}", award }
                }
            }
        }
    )
}

/// Row key of an award; a different award in the same slot mounts a fresh item
fn award_key(index: usize, award: &AwardDto) -> String {
    format!("{}-{}-{:?}", index, award.desc, award.tpar2)
}

#[component]
fn AwardItem(award: AwardDto) -> Element {
    let mut failed = use_signal(|| false);

    let src = match award.preview_url() {
        Some(url) if !failed() => url,
        _ => AWARD_PLACEHOLDER.to_string(),
    };

    rsx!(
        li { class: "flex items-center gap-2",
            img {
                class: "award-image",
                src: "{src}",
                alt: "{award.desc}",
                onerror: move |_| failed.set(true),
            }
            div { class: "flex flex-col",
                span { class: "font-semibold", "{award.desc}" }
                span { class: "text-sm opacity-70", "{award.date}" }
            }
        }
    )
}
