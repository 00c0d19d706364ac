use dioxus::prelude::*;

use crate::client::{
    app::Controller,
    store::passport::PassportState,
    util::browser::{cropper_crop, cropper_destroy, CROPPER_IMAGE_ID},
};

/// Crop dialog; the image element stays mounted so the widget can attach before it opens
#[component]
pub fn CropperModal() -> Element {
    let state = use_context::<Signal<PassportState>>();
    let controller = use_context::<Controller>();

    let open = state.read().cropper_open;
    let cancel_controller = controller.clone();

    rsx!(
        div { class: if open { "modal modal-open" } else { "modal" },
            div { class: "modal-box flex flex-col gap-4",
                h3 { class: "text-lg font-bold", "Crop photo" }
                div { class: "cropper-container",
                    img { id: CROPPER_IMAGE_ID, alt: "Photo to crop" }
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            cropper_destroy();
                            cancel_controller.cancel_crop();
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let controller = controller.clone();
                            spawn(async move {
                                let cropped = cropper_crop().await;
                                cropper_destroy();
                                match cropped {
                                    Some(data_url) => controller.save_cropped_photo(data_url).await,
                                    None => controller.cancel_crop(),
                                }
                            });
                        },
                        "Save"
                    }
                }
            }
        }
    )
}
