//! Browser interop through `document::eval`: the stored game path, timers, the file picker
//! and the Cropper.js widget.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::controller::PathStore;

/// `localStorage` key of the remembered install path
pub static GAME_PATH_KEY: &str = "il2GamePath";

/// Element the crop dialog renders the chosen image into
pub static CROPPER_IMAGE_ID: &str = "cropper-img";

pub static CROPPER_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/cropperjs@1.6.2/dist/cropper.min.js";
pub static CROPPER_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/cropperjs@1.6.2/dist/cropper.min.css";

/// Width and height the crop is re-encoded at
pub const CROP_SIZE: (u32, u32) = (180, 220);

/// [`PathStore`] backed by the browser's `localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalPathStore;

impl PathStore for LocalPathStore {
    async fn load(&self) -> Option<String> {
        let script = format!("return localStorage.getItem({:?});", GAME_PATH_KEY);

        match document::eval(&script).join::<Option<String>>().await {
            Ok(path) => path.filter(|path| !path.is_empty()),
            Err(e) => {
                tracing::debug!("Failed to read stored game path: {:?}", e);
                None
            }
        }
    }

    async fn save(&self, game_path: &str) {
        let script = format!(
            "const path = await dioxus.recv(); localStorage.setItem({:?}, path);",
            GAME_PATH_KEY
        );

        let eval = document::eval(&script);
        if let Err(e) = eval.send(game_path.to_string()) {
            tracing::warn!("Failed to store game path: {:?}", e);
        }
    }

    async fn clear(&self) {
        let script = format!("localStorage.removeItem({:?});", GAME_PATH_KEY);
        document::eval(&script);
    }
}

/// Resolves after `millis` milliseconds
pub async fn sleep_ms(millis: u32) {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
        millis
    );

    let _ = document::eval(&script).join::<bool>().await;
}

/// Opens the native file picker and reads the chosen image as a data URL
pub async fn pick_image_data_url() -> Option<String> {
    let script = r#"
        return await new Promise((resolve) => {
            const input = document.createElement("input");
            input.type = "file";
            input.accept = "image/*";
            input.addEventListener("cancel", () => resolve(null));
            input.onchange = (e) => {
                const file = e.target.files[0];
                if (!file) {
                    resolve(null);
                    return;
                }
                const reader = new FileReader();
                reader.onload = (evt) => resolve(evt.target.result);
                reader.onerror = () => resolve(null);
                reader.readAsDataURL(file);
            };
            input.click();
        });
    "#;

    document::eval(script)
        .join::<Option<String>>()
        .await
        .ok()
        .flatten()
}

/// Loads `data_url` into the crop dialog's image and attaches a Cropper.js widget to it
pub fn cropper_init(data_url: String) {
    let script = format!(
        r#"
        const src = await dioxus.recv();
        const img = document.getElementById({id:?});
        if (!img) return;
        if (window.passportCropper) {{
            window.passportCropper.destroy();
            window.passportCropper = null;
        }}
        img.onload = () => {{
            window.passportCropper = new Cropper(img, {{
                aspectRatio: {w} / {h},
                viewMode: 1,
                autoCropArea: 1,
                background: false,
                movable: true,
                zoomable: true,
                rotatable: false,
                scalable: false,
                minCropBoxWidth: {min_w},
                minCropBoxHeight: {min_h},
            }});
        }};
        img.src = src;
        "#,
        id = CROPPER_IMAGE_ID,
        w = CROP_SIZE.0,
        h = CROP_SIZE.1,
        min_w = CROP_SIZE.0 / 2,
        min_h = CROP_SIZE.1 / 2,
    );

    let eval = document::eval(&script);
    if let Err(e) = eval.send(data_url) {
        tracing::warn!("Failed to start image cropper: {:?}", e);
    }
}

/// The current crop as a PNG data URL, `None` without an active widget
pub async fn cropper_crop() -> Option<String> {
    let script = format!(
        r#"
        const cropper = window.passportCropper;
        if (!cropper) return null;
        return cropper.getCroppedCanvas({{ width: {}, height: {} }}).toDataURL("image/png");
        "#,
        CROP_SIZE.0, CROP_SIZE.1
    );

    document::eval(&script)
        .join::<Option<String>>()
        .await
        .ok()
        .flatten()
}

pub fn cropper_destroy() {
    document::eval(
        r#"
        if (window.passportCropper) {
            window.passportCropper.destroy();
            window.passportCropper = null;
        }
        "#,
    );
}
