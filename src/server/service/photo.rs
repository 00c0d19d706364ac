use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use base64::{engine::general_purpose::STANDARD, Engine};
use dioxus_logger::tracing;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::server::error::{photo::PhotoError, Error};

/// Public URL prefix pilot photos are served under.
pub static PHOTO_URL_PREFIX: &str = "/pilot_photos";

/// File stem of a pilot's photo: the first 20 hex digits of the SHA-256 of the description.
pub fn photo_hash(desc: &str) -> String {
    Sha256::digest(desc.as_bytes())
        .iter()
        .take(10)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

fn strip_data_url_prefix(img_data: &str) -> &str {
    static PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    let regex = PREFIX_RE
        .get_or_init(|| Regex::new(r"^data:image/\w+;base64,").expect("valid data url regex"));

    match regex.find(img_data) {
        Some(prefix) => &img_data[prefix.end()..],
        None => img_data,
    }
}

pub struct PhotoService<'a> {
    photo_dir: &'a Path,
}

impl<'a> PhotoService<'a> {
    /// Creates a new instance of [`PhotoService`] storing photos in `photo_dir`
    pub fn new(photo_dir: &'a Path) -> Self {
        Self { photo_dir }
    }

    fn file_path(&self, desc: &str) -> PathBuf {
        self.photo_dir.join(format!("{}.png", photo_hash(desc)))
    }

    /// Stores a cropped pilot photo, replacing any earlier one.
    ///
    /// # Arguments
    /// - `desc` - Pilot description the photo belongs to
    /// - `img_data` - Base64 image, optionally as a `data:image/...;base64,` URL
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored photo
    /// - `Err(Error::PhotoError)` - Missing description or image, or undecodable image data
    /// - `Err(Error::IoError)` - Writing the file failed
    pub async fn save(&self, desc: &str, img_data: &str) -> Result<String, Error> {
        if desc.is_empty() {
            return Err(PhotoError::MissingDesc.into());
        }
        if img_data.is_empty() {
            return Err(PhotoError::MissingImage.into());
        }

        let bytes = STANDARD
            .decode(strip_data_url_prefix(img_data).trim())
            .map_err(PhotoError::from)?;

        tokio::fs::create_dir_all(self.photo_dir).await?;
        tokio::fs::write(self.file_path(desc), &bytes).await?;

        tracing::debug!(bytes = bytes.len(), "Stored pilot photo");

        Ok(format!("{}/{}.png", PHOTO_URL_PREFIX, photo_hash(desc)))
    }

    /// Public URL of the pilot's stored photo, `None` when no photo was uploaded
    pub async fn photo_url(&self, desc: &str) -> Option<String> {
        tokio::fs::try_exists(self.file_path(desc))
            .await
            .unwrap_or(false)
            .then(|| format!("{}/{}.png", PHOTO_URL_PREFIX, photo_hash(desc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn hash_is_twenty_hex_digits() {
        // sha256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        assert_eq!(photo_hash("abc"), "ba7816bf8f01cfea4141");
    }

    #[test]
    fn strips_data_url_prefix() {
        assert_eq!(strip_data_url_prefix(PNG_DATA_URL), "iVBORw0KGgo=");
        assert_eq!(strip_data_url_prefix("iVBORw0KGgo="), "iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn saves_and_finds_photo() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let photo_dir = dir.path().join("pilot_photos");
        let service = PhotoService::new(&photo_dir);

        assert_eq!(service.photo_url("abc").await, None);

        let url = service.save("abc", PNG_DATA_URL).await?;

        assert_eq!(url, "/pilot_photos/ba7816bf8f01cfea4141.png");
        assert_eq!(service.photo_url("abc").await, Some(url));

        let written = tokio::fs::read(photo_dir.join("ba7816bf8f01cfea4141.png")).await?;
        assert_eq!(written, b"\x89PNG\r\n\x1a\n");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_incomplete_uploads() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let service = PhotoService::new(dir.path());

        assert!(matches!(
            service.save("", PNG_DATA_URL).await,
            Err(Error::PhotoError(PhotoError::MissingDesc))
        ));
        assert!(matches!(
            service.save("abc", "").await,
            Err(Error::PhotoError(PhotoError::MissingImage))
        ));
        assert!(matches!(
            service.save("abc", "data:image/png;base64,@@@").await,
            Err(Error::PhotoError(PhotoError::InvalidImage(_)))
        ));

        Ok(())
    }
}
