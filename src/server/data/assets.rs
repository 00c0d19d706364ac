//! Lookups into the game's static artwork and locale files.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use chrono::NaiveDate;
use regex::Regex;

use crate::server::util::{
    date::parse_game_date,
    description::{SOVIET_UNION, UNITED_STATES},
};

/// Locale file holding the English names of a squadron, award or rank.
pub static LOCALE_FILE: &str = "info.locale=eng.txt";

/// Image shown when no rank artwork exists.
pub static PLACEHOLDER_IMAGE: &str = "/static/images/award_placeholder.png";

/// Folder under the static root holding the game's stock rank artwork.
pub static STANDARD_RANKS_DIR: &str = "standard_charactersranks";

/// Reads squadron, award and rank names and resolves rank insignia URLs.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    static_root: PathBuf,
    ranks_dir: PathBuf,
}

fn locale_name(contents: &str) -> Option<String> {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    let regex = NAME_RE
        .get_or_init(|| Regex::new(r#"&name\s*=\s*"([^"]+)""#).expect("valid locale name regex"));

    contents
        .lines()
        .filter(|line| line.contains("&name"))
        .find_map(|line| regex.captures(line))
        .map(|captures| captures[1].to_string())
}

fn squadron_short_name(contents: &str) -> Option<String> {
    let line = contents
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('*'))?;

    let record = line.trim_matches('|').split('|').next().unwrap_or(line);
    let fields: Vec<&str> = record.split(',').collect();

    if fields.len() >= 3 {
        fields
            .last()
            .map(|field| field.trim().trim_matches('"').to_string())
    } else {
        None
    }
}

async fn read_if_exists(path: &Path) -> Option<String> {
    tokio::fs::read_to_string(path).await.ok()
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Folder name of a rank's artwork: `country * 1000 + rank`, or `None` on overflow.
pub fn rank_folder(country_id: i32, rank_id: i32) -> Option<String> {
    i64::from(country_id)
        .checked_mul(1000)
        .and_then(|base| base.checked_add(i64::from(rank_id)))
        .map(|folder| folder.to_string())
}

/// Insignia file for a rank.
///
/// Soviet ranks switch to shoulder boards from 1943-01-01; US ranks only ship medium artwork.
pub fn rank_image_file(country_id: i32, promotion_date: Option<NaiveDate>) -> &'static str {
    match country_id {
        SOVIET_UNION => {
            let reform = NaiveDate::from_ymd_opt(1943, 1, 1);
            if promotion_date.is_some() && promotion_date >= reform {
                "big.1943.png"
            } else {
                "big.png"
            }
        }
        UNITED_STATES => "medium.png",
        _ => "big.png",
    }
}

impl AssetCatalog {
    /// Creates a new instance of [`AssetCatalog`]
    ///
    /// # Arguments
    /// - `static_root` - Root of the bundled artwork (`squadrons`, `achievements`, ...)
    /// - `ranks_dir` - Directory holding rank artwork mirrored from the game's mod folder
    pub fn new(static_root: impl Into<PathBuf>, ranks_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_root: static_root.into(),
            ranks_dir: ranks_dir.into(),
        }
    }

    /// Short squadron name from `squadrons/<config_id>/info.locale=eng.txt`.
    ///
    /// The name is the last comma-separated field of the first line starting with `*`.
    /// Returns `"Unknown"` when the file or line is missing.
    pub async fn squadron_name(&self, config_id: i32) -> String {
        let path = self
            .static_root
            .join("squadrons")
            .join(config_id.to_string())
            .join(LOCALE_FILE);

        read_if_exists(&path)
            .await
            .as_deref()
            .and_then(squadron_short_name)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Award name from `achievements/<key>/info.locale=eng.txt`, falling back to the key
    pub async fn award_name(&self, key: i64) -> String {
        let path = self
            .static_root
            .join("achievements")
            .join(key.to_string())
            .join(LOCALE_FILE);

        read_if_exists(&path)
            .await
            .as_deref()
            .and_then(locale_name)
            .unwrap_or_else(|| key.to_string())
    }

    /// Rank name from the mirrored mod artwork, then the stock artwork, else `"Rank N"`
    pub async fn rank_name(&self, country_id: Option<i32>, rank_id: i32) -> String {
        if let Some(folder) = country_id.and_then(|country_id| rank_folder(country_id, rank_id)) {
            let candidates = [
                self.ranks_dir.join(&folder).join(LOCALE_FILE),
                self.static_root
                    .join(STANDARD_RANKS_DIR)
                    .join(&folder)
                    .join(LOCALE_FILE),
            ];

            for path in candidates {
                if let Some(name) = read_if_exists(&path).await.as_deref().and_then(locale_name) {
                    return name;
                }
            }
        }

        format!("Rank {}", rank_id)
    }

    /// URL of a rank's insignia as of the promotion date (`YYYY.MM.DD`).
    ///
    /// Mirrored mod artwork is preferred over the stock artwork; without either the award
    /// placeholder is returned.
    pub async fn rank_image(
        &self,
        country_id: Option<i32>,
        rank_id: i32,
        promotion_date: &str,
    ) -> String {
        let Some(country_id) = country_id else {
            return PLACEHOLDER_IMAGE.to_string();
        };

        let Some(folder) = rank_folder(country_id, rank_id) else {
            return PLACEHOLDER_IMAGE.to_string();
        };
        let file = rank_image_file(country_id, parse_game_date(promotion_date));

        if exists(&self.ranks_dir.join(&folder).join(file)).await {
            return format!("/charactersranks/{}/{}", folder, file);
        }

        let standard = self
            .static_root
            .join(STANDARD_RANKS_DIR)
            .join(&folder)
            .join(file);
        if exists(&standard).await {
            return format!("/static/{}/{}/{}", STANDARD_RANKS_DIR, folder, file);
        }

        PLACEHOLDER_IMAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use passport_test_utils::prelude::*;

    use super::*;

    #[test]
    fn parses_squadron_line() {
        let contents = "&name=\"whatever\"\n*1,\"4th Guards\",\"4 GIAP\"|\n";

        assert_eq!(squadron_short_name(contents), Some("4 GIAP".to_string()));
        assert_eq!(squadron_short_name("*1,2"), None);
        assert_eq!(squadron_short_name("no star"), None);
    }

    #[test]
    fn parses_locale_name() {
        assert_eq!(
            locale_name("&id=1\n&name = \"Order of Lenin\"\n"),
            Some("Order of Lenin".to_string())
        );
        assert_eq!(locale_name("&name=unquoted"), None);
    }

    #[test]
    fn rank_folder_handles_large_country_ids() {
        assert_eq!(rank_folder(101, 3), Some("101003".to_string()));
        assert_eq!(rank_folder(3_000_000, 1), Some("3000000001".to_string()));
        assert_eq!(rank_folder(i32::MAX, i32::MAX), Some("2149631130647".to_string()));
    }

    #[test]
    fn picks_rank_image_file() {
        let before = NaiveDate::from_ymd_opt(1942, 12, 31);
        let after = NaiveDate::from_ymd_opt(1943, 1, 1);

        assert_eq!(rank_image_file(101, before), "big.png");
        assert_eq!(rank_image_file(101, after), "big.1943.png");
        assert_eq!(rank_image_file(101, None), "big.png");
        assert_eq!(rank_image_file(103, after), "medium.png");
        assert_eq!(rank_image_file(201, after), "big.png");
    }

    /// Expect names from the static tree and fallbacks when files are missing
    #[tokio::test]
    async fn reads_names_with_fallbacks() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_squadron_info(12, "*12,\"Jagdgeschwader 52\",\"JG 52\"")
            .with_award_info(4, "Order of the Red Star")
            .with_standard_rank(101003, "Starshiy Leytenant", &[])
            .build()
            .await?;

        let catalog = AssetCatalog::new(test.static_root(), test.ranks_dir());

        assert_eq!(catalog.squadron_name(12).await, "JG 52");
        assert_eq!(catalog.squadron_name(13).await, "Unknown");
        assert_eq!(catalog.award_name(4).await, "Order of the Red Star");
        assert_eq!(catalog.award_name(5).await, "5");
        assert_eq!(catalog.rank_name(Some(101), 3).await, "Starshiy Leytenant");
        assert_eq!(catalog.rank_name(Some(201), 3).await, "Rank 3");
        assert_eq!(catalog.rank_name(None, 3).await, "Rank 3");
        assert_eq!(catalog.rank_name(Some(3_000_000), 3).await, "Rank 3");

        Ok(())
    }

    /// Expect mirrored artwork first, then stock artwork, then the placeholder
    #[tokio::test]
    async fn resolves_rank_images() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_standard_rank(101002, "Leytenant", &["big.png", "big.1943.png"])
            .with_mirrored_rank(101003, "Starshiy Leytenant", &["big.1943.png"])
            .build()
            .await?;

        let catalog = AssetCatalog::new(test.static_root(), test.ranks_dir());

        assert_eq!(
            catalog.rank_image(Some(101), 2, "1942.06.01").await,
            "/static/standard_charactersranks/101002/big.png"
        );
        assert_eq!(
            catalog.rank_image(Some(101), 2, "1943.06.01").await,
            "/static/standard_charactersranks/101002/big.1943.png"
        );
        assert_eq!(
            catalog.rank_image(Some(101), 3, "1943.06.01").await,
            "/charactersranks/101003/big.1943.png"
        );
        assert_eq!(
            catalog.rank_image(Some(101), 3, "1942.06.01").await,
            PLACEHOLDER_IMAGE
        );
        assert_eq!(catalog.rank_image(None, 3, "").await, PLACEHOLDER_IMAGE);
        assert_eq!(
            catalog.rank_image(Some(3_000_000), 3, "1943.06.01").await,
            PLACEHOLDER_IMAGE
        );

        Ok(())
    }
}
