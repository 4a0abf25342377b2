//! Newsletter data: the published JSON files and how to load them
//!
//! The data layout matches what the school publishes: a `config.json`
//! describing classrooms, rotations and labels, a `weeks/weeks-index.json`
//! listing available weeks newest-first, and one `weeks/{date}.json` per
//! newsletter. The source can be a local directory or a base URL.

use crate::core::{Error, Lang, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Per-language display labels from `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelBundle {
    pub title: String,
    pub subtitle: String,
    pub welcome_heading: String,
    pub math_heading: String,
    pub literacy_heading: String,
    pub specials_heading: String,
    pub shoutouts_heading: String,
    pub archive_heading: String,
    pub week_of: String,
    pub no_school: String,
    /// Weekday display names, Monday first
    pub days: Vec<String>,
}

/// Session-immutable configuration loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsletterConfig {
    pub classrooms: Vec<String>,
    /// Classroom badge: an emoji, or "img:<path>" for an image asset
    pub classroom_flags: HashMap<String, String>,
    /// Classroom -> rotation letter (A-F) -> subject name
    pub rotations: HashMap<String, HashMap<String, String>>,
    pub subject_icons: HashMap<String, String>,
    /// Canonical (English) subject name -> Spanish name
    pub subject_translations: HashMap<String, String>,
    pub labels: HashMap<String, LabelBundle>,
    pub season_logos: HashMap<String, String>,
}

impl NewsletterConfig {
    /// Label bundle for a language, falling back to English, then to an
    /// empty bundle. Missing labels degrade the display, never the run.
    pub fn labels_for(&self, lang: Lang) -> LabelBundle {
        self.labels
            .get(lang.tag())
            .or_else(|| self.labels.get(Lang::En.tag()))
            .cloned()
            .unwrap_or_default()
    }

    /// Season logo path with the "default" fallback
    pub fn season_logo(&self, season: &str) -> Option<&str> {
        self.season_logos
            .get(season)
            .or_else(|| self.season_logos.get("default"))
            .map(String::as_str)
    }
}

/// A content block written in both languages
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Bilingual {
    pub en: String,
    pub es: String,
}

impl Bilingual {
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Es => &self.es,
        }
    }
}

/// Image attached to a content section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SectionImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// One week's newsletter payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    /// The week's Monday
    pub date: NaiveDate,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub welcome: Bilingual,
    #[serde(default)]
    pub math: Bilingual,
    #[serde(default)]
    pub literacy: Bilingual,
    #[serde(default)]
    pub welcome_images: Vec<SectionImage>,
    #[serde(default)]
    pub math_images: Vec<SectionImage>,
    #[serde(default)]
    pub literacy_images: Vec<SectionImage>,
    /// Weekday key -> raw cell: a rotation letter, free text, or empty
    #[serde(default)]
    pub specials: HashMap<String, String>,
    /// Classroom -> recognized student
    #[serde(default)]
    pub shoutouts: HashMap<String, String>,
}

/// Where the published data files live
#[derive(Debug, Clone)]
enum DataSource {
    Local(PathBuf),
    Remote(String),
}

/// Loads newsletter data from a local directory or a published base URL
pub struct DataStore {
    source: DataSource,
    client: reqwest::Client,
}

impl DataStore {
    pub fn new(source: &str) -> Result<Self> {
        let source = if source.starts_with("http://") || source.starts_with("https://") {
            DataSource::Remote(source.trim_end_matches('/').to_string())
        } else {
            DataSource::Local(PathBuf::from(source))
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { source, client })
    }

    pub async fn load_config(&self) -> Result<NewsletterConfig> {
        self.fetch_json("config.json").await
    }

    /// Ordered list of available week dates, newest first
    pub async fn load_weeks_index(&self) -> Result<Vec<String>> {
        self.fetch_json("weeks/weeks-index.json").await
    }

    pub async fn load_week(&self, date: &str) -> Result<WeekRecord> {
        self.fetch_json(&format!("weeks/{}.json", date)).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, rel: &str) -> Result<T> {
        match &self.source {
            DataSource::Local(dir) => {
                let path = dir.join(rel);
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| Error::Data(format!("{}: {}", path.display(), e)))?;
                serde_json::from_str(&content)
                    .map_err(|e| Error::Data(format!("{}: {}", path.display(), e)))
            }
            DataSource::Remote(base) => {
                let url = format!("{}/{}", base, rel);
                log::debug!("Fetching {}", url);
                let resp = self.client.get(&url).send().await?.error_for_status()?;
                Ok(resp.json::<T>().await?)
            }
        }
    }
}
