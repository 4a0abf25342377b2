//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Display language for the newsletter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    /// Language tag as used in data files ("en" / "es")
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse a language tag; anything unrecognized is `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }
}

/// Per-run view state: the active language and the classroom the reader
/// asked to personalize for. Owned by the binary, passed to the renderers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub lang: Lang,
    pub selected_classroom: Option<String>,
}

impl AppState {
    pub fn new(lang: Lang, selected_classroom: Option<String>) -> Self {
        Self {
            lang,
            selected_classroom,
        }
    }
}

/// Weekday keys used in week records, Monday first (school days only)
pub const DAY_KEYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Map a calendar weekday to the key used in week records
pub fn weekday_key(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Mon => "monday",
        chrono::Weekday::Tue => "tuesday",
        chrono::Weekday::Wed => "wednesday",
        chrono::Weekday::Thu => "thursday",
        chrono::Weekday::Fri => "friday",
        chrono::Weekday::Sat => "saturday",
        chrono::Weekday::Sun => "sunday",
    }
}
