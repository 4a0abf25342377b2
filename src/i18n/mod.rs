//! Internationalization module
//!
//! Provides translations for English (en) and Spanish (es) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod es;

use crate::core::Lang;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: Lang,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language tag
    /// ("auto", "en" or "es")
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: Lang::En,
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            Self::detect_system_language()
        } else {
            Lang::from_tag(lang).unwrap_or_default()
        };

        self.current_lang = lang;
        self.translations = match lang {
            Lang::Es => es::get_translations(),
            Lang::En => en::get_translations(),
        };

        log::info!("Language set to: {}", self.current_lang.tag());
    }

    /// Get a translated string by key, falling back to the key itself
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Exact lookup with no fallback
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    /// Get the current language
    pub fn lang(&self) -> Lang {
        self.current_lang
    }

    /// Render a calendar date in full written form for the current language.
    /// Works on the calendar date directly so the result never shifts a day
    /// across timezones.
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        let month = self.get(&format!("date.month.{}", date.month()));
        match self.current_lang {
            Lang::En => format!("{} {}, {}", month, date.day(), date.year()),
            Lang::Es => format!("{} de {} de {}", date.day(), month, date.year()),
        }
    }

    /// Detect system language from the environment
    fn detect_system_language() -> Lang {
        let lang_env = std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_else(|_| "en".to_string());

        // Extract language code (e.g., "es_MX.UTF-8" -> "es")
        let lang_code = lang_env
            .split('_')
            .next()
            .unwrap_or("en")
            .split('.')
            .next()
            .unwrap_or("en");

        Lang::from_tag(lang_code).unwrap_or_default()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Translate a canonical subject name using the configured translation table.
/// Spanish looks the subject up and falls back to the canonical name; any
/// other language returns the subject unchanged.
pub fn translate_subject<'a>(
    subject: &'a str,
    lang: Lang,
    translations: &'a HashMap<String, String>,
) -> &'a str {
    match lang {
        Lang::Es => translations
            .get(subject)
            .map(String::as_str)
            .unwrap_or(subject),
        Lang::En => subject,
    }
}

/// Weekday display name plus a short numeric month/day, e.g. "Monday (9/15)"
pub fn day_label(day_name: &str, date: NaiveDate) -> String {
    format!("{} ({}/{})", day_name, date.month(), date.day())
}
