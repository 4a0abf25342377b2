//! Weekly weather outlook
//!
//! Fetches a Monday-Friday forecast for the current newsletter week and
//! turns each day into an icon, a localized description and a short list
//! of preparedness tips for families. Forecasts are cached per date range
//! for the lifetime of the run; a failed fetch is never cached, so the
//! next request retries.

mod client;

pub use client::OpenMeteoClient;

use crate::core::Result;
use crate::i18n::I18n;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// School weeks run Monday through Friday
const WEEK_SPAN_DAYS: i64 = 4;

/// Forecast providers only look ahead about this far
const MAX_LOOKAHEAD_DAYS: i64 = 16;

/// One day's forecast summary
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Daily high, rounded Fahrenheit
    pub high: i32,
    /// Daily low, rounded Fahrenheit
    pub low: i32,
    /// Chance of precipitation, 0-100
    pub precipitation_probability: u8,
    /// WMO weather code
    pub weather_code: i32,
}

/// Forecast days aligned by index to the week's Monday
pub type Forecast = Vec<ForecastDay>;

/// Source of daily forecasts for an inclusive date range
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_daily(&self, start: NaiveDate, end: NaiveDate) -> Result<Forecast>;
}

/// Fetches and caches the week forecast
pub struct WeatherAdvisor {
    source: Box<dyn ForecastSource>,
    cache: Mutex<HashMap<String, Forecast>>,
}

impl WeatherAdvisor {
    pub fn new(source: Box<dyn ForecastSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Forecast for the school week starting at `week_start`, or `None`.
    ///
    /// Only the newest week in the index gets a forecast, and only while
    /// its Friday is within the provider's lookahead horizon; everything
    /// else returns `None` without a fetch. A fetch failure also returns
    /// `None` and leaves the cache untouched so a later call can retry.
    ///
    /// The cache lock is held across the fetch, so concurrent callers for
    /// the same range can never race two fetches against each other.
    pub async fn get_forecast(
        &self,
        week_start: NaiveDate,
        weeks_index: &[String],
        today: NaiveDate,
    ) -> Option<Forecast> {
        let current = weeks_index.first()?;
        if *current != week_start.to_string() {
            return None;
        }

        let week_end = week_start + Duration::days(WEEK_SPAN_DAYS);
        if (week_end - today).num_days() > MAX_LOOKAHEAD_DAYS {
            return None;
        }

        let cache_key = format!("{}_{}", week_start, week_end);
        let mut cache = self.cache.lock().await;
        if let Some(forecast) = cache.get(&cache_key) {
            log::debug!("Forecast cache hit for {}", cache_key);
            return Some(forecast.clone());
        }

        match self.source.fetch_daily(week_start, week_end).await {
            Ok(forecast) => {
                cache.insert(cache_key, forecast.clone());
                Some(forecast)
            }
            Err(e) => {
                log::warn!("Weather fetch failed for {}: {}", cache_key, e);
                None
            }
        }
    }
}

/// Glyph for a WMO weather code.
///
/// The ascending thresholds mirror the WMO code table boundaries and are
/// kept exactly as published, including 58-60 landing in the rain bucket.
pub fn icon_for(code: i32) -> &'static str {
    if code == 0 {
        "\u{2600}\u{FE0F}"
    } else if code <= 3 {
        "\u{26C5}"
    } else if code <= 48 {
        "\u{2601}\u{FE0F}"
    } else if code <= 57 {
        "\u{1F327}\u{FE0F}"
    } else if code <= 67 {
        "\u{1F327}\u{FE0F}"
    } else if code <= 77 {
        "\u{2744}\u{FE0F}"
    } else if code <= 82 {
        "\u{1F327}\u{FE0F}"
    } else if code <= 86 {
        "\u{2744}\u{FE0F}"
    } else if code >= 95 {
        "\u{26C8}\u{FE0F}"
    } else {
        "\u{1F324}\u{FE0F}"
    }
}

/// Localized description for a WMO weather code.
///
/// Falls back from the exact code to the code rounded down to a multiple
/// of ten, then to the generic mixed-weather string.
pub fn description_for(code: i32, i18n: &I18n) -> String {
    if let Some(description) = i18n.lookup(&format!("weather.code.{}", code)) {
        return description.to_string();
    }
    let decade = (code / 10) * 10;
    if let Some(description) = i18n.lookup(&format!("weather.code.{}", decade)) {
        return description.to_string();
    }
    i18n.get("weather.mixed")
}

/// Ordered preparedness tips for one day's forecast.
///
/// Rules accumulate in a fixed order: clothing tier, heat, precipitation,
/// snow gear, severe weather. A day that triggers nothing gets the single
/// good-weather tip.
pub fn tips_for(high: i32, low: i32, rain_chance: u8, code: i32, i18n: &I18n) -> Vec<String> {
    let mut tips = Vec::new();

    if low <= 32 {
        tips.push(i18n.get("tip.heavy_coat"));
    } else if low <= 45 {
        tips.push(i18n.get("tip.warm_jacket"));
    } else if high <= 55 {
        tips.push(i18n.get("tip.light_jacket"));
    }

    if high >= 85 {
        tips.push(i18n.get("tip.extra_water"));
        tips.push(i18n.get("tip.sunscreen"));
    }

    if rain_chance >= 50 || (61..=67).contains(&code) || (80..=82).contains(&code) {
        tips.push(i18n.get("tip.umbrella_boots"));
    } else if rain_chance >= 30 {
        tips.push(i18n.get("tip.umbrella_maybe"));
    }

    if (71..=77).contains(&code) || (85..=86).contains(&code) {
        tips.push(i18n.get("tip.snow_boots"));
    }

    if code >= 95 {
        tips.push(i18n.get("tip.storm_safety"));
    }

    if tips.is_empty() {
        tips.push(i18n.get("tip.great_weather"));
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted source: the first `failures` calls error, later ones
    /// return a one-day forecast. Counts every call.
    struct StubSource {
        calls: Arc<AtomicUsize>,
        failures: usize,
    }

    #[async_trait]
    impl ForecastSource for StubSource {
        async fn fetch_daily(&self, start: NaiveDate, _end: NaiveDate) -> Result<Forecast> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(Error::Data("stubbed outage".to_string()));
            }
            Ok(vec![ForecastDay {
                date: start,
                high: 70,
                low: 52,
                precipitation_probability: 10,
                weather_code: 1,
            }])
        }
    }

    fn advisor_with_stub(failures: usize) -> (WeatherAdvisor, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let advisor = WeatherAdvisor::new(Box::new(StubSource {
            calls: calls.clone(),
            failures,
        }));
        (advisor, calls)
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
    }

    fn index() -> Vec<String> {
        vec!["2026-09-14".to_string(), "2026-09-07".to_string()]
    }

    #[tokio::test]
    async fn test_forecast_cached_after_first_fetch() {
        let (advisor, calls) = advisor_with_stub(0);
        let today = monday();

        let first = advisor.get_forecast(monday(), &index(), today).await;
        let second = advisor.get_forecast(monday(), &index(), today).await;

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let (advisor, calls) = advisor_with_stub(1);
        let today = monday();

        let first = advisor.get_forecast(monday(), &index(), today).await;
        assert!(first.is_none());

        // The failure was not cached, so this retries and succeeds
        let second = advisor.get_forecast(monday(), &index(), today).await;
        assert!(second.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_archived_week_gets_no_forecast() {
        let (advisor, calls) = advisor_with_stub(0);
        let older = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();

        let forecast = advisor.get_forecast(older, &index(), monday()).await;

        assert!(forecast.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_far_future_week_gets_no_forecast() {
        let (advisor, calls) = advisor_with_stub(0);
        // Friday ends 20 days out, past the provider horizon
        let today = monday() - Duration::days(16);

        let forecast = advisor.get_forecast(monday(), &index(), today).await;

        assert!(forecast.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_week_at_horizon_edge_is_fetched() {
        let (advisor, calls) = advisor_with_stub(0);
        // Friday ends exactly 16 days out
        let today = monday() - Duration::days(12);

        let forecast = advisor.get_forecast(monday(), &index(), today).await;

        assert!(forecast.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_icon_buckets() {
        assert_eq!(icon_for(0), "\u{2600}\u{FE0F}");
        assert_eq!(icon_for(3), "\u{26C5}");
        assert_eq!(icon_for(45), "\u{2601}\u{FE0F}");
        assert_eq!(icon_for(51), "\u{1F327}\u{FE0F}");
        assert_eq!(icon_for(61), "\u{1F327}\u{FE0F}");
        assert_eq!(icon_for(65), "\u{1F327}\u{FE0F}");
        assert_eq!(icon_for(71), "\u{2744}\u{FE0F}");
        assert_eq!(icon_for(80), "\u{1F327}\u{FE0F}");
        assert_eq!(icon_for(85), "\u{2744}\u{FE0F}");
        assert_eq!(icon_for(95), "\u{26C8}\u{FE0F}");
        assert_eq!(icon_for(99), "\u{26C8}\u{FE0F}");
        // Codes between the snow-shower and thunderstorm bands
        assert_eq!(icon_for(90), "\u{1F324}\u{FE0F}");
    }

    #[test]
    fn test_icon_58_to_60_fall_in_rain_bucket() {
        // Inherited boundary behavior, kept as-is
        for code in 58..=60 {
            assert_eq!(icon_for(code), "\u{1F327}\u{FE0F}");
        }
    }

    #[test]
    fn test_description_exact_code() {
        let i18n = I18n::new("en");
        assert_eq!(description_for(63, &i18n), "Rain");
        assert_eq!(description_for(0, &i18n), "Clear sky");
    }

    #[test]
    fn test_description_decade_fallback() {
        let i18n = I18n::new("en");
        // 89 is unknown, 80 is "Light showers"
        assert_eq!(description_for(89, &i18n), "Light showers");
        // 4 is unknown, 0 is "Clear sky"
        assert_eq!(description_for(4, &i18n), "Clear sky");
    }

    #[test]
    fn test_description_generic_fallback() {
        let en = I18n::new("en");
        assert_eq!(description_for(62, &en), "Mixed");
        let es = I18n::new("es");
        assert_eq!(description_for(62, &es), "Variable");
    }

    #[test]
    fn test_tips_deep_cold_is_single_tip() {
        let i18n = I18n::new("en");
        let tips = tips_for(20, 10, 0, 0, &i18n);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0], i18n.get("tip.heavy_coat"));
    }

    #[test]
    fn test_tips_hot_day_gets_water_and_sunscreen() {
        let i18n = I18n::new("en");
        let tips = tips_for(90, 70, 10, 0, &i18n);
        assert_eq!(
            tips,
            vec![i18n.get("tip.extra_water"), i18n.get("tip.sunscreen")]
        );
    }

    #[test]
    fn test_tips_mild_day_gets_good_weather_fallback() {
        let i18n = I18n::new("en");
        let tips = tips_for(60, 50, 0, 1, &i18n);
        assert_eq!(tips, vec![i18n.get("tip.great_weather")]);
    }

    #[test]
    fn test_tips_rain_code_forces_strong_umbrella() {
        let i18n = I18n::new("en");
        // Rain chance below both thresholds, but the code is in the rain band
        let tips = tips_for(60, 50, 10, 63, &i18n);
        assert_eq!(tips, vec![i18n.get("tip.umbrella_boots")]);
    }

    #[test]
    fn test_tips_moderate_rain_chance_gets_soft_umbrella() {
        let i18n = I18n::new("en");
        let tips = tips_for(60, 50, 35, 2, &i18n);
        assert_eq!(tips, vec![i18n.get("tip.umbrella_maybe")]);
    }

    #[test]
    fn test_tips_snowstorm_accumulates_in_order() {
        let i18n = I18n::new("en");
        let tips = tips_for(28, 15, 80, 75, &i18n);
        assert_eq!(
            tips,
            vec![
                i18n.get("tip.heavy_coat"),
                i18n.get("tip.umbrella_boots"),
                i18n.get("tip.snow_boots"),
            ]
        );
    }

    #[test]
    fn test_tips_thunderstorm_includes_safety() {
        let i18n = I18n::new("en");
        let tips = tips_for(75, 60, 90, 95, &i18n);
        assert_eq!(
            tips,
            vec![i18n.get("tip.umbrella_boots"), i18n.get("tip.storm_safety")]
        );
    }
}
