//! Open-Meteo forecast client

use crate::core::{Error, Result};
use crate::weather::{Forecast, ForecastDay, ForecastSource};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// The daily series we ask the provider for, in request order
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max,weathercode";

/// Forecast client against the Open-Meteo daily API
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
    timezone: String,
}

impl OpenMeteoClient {
    pub fn new(latitude: f64, longitude: f64, timezone: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude,
            longitude,
            timezone: timezone.to_string(),
        })
    }

    /// Point the client at a different host (integration tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Raw response: parallel arrays indexed by day offset from `start_date`
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailySeries>,
}

#[derive(Debug, Deserialize, Default)]
struct DailySeries {
    #[serde(default)]
    time: Vec<NaiveDate>,
    #[serde(default)]
    temperature_2m_max: Vec<f64>,
    #[serde(default)]
    temperature_2m_min: Vec<f64>,
    /// The provider reports null when no probability is available
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    weathercode: Vec<i32>,
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    async fn fetch_daily(&self, start: NaiveDate, end: NaiveDate) -> Result<Forecast> {
        let url = format!("{}/v1/forecast", self.base_url);
        log::debug!("Fetching forecast {} to {}", start, end);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("timezone", self.timezone.clone()),
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ForecastResponse = response.json().await?;

        let daily = body
            .daily
            .ok_or_else(|| Error::Data("forecast response missing daily arrays".to_string()))?;
        if daily.time.is_empty() {
            return Err(Error::Data("forecast response has no days".to_string()));
        }

        let forecast = daily
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| ForecastDay {
                date: *date,
                high: daily
                    .temperature_2m_max
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .round() as i32,
                low: daily
                    .temperature_2m_min
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .round() as i32,
                precipitation_probability: daily
                    .precipitation_probability_max
                    .get(i)
                    .copied()
                    .flatten()
                    .unwrap_or_default()
                    .round() as u8,
                weather_code: daily.weathercode.get(i).copied().unwrap_or_default(),
            })
            .collect();

        Ok(forecast)
    }
}
