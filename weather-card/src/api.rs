//! OpenWeatherMap client
//!
//! One `GET` per lookup, keyed by the district name as free text. Any non-2xx
//! status is reported as "location not found"; everything else that goes wrong
//! (connect, TLS, body decoding) is a transport failure. No retries.

use reqwest::Client;
use serde::Deserialize;

use crate::error::FetchError;
use crate::state::{Condition, WeatherReading};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Provider response, limited to the fields the card shows
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
}

impl WeatherResponse {
    fn into_reading(self) -> Result<WeatherReading, FetchError> {
        let keyword = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or_else(|| FetchError::transport("response has no weather entries"))?;

        Ok(WeatherReading {
            temperature_c: round_half_up(self.main.temp),
            feels_like_c: round_half_up(self.main.feels_like),
            humidity_pct: self.main.humidity,
            wind_speed_kmh: self.wind.speed,
            pressure_hpa: self.main.pressure,
            condition: Condition::from_provider(&keyword),
        })
    }
}

/// Nearest whole degree, halves rounded towards positive infinity
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Weather lookups against a fixed endpoint and credential
#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch current conditions for `district`
    pub async fn fetch(&self, district: &str) -> Result<WeatherReading, FetchError> {
        tracing::debug!(district, "requesting current weather");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("units", "metric"),
                ("q", district),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(district, error = %err, "weather request failed");
                FetchError::transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(district, status = status.as_u16(), "provider rejected location");
            return Err(FetchError::NotFound {
                status: status.as_u16(),
            });
        }

        let body: WeatherResponse = response.json().await.map_err(|err| {
            tracing::warn!(district, error = %err, "weather response could not be decoded");
            FetchError::transport(err)
        })?;

        let reading = body.into_reading()?;
        tracing::debug!(
            district,
            temperature_c = reading.temperature_c,
            condition = reading.condition.label(),
            "weather received"
        );
        Ok(reading)
    }
}
