#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weather lookup for Kerala districts.
//!
//! The search pipeline never depends on this crate; weather is a
//! capability the front end consumes on its own. The error policy is
//! catch-and-substitute: any fetch failure is logged and replaced with a
//! locally synthesized reading (see [`fallback`]), never propagated.

pub mod client;
pub mod fallback;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kerala_guide_destination_models::District;

pub use client::OpenWeatherClient;

/// Errors that can occur while fetching weather.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response parsed but did not have the expected shape.
    #[error("Malformed response: {message}")]
    Shape {
        /// Description of the missing or invalid field.
        message: String,
    },
}

/// Current conditions for a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in whole degrees Celsius.
    pub temp: i32,
    /// Apparent temperature in whole degrees Celsius.
    pub feels_like: i32,
    /// Relative humidity percentage.
    pub humidity: u32,
    /// Wind speed in whole km/h.
    pub wind_speed: i32,
    /// Human-readable conditions description.
    pub description: String,
    /// Emoji icon for the conditions.
    pub icon: String,
    /// Local sunrise time, "HH:MM".
    pub sunrise: String,
    /// Local sunset time, "HH:MM".
    pub sunset: String,
}

/// One day of forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Display date label (e.g. "Wed, Aug 26").
    pub date: String,
    /// Minimum temperature in whole degrees Celsius.
    pub temp_min: i32,
    /// Maximum temperature in whole degrees Celsius.
    pub temp_max: i32,
    /// Human-readable conditions description.
    pub description: String,
    /// Emoji icon for the conditions.
    pub icon: String,
    /// Relative humidity percentage.
    pub humidity: u32,
}

/// Current conditions plus a five-day forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedWeather {
    /// Conditions right now.
    pub current: CurrentConditions,
    /// The next five days.
    pub forecast: Vec<ForecastDay>,
}

/// A source of district weather readings.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions and forecast for a district.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] if the reading cannot be obtained.
    async fn fetch(&self, district: District) -> Result<DetailedWeather, WeatherError>;
}

/// Fetches weather, substituting a synthesized reading on any failure.
///
/// The failure is logged and swallowed; callers always get a plausible
/// reading for the district.
pub async fn fetch_with_fallback(
    provider: &dyn WeatherProvider,
    district: District,
    date: NaiveDate,
) -> DetailedWeather {
    match provider.fetch(district).await {
        Ok(weather) => weather,
        Err(e) => {
            log::warn!("Weather fetch for {district} failed ({e}), using fallback");
            fallback::synthesize(district, date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn fetch(&self, _district: District) -> Result<DetailedWeather, WeatherError> {
            Err(WeatherError::Shape {
                message: "no weather array".to_string(),
            })
        }
    }

    struct FixedProvider(DetailedWeather);

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn fetch(&self, _district: District) -> Result<DetailedWeather, WeatherError> {
            Ok(self.0.clone())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[tokio::test]
    async fn failure_substitutes_fallback() {
        let weather = fetch_with_fallback(&FailingProvider, District::Wayanad, date()).await;
        assert_eq!(weather.forecast.len(), 5);
        assert!((26..=34).contains(&weather.current.temp));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let expected = fallback::synthesize(District::Kollam, date());
        let provider = FixedProvider(expected.clone());
        let weather = fetch_with_fallback(&provider, District::Kollam, date()).await;
        assert_eq!(weather, expected);
    }
}
