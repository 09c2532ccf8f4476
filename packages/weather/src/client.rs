//! OpenWeatherMap client.
//!
//! Fetches current conditions and the 5-day forecast for a district's
//! centroid coordinates, in metric units, and shapes the responses into
//! [`DetailedWeather`]. Wind speed is converted from m/s to km/h and
//! condition ids are mapped to emoji icons.

use async_trait::async_trait;
use chrono::DateTime;

use kerala_guide_destination_models::District;

use crate::{CurrentConditions, DetailedWeather, ForecastDay, WeatherError, WeatherProvider};

/// Default OpenWeatherMap API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Number of forecast entries surfaced to the caller.
const FORECAST_DAYS: usize = 5;

/// IST offset used to render sunrise/sunset as local wall-clock times.
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 1800;

/// An OpenWeatherMap-backed [`WeatherProvider`].
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Creates a client for the public OpenWeatherMap API.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternate base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] if the HTTP client cannot be built.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    async fn get_json(
        &self,
        endpoint: &str,
        district: District,
    ) -> Result<serde_json::Value, WeatherError> {
        let coords = district.coordinates();
        let url = format!(
            "{}/{}?lat={}&lon={}&appid={}&units=metric",
            self.base_url, endpoint, coords.lat, coords.lon, self.api_key
        );
        let json = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(json)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, district: District) -> Result<DetailedWeather, WeatherError> {
        let current = self.get_json("weather", district).await?;
        let forecast = self.get_json("forecast", district).await?;

        Ok(DetailedWeather {
            current: shape_current(&current)?,
            forecast: shape_forecast(&forecast)?,
        })
    }
}

fn shape_current(json: &serde_json::Value) -> Result<CurrentConditions, WeatherError> {
    let main = &json["main"];

    Ok(CurrentConditions {
        temp: round_f64(number(main, "temp", "main.temp")?),
        feels_like: round_f64(number(main, "feels_like", "main.feels_like")?),
        humidity: unsigned(number(main, "humidity", "main.humidity")?),
        // OpenWeatherMap reports wind in m/s
        wind_speed: round_f64(number(&json["wind"], "speed", "wind.speed")? * 3.6),
        description: condition_description(json)?,
        icon: weather_icon(condition_id(json)?).to_string(),
        sunrise: local_time(number(&json["sys"], "sunrise", "sys.sunrise")?),
        sunset: local_time(number(&json["sys"], "sunset", "sys.sunset")?),
    })
}

fn shape_forecast(json: &serde_json::Value) -> Result<Vec<ForecastDay>, WeatherError> {
    let list = json["list"].as_array().ok_or_else(|| WeatherError::Shape {
        message: "no list array in forecast response".to_string(),
    })?;

    list.iter()
        .take(FORECAST_DAYS)
        .map(|item| {
            let main = &item["main"];
            Ok(ForecastDay {
                date: local_date(number(item, "dt", "list[].dt")?),
                temp_min: round_f64(number(main, "temp_min", "list[].main.temp_min")?),
                temp_max: round_f64(number(main, "temp_max", "list[].main.temp_max")?),
                description: condition_description(item)?,
                icon: weather_icon(condition_id(item)?).to_string(),
                humidity: unsigned(number(main, "humidity", "list[].main.humidity")?),
            })
        })
        .collect()
}

/// Maps an OpenWeatherMap condition id to an emoji icon.
#[must_use]
pub const fn weather_icon(condition_id: u64) -> &'static str {
    match condition_id {
        200..=299 => "\u{26c8}\u{fe0f}",  // thunderstorm
        300..=499 => "\u{1f326}\u{fe0f}", // drizzle
        500..=599 => "\u{1f327}\u{fe0f}", // rain
        600..=699 => "\u{2744}\u{fe0f}",  // snow
        700..=799 => "\u{1f32b}\u{fe0f}", // atmosphere
        800 => "\u{2600}\u{fe0f}",        // clear
        _ => "\u{26c5}",                  // clouds
    }
}

fn number(json: &serde_json::Value, field: &str, label: &str) -> Result<f64, WeatherError> {
    json.get(field)
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| WeatherError::Shape {
            message: format!("missing numeric field {label}"),
        })
}

fn condition_id(json: &serde_json::Value) -> Result<u64, WeatherError> {
    json["weather"][0]["id"]
        .as_u64()
        .ok_or_else(|| WeatherError::Shape {
            message: "missing weather[0].id".to_string(),
        })
}

fn condition_description(json: &serde_json::Value) -> Result<String, WeatherError> {
    json["weather"][0]["description"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| WeatherError::Shape {
            message: "missing weather[0].description".to_string(),
        })
}

#[allow(clippy::cast_possible_truncation)]
fn round_f64(value: f64) -> i32 {
    value.round() as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unsigned(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Formats a unix timestamp as IST wall-clock "HH:MM".
fn local_time(unix: f64) -> String {
    timestamp(unix).map_or_else(String::new, |dt| dt.format("%H:%M").to_string())
}

/// Formats a unix timestamp as an IST date label like "Wed, Aug 26".
fn local_date(unix: f64) -> String {
    timestamp(unix).map_or_else(String::new, |dt| dt.format("%a, %b %d").to_string())
}

#[allow(clippy::cast_possible_truncation)]
fn timestamp(unix: f64) -> Option<DateTime<chrono::FixedOffset>> {
    let offset = chrono::FixedOffset::east_opt(IST_OFFSET_SECONDS)?;
    Some(DateTime::from_timestamp(unix as i64, 0)?.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_mapping_matches_condition_ranges() {
        assert_eq!(weather_icon(211), "⛈️");
        assert_eq!(weather_icon(301), "🌦️");
        assert_eq!(weather_icon(502), "🌧️");
        assert_eq!(weather_icon(741), "🌫️");
        assert_eq!(weather_icon(800), "☀️");
        assert_eq!(weather_icon(804), "⛅");
    }

    #[test]
    fn shapes_current_response() {
        let json = serde_json::json!({
            "main": { "temp": 28.6, "feels_like": 31.2, "humidity": 74 },
            "wind": { "speed": 3.5 },
            "weather": [{ "id": 801, "description": "few clouds" }],
            "sys": { "sunrise": 1_756_169_700, "sunset": 1_756_214_100 }
        });
        let current = shape_current(&json).unwrap();
        assert_eq!(current.temp, 29);
        assert_eq!(current.feels_like, 31);
        assert_eq!(current.humidity, 74);
        // 3.5 m/s is 12.6 km/h
        assert_eq!(current.wind_speed, 13);
        assert_eq!(current.description, "few clouds");
        assert_eq!(current.icon, "⛅");
    }

    #[test]
    fn shapes_forecast_and_caps_at_five_days() {
        let entry = serde_json::json!({
            "dt": 1_756_270_800,
            "main": { "temp_min": 24.2, "temp_max": 31.8, "humidity": 80 },
            "weather": [{ "id": 500, "description": "light rain" }]
        });
        let json = serde_json::json!({ "list": vec![entry; 8] });
        let forecast = shape_forecast(&json).unwrap();
        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast[0].temp_min, 24);
        assert_eq!(forecast[0].temp_max, 32);
        assert_eq!(forecast[0].icon, "🌧️");
    }

    #[test]
    fn malformed_response_is_a_shape_error() {
        let json = serde_json::json!({ "cod": "401", "message": "Invalid API key" });
        let err = shape_current(&json).unwrap_err();
        assert!(matches!(err, WeatherError::Shape { .. }));
    }
}
