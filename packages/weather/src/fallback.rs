//! Synthesized weather readings.
//!
//! Substituted whenever the real fetch fails (missing API key, network
//! error, malformed response). Values are plausible for Kerala's monsoon
//! climate and derive entirely from the district and date, so the same
//! failure always produces the same reading.

use chrono::NaiveDate;

use kerala_guide_destination_models::District;

use crate::{CurrentConditions, DetailedWeather, ForecastDay};

/// Icons rotated through for current conditions.
const CURRENT_ICONS: &[&str] = &[
    "\u{2600}\u{fe0f}",
    "\u{26c5}",
    "\u{1f326}\u{fe0f}",
    "\u{1f327}\u{fe0f}",
];

/// Description/icon pairs rotated through for forecast days.
const FORECAST_CONDITIONS: &[(&str, &str)] = &[
    ("Sunny", "\u{2600}\u{fe0f}"),
    ("Partly Cloudy", "\u{26c5}"),
    ("Light Rain", "\u{1f326}\u{fe0f}"),
    ("Heavy Rain", "\u{1f327}\u{fe0f}"),
    ("Cloudy", "\u{2601}\u{fe0f}"),
];

/// Synthesizes a plausible reading for a district on a date.
///
/// Temperature lands in 26-34 °C, humidity in 65-85 %, wind in
/// 8-18 km/h, matching coastal Kerala norms.
#[must_use]
pub fn synthesize(district: District, date: NaiveDate) -> DetailedWeather {
    let seed = seed(district, date);

    let temp = 26 + pick(seed, 0, 8);
    let current = CurrentConditions {
        temp,
        feels_like: temp + 2,
        humidity: 65 + unsigned_pick(seed, 1, 20),
        wind_speed: 8 + pick(seed, 2, 10),
        description: "Partly cloudy with monsoon breeze".to_string(),
        icon: CURRENT_ICONS[index_pick(seed, 3, CURRENT_ICONS.len())].to_string(),
        sunrise: "06:15".to_string(),
        sunset: "18:45".to_string(),
    };

    let forecast = (1..=5)
        .map(|day| {
            let day_seed = seed.wrapping_add(day);
            let (description, icon) =
                FORECAST_CONDITIONS[index_pick(day_seed, 4, FORECAST_CONDITIONS.len())];
            ForecastDay {
                date: (date + chrono::Days::new(day))
                    .format("%a, %b %d")
                    .to_string(),
                temp_min: 24 + pick(day_seed, 5, 5),
                temp_max: 30 + pick(day_seed, 6, 5),
                description: description.to_string(),
                icon: icon.to_string(),
                humidity: 70 + unsigned_pick(day_seed, 7, 15),
            }
        })
        .collect();

    DetailedWeather { current, forecast }
}

fn seed(district: District, date: NaiveDate) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let key = format!("{district}:{date}");
    let mut hash = OFFSET_BASIS;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Deterministic value in `[0, span)` for a given seed and salt.
fn mix(seed: u64, salt: u64, span: u64) -> u64 {
    let mixed = (seed ^ salt.wrapping_mul(0x9e37_79b9_7f4a_7c15)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    (mixed >> 32) % span
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn pick(seed: u64, salt: u64, span: u64) -> i32 {
    mix(seed, salt, span) as i32
}

#[allow(clippy::cast_possible_truncation)]
fn unsigned_pick(seed: u64, salt: u64, span: u64) -> u32 {
    mix(seed, salt, span) as u32
}

#[allow(clippy::cast_possible_truncation)]
fn index_pick(seed: u64, salt: u64, len: usize) -> usize {
    mix(seed, salt, len as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    #[test]
    fn values_stay_in_reference_ranges() {
        for district in District::ALL {
            let weather = synthesize(*district, date());
            assert!((26..=33).contains(&weather.current.temp));
            assert!((65..=84).contains(&weather.current.humidity));
            assert!((8..=17).contains(&weather.current.wind_speed));
            assert_eq!(weather.forecast.len(), 5);
            for day in &weather.forecast {
                assert!((24..=28).contains(&day.temp_min));
                assert!((30..=34).contains(&day.temp_max));
                assert!((70..=84).contains(&day.humidity));
            }
        }
    }

    #[test]
    fn same_inputs_same_reading() {
        assert_eq!(
            synthesize(District::Idukki, date()),
            synthesize(District::Idukki, date())
        );
    }

    #[test]
    fn readings_vary_across_districts() {
        let all: Vec<DetailedWeather> = District::ALL
            .iter()
            .map(|d| synthesize(*d, date()))
            .collect();
        assert!(all.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn forecast_dates_advance_from_reference_date() {
        let weather = synthesize(District::Thrissur, date());
        assert_eq!(weather.forecast[0].date, "Thu, Aug 27");
        assert_eq!(weather.forecast[4].date, "Mon, Aug 31");
    }
}
