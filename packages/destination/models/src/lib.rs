#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Destination taxonomy types and enrichment value definitions.
//!
//! This crate defines the canonical destination record schema and the
//! fixed enumerations (districts, categories, enrichment levels) shared
//! across the entire kerala-guide system. Records are immutable reference
//! data; enrichment never mutates them, only produces augmented copies.

pub mod district;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use district::District;

/// Tourism category tag on a destination.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// Coastal beaches and beach resorts
    Beach,
    /// High-altitude towns and tea country
    HillStation,
    /// Canal, lagoon, and lake networks
    Backwater,
    /// Colonial and historic sites
    Heritage,
    /// Sanctuaries and reserves
    Wildlife,
}

impl Category {
    /// All categories in their fixed presentation order.
    pub const ALL: &[Self] = &[
        Self::Beach,
        Self::HillStation,
        Self::Backwater,
        Self::Heritage,
        Self::Wildlife,
    ];

    /// Returns the emoji icon used when presenting this category.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Beach => "\u{1f3d6}\u{fe0f}",
            Self::HillStation => "\u{26f0}\u{fe0f}",
            Self::Backwater => "\u{1f6a4}",
            Self::Heritage => "\u{1f3db}\u{fe0f}",
            Self::Wildlife => "\u{1f405}",
        }
    }
}

/// Fallback icon for category tags outside the known taxonomy.
pub const UNKNOWN_CATEGORY_ICON: &str = "\u{1f4cd}";

/// Expected visitor crowding at a destination, derived per retrieval.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrowdLevel {
    /// Few visitors expected
    Low,
    /// Typical visitor volume
    Medium,
    /// Peak visitor volume
    High,
}

/// How well current conditions suit a visit, derived per retrieval.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum WeatherSuitability {
    /// Inside the destination's best-time window
    Excellent,
    /// Shoulder season, still pleasant
    Good,
    /// Off season
    Fair,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// Mean Earth radius in kilometers, used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometers (haversine).
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);

        2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
    }
}

/// A destination as stored in the catalog.
///
/// Immutable reference data, created once at catalog load and never
/// mutated thereafter. Optional fields receive defined defaults during
/// enrichment; `None` is never propagated to presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    /// Unique key (e.g. "kovalam-beach").
    pub id: String,
    /// Display name.
    pub name: String,
    /// District the destination sits in.
    pub district: District,
    /// Tourism category tag.
    pub category: Category,
    /// One-paragraph display description.
    pub description: String,
    /// Image URL for card presentation.
    pub image: String,
    /// Visitor rating in [0, 5].
    pub rating: f64,
    /// Road distance from the default origin in kilometers, if surveyed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Precise location, if surveyed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Best-time-to-visit month window (e.g. "Oct-Mar", "Nov-Feb").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    /// Activities available on site, in presentation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
    /// Entry fee display string (e.g. "Free", "₹50-200").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
    /// Opening hours display string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings: Option<String>,
    /// Nearby attractions, in presentation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nearby_attractions: Vec<String>,
    /// Free-form local advice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_tips: Option<String>,
}

/// A [`DestinationRecord`] augmented with derived display fields.
///
/// Produced per retrieval by the search pipeline; never persisted. The
/// nested record is a copy with the catalog's optional-field defaults
/// already applied, so presentation code reads every field directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecord {
    /// The catalog record with display defaults applied.
    #[serde(flatten)]
    pub record: DestinationRecord,
    /// Resolved distance from the search origin in kilometers.
    pub distance_km: f64,
    /// True iff rating is strictly greater than 4.5.
    pub is_recommended: bool,
    /// Expected crowding, derived from stable inputs.
    pub crowd_level: CrowdLevel,
    /// Visit suitability for the reference date, derived from the
    /// best-time window.
    pub weather_suitability: WeatherSuitability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_are_kebab_case() {
        assert_eq!(Category::Beach.to_string(), "beach");
        assert_eq!(Category::HillStation.to_string(), "hill-station");
        assert_eq!("backwater".parse::<Category>(), Ok(Category::Backwater));
        assert!("temple".parse::<Category>().is_err());
    }

    #[test]
    fn category_icons() {
        assert_eq!(Category::Beach.icon(), "🏖️");
        assert_eq!(Category::Wildlife.icon(), "🐅");
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let kochi = Coordinates::new(9.9312, 76.2673);
        assert!(kochi.distance_km(kochi).abs() < 1e-9);
    }

    #[test]
    fn haversine_matches_known_distance() {
        // Thiruvananthapuram <-> Kasaragod, roughly the full length of
        // Kerala, is about 490 km great-circle.
        let tvm = Coordinates::new(8.5241, 76.9366);
        let ksd = Coordinates::new(12.4996, 74.9869);
        let d = tvm.distance_km(ksd);
        assert!((480.0 - d).abs() < 30.0, "unexpected distance {d}");
    }

    #[test]
    fn record_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "id": "kovalam-beach",
            "name": "Kovalam Beach",
            "district": "Thiruvananthapuram",
            "category": "beach",
            "description": "Crescent beaches with lighthouse",
            "image": "https://example.com/kovalam.jpg",
            "rating": 4.5
        }"#;
        let record: DestinationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.district, District::Thiruvananthapuram);
        assert_eq!(record.category, Category::Beach);
        assert_eq!(record.distance, None);
        assert!(record.activities.is_empty());
    }
}
