//! Derived-field synthesis for destination records.
//!
//! Enrichment is a pure function of the record and the search context.
//! Crowd level, weather suitability, and unresolved distances all derive
//! from stable inputs (record id hash, best-time window, day of week,
//! district centroids), so identical searches return identical results.

use chrono::{Datelike, Weekday};

use kerala_guide_destination_models::{CrowdLevel, DestinationRecord, District, EnrichedRecord};

use crate::{SearchContext, season};

/// Rating above which a destination is flagged as recommended.
pub const RECOMMENDED_RATING: f64 = 4.5;

/// Display default for records without a best-time tag.
pub const DEFAULT_BEST_TIME: &str = "Year-round";

/// Display default for records without an entry fee.
pub const DEFAULT_ENTRY_FEE: &str = "Free";

/// Display default for records without opening hours.
pub const DEFAULT_TIMINGS: &str = "24 hours";

/// Produces the enriched copy of a record for the given context.
///
/// The source record is never mutated; the copy carries the centralized
/// optional-field defaults so presentation code reads every field
/// directly instead of re-deriving fallbacks per display site.
#[must_use]
pub fn enrich(record: &DestinationRecord, ctx: &SearchContext) -> EnrichedRecord {
    let distance_km = resolve_distance(record, ctx.origin);

    let mut record = record.clone();
    record.best_time.get_or_insert_with(|| DEFAULT_BEST_TIME.to_string());
    record.entry_fee.get_or_insert_with(|| DEFAULT_ENTRY_FEE.to_string());
    record.timings.get_or_insert_with(|| DEFAULT_TIMINGS.to_string());

    EnrichedRecord {
        is_recommended: record.rating > RECOMMENDED_RATING,
        crowd_level: crowd_level(&record.id, ctx),
        weather_suitability: season::suitability(record.best_time.as_deref(), ctx.date.month()),
        distance_km,
        record,
    }
}

/// Resolves the distance from the search origin in kilometers.
///
/// An explicitly surveyed distance is used unchanged. Otherwise the
/// distance is the haversine from the origin district centroid to the
/// record's coordinates, falling back to the destination district
/// centroid (zero when both districts are the same).
fn resolve_distance(record: &DestinationRecord, origin: District) -> f64 {
    if let Some(distance) = record.distance {
        return distance;
    }

    let from = origin.coordinates();
    if let Some(coordinates) = record.coordinates {
        return from.distance_km(coordinates).round();
    }

    if record.district == origin {
        0.0
    } else {
        from.distance_km(record.district.coordinates()).round()
    }
}

/// Expected crowding, derived from the record id hash and the reference
/// date's day of week. Weekends shift one level toward `High`.
fn crowd_level(id: &str, ctx: &SearchContext) -> CrowdLevel {
    const LEVELS: [CrowdLevel; 3] = [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High];

    #[allow(clippy::cast_possible_truncation)]
    let bucket = (fnv1a(id.as_bytes()) % 3) as usize;

    let weekend = matches!(ctx.date.weekday(), Weekday::Sat | Weekday::Sun);
    let index = if weekend { (bucket + 1).min(2) } else { bucket };
    LEVELS[index]
}

/// 64-bit FNV-1a over a byte slice. Stable across runs and platforms,
/// which is the whole point: the same record always lands in the same
/// crowd bucket.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kerala_guide_destination_models::{Category, Coordinates};

    fn record() -> DestinationRecord {
        DestinationRecord {
            id: "test-spot".to_string(),
            name: "Test Spot".to_string(),
            district: District::Ernakulam,
            category: Category::Heritage,
            description: String::new(),
            image: String::new(),
            rating: 4.6,
            distance: None,
            coordinates: None,
            best_time: None,
            activities: Vec::new(),
            entry_fee: None,
            timings: None,
            nearby_attractions: Vec::new(),
            local_tips: None,
        }
    }

    fn ctx() -> SearchContext {
        SearchContext::new(
            District::Ernakulam,
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        )
    }

    #[test]
    fn explicit_distance_is_used_unchanged() {
        let mut r = record();
        r.distance = Some(42.0);
        assert!((enrich(&r, &ctx()).distance_km - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_district_without_coordinates_is_zero() {
        assert!(enrich(&record(), &ctx()).distance_km.abs() < f64::EPSILON);
    }

    #[test]
    fn cross_district_distance_uses_centroids() {
        let mut r = record();
        r.district = District::Wayanad;
        let d = enrich(&r, &ctx()).distance_km;
        // Ernakulam to Wayanad is on the order of 190 km great-circle.
        assert!((100.0..300.0).contains(&d), "unexpected distance {d}");
    }

    #[test]
    fn record_coordinates_win_over_district_centroid() {
        let mut r = record();
        r.district = District::Wayanad;
        r.coordinates = Some(District::Ernakulam.coordinates());
        assert!(enrich(&r, &ctx()).distance_km.abs() < f64::EPSILON);
    }

    #[test]
    fn recommended_is_strict() {
        let mut r = record();
        r.rating = 4.5;
        assert!(!enrich(&r, &ctx()).is_recommended);
        r.rating = 4.51;
        assert!(enrich(&r, &ctx()).is_recommended);
    }

    #[test]
    fn defaults_are_applied_once() {
        let enriched = enrich(&record(), &ctx());
        assert_eq!(enriched.record.best_time.as_deref(), Some("Year-round"));
        assert_eq!(enriched.record.entry_fee.as_deref(), Some("Free"));
        assert_eq!(enriched.record.timings.as_deref(), Some("24 hours"));
    }

    #[test]
    fn crowd_level_is_stable_per_day() {
        let a = enrich(&record(), &ctx());
        let b = enrich(&record(), &ctx());
        assert_eq!(a.crowd_level, b.crowd_level);
    }

    #[test]
    fn weekend_shifts_crowd_toward_high() {
        // 2026-01-12 is a Monday, 2026-01-17 a Saturday.
        let weekday = enrich(&record(), &ctx());
        let weekend = enrich(
            &record(),
            &SearchContext::new(
                District::Ernakulam,
                NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            ),
        );
        assert!(weekend.crowd_level >= weekday.crowd_level);
    }

    #[test]
    fn fnv1a_known_vector() {
        // FNV-1a test vector: empty input hashes to the offset basis.
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
    }
}
