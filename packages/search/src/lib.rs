#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Destination filter and enrichment pipeline.
//!
//! Transforms `(catalog, filter set, context)` into the ordered visible
//! result set. Filters are conjunctive; a record must pass every active
//! filter, and a neutral filter field (empty set, zero rating, maximum
//! distance, empty query) is a no-op rather than an exclusion. Results
//! preserve catalog insertion order; nothing is re-sorted.
//!
//! The pipeline is a pure function of its inputs: enrichment derives the
//! recommended flag, crowd level, weather suitability, and unresolved
//! distances deterministically (see [`enrich`]), so identical searches
//! return identical results.

pub mod enrich;
pub mod season;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kerala_guide_catalog::Catalog;
use kerala_guide_destination_models::{DestinationRecord, District, EnrichedRecord};

/// Neutral value for the maximum-distance filter, matching the UI's
/// slider ceiling. Every destination in Kerala resolves below this.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 500.0;

/// Transient query state for one search interaction.
///
/// Owned by the UI; the tag sets carry UI-facing strings. An unknown
/// category or season tag never equals any record tag, so a filter set
/// containing only unknown tags matches nothing instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    /// Free-text query, matched case-insensitively against name,
    /// description, and district. Empty = no restriction.
    pub query: String,
    /// Category tags to keep (e.g. "beach"). Empty = no restriction.
    pub category: BTreeSet<String>,
    /// Minimum rating threshold. Zero = no restriction.
    pub rating: f64,
    /// Maximum resolved distance in kilometers.
    pub distance: f64,
    /// Best-time tags to keep (e.g. "Oct-Mar"). Empty = no restriction.
    pub best_time: BTreeSet<String>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: BTreeSet::new(),
            rating: 0.0,
            distance: DEFAULT_MAX_DISTANCE_KM,
            best_time: BTreeSet::new(),
        }
    }
}

/// Stable inputs the enrichment step derives its fields from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    /// District distances are measured from.
    pub origin: District,
    /// Reference date for crowd and suitability derivation.
    pub date: NaiveDate,
}

impl SearchContext {
    /// Creates a context with an explicit reference date.
    #[must_use]
    pub const fn new(origin: District, date: NaiveDate) -> Self {
        Self { origin, date }
    }

    /// Creates a context for today, local time.
    #[must_use]
    pub fn today(origin: District) -> Self {
        Self::new(origin, chrono::Local::now().date_naive())
    }
}

/// Returns the visible result set for one search interaction.
///
/// Never fails for well-formed input and never mutates catalog records;
/// every returned record is a fresh enriched copy. Distance filtering
/// compares the *resolved* distance, so enrichment runs before the
/// distance predicate, while tag filters read the source record (a
/// defaulted "Year-round" label is a display value, not a season tag).
#[must_use]
pub fn search(catalog: &Catalog, filters: &FilterSet, ctx: &SearchContext) -> Vec<EnrichedRecord> {
    let query = filters.query.trim().to_lowercase();

    let results: Vec<EnrichedRecord> = catalog
        .destinations()
        .iter()
        .filter_map(|record| {
            let enriched = enrich::enrich(record, ctx);

            let keep = matches_query(record, &query)
                && matches_tag(&filters.category, record.category.as_ref())
                && record.rating >= filters.rating
                && enriched.distance_km <= filters.distance
                && matches_tag(&filters.best_time, record.best_time.as_deref().unwrap_or(""));

            keep.then_some(enriched)
        })
        .collect();

    log::debug!(
        "search: {} of {} destinations match",
        results.len(),
        catalog.len()
    );
    results
}

/// Case-insensitive substring match against name, description, and
/// district. An empty query matches everything.
fn matches_query(record: &DestinationRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    record.name.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record.district.as_ref().to_lowercase().contains(query)
}

/// Set membership with empty-set-matches-all semantics.
fn matches_tag(set: &BTreeSet<String>, tag: &str) -> bool {
    set.is_empty() || set.contains(tag)
}
