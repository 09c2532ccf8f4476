#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Embedded destination catalog with load-time validation.
//!
//! The catalog is read-only reference data: loaded once at process start,
//! validated, and passed by reference into the search pipeline. There are
//! no mutation operations and no failure modes beyond load-time integrity
//! checks.

use std::collections::HashSet;

use thiserror::Error;

use kerala_guide_destination_models::{DestinationRecord, District};

/// The embedded reference data set, a JSON array of destination records.
const EMBEDDED_CATALOG: &str = include_str!("../data/destinations.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an id. Fatal: silently dropping either record
    /// would hide a configuration mistake.
    #[error("duplicate destination id: {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: String,
    },

    /// The catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The read-only destination catalog.
///
/// Record order is insertion order and is the order the search pipeline
/// preserves in its results.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DestinationRecord>,
}

impl Catalog {
    /// Loads the embedded reference catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded JSON is malformed or
    /// contains a duplicate id.
    pub fn embedded() -> Result<Self, CatalogError> {
        let records: Vec<DestinationRecord> = serde_json::from_str(EMBEDDED_CATALOG)?;
        let catalog = Self::from_records(records)?;
        log::debug!("Loaded {} embedded destinations", catalog.len());
        Ok(catalog)
    }

    /// Builds a catalog from an explicit record set, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn from_records(records: Vec<DestinationRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// All destination records in catalog order.
    #[must_use]
    pub fn destinations(&self) -> &[DestinationRecord] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DestinationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The fixed 14-district enumeration, in canonical order.
    #[must_use]
    pub const fn districts() -> &'static [District] {
        District::ALL
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
