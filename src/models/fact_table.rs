use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// Placeholder shown when a region has no flower/bird on record.
pub const NOT_AVAILABLE: &str = "not available";

/// Handle to a region inside the [`FactTable`] that minted it.
///
/// Ids are only ever produced by a table, so lookups through them are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(usize);

impl RegionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One row of the table as it appears in a facts file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionFacts {
    pub region: String,
    pub capital: String,
    #[serde(default)]
    pub flower: Option<String>,
    #[serde(default)]
    pub bird: Option<String>,
}

impl RegionFacts {
    pub fn new(region: impl Into<String>, capital: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            capital: capital.into(),
            flower: None,
            bird: None,
        }
    }

    pub fn with_secondary(mut self, flower: impl Into<String>, bird: impl Into<String>) -> Self {
        self.flower = Some(flower.into());
        self.bird = Some(bird.into());
        self
    }
}

/// Supplementary pair shown on demand; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryFacts<'a> {
    pub flower: &'a str,
    pub bird: &'a str,
}

/// Reasons a set of rows cannot become a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("the fact table must contain at least one region")]
    Empty,
    #[error("region {0:?} appears more than once")]
    DuplicateRegion(String),
    #[error("region {region:?} has a blank {field}")]
    BlankField { region: String, field: &'static str },
}

/// Immutable region → facts mapping, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct FactTable {
    entries: Vec<RegionFacts>,
}

impl FactTable {
    /// Build a table, rejecting empty input, blank names or capitals, and
    /// region names that collide case-insensitively.
    pub fn new(entries: Vec<RegionFacts>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.region.trim().is_empty() {
                return Err(TableError::BlankField {
                    region: entry.region.clone(),
                    field: "region name",
                });
            }
            if entry.capital.trim().is_empty() {
                return Err(TableError::BlankField {
                    region: entry.region.clone(),
                    field: "capital",
                });
            }
            if !seen.insert(entry.region.trim().to_lowercase()) {
                return Err(TableError::DuplicateRegion(entry.region.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Build a table from rows already known to be valid (compiled-in data).
    pub(crate) fn from_trusted(entries: Vec<RegionFacts>) -> Self {
        debug_assert!(Self::new(entries.clone()).is_ok());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All region ids in table order.
    pub fn regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.entries.len()).map(RegionId)
    }

    /// Look a region up by its exact name.
    pub fn find(&self, name: &str) -> Option<RegionId> {
        self.entries
            .iter()
            .position(|entry| entry.region == name)
            .map(RegionId)
    }

    pub fn name_of(&self, region: RegionId) -> &str {
        &self.entry(region).region
    }

    pub fn capital_of(&self, region: RegionId) -> &str {
        &self.entry(region).capital
    }

    /// Flower and bird for a region, or [`NOT_AVAILABLE`] for whichever is missing.
    pub fn secondary_facts_of(&self, region: RegionId) -> SecondaryFacts<'_> {
        let entry = self.entry(region);
        SecondaryFacts {
            flower: entry.flower.as_deref().unwrap_or(NOT_AVAILABLE),
            bird: entry.bird.as_deref().unwrap_or(NOT_AVAILABLE),
        }
    }

    // A foreign id is a programming error: ids are only minted by `regions`/`find`.
    fn entry(&self, region: RegionId) -> &RegionFacts {
        &self.entries[region.0]
    }
}
