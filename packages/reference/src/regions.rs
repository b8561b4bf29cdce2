//! Per-region base statistics table.

use std::collections::BTreeMap;

use hazard_map_hazard_models::{BaseStatistics, Hazard};
use hazard_map_reference_models::RegionStatistics;

use crate::ReferenceError;

/// Region statistics in data order, with a name index for lookups.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    entries: Vec<RegionStatistics>,
    by_name: BTreeMap<String, usize>,
}

impl RegionTable {
    /// Builds the table, validating names and value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error on an empty or duplicate name, or a prior above 100.
    pub fn new(entries: Vec<RegionStatistics>) -> Result<Self, ReferenceError> {
        let mut by_name = BTreeMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ReferenceError::EmptyName {
                    kind: "region",
                    index,
                });
            }

            let stats = entry.stats();
            if let Some(value) = Hazard::all()
                .iter()
                .map(|h| stats.get(*h))
                .find(|v| *v > 100)
            {
                return Err(ReferenceError::StatisticOutOfRange {
                    region: entry.name.clone(),
                    value,
                });
            }

            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(ReferenceError::DuplicateRegion {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { entries, by_name })
    }

    /// Looks up the base statistics for a region by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<BaseStatistics> {
        self.by_name
            .get(name)
            .map(|&index| self.entries[index].stats())
    }

    /// Iterates regions in data order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionStatistics> {
        self.entries.iter()
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
