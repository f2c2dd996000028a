use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::venue::Venue;
use crate::ConfigError;

/// On-disk shape of the catalog artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub venues: Vec<Venue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub name: String,
    pub count: usize,
}

/// Read-only venue collection. Order is declaration order in the artifact.
#[derive(Debug)]
pub struct Catalog {
    venues: Vec<Venue>,
    regions: OnceLock<Vec<RegionCount>>,
}

impl Catalog {
    /// Build a catalog from already-validated venues.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on empty or duplicate ids. Other
    /// fields, `name` included, may be empty.
    pub fn new(venues: Vec<Venue>) -> Result<Self, ConfigError> {
        validate_venues(&venues)?;
        Ok(Self {
            venues,
            regions: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    /// Distinct regions with venue counts, sorted by name.
    ///
    /// Grouping uses the raw `region` string; no case folding or trimming.
    pub fn regions(&self) -> &[RegionCount] {
        self.regions.get_or_init(|| {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for venue in &self.venues {
                *counts.entry(venue.region.as_str()).or_default() += 1;
            }
            counts
                .into_iter()
                .map(|(name, count)| RegionCount {
                    name: name.to_string(),
                    count,
                })
                .collect()
        })
    }
}

/// Load and validate the venue catalog from a YAML artifact.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    Catalog::new(file.venues)
}

fn validate_venues(venues: &[Venue]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for venue in venues {
        if venue.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "venue '{}' has an empty id",
                venue.name
            )));
        }

        if !seen_ids.insert(venue.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate venue id: '{}'",
                venue.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
