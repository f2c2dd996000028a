//! Parsing of the external coordinate file.
//!
//! The first row is a header and is discarded. Each following row is
//! `name, lat, lng`; extra columns are ignored. Rows without a usable name
//! or with non-finite coordinates are skipped, not fatal.

use std::collections::HashMap;
use std::io::Read;

use tastingmap_core::Coordinate;

use crate::error::GeocodeError;
use crate::normalize::normalize_name;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeSourceRow {
    pub normalized_name: String,
    pub coordinate: Coordinate,
}

/// Normalized-name lookup built from the source rows.
#[derive(Debug, Default)]
pub struct GeocodeIndex {
    by_name: HashMap<String, Coordinate>,
    skipped_rows: usize,
}

impl GeocodeIndex {
    /// Later rows win when two source names normalize to the same key.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = GeocodeSourceRow>) -> Self {
        let mut by_name = HashMap::new();
        for row in rows {
            if let Some(previous) = by_name.insert(row.normalized_name.clone(), row.coordinate) {
                tracing::debug!(
                    key = %row.normalized_name,
                    previous_lat = previous.lat,
                    previous_lng = previous.lng,
                    "duplicate geocode source name; keeping the later row"
                );
            }
        }
        Self {
            by_name,
            skipped_rows: 0,
        }
    }

    /// Look up a catalog name, normalizing it the same way as the source.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.by_name.get(&key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Data rows that were dropped for a missing name or bad coordinates.
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

fn parse_component(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn row_from_record(record: &csv::StringRecord) -> Option<GeocodeSourceRow> {
    let normalized_name = normalize_name(record.get(0)?);
    if normalized_name.is_empty() {
        return None;
    }
    let lat = parse_component(record.get(1))?;
    let lng = parse_component(record.get(2))?;
    Some(GeocodeSourceRow {
        normalized_name,
        coordinate: Coordinate { lat, lng },
    })
}

/// Parse a delimited coordinate source into a [`GeocodeIndex`].
///
/// Quoted fields may contain commas; a doubled quote inside a quoted field
/// is a literal quote.
///
/// # Errors
///
/// Returns [`GeocodeError::SourceParse`] if the input cannot be read as
/// delimited text (for example, invalid UTF-8).
pub fn parse_source<R: Read>(reader: R) -> Result<GeocodeIndex, GeocodeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped_rows = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        if let Some(row) = row_from_record(&record) {
            rows.push(row);
        } else {
            skipped_rows += 1;
            tracing::debug!(
                line = record.position().map(csv::Position::line),
                "skipping geocode source row without a usable name and coordinates"
            );
        }
    }

    let mut index = GeocodeIndex::from_rows(rows);
    index.skipped_rows = skipped_rows;
    Ok(index)
}
