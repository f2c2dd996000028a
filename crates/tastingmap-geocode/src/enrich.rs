use std::fs::File;
use std::path::PathBuf;

use serde::Serialize;
use tastingmap_core::Venue;

use crate::artifact::{read_catalog_file, write_catalog_file};
use crate::error::GeocodeError;
use crate::source::{parse_source, GeocodeIndex};

#[derive(Debug, Clone)]
pub struct GeocodeOptions {
    pub catalog_path: PathBuf,
    pub source_path: PathBuf,
    /// Destination for the rewritten artifact; defaults to `catalog_path`.
    pub output_path: Option<PathBuf>,
    pub dry_run: bool,
}

/// Outcome of one enrichment pass. Unmatched venues are a soft warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    pub total: usize,
    pub matched: usize,
    /// Venue names with no source row, in catalog order.
    pub missing: Vec<String>,
    pub skipped_source_rows: usize,
    pub written: bool,
}

/// Attach coordinates from `index` to every venue whose normalized name
/// matches. Unmatched venues keep whatever coordinates they already had.
pub fn enrich_venues(venues: &mut [Venue], index: &GeocodeIndex) -> EnrichmentReport {
    let mut report = EnrichmentReport {
        total: venues.len(),
        skipped_source_rows: index.skipped_rows(),
        ..EnrichmentReport::default()
    };

    for venue in venues.iter_mut() {
        if let Some(coordinate) = index.lookup(&venue.name) {
            venue.lat = Some(coordinate.lat);
            venue.lng = Some(coordinate.lng);
            report.matched += 1;
        } else {
            tracing::warn!(venue = %venue.name, id = %venue.id, "no geocode match");
            report.missing.push(venue.name.clone());
        }
    }

    report
}

/// Run a full enrichment pass: read both inputs, join, and rewrite the
/// artifact.
///
/// Nothing is written unless both inputs were read and parsed.
///
/// # Errors
///
/// Returns a [`GeocodeError`] if either input cannot be read or parsed, or
/// the output cannot be written. Unmatched venues are not errors.
pub fn run(options: &GeocodeOptions) -> Result<EnrichmentReport, GeocodeError> {
    let mut catalog = read_catalog_file(&options.catalog_path)?;

    let index = {
        let file = File::open(&options.source_path).map_err(|e| GeocodeError::SourceRead {
            path: options.source_path.display().to_string(),
            source: e,
        })?;
        parse_source(file)?
    };

    tracing::info!(
        venues = catalog.venues.len(),
        source_names = index.len(),
        skipped_source_rows = index.skipped_rows(),
        "loaded geocode inputs"
    );

    let mut report = enrich_venues(&mut catalog.venues, &index);

    if options.dry_run {
        tracing::info!("dry run; catalog not written");
    } else {
        let output = options
            .output_path
            .as_deref()
            .unwrap_or(&options.catalog_path);
        write_catalog_file(output, &catalog)?;
        report.written = true;
        tracing::info!(path = %output.display(), "catalog written");
    }

    tracing::info!(
        total = report.total,
        matched = report.matched,
        missing = report.missing.len(),
        "geocode enrichment complete"
    );

    Ok(report)
}
