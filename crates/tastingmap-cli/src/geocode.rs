//! `geocode` command: enrich the catalog artifact from a CSV source.

use std::path::{Path, PathBuf};

use tastingmap_geocode::{EnrichmentReport, GeocodeOptions};

/// Run one enrichment pass and print the miss report.
///
/// Unmatched venues are printed as warnings; the command still succeeds.
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed, or the
/// output cannot be written. The existing artifact is untouched in that case.
pub(crate) fn run_geocode(
    catalog_path: &Path,
    source: PathBuf,
    output: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let options = GeocodeOptions {
        catalog_path: catalog_path.to_path_buf(),
        source_path: source,
        output_path: output,
        dry_run,
    };

    let report = tastingmap_geocode::run(&options)?;
    print_report(&report, &options);
    Ok(())
}

fn print_report(report: &EnrichmentReport, options: &GeocodeOptions) {
    if !report.missing.is_empty() {
        println!("missing coordinates for {} venue(s):", report.missing.len());
        for name in &report.missing {
            println!("  - {name}");
        }
    }

    if report.skipped_source_rows > 0 {
        println!(
            "skipped {} source row(s) without a usable name and coordinates",
            report.skipped_source_rows
        );
    }

    let destination = options
        .output_path
        .as_deref()
        .unwrap_or(&options.catalog_path);
    if report.written {
        println!(
            "updated {} with {} venue(s); {} geocoded",
            destination.display(),
            report.total,
            report.matched
        );
    } else {
        println!(
            "dry run: {} of {} venue(s) would be geocoded; {} not written",
            report.matched,
            report.total,
            destination.display()
        );
    }
}
