//! Read-only catalog queries: `nearby`, `search`, `regions`, `venues`.

use std::path::Path;

use tastingmap_core::{load_catalog, Coordinate, Venue};
use tastingmap_search::{find_nearby_matching, search, NearbyQuery, VenueFilter};

fn fmt_categories(venue: &Venue) -> String {
    venue
        .categories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}

fn print_venue_table(venues: &[&Venue]) {
    println!("{:<8}{:<42}{:<20}{:<22}CATEGORIES", "ID", "NAME", "CITY", "REGION");
    for venue in venues {
        println!(
            "{:<8}{:<42}{:<20}{:<22}{}",
            venue.id,
            truncate(&venue.name, 38),
            truncate(&venue.city, 17),
            truncate(&venue.region, 19),
            fmt_categories(venue)
        );
    }
}

/// Print venues within `radius_miles` of the given point, nearest first.
///
/// # Errors
///
/// Returns an error if the coordinate is not finite or the catalog cannot
/// be loaded.
pub(crate) fn run_nearby(
    catalog_path: &Path,
    lat: f64,
    lng: f64,
    radius_miles: f64,
    limit: Option<usize>,
    filter: &VenueFilter,
) -> anyhow::Result<()> {
    let origin = Coordinate::try_new(lat, lng)?;
    let catalog = load_catalog(catalog_path)?;

    let query = NearbyQuery::new(origin)
        .with_radius(radius_miles)
        .with_limit(limit);
    let results = find_nearby_matching(&catalog, &query, filter);

    if results.is_empty() {
        println!("no venues found within {radius_miles} miles of ({lat}, {lng})");
        return Ok(());
    }

    println!("{:<10}{:<8}{:<42}{:<20}REGION", "MILES", "ID", "NAME", "CITY");
    for result in &results {
        println!(
            "{:<10.1}{:<8}{:<42}{:<20}{}",
            result.distance_miles,
            result.venue.id,
            truncate(&result.venue.name, 38),
            truncate(&result.venue.city, 17),
            result.venue.region
        );
    }
    Ok(())
}

/// Print venues whose name or city contains `query`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn run_search(
    catalog_path: &Path,
    query: &str,
    filter: &VenueFilter,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let results = filter.apply(search(&catalog, query));

    if results.is_empty() {
        println!("no venues match '{}'", query.trim());
        return Ok(());
    }
    print_venue_table(&results);
    Ok(())
}

/// Print every region with its venue count.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn run_regions(catalog_path: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!("{:<30}VENUES", "REGION");
    for region in catalog.regions() {
        let name = if region.name.is_empty() {
            "(none)"
        } else {
            region.name.as_str()
        };
        println!("{:<30}{}", name, region.count);
    }
    Ok(())
}

/// Print catalog venues narrowed by `filter`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn run_venues(catalog_path: &Path, filter: &VenueFilter) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let venues = filter.apply(catalog.venues().iter().collect::<Vec<_>>());
    if venues.is_empty() {
        println!("no venues match the given filters");
        return Ok(());
    }
    print_venue_table(&venues);
    Ok(())
}
