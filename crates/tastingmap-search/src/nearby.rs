//! Radius search ranked by great-circle distance.

use serde::Serialize;
use tastingmap_core::{Catalog, Coordinate, Venue};

use crate::distance::distance_miles;
use crate::filter::VenueFilter;

pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// Parameters for [`find_nearby`]. The origin is assumed valid; reject bad
/// input at the request boundary with [`tastingmap_core::parse_coordinate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub origin: Coordinate,
    pub radius_miles: f64,
    pub limit: Option<usize>,
}

impl NearbyQuery {
    #[must_use]
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            radius_miles: DEFAULT_RADIUS_MILES,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius_miles: f64) -> Self {
        self.radius_miles = radius_miles;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// A venue paired with its distance from the query origin.
///
/// `distance_miles` is rounded to one decimal for display; ordering uses the
/// unrounded value.
#[derive(Debug, Clone, Serialize)]
pub struct ProximityResult<'a> {
    pub venue: &'a Venue,
    pub distance_miles: f64,
    #[serde(skip)]
    exact_miles: f64,
}

impl ProximityResult<'_> {
    #[must_use]
    pub fn exact_distance_miles(&self) -> f64 {
        self.exact_miles
    }
}

impl AsRef<Venue> for ProximityResult<'_> {
    fn as_ref(&self) -> &Venue {
        self.venue
    }
}

fn round_to_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// Venues within `query.radius_miles` of the origin, nearest first.
///
/// Venues without usable coordinates are skipped. The radius is inclusive.
/// Equal distances keep catalog order. A `limit` of zero yields nothing.
#[must_use]
pub fn find_nearby<'a>(catalog: &'a Catalog, query: &NearbyQuery) -> Vec<ProximityResult<'a>> {
    find_nearby_matching(catalog, query, &VenueFilter::default())
}

/// Like [`find_nearby`], but only venues passing `filter` compete for the
/// `limit` slots.
#[must_use]
pub fn find_nearby_matching<'a>(
    catalog: &'a Catalog,
    query: &NearbyQuery,
    filter: &VenueFilter,
) -> Vec<ProximityResult<'a>> {
    let mut results: Vec<ProximityResult<'a>> = catalog
        .venues()
        .iter()
        .filter_map(|venue| {
            let position = venue.coordinate()?;
            let exact_miles = distance_miles(query.origin, position);
            (exact_miles <= query.radius_miles).then(|| ProximityResult {
                venue,
                distance_miles: round_to_tenth(exact_miles),
                exact_miles,
            })
        })
        .collect();

    // `sort_by` is stable, which gives the catalog-order tie break.
    results.sort_by(|a, b| a.exact_miles.total_cmp(&b.exact_miles));

    let mut results = filter.apply(results);
    if let Some(limit) = query.limit {
        results.truncate(limit);
    }

    tracing::debug!(
        lat = query.origin.lat,
        lng = query.origin.lng,
        radius_miles = query.radius_miles,
        filtered = !filter.is_empty(),
        matched = results.len(),
        "nearby query"
    );

    results
}

#[cfg(test)]
#[path = "nearby_test.rs"]
mod tests;
