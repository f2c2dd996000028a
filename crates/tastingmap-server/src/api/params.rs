//! Query-string parsing for the venue routes.
//!
//! Parameters arrive as raw strings so malformed values surface through the
//! API error envelope instead of the extractor's plain-text rejection.

use std::collections::HashSet;

use serde::Deserialize;
use tastingmap_core::{BeverageType, CoreError};
use tastingmap_search::VenueFilter;

#[derive(Debug, Default, Deserialize)]
pub(super) struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub limit: Option<String>,
    pub categories: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    pub q: Option<String>,
    pub categories: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListParams {
    pub categories: Option<String>,
    pub region: Option<String>,
}

pub(super) fn build_filter(
    categories: Option<&str>,
    region: Option<&str>,
) -> Result<VenueFilter, CoreError> {
    Ok(VenueFilter {
        categories: parse_categories(categories)?,
        region: region.map(ToOwned::to_owned),
    })
}

/// Comma-separated beverage tags. Absent means no category filter; present
/// but blank is an empty selection.
pub(super) fn parse_categories(
    raw: Option<&str>,
) -> Result<Option<HashSet<BeverageType>>, CoreError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<BeverageType>)
        .collect::<Result<HashSet<_>, _>>()
        .map(Some)
}

fn parse_finite(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Radius in miles; anything that is not a finite number falls back to
/// `default`.
pub(super) fn parse_radius(raw: Option<&str>, default: f64) -> f64 {
    parse_finite(raw).unwrap_or(default)
}

/// Result cap. Unparseable values mean "no cap"; negative values truncate to
/// zero; fractions round down.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn parse_limit(raw: Option<&str>) -> Option<usize> {
    parse_finite(raw).map(|v| v.max(0.0).floor() as usize)
}
