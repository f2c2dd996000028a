//! Case-insensitive substring search over venue name and city.

use tastingmap_core::{Catalog, Venue};

/// Venues whose name or city contains `query`, in catalog order.
///
/// A blank query matches nothing. Region is intentionally not searched;
/// narrow by region with [`crate::filter_by_region`].
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Venue> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .venues()
        .iter()
        .filter(|v| {
            v.name.to_lowercase().contains(&needle) || v.city.to_lowercase().contains(&needle)
        })
        .collect()
}
