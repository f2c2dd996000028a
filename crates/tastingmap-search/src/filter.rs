//! Category and region post-filters.
//!
//! Both work on anything that can lend a [`Venue`], so they narrow text
//! search hits and proximity results alike.

use std::collections::HashSet;

use tastingmap_core::{BeverageType, Venue};

/// Keep items whose venue carries at least one selected category.
///
/// An empty selection keeps nothing.
#[must_use]
pub fn filter_by_categories<T: AsRef<Venue>>(
    items: Vec<T>,
    selected: &HashSet<BeverageType>,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| {
            item.as_ref()
                .categories
                .iter()
                .any(|c| selected.contains(c))
        })
        .collect()
}

/// Keep items whose venue region equals `region` exactly.
#[must_use]
pub fn filter_by_region<T: AsRef<Venue>>(items: Vec<T>, region: &str) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.as_ref().region == region)
        .collect()
}

/// Optional category and region narrowing, as supplied by a caller.
///
/// `None` means "do not filter on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilter {
    pub categories: Option<HashSet<BeverageType>>,
    pub region: Option<String>,
}

impl VenueFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_none() && self.region.is_none()
    }

    #[must_use]
    pub fn apply<T: AsRef<Venue>>(&self, items: Vec<T>) -> Vec<T> {
        let items = match &self.categories {
            Some(selected) => filter_by_categories(items, selected),
            None => items,
        };
        match &self.region {
            Some(region) => filter_by_region(items, region),
            None => items,
        }
    }
}
