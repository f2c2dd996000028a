//! Request-time queries over a read-only [`tastingmap_core::Catalog`].
//!
//! Everything here is synchronous and allocation-light; callers share a
//! catalog across threads without coordination.

pub mod distance;
pub mod filter;
pub mod nearby;
pub mod text;

pub use distance::{distance_miles, EARTH_RADIUS_MILES};
pub use filter::{filter_by_categories, filter_by_region, VenueFilter};
pub use nearby::{
    find_nearby, find_nearby_matching, NearbyQuery, ProximityResult, DEFAULT_RADIUS_MILES,
};
pub use text::search;
