//! Offline enrichment: join an external coordinate file against the venue
//! catalog artifact by normalized name and rewrite the artifact.

pub mod artifact;
pub mod enrich;
pub mod error;
pub mod normalize;
pub mod source;

pub use artifact::{read_catalog_file, write_catalog_file};
pub use enrich::{enrich_venues, run, EnrichmentReport, GeocodeOptions};
pub use error::GeocodeError;
pub use normalize::normalize_name;
pub use source::{parse_source, GeocodeIndex, GeocodeSourceRow};
