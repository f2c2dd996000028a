use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("failed to read geocode source {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed geocode source: {0}")]
    SourceParse(#[from] csv::Error),

    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path} is not a valid venue list: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    CatalogSerialize(#[source] serde_yaml::Error),

    #[error("failed to write catalog {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
