//! Reading and atomically rewriting the catalog artifact.

use std::io::Write;
use std::path::Path;

use tastingmap_core::CatalogFile;

use crate::error::GeocodeError;

/// Read the catalog artifact without validating venue contents.
///
/// # Errors
///
/// Returns [`GeocodeError::CatalogRead`] if the file cannot be read, or
/// [`GeocodeError::CatalogParse`] if it is not a `venues:` list.
pub fn read_catalog_file(path: &Path) -> Result<CatalogFile, GeocodeError> {
    let content = std::fs::read_to_string(path).map_err(|e| GeocodeError::CatalogRead {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| GeocodeError::CatalogParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write the artifact via a temp file in the destination directory, then
/// rename over `path`. On any failure the existing file is left untouched
/// and the temp file is removed.
///
/// # Errors
///
/// Returns [`GeocodeError::CatalogSerialize`] or [`GeocodeError::Write`].
pub fn write_catalog_file(path: &Path, catalog: &CatalogFile) -> Result<(), GeocodeError> {
    let body = serde_yaml::to_string(catalog).map_err(GeocodeError::CatalogSerialize)?;

    let write_err = |source: std::io::Error| GeocodeError::Write {
        path: path.display().to_string(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(body.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
