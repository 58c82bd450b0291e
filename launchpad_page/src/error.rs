//! Errors raised while building or loading catalogs.

use std::path::PathBuf;

/// Everything that can go wrong before a single byte of HTML is rendered.
///
/// Rendering itself is infallible; all validation happens when a
/// [`crate::catalog::Catalog`] is constructed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Status token outside `upcoming | live | ended`.
    #[error("unknown project status `{0}` (expected upcoming, live or ended)")]
    UnknownStatus(String),

    /// Tab token outside `featured | upcoming | live | ended`.
    #[error("unknown project tab `{0}` (expected featured, upcoming, live or ended)")]
    UnknownTab(String),

    /// Project record with a blank `name`.
    #[error("project #{index} has an empty name")]
    EmptyProjectName {
        /// Position of the offending record in the catalog
        index: usize,
    },

    /// Feature descriptor with a blank `title`.
    #[error("feature #{index} has an empty title")]
    EmptyFeatureTitle {
        /// Position of the offending record in the catalog
        index: usize,
    },

    /// Catalog file is not valid JSON or does not match the record shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
