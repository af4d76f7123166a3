use std::io;
use std::path::PathBuf;

use shapefile::ShapeType;
use thiserror::Error;

/// Failures raised while loading a catalog or extracting regions.
///
/// Every failure is fatal to the current call.
#[derive(Debug, Error)]
pub enum Error {
    /// The shapefile is missing, unreadable or has a malformed header.
    #[error("cannot open shapefile {}: {source}", path.display())]
    Open {
        /// Path handed to the reader.
        path: PathBuf,
        /// Underlying reader failure.
        source: shapefile::Error,
    },
    /// A record could not be read. Aborts the whole extraction.
    #[error("cannot read record {index}: {source}")]
    Record {
        /// Zero-based position of the record.
        index: usize,
        /// Underlying reader failure.
        source: shapefile::Error,
    },
    /// The record holds a shape with no GeoJSON equivalent.
    #[error("record {index} holds a {shape_type:?} shape, which has no geometry representation")]
    Geometry {
        /// Zero-based position of the record.
        index: usize,
        /// Shape type found in the record.
        shape_type: ShapeType,
    },
    /// Catalog file could not be read.
    #[error("cannot read catalog: {0}")]
    Io(#[from] io::Error),
    /// Catalog file is not valid TOML or has the wrong layout.
    #[error("malformed catalog: {0}")]
    Config(#[from] toml::de::Error),
    /// No catalog entry has the requested name.
    #[error("no region source named {0:?}")]
    UnknownSource(String),
    /// A skip list entry is neither an index nor a range, or its range is
    /// wider than [`crate::MAX_SKIP_RANGE`].
    #[error("invalid skip entry {0:?}")]
    InvalidSkip(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
