#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
//! Extract region polygons from shapefiles.
//!
//! Records are read in file order and keyed by their zero-based position.
//! A caller supplied skip set removes unwanted records, such as coastal
//! boundaries, from the result.
//!
//! ```no_run
//! use shp_regions::config::RegionSource;
//!
//! let regions = shp_regions::extract(&RegionSource::ukcp18_land_regions())?;
//! for (index, region) in &regions {
//!     println!("{index}: {:?}", region.polygon);
//! }
//! # Ok::<(), shp_regions::Error>(())
//! ```

extern crate geo;
extern crate geo_types;
extern crate geojson;
#[cfg(test)]
extern crate pretty_assertions;
extern crate shapefile;

/// Named region sources, presets and the TOML catalog.
pub mod config;
mod error;
/// functions extract(), extract_regions() and extract_from_reader().
pub mod extract;
/// Conversion of shapefile records into GeoJSON geometries.
pub mod interchange;
/// Region, Regions and SkipSet.
pub mod region;
/// Parsing of skip lists such as "0-8,23".
mod skip;

pub use error::Error;
pub use error::Result;
pub use extract::extract;
pub use extract::extract_from_reader;
pub use extract::extract_regions;
pub use region::Region;
pub use region::Regions;
pub use region::SkipSet;
pub use skip::parse_skip_list;
pub use skip::MAX_SKIP_RANGE;
