use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::region::SkipSet;

/// Name of the Environment Agency preset in [`Catalog::builtin`].
pub const ENVIRONMENT_AGENCY: &str = "environment-agency";
/// Name of the UKCP18 preset in [`Catalog::builtin`].
pub const UKCP18_LAND_REGIONS: &str = "ukcp18-land-regions";

/// A shapefile together with the record indices to leave out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSource {
    /// Path to the `.shp` file.
    pub path: PathBuf,
    /// Indices to skip. Integers or inclusive ranges such as "0-8".
    #[serde(default, deserialize_with = "crate::skip::deserialize")]
    pub skip: SkipSet,
}

impl RegionSource {
    /// Source with an explicit skip set.
    #[inline]
    pub fn new<P>(path: P, skip: SkipSet) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            skip,
        }
    }

    /// Environment Agency and Natural England public face areas.
    ///
    /// Records 0 to 8 and 23 are coastal boundaries and are skipped.
    pub fn environment_agency() -> Self {
        let mut skip: SkipSet = (0..9).collect();
        skip.insert(23);
        Self::new(
            "./shapes/Admin_Boundaries_-_Environment_Agency_and_Natural_England_Public_Face_Areas.shp",
            skip,
        )
    }

    /// UKCP18 high resolution UK land regions, without record 3.
    pub fn ukcp18_land_regions() -> Self {
        Self::new(
            "./ukcp18-uk-land-region-hires/ukcp18-uk-land-region-hires.shp",
            SkipSet::from([3]),
        )
    }
}

/// Named region sources, usually read from a TOML file.
///
/// ```toml
/// [sources.environment-agency]
/// path = "shapes/boundaries.shp"
/// skip = ["0-8", 23]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Sources keyed by name.
    #[serde(default)]
    pub sources: BTreeMap<String, RegionSource>,
}

impl Catalog {
    /// The two boundary datasets shipped as presets.
    pub fn builtin() -> Self {
        let sources = BTreeMap::from([
            (
                ENVIRONMENT_AGENCY.to_string(),
                RegionSource::environment_agency(),
            ),
            (
                UKCP18_LAND_REGIONS.to_string(),
                RegionSource::ukcp18_land_regions(),
            ),
        ]);
        Self { sources }
    }

    /// Read a catalog file.
    ///
    /// Relative source paths are resolved against the directory holding the
    /// catalog.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut catalog: Self = fs::read_to_string(path)?.parse()?;
        if let Some(base) = path.parent() {
            for source in catalog.sources.values_mut() {
                if source.path.is_relative() {
                    source.path = base.join(&source.path);
                }
            }
        }
        Ok(catalog)
    }

    /// Look up a source by name.
    pub fn get(&self, name: &str) -> Result<&RegionSource> {
        self.sources
            .get(name)
            .ok_or_else(|| Error::UnknownSource(name.to_string()))
    }

    /// Source names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl FromStr for Catalog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
