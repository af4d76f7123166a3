use std::io::Read;
use std::io::Seek;
use std::path::Path;

use log::debug;
use log::info;
use shapefile::ShapeReader;

use crate::config::RegionSource;
use crate::error::Error;
use crate::error::Result;
use crate::interchange::to_geometry;
use crate::region::Region;
use crate::region::Regions;
use crate::region::SkipSet;

/// Extract the regions described by a configured source.
#[inline]
pub fn extract(source: &RegionSource) -> Result<Regions> {
    extract_regions(&source.path, &source.skip)
}

/// Open `path` and collect every region whose index is not in `skip`.
///
/// The reader, and with it the file handle, is released before this
/// returns, whether extraction succeeded or not.
///
/// Indices in `skip` that are past the end of the file are ignored.
pub fn extract_regions<P>(path: P, skip: &SkipSet) -> Result<Regions>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = ShapeReader::from_path(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {}", path.display());
    extract_from_reader(reader, skip)
}

/// Collect every region of an opened shapefile whose index is not in `skip`.
///
/// Records are numbered from zero in file order. Skipped records are read
/// but never converted. A kept null record is stored without a polygon.
/// The first record that fails to read or convert aborts the extraction.
pub fn extract_from_reader<T>(mut reader: ShapeReader<T>, skip: &SkipSet) -> Result<Regions>
where
    T: Read + Seek,
{
    let mut regions = Regions::new();
    let mut total = 0_usize;
    for (index, shape) in reader.iter_shapes().enumerate() {
        let shape = shape.map_err(|source| Error::Record { index, source })?;
        total += 1;
        if skip.contains(&index) {
            debug!("skipping record {index}");
            continue;
        }
        let polygon =
            to_geometry(&shape).map_err(|shape_type| Error::Geometry { index, shape_type })?;
        regions.insert(index, Region::new(polygon));
    }
    info!(
        "extracted {} of {} records ({} skipped)",
        regions.len(),
        total,
        total - regions.len()
    );
    Ok(regions)
}
