use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

/// A single boundary read from the source file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Geometry of the source record, as GeoJSON.
    ///
    /// None for a null record, serialized as `null`.
    pub polygon: Option<geojson::Geometry>,
}

impl Region {
    /// Wrap a geometry taken from the source record.
    #[inline]
    pub fn new(polygon: Option<geojson::Geometry>) -> Self {
        Self { polygon }
    }
}

/// Regions keyed by their zero-based position in the source file.
///
/// Keys iterate in ascending order, which is also file order.
pub type Regions = BTreeMap<usize, Region>;

/// Record positions to leave out of the result.
pub type SkipSet = BTreeSet<usize>;

#[cfg(not(tarpaulin_include))]
#[cfg(test)]
mod region_tests {

    use super::*;
    use geojson::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_under_polygon_key() {
        let region = Region::new(Some(geojson::Geometry::new(Value::Point(vec![1_f64, 2_f64]))));
        let json = serde_json::to_value(&region).expect("region should serialize");
        assert_eq!(
            json,
            serde_json::json!({ "polygon": { "type": "Point", "coordinates": [1.0, 2.0] } })
        );
    }

    #[test]
    fn null_record_serializes_as_null() {
        let json = serde_json::to_value(Region::new(None)).expect("region should serialize");
        assert_eq!(json, serde_json::json!({ "polygon": null }));
    }

    #[test]
    fn map_keys_follow_index_order() {
        let mut regions = Regions::new();
        for index in [4, 0, 2] {
            regions.insert(
                index,
                Region::new(Some(geojson::Geometry::new(Value::Point(vec![
                    index as f64,
                    0_f64,
                ])))),
            );
        }
        let keys: Vec<usize> = regions.keys().copied().collect();
        assert_eq!(keys, vec![0, 2, 4]);

        let json = serde_json::to_string(&regions).expect("regions should serialize");
        assert!(json.starts_with(r#"{"0":{"polygon""#));
    }
}
