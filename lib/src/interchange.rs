use geo::Area;
use geo::Contains;
use geo_types::Coord;
use geo_types::Geometry;
use geo_types::LineString;
use geo_types::MultiLineString;
use geo_types::MultiPoint;
use geo_types::MultiPolygon;
use geo_types::Point;
use geo_types::Polygon;
use shapefile::PolygonRing;
use shapefile::Shape;
use shapefile::ShapeType;

/// Access to the planar part of the shapefile point types.
///
/// M and Z values are dropped.
pub trait Planar {
    /// Planar coordinate of the point.
    fn coord(&self) -> Coord<f64>;
}

impl Planar for shapefile::Point {
    #[inline]
    fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}

impl Planar for shapefile::PointM {
    #[inline]
    fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}

impl Planar for shapefile::PointZ {
    #[inline]
    fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}

fn line_string<P: Planar>(points: &[P]) -> LineString<f64> {
    LineString(points.iter().map(Planar::coord).collect())
}

fn multi_point<P: Planar>(points: &[P]) -> Geometry<f64> {
    Geometry::MultiPoint(MultiPoint(
        points.iter().map(|p| Point(p.coord())).collect(),
    ))
}

fn lines<P: Planar>(parts: &[Vec<P>]) -> Geometry<f64> {
    match parts {
        [part] => Geometry::LineString(line_string(part.as_slice())),
        _ => Geometry::MultiLineString(MultiLineString(
            parts.iter().map(|part| line_string(part.as_slice())).collect(),
        )),
    }
}

/// Group rings into polygons.
///
/// Each outer ring opens a polygon. A hole joins the smallest outer ring
/// that contains its first vertex, so a pond on an island stays with the
/// island rather than the surrounding lake. A hole no outer ring contains
/// joins the latest outer ring seen before it. Holes in a record without
/// any outer ring become exteriors.
fn polygons<P: Planar>(rings: &[PolygonRing<P>]) -> Vec<Polygon<f64>> {
    let mut exteriors: Vec<LineString<f64>> = Vec::new();
    let mut holes: Vec<(LineString<f64>, Option<usize>)> = Vec::new();
    for ring in rings {
        let line = line_string(ring.points());
        match ring {
            PolygonRing::Outer(_) => exteriors.push(line),
            PolygonRing::Inner(_) => holes.push((line, exteriors.len().checked_sub(1))),
        }
    }

    if exteriors.is_empty() {
        return holes
            .into_iter()
            .map(|(hole, _)| Polygon::new(hole, vec![]))
            .collect();
    }

    let shells: Vec<(Polygon<f64>, f64)> = exteriors
        .iter()
        .map(|exterior| {
            let shell = Polygon::new(exterior.clone(), vec![]);
            let area = shell.unsigned_area();
            (shell, area)
        })
        .collect();
    let mut interiors: Vec<Vec<LineString<f64>>> = vec![Vec::new(); exteriors.len()];
    for (hole, latest) in holes {
        let slot = hole
            .0
            .first()
            .and_then(|first| {
                shells
                    .iter()
                    .enumerate()
                    .filter(|(_, (shell, _))| shell.contains(first))
                    .min_by(|(_, (_, a)), (_, (_, b))| a.total_cmp(b))
                    .map(|(i, _)| i)
            })
            .or(latest)
            .unwrap_or(0);
        interiors[slot].push(hole);
    }

    exteriors
        .into_iter()
        .zip(interiors)
        .map(|(exterior, interiors)| Polygon::new(exterior, interiors))
        .collect()
}

fn area<P: Planar>(rings: &[PolygonRing<P>]) -> Geometry<f64> {
    let mut polygons = polygons(rings);
    if polygons.is_empty() {
        return Geometry::Polygon(Polygon::new(LineString(vec![]), vec![]));
    }
    if polygons.len() == 1 {
        if let Some(polygon) = polygons.pop() {
            return Geometry::Polygon(polygon);
        }
    }
    Geometry::MultiPolygon(MultiPolygon(polygons))
}

/// Convert a shape into a planar geo-types geometry.
///
/// Ok(None): -
///   * NullShape, the record carries no geometry.
///
/// Err: -
///   * Multipatch, surfaces have no GeoJSON equivalent.
pub fn to_geo(shape: &Shape) -> Result<Option<Geometry<f64>>, ShapeType> {
    let geometry = match shape {
        Shape::NullShape => return Ok(None),
        Shape::Multipatch(_) => return Err(shape.shapetype()),
        Shape::Point(p) => Geometry::Point(Point(p.coord())),
        Shape::PointM(p) => Geometry::Point(Point(p.coord())),
        Shape::PointZ(p) => Geometry::Point(Point(p.coord())),
        Shape::Multipoint(mp) => multi_point(mp.points()),
        Shape::MultipointM(mp) => multi_point(mp.points()),
        Shape::MultipointZ(mp) => multi_point(mp.points()),
        Shape::Polyline(pl) => lines(pl.parts()),
        Shape::PolylineM(pl) => lines(pl.parts()),
        Shape::PolylineZ(pl) => lines(pl.parts()),
        Shape::Polygon(pg) => area(pg.rings()),
        Shape::PolygonM(pg) => area(pg.rings()),
        Shape::PolygonZ(pg) => area(pg.rings()),
    };
    Ok(Some(geometry))
}

fn to_value(geometry: &Geometry<f64>) -> geojson::Value {
    match geometry {
        // A ring-less polygon has no coordinates at all, not one empty ring.
        Geometry::Polygon(polygon)
            if polygon.exterior().0.is_empty() && polygon.interiors().is_empty() =>
        {
            geojson::Value::Polygon(vec![])
        }
        _ => geojson::Value::from(geometry),
    }
}

/// Convert a shape into its GeoJSON geometry.
///
/// A NullShape gives `Ok(None)`. Shapes that [`to_geo`] cannot represent
/// return their shape type as the error.
#[inline]
pub fn to_geometry(shape: &Shape) -> Result<Option<geojson::Geometry>, ShapeType> {
    Ok(to_geo(shape)?.map(|g| geojson::Geometry::new(to_value(&g))))
}
