extern crate criterion;
extern crate shapefile;
extern crate shp_regions;
extern crate tempfile;

use criterion::{criterion_group, criterion_main, Criterion};
use shapefile::{Point, Polygon, PolygonRing, ShapeWriter};

use shp_regions::config::RegionSource;
use shp_regions::SkipSet;

/// Clockwise ring of `n` vertices on a circle centred at (cx, cy).
fn ring(cx: f64, cy: f64, n: usize) -> Vec<Point> {
    let mut points: Vec<Point> = (0..n)
        .map(|i| {
            let a = -2_f64 * std::f64::consts::PI * i as f64 / n as f64;
            Point::new(cx + a.cos(), cy + a.sin())
        })
        .collect();
    points.push(points[0]);
    points
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("Temp dir did not open.");
    let path = dir.path().join("regions.shp");
    let mut writer = ShapeWriter::from_path(&path).expect("Shapefile did not open.");
    for i in 0..200 {
        let polygon = Polygon::new(PolygonRing::Outer(ring(i as f64 * 3_f64, 0_f64, 500)));
        writer.write_shape(&polygon).expect("Could not write polygon.");
    }
    drop(writer);

    let mut skip: SkipSet = (0..9).collect();
    skip.insert(23);
    let source = RegionSource::new(&path, skip);

    c.bench_function("extract", |b| {
        b.iter(|| {
            let regions = shp_regions::extract(&source).expect("Extraction failed.");
            assert_eq!(regions.len(), 190);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
