//! SVG path data for projected geometries.

use std::fmt::Write;

use geojson::{PolygonType, Position, Value};

use crate::projection::Mercator;

/// Round to three decimals, dropping negative zero.
fn coord(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0 + 0.0
}

fn push_point(out: &mut String, command: char, projection: &Mercator, position: &Position) {
    if let [lon, lat, ..] = position.as_slice() {
        let (x, y) = projection.project(*lon, *lat);
        let _ = write!(out, "{command}{},{}", coord(x), coord(y));
    }
}

fn push_line(out: &mut String, projection: &Mercator, line: &[Position]) {
    for (i, position) in line.iter().enumerate() {
        push_point(out, if i == 0 { 'M' } else { 'L' }, projection, position);
    }
}

/// Rings are closed with `Z`, so the repeated closing position is skipped.
fn push_ring(out: &mut String, projection: &Mercator, ring: &[Position]) {
    let open = match ring {
        [first, rest @ .., last] if first == last && !rest.is_empty() => &ring[..ring.len() - 1],
        _ => ring,
    };
    if open.is_empty() {
        return;
    }
    push_line(out, projection, open);
    out.push('Z');
}

fn push_polygon(out: &mut String, projection: &Mercator, polygon: &PolygonType) {
    for ring in polygon {
        push_ring(out, projection, ring);
    }
}

fn push_geometry(out: &mut String, projection: &Mercator, geometry: &Value) {
    match geometry {
        Value::Polygon(polygon) => push_polygon(out, projection, polygon),
        Value::MultiPolygon(polygons) => {
            for polygon in polygons {
                push_polygon(out, projection, polygon);
            }
        }
        Value::LineString(line) => push_line(out, projection, line),
        Value::MultiLineString(lines) => {
            for line in lines {
                push_line(out, projection, line);
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                push_geometry(out, projection, &g.value);
            }
        }
        // Points have no area to fill.
        Value::Point(_) | Value::MultiPoint(_) => {}
    }
}

/// The `d` attribute for `geometry` under `projection`. Empty when the
/// geometry has nothing drawable.
pub fn svg_path(geometry: &Value, projection: &Mercator) -> String {
    let mut out = String::new();
    push_geometry(&mut out, projection, geometry);
    out
}

#[cfg(test)]
mod tests {
    use geojson::Value;

    use super::{coord, svg_path};
    use crate::projection::Mercator;

    fn identity_like() -> Mercator {
        // Scale 180/π turns radians back into degrees at the equator.
        Mercator {
            scale: 180.0 / std::f64::consts::PI,
            translate: (100.0, 100.0),
        }
    }

    #[test]
    fn polygon_is_closed_with_z() {
        let sliver = Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![20.0, 0.0],
            vec![0.0, 0.0],
        ]]);
        assert_eq!(
            svg_path(&sliver, &identity_like()),
            "M100,100L110,100L120,100Z"
        );
    }

    #[test]
    fn multipolygon_emits_one_subpath_per_ring() {
        let ring = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 0.0]];
        let shape = Value::MultiPolygon(vec![vec![ring.clone()], vec![ring]]);
        let d = svg_path(&shape, &identity_like());
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }

    #[test]
    fn coordinates_round_to_three_decimals() {
        assert_eq!(coord(1.23456), 1.235);
        assert_eq!(coord(-0.0001).to_string(), "0");
        assert_eq!(coord(12.0).to_string(), "12");
    }

    #[test]
    fn northern_points_draw_above_the_equator() {
        let line = Value::LineString(vec![vec![0.0, 0.0], vec![0.0, 10.0]]);
        let d = svg_path(&line, &identity_like());
        let (_, second) = d.split_once('L').expect("two points");
        let y: f64 = second
            .split(',')
            .nth(1)
            .and_then(|y| y.parse().ok())
            .expect("numeric y");
        assert!(y < 100.0);
    }

    #[test]
    fn empty_geometry_yields_empty_path() {
        assert_eq!(svg_path(&Value::Polygon(Vec::new()), &identity_like()), "");
    }
}
