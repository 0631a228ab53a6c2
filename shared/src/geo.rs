use geojson::Value;

use crate::facts::{CountryFacts, QuickFacts};

/// One country shape joined with its facts.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFeature {
    pub id: Option<String>,
    pub name: String,
    pub geometry: Option<Value>,
    pub facts: CountryFacts,
}

impl CountryFeature {
    pub fn christian_percentage(&self) -> Option<f64> {
        self.facts.christian_percentage
    }

    pub fn quick_facts(&self) -> QuickFacts {
        QuickFacts::new(&self.name, &self.facts)
    }
}

/// Visit every `[lon, lat]` position of a geometry.
pub fn for_each_position(geometry: &Value, f: &mut impl FnMut(f64, f64)) {
    let mut visit = |position: &Vec<f64>| {
        if let [x, y, ..] = position.as_slice() {
            f(*x, *y);
        }
    };
    match geometry {
        Value::Point(p) => visit(p),
        Value::MultiPoint(points) | Value::LineString(points) => points.iter().for_each(visit),
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().flatten().for_each(visit)
        }
        Value::MultiPolygon(polygons) => polygons.iter().flatten().flatten().for_each(visit),
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                for_each_position(&g.value, &mut *f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use geojson::Value;

    use super::{CountryFeature, for_each_position};
    use crate::facts::CountryFacts;

    #[test]
    fn visits_all_polygon_positions() {
        let geometry = Value::MultiPolygon(vec![
            vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]],
            vec![vec![vec![5.0, 5.0], vec![6.0, 5.0], vec![5.0, 6.0], vec![5.0, 5.0]]],
        ]);
        let mut xs = Vec::new();
        for_each_position(&geometry, &mut |x, _| xs.push(x));
        assert_eq!(xs, vec![0.0, 1.0, 0.0, 0.0, 5.0, 6.0, 5.0, 5.0]);
    }

    #[test]
    fn quick_facts_carry_the_name() {
        let feature = CountryFeature {
            id: None,
            name: "Erewhon".to_string(),
            geometry: None,
            facts: CountryFacts::default(),
        };
        let quick = feature.quick_facts();
        assert_eq!(quick.name, "Erewhon");
        assert_eq!(quick.christian, "N/A");
    }
}
