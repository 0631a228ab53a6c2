//! Joins the world topology with the fact table.

use crate::facts::FactTable;
use crate::geo::CountryFeature;
use crate::topology::{DecodedFeature, Topology, TopologyError};

/// Decode `object` from a TopoJSON document and attach facts to each
/// feature by exact name match. Features keep topology order.
pub fn load_countries(
    json: &str,
    object: &str,
    facts: &FactTable,
) -> Result<Vec<CountryFeature>, TopologyError> {
    let topology = Topology::from_json(json)?;
    Ok(join_facts(topology.features(object)?, facts))
}

fn join_facts(decoded: Vec<DecodedFeature>, facts: &FactTable) -> Vec<CountryFeature> {
    decoded
        .into_iter()
        .map(|feature| CountryFeature {
            facts: facts.facts_for(&feature.name),
            id: feature.id,
            name: feature.name,
            geometry: feature.geometry,
        })
        .collect()
}

/// Names present in the topology that the fact table does not know about.
pub fn unmatched_names<'a>(features: &'a [CountryFeature], facts: &FactTable) -> Vec<&'a str> {
    features
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !facts.contains(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{load_countries, unmatched_names};
    use crate::facts::{CountryFacts, FactTable};

    const TWO_COUNTRIES: &str = r#"{
        "type": "Topology",
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": "900", "arcs": [[0]], "properties": {"name": "Wonderland"}},
                    {"type": "Polygon", "id": "901", "arcs": [[1]], "properties": {"name": "Erewhon"}},
                    {"type": "Polygon", "arcs": [[2]]}
                ]
            }
        },
        "arcs": [
            [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
            [[20, 0], [30, 0], [30, 10], [20, 10], [20, 0]],
            [[40, 0], [50, 0], [50, 10], [40, 10], [40, 0]]
        ]
    }"#;

    fn table() -> FactTable {
        [
            (
                "Wonderland".to_string(),
                CountryFacts {
                    christian_percentage: Some(50.0),
                    main_religion: Some("Testism".to_string()),
                    ..CountryFacts::default()
                },
            ),
            ("Erewhon".to_string(), CountryFacts::default()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn joins_facts_by_name_in_topology_order() {
        let countries = load_countries(TWO_COUNTRIES, "countries", &table()).expect("load");
        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Wonderland", "Erewhon", ""]);

        assert_eq!(countries[0].christian_percentage(), Some(50.0));
        assert_eq!(countries[0].facts.main_religion.as_deref(), Some("Testism"));
        assert_eq!(countries[0].id.as_deref(), Some("900"));
        assert_eq!(countries[1].christian_percentage(), None);
        assert_eq!(countries[2].id, None);
    }

    #[test]
    fn unknown_names_get_empty_facts() {
        let countries = load_countries(TWO_COUNTRIES, "countries", &FactTable::default())
            .expect("load");
        assert!(countries.iter().all(|c| c.facts == CountryFacts::default()));
    }

    #[test]
    fn reports_unmatched_names() {
        let countries = load_countries(TWO_COUNTRIES, "countries", &table()).expect("load");
        assert_eq!(unmatched_names(&countries, &table()), vec![""]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(load_countries("{not json", "countries", &table()).is_err());
    }
}
