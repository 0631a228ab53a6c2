use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const BUILTIN_FACTS_JSON: &str = include_str!("../data/country_facts.json");

/// Per-country descriptive data. Every field is independently optional;
/// `None` means "no data", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryFacts {
    pub people_group_count: Option<u32>,
    pub christian_percentage: Option<f64>,
    pub unreached_percentage: Option<f64>,
    pub main_religion: Option<String>,
    pub prayer_ideas: Option<String>,
    pub christian_challenges: Option<String>,
    pub missions_text: Option<String>,
    pub support_link: Option<String>,
}

/// Read-only lookup from country display name to its facts.
///
/// Keys must match topology feature names exactly (case and diacritics
/// included); a mismatch is not an error, the join simply finds nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactTable {
    entries: HashMap<String, CountryFacts>,
}

impl FactTable {
    /// The compiled-in table.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(BUILTIN_FACTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, CountryFacts> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&CountryFacts> {
        self.entries.get(name)
    }

    /// Facts for `name`, or an all-`None` record when the name is unknown.
    pub fn facts_for(&self, name: &str) -> CountryFacts {
        self.get(name).cloned().unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl FromIterator<(String, CountryFacts)> for FactTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryFacts)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub const NOT_AVAILABLE: &str = "N/A";

pub fn format_count(value: Option<u32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// `12.5` -> `"12.5%"`, `10.0` -> `"10%"`.
pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v}%"))
}

pub fn format_text(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// The four headline facts shown by the tooltip, the quick-fact card and
/// the profile header, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFacts {
    pub name: String,
    pub people_groups: String,
    pub christian: String,
    pub unreached: String,
    pub main_religion: String,
}

impl QuickFacts {
    pub fn new(name: &str, facts: &CountryFacts) -> Self {
        Self {
            name: name.to_string(),
            people_groups: format_count(facts.people_group_count),
            christian: format_percent(facts.christian_percentage),
            unreached: format_percent(facts.unreached_percentage),
            main_religion: format_text(facts.main_religion.as_deref()),
        }
    }

    /// `(label, value)` rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("People Groups", &self.people_groups),
            ("Christian %", &self.christian),
            ("Unreached %", &self.unreached),
            ("Main Religion", &self.main_religion),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryFacts, FactTable, QuickFacts, format_percent};

    #[test]
    fn builtin_table_parses() {
        let table = FactTable::builtin().expect("builtin facts");
        assert!(["Brazil", "India", "Peru", "Japan"].iter().all(|name| table.contains(name)));
        let algeria = table.get("Algeria").expect("Algeria present");
        assert_eq!(algeria.people_group_count, Some(45));
        assert_eq!(algeria.christian_percentage, Some(0.3));
        assert_eq!(algeria.main_religion.as_deref(), Some("Islam"));
    }

    #[test]
    fn lookup_is_exact_match() {
        let table: FactTable = [(
            "Côte d'Ivoire".to_string(),
            CountryFacts {
                christian_percentage: Some(33.9),
                ..CountryFacts::default()
            },
        )]
        .into_iter()
        .collect();

        assert!(table.contains("Côte d'Ivoire"));
        assert!(!table.contains("Cote d'Ivoire"));
        assert!(!table.contains("côte d'ivoire"));
        assert_eq!(table.facts_for("Cote d'Ivoire"), CountryFacts::default());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let table = FactTable::from_json(r#"{"Wonderland": {"main_religion": "Testism"}}"#)
            .expect("valid json");
        let facts = table.facts_for("Wonderland");
        assert_eq!(facts.main_religion.as_deref(), Some("Testism"));
        assert_eq!(facts.christian_percentage, None);
        assert_eq!(facts.support_link, None);
    }

    #[test]
    fn percent_formatting_drops_trailing_zero() {
        assert_eq!(format_percent(Some(10.0)), "10%");
        assert_eq!(format_percent(Some(0.3)), "0.3%");
        assert_eq!(format_percent(None), "N/A");
    }

    #[test]
    fn quick_facts_use_na_for_nulls() {
        let facts = CountryFacts {
            people_group_count: Some(12),
            unreached_percentage: Some(98.5),
            ..CountryFacts::default()
        };
        let quick = QuickFacts::new("Comoros", &facts);
        assert_eq!(
            quick.rows(),
            [
                ("People Groups", "12"),
                ("Christian %", "N/A"),
                ("Unreached %", "98.5%"),
                ("Main Religion", "N/A"),
            ]
        );
    }
}
