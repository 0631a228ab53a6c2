use serde::{Deserialize, Serialize};

use crate::markdown::render_markdown;

const BUILTIN_DEVOTIONALS_JSON: &str = include_str!("../data/devotionals.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devotional {
    pub id: u32,
    pub title: String,
    pub content: String,
}

impl Devotional {
    pub fn html(&self) -> String {
        render_markdown(&self.content)
    }
}

/// The seven-day reading plan shipped with the app.
pub fn builtin_devotionals() -> Result<Vec<Devotional>, serde_json::Error> {
    serde_json::from_str(BUILTIN_DEVOTIONALS_JSON)
}
