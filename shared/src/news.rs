//! Request and response model for the news digest, shaped for the Gemini
//! `generateContent` REST endpoint with Google Search grounding.

use serde::{Deserialize, Serialize};

pub const NEWS_ERROR_MESSAGE: &str = "Could not load the latest news. Please try again later.";
pub const NO_NEWS_MESSAGE: &str = "No recent news found for this country.";

pub fn news_prompt(country: &str) -> String {
    format!(
        "Using Google Search, find the most recent news articles about the difficulties for \
         Christians in {country}. Summarize the top three stories into a quick, numbered list."
    )
}

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, text: impl Into<String>) -> Self {
        self.contents.push(Content::user(text));
        self
    }

    pub fn google_search(mut self) -> Self {
        self.tools.push(Tool {
            google_search: GoogleSearch::default(),
        });
        self
    }

    /// The grounded news request for one country.
    pub fn news_for(country: &str) -> Self {
        Self::new().user(news_prompt(country)).google_search()
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn sources(&self) -> Vec<SourceLink> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| SourceLink {
                        uri: web.uri.clone(),
                        title: web.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

// =============================================================================
// Digest
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub uri: String,
    pub title: String,
}

impl SourceLink {
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.uri
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsSummary {
    pub lines: Vec<String>,
    pub sources: Vec<SourceLink>,
}

impl NewsSummary {
    pub fn from_response(response: &GenerateContentResponse) -> Self {
        Self {
            lines: response
                .text()
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            sources: response.sources(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerateContentRequest, GenerateContentResponse, NewsSummary, news_prompt};

    #[test]
    fn prompt_names_the_country() {
        assert_eq!(
            news_prompt("Peru"),
            "Using Google Search, find the most recent news articles about the difficulties \
             for Christians in Peru. Summarize the top three stories into a quick, numbered list."
        );
    }

    #[test]
    fn request_enables_google_search() {
        let body = serde_json::to_value(GenerateContentRequest::news_for("Peru")).expect("json");
        assert_eq!(body["tools"], serde_json::json!([{"google_search": {}}]));
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], news_prompt("Peru"));
    }

    #[test]
    fn summary_drops_blank_lines_and_collects_sources() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"role": "model", "parts": [
                        {"text": "1. First story\n\n"},
                        {"text": "2. Second story\n   \n3. Third"}
                    ]},
                    "groundingMetadata": {"groundingChunks": [
                        {"web": {"uri": "https://a.example/1", "title": "a.example"}},
                        {"web": {"uri": "https://b.example/2", "title": ""}},
                        {}
                    ]}
                }]
            }"#,
        )
        .expect("valid response");

        let summary = NewsSummary::from_response(&response);
        assert_eq!(
            summary.lines,
            vec!["1. First story", "2. Second story", "3. Third"]
        );
        let labels: Vec<&str> = summary.sources.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["a.example", "https://b.example/2"]);
    }

    #[test]
    fn empty_response_is_an_empty_summary() {
        let response: GenerateContentResponse = serde_json::from_str("{}").expect("valid");
        let summary = NewsSummary::from_response(&response);
        assert!(summary.is_empty());
        assert!(summary.sources.is_empty());
    }
}
