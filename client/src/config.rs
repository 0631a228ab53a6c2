//! Compile-time settings for the map client.

pub const ATLAS_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";
/// Name of the country collection inside the atlas topology.
pub const TOPOLOGY_OBJECT: &str = "countries";

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 8.0;
pub const ZOOM_SENSITIVITY: f64 = 0.002;

/// Pixels between the pointer and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 15.0;
/// Pointer travel (px) beyond which a press is a drag, not a click.
pub const DRAG_THRESHOLD: f64 = 5.0;
/// Collapsed height (px) of profile sections.
pub const COLLAPSED_HEIGHT: f64 = 120.0;

/// Gemini key baked in at build time. Empty counts as missing.
pub fn gemini_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

pub fn gemini_url() -> String {
    format!("{GEMINI_ENDPOINT}/{GEMINI_MODEL}:generateContent")
}
