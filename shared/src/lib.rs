pub mod atlas;
pub mod colors;
pub mod devotional;
pub mod facts;
pub mod geo;
pub mod markdown;
pub mod news;
pub mod path;
pub mod projection;
pub mod scene;
pub mod selection;
pub mod topology;

pub use atlas::{load_countries, unmatched_names};
pub use colors::Rgb;
pub use devotional::{Devotional, builtin_devotionals};
pub use facts::{CountryFacts, FactTable, QuickFacts};
pub use geo::CountryFeature;
pub use news::{NewsSummary, SourceLink};
pub use scene::{MapScene, Palette, ShapeStyle};
pub use selection::Selection;
pub use topology::TopologyError;
