//! TopoJSON decoding.
//!
//! A topology stores each shared border once as an "arc"; geometries refer to
//! arcs by index (negative indices mean the arc reversed, encoded as `!i`).
//! Quantized topologies additionally delta-encode arc positions on an integer
//! grid that `transform` maps back to longitude/latitude.

use std::collections::HashMap;

use geojson::Value;
use serde::Deserialize;
use serde_json::Map;

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("invalid topology json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("topology has no object named `{0}`")]
    MissingObject(String),
    #[error("arc index {0} is out of range")]
    ArcOutOfRange(i64),
    #[error("unsupported geometry type `{0}`")]
    UnsupportedGeometry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub objects: HashMap<String, TopoGeometry>,
    #[serde(default)]
    pub arcs: Vec<Vec<Vec<f64>>>,
}

/// One topology geometry. `kind` is `None` for geometry-less features.
#[derive(Debug, Clone, Deserialize)]
pub struct TopoGeometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub properties: Option<Map<String, serde_json::Value>>,
    #[serde(default)]
    pub arcs: Option<serde_json::Value>,
    /// Point and MultiPoint positions; quantized but not delta-encoded.
    #[serde(default)]
    pub coordinates: Option<serde_json::Value>,
    #[serde(default)]
    pub geometries: Option<Vec<TopoGeometry>>,
}

impl TopoGeometry {
    /// The `id` member rendered as a string (world-atlas uses ISO numeric codes).
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }
}

/// A decoded geometry plus the identifying members of its source object.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFeature {
    pub id: Option<String>,
    pub name: String,
    pub geometry: Option<Value>,
}

impl Topology {
    pub fn from_json(json: &str) -> Result<Self, TopologyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert the named object into features: one per member for a
    /// `GeometryCollection`, otherwise a single feature.
    pub fn features(&self, object: &str) -> Result<Vec<DecodedFeature>, TopologyError> {
        let root = self
            .objects
            .get(object)
            .ok_or_else(|| TopologyError::MissingObject(object.to_string()))?;
        let arcs = ArcSet::decode(self);

        let members: Vec<&TopoGeometry> = match (root.kind.as_deref(), &root.geometries) {
            (Some("GeometryCollection"), Some(geometries)) => geometries.iter().collect(),
            (Some("GeometryCollection"), None) => Vec::new(),
            _ => vec![root],
        };

        members
            .into_iter()
            .map(|geometry| {
                Ok(DecodedFeature {
                    id: geometry.id_string(),
                    name: geometry.property_str("name").unwrap_or_default().to_string(),
                    geometry: arcs.geometry(geometry)?,
                })
            })
            .collect()
    }
}

/// All arcs of a topology in absolute longitude/latitude.
struct ArcSet {
    arcs: Vec<Vec<[f64; 2]>>,
    transform: Option<Transform>,
}

impl ArcSet {
    fn decode(topology: &Topology) -> Self {
        let arcs = topology
            .arcs
            .iter()
            .map(|arc| {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .filter(|position| position.len() >= 2)
                    .map(|position| match topology.transform {
                        Some(t) => {
                            x += position[0];
                            y += position[1];
                            [x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]]
                        }
                        None => [position[0], position[1]],
                    })
                    .collect()
            })
            .collect();
        Self {
            arcs,
            transform: topology.transform,
        }
    }

    fn point(&self, position: &[f64]) -> Vec<f64> {
        match (self.transform, position) {
            (Some(t), [x, y, ..]) => vec![
                x * t.scale[0] + t.translate[0],
                y * t.scale[1] + t.translate[1],
            ],
            _ => position.to_vec(),
        }
    }

    fn arc(&self, index: i64) -> Result<(&[[f64; 2]], bool), TopologyError> {
        let reversed = index < 0;
        let slot = if reversed { !index } else { index };
        usize::try_from(slot)
            .ok()
            .and_then(|slot| self.arcs.get(slot))
            .map(|arc| (arc.as_slice(), reversed))
            .ok_or(TopologyError::ArcOutOfRange(index))
    }

    /// Stitch a sequence of arcs into one line. Consecutive arcs share an
    /// endpoint, so each arc after the first drops its duplicate start.
    fn line(&self, indices: &[i64]) -> Result<Vec<Vec<f64>>, TopologyError> {
        let mut points: Vec<[f64; 2]> = Vec::new();
        for &index in indices {
            let (arc, reversed) = self.arc(index)?;
            points.pop();
            let start = points.len();
            points.extend_from_slice(arc);
            if reversed {
                points[start..].reverse();
            }
        }
        Ok(points.into_iter().map(|p| p.to_vec()).collect())
    }

    /// Like `line`, padded to the four positions a closed linear ring needs.
    fn ring(&self, indices: &[i64]) -> Result<Vec<Vec<f64>>, TopologyError> {
        let mut points = self.line(indices)?;
        while !points.is_empty() && points.len() < 4 {
            points.push(points[0].clone());
        }
        Ok(points)
    }

    fn polygon(&self, rings: &[Vec<i64>]) -> Result<Vec<Vec<Vec<f64>>>, TopologyError> {
        rings.iter().map(|ring| self.ring(ring)).collect()
    }

    fn geometry(&self, geometry: &TopoGeometry) -> Result<Option<Value>, TopologyError> {
        let Some(kind) = geometry.kind.as_deref() else {
            return Ok(None);
        };
        let arcs = geometry.arcs.clone().unwrap_or(serde_json::Value::Null);
        let coordinates = geometry.coordinates.clone().unwrap_or(serde_json::Value::Null);
        let value = match kind {
            "Point" => {
                let position: Vec<f64> = serde_json::from_value(coordinates)?;
                Value::Point(self.point(&position))
            }
            "MultiPoint" => {
                let positions: Vec<Vec<f64>> = serde_json::from_value(coordinates)?;
                Value::MultiPoint(positions.iter().map(|p| self.point(p)).collect())
            }
            "Polygon" => {
                let rings: Vec<Vec<i64>> = serde_json::from_value(arcs)?;
                Value::Polygon(self.polygon(&rings)?)
            }
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<i64>>> = serde_json::from_value(arcs)?;
                Value::MultiPolygon(
                    polygons
                        .iter()
                        .map(|rings| self.polygon(rings))
                        .collect::<Result<_, _>>()?,
                )
            }
            "LineString" => {
                let indices: Vec<i64> = serde_json::from_value(arcs)?;
                Value::LineString(self.line(&indices)?)
            }
            "MultiLineString" => {
                let lines: Vec<Vec<i64>> = serde_json::from_value(arcs)?;
                Value::MultiLineString(
                    lines
                        .iter()
                        .map(|line| self.line(line))
                        .collect::<Result<_, _>>()?,
                )
            }
            other => return Err(TopologyError::UnsupportedGeometry(other.to_string())),
        };
        Ok(Some(value))
    }
}
