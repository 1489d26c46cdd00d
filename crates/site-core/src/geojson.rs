//! Land geometry decoding for the globe.
//!
//! Accepts a GeoJSON `FeatureCollection` or a bare array of features.
//! Polygon and MultiPolygon geometries are kept; anything else is skipped.

use crate::error::{DataError, Result};
use crate::projection::GeoPoint;
use serde::Deserialize;

/// Rings of one polygon; the first ring is the outer boundary.
pub type Polygon = Vec<Vec<GeoPoint>>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandGeometry {
    pub polygons: Vec<Polygon>,
}

impl LandGeometry {
    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(|p| p.len()).sum()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Collection { features: Vec<Feature> },
    Features(Vec<Feature>),
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Unsupported,
}

fn ring(positions: Vec<Vec<f64>>) -> Result<Vec<GeoPoint>> {
    let mut out = Vec::with_capacity(positions.len());
    for pos in positions {
        if pos.len() < 2 {
            continue;
        }
        let (lon, lat) = (pos[0], pos[1]);
        if !lon.is_finite() || !lat.is_finite() || lat.abs() > 90.0 {
            return Err(DataError::InvalidCoordinate { lon, lat });
        }
        out.push(GeoPoint::new(lon, lat));
    }
    Ok(out)
}

fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Result<Polygon> {
    let mut out = Vec::with_capacity(rings.len());
    for r in rings {
        let r = ring(r)?;
        if r.len() >= 3 {
            out.push(r);
        }
    }
    Ok(out)
}

/// Decode land polygons from GeoJSON text.
pub fn parse_land(text: &str) -> Result<LandGeometry> {
    let features = match serde_json::from_str::<Document>(text)? {
        Document::Collection { features } | Document::Features(features) => features,
    };
    let mut polygons = Vec::new();
    for geometry in features.into_iter().filter_map(|f| f.geometry) {
        match geometry {
            Geometry::Polygon { coordinates } => polygons.push(polygon(coordinates)?),
            Geometry::MultiPolygon { coordinates } => {
                for p in coordinates {
                    polygons.push(polygon(p)?);
                }
            }
            Geometry::Unsupported => {}
        }
    }
    polygons.retain(|p| !p.is_empty());
    if polygons.is_empty() {
        return Err(DataError::EmptyGeometry);
    }
    log::debug!(
        "[geo] decoded {} polygons ({} rings)",
        polygons.len(),
        polygons.iter().map(|p| p.len()).sum::<usize>()
    );
    Ok(LandGeometry { polygons })
}
