//! Pins for the global-reach globe and testimonial entries for the marquee.

use crate::error::{DataError, Result};
use crate::projection::{GeoPoint, Orthographic};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Pin {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lon, self.lat)
    }
}

/// Screen placement of a pin for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPin {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

pub fn project_pins(pins: &[Pin], projection: &Orthographic) -> Vec<ProjectedPin> {
    pins.iter()
        .map(|pin| {
            let (pos, visible) = projection.project_visible(pin.location());
            ProjectedPin {
                id: pin.id.clone(),
                x: pos.x,
                y: pos.y,
                visible,
            }
        })
        .collect()
}

/// Decode a pin list, rejecting out-of-range coordinates.
pub fn parse_pins(text: &str) -> Result<Vec<Pin>> {
    let pins: Vec<Pin> = serde_json::from_str(text)?;
    for p in &pins {
        if !(-90.0..=90.0).contains(&p.lat) || !(-180.0..=180.0).contains(&p.lon) {
            return Err(DataError::InvalidCoordinate {
                lon: p.lon,
                lat: p.lat,
            });
        }
    }
    Ok(pins)
}

fn office(id: &str, name: &str, lat: f64, lon: f64) -> Pin {
    Pin {
        id: id.to_string(),
        name: name.to_string(),
        lat,
        lon,
        image: None,
        description: None,
    }
}

/// Pins used when the page does not provide its own list.
pub fn default_pins() -> Vec<Pin> {
    vec![
        office("london", "London", 51.5074, -0.1278),
        office("new-york", "New York", 40.7128, -74.0060),
        office("dubai", "Dubai", 25.2048, 55.2708),
        office("mumbai", "Mumbai", 19.0760, 72.8777),
        office("singapore", "Singapore", 1.3521, 103.8198),
        office("sydney", "Sydney", -33.8688, 151.2093),
        office("johannesburg", "Johannesburg", -26.2041, 28.0473),
        office("sao-paulo", "São Paulo", -23.5505, -46.6333),
    ]
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    #[serde(alias = "quote", alias = "review")]
    pub text: String,
    pub rating: Option<f32>,
    #[serde(alias = "avatar")]
    pub image: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewDocument {
    List(Vec<Review>),
    Wrapped { reviews: Vec<Review> },
}

/// Decode testimonials. Malformed input yields an empty list; entries with
/// no text are dropped.
pub fn parse_reviews(text: &str) -> Vec<Review> {
    let reviews = match serde_json::from_str::<ReviewDocument>(text) {
        Ok(ReviewDocument::List(r)) | Ok(ReviewDocument::Wrapped { reviews: r }) => r,
        Err(e) => {
            log::warn!("[reviews] ignoring malformed reviews: {}", e);
            return Vec::new();
        }
    };
    reviews
        .into_iter()
        .filter(|r| !r.text.trim().is_empty())
        .collect()
}
