use thiserror::Error;

/// Failures decoding the data files the pages consume.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("geometry contains no polygons")]
    EmptyGeometry,
    #[error("coordinate out of range: lon={lon}, lat={lat}")]
    InvalidCoordinate { lon: f64, lat: f64 },
}

pub type Result<T> = std::result::Result<T, DataError>;
