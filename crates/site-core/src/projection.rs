//! Rotated orthographic projection of the sphere onto the canvas.
//!
//! Rotation follows the usual `[lambda, phi]` convention: a rotation of
//! `[-lon, -lat]` brings the point `(lon, lat)` to the centre of the view.
//! Points are turned into unit vectors, rotated, and the two components
//! orthogonal to the view axis become screen x/y.

use crate::constants::{GLOBE_SCALE_FRACTION, LAT_MAX, LAT_MIN};
use crate::easing::normalize_longitude;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// Points exactly on the horizon count as visible despite rounding.
const HORIZON_TOLERANCE_DEG: f64 = 1e-9;

/// Longitude/latitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    fn unit_vector(self) -> DVec3 {
        let (lam, phi) = (self.lon.to_radians(), self.lat.to_radians());
        DVec3::new(phi.cos() * lam.cos(), phi.cos() * lam.sin(), phi.sin())
    }
}

/// Great-circle distance between two points, in degrees.
pub fn geo_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let (phi1, phi2) = (a.lat.to_radians(), b.lat.to_radians());
    let dphi = phi2 - phi1;
    let dlam = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlam / 2.0).sin().powi(2);
    (2.0 * h.sqrt().min(1.0).asin()).to_degrees()
}

/// Globe rotation `[longitude, latitude]` in degrees.
///
/// Latitude is clamped to `[-90, 90]` and longitude normalized to
/// `[-180, 180)` on every write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    lambda: f64,
    phi: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Rotation {
    pub fn new(lambda: f64, phi: f64) -> Self {
        let mut r = Self {
            lambda: 0.0,
            phi: 0.0,
        };
        r.set(lambda, phi);
        r
    }

    /// Rotation that centres `point` in the view.
    pub fn centering(point: GeoPoint) -> Self {
        Self::new(-point.lon, -point.lat)
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.lambda, self.phi]
    }

    pub fn set(&mut self, lambda: f64, phi: f64) {
        if lambda.is_finite() {
            self.lambda = normalize_longitude(lambda);
        }
        if phi.is_finite() {
            self.phi = phi.clamp(LAT_MIN, LAT_MAX);
        }
    }

    pub fn rotate_by(&mut self, d_lambda: f64, d_phi: f64) {
        self.set(self.lambda + d_lambda, self.phi + d_phi);
    }

    /// Geographic point currently at the centre of the view.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(normalize_longitude(-self.lambda), -self.phi)
    }

    fn apply(&self, point: GeoPoint) -> DVec3 {
        let v = GeoPoint::new(point.lon + self.lambda, point.lat).unit_vector();
        let (s, c) = self.phi.to_radians().sin_cos();
        DVec3::new(v.x * c - v.z * s, v.y, v.z * c + v.x * s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthographic {
    pub scale: f64,
    pub translate: DVec2,
    pub rotation: Rotation,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self {
            scale: 250.0,
            translate: DVec2::new(480.0, 250.0),
            rotation: Rotation::default(),
        }
    }
}

impl Orthographic {
    pub fn new(scale: f64, translate: DVec2, rotation: Rotation) -> Self {
        Self {
            scale,
            translate,
            rotation,
        }
    }

    /// Size and centre the sphere inside a `width` x `height` viewport.
    pub fn fit(&mut self, width: f64, height: f64) {
        let (w, h) = (width.max(1.0), height.max(1.0));
        self.scale = GLOBE_SCALE_FRACTION * w.min(h);
        self.translate = DVec2::new(w / 2.0, h / 2.0);
    }

    pub fn radius(&self) -> f64 {
        self.scale
    }

    fn to_screen(&self, v: DVec3) -> DVec2 {
        DVec2::new(
            self.translate.x + self.scale * v.y,
            self.translate.y - self.scale * v.z,
        )
    }

    /// Screen position of `point`, whether or not it faces the viewer.
    pub fn project(&self, point: GeoPoint) -> DVec2 {
        self.to_screen(self.rotation.apply(point))
    }

    /// True when `point` lies on the visible hemisphere.
    pub fn is_visible(&self, point: GeoPoint) -> bool {
        geo_distance(point, self.rotation.center()) <= 90.0 + HORIZON_TOLERANCE_DEG
    }

    pub fn project_visible(&self, point: GeoPoint) -> (DVec2, bool) {
        (self.project(point), self.is_visible(point))
    }

    /// Project, pushing back-facing points onto the limb so filled shapes
    /// stay closed along the horizon.
    pub fn project_clamped(&self, point: GeoPoint) -> DVec2 {
        let v = self.rotation.apply(point);
        if v.x >= 0.0 {
            return self.to_screen(v);
        }
        let planar = DVec2::new(v.y, v.z);
        let len = planar.length();
        let limb = if len > 1e-12 {
            planar / len
        } else {
            DVec2::new(1.0, 0.0)
        };
        self.to_screen(DVec3::new(0.0, limb.x, limb.y))
    }

    /// Projected polygon ring, or `None` when the ring is entirely hidden.
    pub fn project_ring(&self, ring: &[GeoPoint]) -> Option<Vec<DVec2>> {
        if !ring.iter().any(|p| self.rotation.apply(*p).x >= 0.0) {
            return None;
        }
        Some(ring.iter().map(|p| self.project_clamped(*p)).collect())
    }

    /// Split a polyline into runs of consecutive visible points.
    pub fn visible_runs(&self, line: &[GeoPoint]) -> Vec<SmallVec<[DVec2; 32]>> {
        let mut runs = Vec::new();
        let mut current: SmallVec<[DVec2; 32]> = SmallVec::new();
        for p in line {
            let v = self.rotation.apply(*p);
            if v.x >= 0.0 {
                current.push(self.to_screen(v));
            } else if !current.is_empty() {
                if current.len() > 1 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
        if current.len() > 1 {
            runs.push(current);
        }
        runs
    }
}

/// Meridians and parallels every `step` degrees, sampled every `precision`
/// degrees. Minor meridians stop at ±80°, the four major ones reach the poles.
pub fn graticule(step: f64, precision: f64) -> Vec<Vec<GeoPoint>> {
    let step = step.max(1.0);
    let precision = precision.clamp(0.1, step);
    let mut lines = Vec::new();

    let samples = |from: f64, to: f64| -> Vec<f64> {
        let n = ((to - from) / precision).ceil().max(1.0) as usize;
        (0..=n).map(|i| from + (to - from) * i as f64 / n as f64).collect()
    };

    let mut lon: f64 = -180.0;
    while lon < 180.0 {
        let extent = if (lon % 90.0).abs() < 1e-9 { 90.0 } else { 80.0 };
        lines.push(
            samples(-extent, extent)
                .into_iter()
                .map(|lat| GeoPoint::new(lon, lat))
                .collect(),
        );
        lon += step;
    }

    let mut lat: f64 = -80.0;
    while lat <= 80.0 + 1e-9 {
        lines.push(
            samples(-180.0, 180.0)
                .into_iter()
                .map(|lon| GeoPoint::new(lon, lat))
                .collect(),
        );
        lat += step;
    }
    lines
}
