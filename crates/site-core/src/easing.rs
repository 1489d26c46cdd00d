//! Interpolation helpers used by every animated effect.

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Signed shortest angular difference `to - from`, in `[-180, 180)`.
#[inline]
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Normalize a longitude into `[-180, 180)`.
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Apply the curve to `t`; input is clamped first so the output stays in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
