//! Runtime configuration for the animation controllers.
//!
//! Every field defaults to the tuning constants in [`crate::constants`]. The
//! web frontend may override individual fields from `data-*` attributes on
//! the mounted elements.

use crate::constants::*;

/// Where inside a section the scroll effect starts and how long it runs,
/// both as fractions of the section height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressWindow {
    pub start_offset: f64,
    pub window: f64,
}

impl Default for ProgressWindow {
    fn default() -> Self {
        Self {
            start_offset: 0.0,
            window: 1.0,
        }
    }
}

/// Per-frame approach rates used by [`crate::ProgressSmoother`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingConfig {
    pub rise: f64,
    pub fall: f64,
    pub snap_epsilon: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            rise: PROGRESS_RISE,
            fall: PROGRESS_FALL,
            snap_epsilon: PROGRESS_SNAP_EPSILON,
        }
    }
}

/// Velocity filtering and hand-off timing for pointer drags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    pub smoothing_alpha: f64,
    pub dead_zone_px: f64,
    pub rest_ms: f64,
    pub resume_delay_ms: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: DRAG_SMOOTHING_ALPHA,
            dead_zone_px: DRAG_DEAD_ZONE_PX,
            rest_ms: DRAG_REST_MS,
            resume_delay_ms: DRAG_RESUME_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeConfig {
    pub auto_rotate_deg_per_sec: f64,
    pub drag_sensitivity: f64,
    pub resume_delay_ms: f64,
    pub tween_ms: f64,
    pub initial_rotation: [f64; 2],
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            auto_rotate_deg_per_sec: GLOBE_AUTO_ROTATE_DEG_PER_SEC,
            drag_sensitivity: GLOBE_DRAG_SENSITIVITY,
            resume_delay_ms: GLOBE_RESUME_DELAY_MS,
            tween_ms: GLOBE_TWEEN_MS,
            initial_rotation: GLOBE_INITIAL_ROTATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub speed_px_per_sec: f64,
    /// Decay time constant of the momentum left after a release.
    pub coast_tau_sec: f64,
    pub coast_max_px_per_sec: f64,
    pub drag: DragConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: MARQUEE_SPEED_PX_PER_SEC,
            coast_tau_sec: MARQUEE_COAST_TAU_SEC,
            coast_max_px_per_sec: MARQUEE_COAST_MAX_PX_PER_SEC,
            drag: DragConfig::default(),
        }
    }
}
