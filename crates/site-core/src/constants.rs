// Tuning defaults shared by the scroll, globe and marquee controllers.

// Fly-away card transform gains (applied at progress = 1)
pub const FLY_TRANSLATE_X_VW: f64 = 120.0; // horizontal exit distance, viewport widths %
pub const FLY_TRANSLATE_Y_PX: f64 = -80.0; // lift while exiting
pub const FLY_ROTATE_DEG: f64 = 20.0;
pub const FLY_SCALE_LOSS: f64 = 0.4; // scale at p=1 is 1 - this

// Progress smoothing (fraction of remaining distance covered per frame)
pub const PROGRESS_RISE: f64 = 0.35;
pub const PROGRESS_FALL: f64 = 0.65;
pub const PROGRESS_SNAP_EPSILON: f64 = 1e-4;

// Drag velocity filtering
pub const DRAG_SMOOTHING_ALPHA: f64 = 0.25; // new = (1-α)*old + α*instant
pub const DRAG_DEAD_ZONE_PX: f64 = 4.0; // travel needed before a velocity sample is taken
pub const DRAG_REST_MS: f64 = 50.0; // below dead zone for this long counts as resting
pub const DRAG_RESUME_DELAY_MS: f64 = 600.0;

// Globe
pub const GLOBE_AUTO_ROTATE_DEG_PER_SEC: f64 = 6.0;
pub const GLOBE_DRAG_SENSITIVITY: f64 = 0.25; // degrees per css pixel
pub const GLOBE_RESUME_DELAY_MS: f64 = 1200.0;
pub const GLOBE_TWEEN_MS: f64 = 1000.0;
pub const GLOBE_SCALE_FRACTION: f64 = 0.45; // sphere radius relative to min(w, h)
pub const GLOBE_INITIAL_ROTATION: [f64; 2] = [-10.0, -20.0];
pub const GRATICULE_STEP_DEG: f64 = 10.0;
pub const GRATICULE_PRECISION_DEG: f64 = 2.5;

// Marquee
pub const MARQUEE_SPEED_PX_PER_SEC: f64 = -40.0; // negative scrolls leftwards
pub const MARQUEE_COAST_TAU_SEC: f64 = 0.3; // release momentum decay time constant
pub const MARQUEE_COAST_MAX_PX_PER_SEC: f64 = 3000.0;
pub const MARQUEE_COAST_STOP_PX_PER_SEC: f64 = 1.0;

// Latitude bounds
pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;

// Shown over the globe when land geometry cannot be loaded
pub const LAND_ERROR_MESSAGE: &str = "Unable to load map data.";
