// DOM hooks, data URLs and canvas styling used by the web frontend.

// Element ids
pub const GLOBE_CANVAS_ID: &str = "globe-canvas";
pub const GLOBE_PINS_ID: &str = "globe-pins";
pub const GLOBE_ERROR_ID: &str = "globe-error";
pub const PIN_CARD_ID: &str = "pin-card";
pub const PIN_CARD_CLOSE_ID: &str = "pin-card-close";
pub const REVIEWS_TRACK_ID: &str = "reviews-track";
pub const CONTACT_FORM_ID: &str = "contact-form";

// Selectors and data attributes
pub const FLY_CARD_SELECTOR: &str = "[data-fly-card]";
pub const FLY_SECTION_SELECTOR: &str = "[data-fly-section]";
pub const CLIP_REVEAL_SELECTOR: &str = "[data-clip-reveal]";
pub const PIN_SELECTOR: &str = "[data-pin-id]";
pub const ATTR_DIRECTION: &str = "data-direction";
pub const ATTR_FLY_START: &str = "data-fly-start";
pub const ATTR_FLY_WINDOW: &str = "data-fly-window";
pub const ATTR_PIN_ID: &str = "data-pin-id";
pub const ATTR_GEO_URL: &str = "data-geo-url";
pub const ATTR_PINS: &str = "data-pins";
pub const ATTR_REVIEWS_URL: &str = "data-reviews-url";
pub const ATTR_MARQUEE_SPEED: &str = "data-speed";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const PIN_CLASS: &str = "globe-pin";
pub const PIN_HIDDEN_CLASS: &str = "globe-pin--hidden";
pub const DRAGGING_CLASS: &str = "is-dragging";
pub const REVIEW_CARD_CLASS: &str = "review-card";

// Remote data
pub const DEFAULT_GEO_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_land.geojson";
pub const DEFAULT_REVIEWS_URL: &str = "/reviews.json";

// Canvas styling
pub const SPHERE_FILL: &str = "#0d1b2a";
pub const SPHERE_STROKE: &str = "#7fa6c9";
pub const SPHERE_LINE_WIDTH: f64 = 1.5;
pub const GRATICULE_STROKE: &str = "#cfe7ff";
pub const GRATICULE_ALPHA: f64 = 0.15; // reduced opacity relative to land
pub const GRATICULE_LINE_WIDTH: f64 = 0.5;
pub const LAND_FILL: &str = "#3b7fb8";
pub const LAND_STROKE: &str = "#9cc3e6";
pub const LAND_LINE_WIDTH: f64 = 0.5;

// Upper bound on a single frame step so a backgrounded tab does not jump
pub const MAX_FRAME_DT_SEC: f64 = 0.1;
