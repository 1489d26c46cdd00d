pub mod config;
pub mod constants;
pub mod contact;
pub mod data;
pub mod drag;
pub mod easing;
pub mod error;
pub mod geojson;
pub mod globe;
pub mod marquee;
pub mod progress;
pub mod projection;
pub mod route;
pub mod transform;
pub mod wrap;

pub use config::*;
pub use contact::*;
pub use data::*;
pub use drag::*;
pub use easing::*;
pub use error::DataError;
pub use geojson::*;
pub use globe::*;
pub use marquee::*;
pub use progress::*;
pub use projection::*;
pub use route::*;
pub use transform::*;
pub use wrap::*;
