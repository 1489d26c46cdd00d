pub mod pointer;

pub use pointer::{wire_drag, DragTarget};
