//! Draw data for the frame driver
//!
//! Turns live polygons into line-list vertices. No GPU or window calls are
//! made here; whatever owns the surface uploads the vertices.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_outlines, polygon_outline};
pub use vertex::{Vertex, colors};
