//! Mesh generation for point-cloud visualization primitives.
//!
//! Builds position and index buffers for polylines, disconnected segment
//! sets, and fan-triangulated polygon fills. Every constructor is a single
//! pass over its input and returns `None` for empty input.

pub mod line_mesh;
pub mod polygon_mesh;

pub use line_mesh::{create_multisegment_mesh, create_polyline_mesh};
pub use polygon_mesh::{create_contour_mesh, create_polygon_mesh};
