//! Conversion helpers from point-cloud data to renderable mesh primitives.
//!
//! Turns ordered point sequences, independent segment pairs, and closed
//! planar contours into `bevy` meshes (line lists and fan-triangulated
//! fills) ready to hand to the render pipeline. Acquisition, filtering and
//! pipeline management stay with the enclosing visualization framework.

pub mod contour;
pub mod mesh;

pub use contour::PlanarContour;
pub use mesh::{
    create_contour_mesh, create_multisegment_mesh, create_polygon_mesh, create_polyline_mesh,
};
