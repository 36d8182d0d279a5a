use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Create line mesh connecting consecutive points of an ordered sequence.
///
/// One segment per consecutive pair; a single point yields a mesh with one
/// vertex and no segments.
pub fn create_polyline_mesh(points: &[Vec3]) -> Option<Mesh> {
    if points.is_empty() {
        return None;
    }

    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();

    let mut indices = Vec::with_capacity(points.len().saturating_sub(1) * 2);
    for i in 1..points.len() {
        indices.extend_from_slice(&[(i - 1) as u32, i as u32]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));

    Some(mesh)
}

/// Create line mesh from independent segment pairs.
///
/// Endpoints are stored per segment and never shared, so coincident endpoints
/// of different segments stay separate vertices.
pub fn create_multisegment_mesh(segments: &[(Vec3, Vec3)]) -> Option<Mesh> {
    if segments.is_empty() {
        return None;
    }

    let mut positions = Vec::with_capacity(segments.len() * 2);
    let mut indices = Vec::with_capacity(segments.len() * 2);

    for (i, (start, end)) in segments.iter().enumerate() {
        let base = (2 * i) as u32;
        positions.push(start.to_array());
        positions.push(end.to_array());
        indices.extend_from_slice(&[base, base + 1]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));

    Some(mesh)
}
