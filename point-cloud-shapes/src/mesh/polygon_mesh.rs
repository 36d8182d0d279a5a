use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::contour::PlanarContour;

/// Create triangulated fill mesh from an ordered point loop.
/// Uses simple fan triangulation suitable for convex and simple concave shapes.
///
/// Fewer than three points still yields a mesh, just with no triangles.
pub fn create_polygon_mesh(points: &[Vec3]) -> Option<Mesh> {
    if points.is_empty() {
        return None;
    }

    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    Some(build_fill_mesh(positions, points))
}

/// Create triangulated fill mesh from a closed planar contour.
///
/// The first vertex is repeated at the end so the closing edge is explicit in
/// the position buffer; the duplicate is never referenced by the triangle fan.
pub fn create_contour_mesh(contour: &PlanarContour) -> Option<Mesh> {
    let ring = contour.points();
    if ring.is_empty() {
        return None;
    }

    let mut positions: Vec<[f32; 3]> = ring.iter().map(|p| p.to_array()).collect();
    positions.push(ring[0].to_array());

    Some(build_fill_mesh(positions, ring))
}

/// Fan triangulation from the first vertex. `loop_points` bounds the fan so a
/// trailing closing vertex in `positions` stays unindexed.
fn build_fill_mesh(positions: Vec<[f32; 3]>, loop_points: &[Vec3]) -> Mesh {
    let mut indices = Vec::new();
    for i in 1..loop_points.len().saturating_sub(1) {
        indices.extend_from_slice(&[0, i as u32, (i + 1) as u32]);
    }

    let normal = face_normal(loop_points).to_array();
    let normals = vec![normal; positions.len()];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

/// Contour plane normal via Newell's method, +Y for degenerate loops so fill
/// meshes always light like ground-plane geometry.
fn face_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;

    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }

    normal.try_normalize().unwrap_or(Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
            .unwrap()
            .as_float3()
            .unwrap()
            .to_vec()
    }

    fn normals(mesh: &Mesh) -> Vec<[f32; 3]> {
        mesh.attribute(Mesh::ATTRIBUTE_NORMAL)
            .unwrap()
            .as_float3()
            .unwrap()
            .to_vec()
    }

    fn indices(mesh: &Mesh) -> Vec<usize> {
        mesh.indices().unwrap().iter().collect()
    }

    fn unit_square_xz() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_polygon_empty_input() {
        assert!(create_polygon_mesh(&[]).is_none());
    }

    #[test]
    fn test_polygon_fan_triangulation() {
        let mesh = create_polygon_mesh(&unit_square_xz()).unwrap();

        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
        assert_eq!(positions(&mesh).len(), 4);
        assert_eq!(indices(&mesh), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_polygon_below_three_points_has_no_triangles() {
        let mesh = create_polygon_mesh(&[Vec3::ZERO, Vec3::X]).unwrap();

        assert_eq!(positions(&mesh).len(), 2);
        assert!(indices(&mesh).is_empty());
    }

    #[test]
    fn test_polygon_planar_normal() {
        let mesh = create_polygon_mesh(&unit_square_xz()).unwrap();

        let normals = normals(&mesh);
        assert_eq!(normals.len(), 4);
        for n in normals {
            assert_eq!(n, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_polygon_degenerate_normal_falls_back_to_up() {
        // Collinear loop has no plane; fallback keeps lighting sane.
        let points = vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
        let mesh = create_polygon_mesh(&points).unwrap();

        assert_eq!(normals(&mesh)[0], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_contour_empty_input() {
        assert!(create_contour_mesh(&PlanarContour::new()).is_none());
    }

    #[test]
    fn test_contour_repeats_first_vertex() {
        let contour = PlanarContour::from_points(unit_square_xz());
        let mesh = create_contour_mesh(&contour).unwrap();

        let pos = positions(&mesh);
        assert_eq!(pos.len(), 5);
        assert_eq!(pos[4], pos[0]);
        assert_eq!(normals(&mesh).len(), 5);
    }

    #[test]
    fn test_contour_fan_skips_closing_vertex() {
        let contour = PlanarContour::from_points(unit_square_xz());
        let mesh = create_contour_mesh(&contour).unwrap();

        let idx = indices(&mesh);
        assert_eq!(idx, vec![0, 1, 2, 0, 2, 3]);
        // No zero-area triangle through the duplicated vertex.
        assert!(idx.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_contour_matches_open_polygon_fill() {
        let points = unit_square_xz();
        let contour = PlanarContour::from_points(points.clone());

        let open = create_polygon_mesh(&points).unwrap();
        let closed = create_contour_mesh(&contour).unwrap();

        assert_eq!(indices(&open), indices(&closed));
    }
}
