use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Closed planar contour for polygon visualization.
///
/// Vertices are stored in loop order; the closing edge back to the first
/// vertex is implicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanarContour {
    points: Vec<Vec3>,
}

impl PlanarContour {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    /// Total edge length of the closed loop, including the closing edge.
    pub fn perimeter(&self) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }

        (0..self.points.len())
            .map(|i| {
                let next = self.points[(i + 1) % self.points.len()];
                (next - self.points[i]).length()
            })
            .sum()
    }

    /// Resamples contour edges to ensure uniform point distribution.
    /// Contours with fewer than three vertices are returned unchanged.
    pub fn resample_uniform(&self, target_spacing: f32) -> Self {
        if self.points.len() < 3 {
            return self.clone();
        }

        let mut resampled = Vec::new();

        for i in 0..self.points.len() {
            let start = self.points[i];
            let end = self.points[(i + 1) % self.points.len()];

            let edge_length = (end - start).length();
            if edge_length < 0.001 {
                continue; // Skip degenerate edges to prevent numerical instability.
            }

            let num_segments = (edge_length / target_spacing).max(1.0) as usize;

            // Generate uniformly distributed points along each edge, excluding
            // endpoints. Prevents duplicate vertices at contour corners.
            for j in 0..num_segments {
                let t = j as f32 / num_segments as f32;
                resampled.push(start + (end - start) * t);
            }
        }

        Self { points: resampled }
    }
}
