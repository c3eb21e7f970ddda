//! Uniform tessellation of patches into triangle meshes.

use beztri_core::{BezierPatch, BezierScene, BezierTriangle};

use crate::eval::evaluate;
use crate::mesh::Mesh;

/// Tessellation quality settings.
#[derive(Debug, Clone, Copy)]
pub struct TessellationOptions {
    /// Subdivisions per patch edge. Values below 1 are clamped up.
    pub level: u32,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self { level: 8 }
    }
}

impl TessellationOptions {
    /// Create options for a specific subdivision level.
    pub fn with_level(level: u32) -> Self {
        Self { level }
    }
}

/// Tessellate a triangle patch on a uniform barycentric grid.
///
/// Level `L` produces `(L + 1)(L + 2) / 2` vertices and `L^2` triangles,
/// wound counter-clockwise with respect to the analytic surface normal.
pub fn tessellate_triangle(patch: &BezierTriangle, options: &TessellationOptions) -> Mesh {
    let level = options.level.max(1) as usize;

    let mut mesh = Mesh::new();
    for i in 0..=level {
        for j in 0..=(level - i) {
            let u = i as f32 / level as f32;
            let v = j as f32 / level as f32;
            let point = evaluate(patch, u, v, 1.0 - u - v);
            mesh.vertices.push(point.position);
            mesh.normals.push(point.normal);
        }
    }

    // Row-major grid layout: row i holds vertices (i, 0..=level-i).
    let mut row_offsets = Vec::with_capacity(level + 1);
    let mut offset = 0u32;
    for i in 0..=level {
        row_offsets.push(offset);
        offset += (level - i + 1) as u32;
    }
    let index = |i: usize, j: usize| row_offsets[i] + j as u32;

    for i in 0..level {
        for j in 0..(level - i) {
            mesh.indices
                .extend_from_slice(&[index(i, j), index(i + 1, j), index(i, j + 1)]);
            if j + 1 < level - i {
                mesh.indices.extend_from_slice(&[
                    index(i + 1, j),
                    index(i + 1, j + 1),
                    index(i, j + 1),
                ]);
            }
        }
    }

    mesh
}

/// Tessellate a patch of any kind.
pub fn tessellate_patch(patch: &BezierPatch, options: &TessellationOptions) -> Mesh {
    match patch {
        BezierPatch::Triangle(t) => tessellate_triangle(t, options),
    }
}

/// Tessellate every patch of a scene into one merged mesh.
///
/// The scene's model matrix is not applied; callers compose it at render
/// time or apply [`Mesh::transform`] explicitly.
pub fn tessellate_scene(scene: &BezierScene, options: &TessellationOptions) -> Mesh {
    let mut mesh = Mesh::new();
    for patch in scene.patches() {
        mesh.merge(&tessellate_patch(patch, options));
    }
    mesh
}
