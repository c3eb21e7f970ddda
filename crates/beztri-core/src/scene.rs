//! Scene container binding patches to flat GPU-ready buffers.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::patch::{BezierPatch, BezierTriangle, TRIANGLE_POINT_COUNT};
use crate::point::{euclidean, ControlPoint};

/// A scene of Bezier patches with flattened control-point buffers.
///
/// The index buffer holds one entry per control point, patch-major and in
/// canonical order: entries `10*i .. 10*i + 10` name patch `i`'s control
/// points in the vertex buffer. The importer establishes this layout along
/// with the normalizing model matrix; afterwards the scene is read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BezierScene {
    patches: Vec<BezierPatch>,
    vertex_buffer: Vec<ControlPoint>,
    index_buffer: Vec<u32>,
    model_matrix: Mat4,
}

impl BezierScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a triangle patch. Insertion order is preserved and duplicates
    /// are kept.
    pub fn add_triangle(&mut self, patch: BezierTriangle) {
        self.patches.push(BezierPatch::Triangle(patch));
    }

    /// Replace the vertex buffer wholesale.
    pub fn set_vertex_buffer(&mut self, vertices: Vec<ControlPoint>) {
        self.vertex_buffer = vertices;
    }

    /// Replace the index buffer wholesale.
    ///
    /// The buffer must hold exactly one entry per control point of the
    /// patches already added.
    pub fn set_index_buffer(&mut self, indices: Vec<u32>) {
        debug_assert_eq!(
            indices.len(),
            self.patches.iter().map(|p| p.point_count()).sum::<usize>()
        );
        self.index_buffer = indices;
    }

    pub fn set_model_matrix(&mut self, matrix: Mat4) {
        self.model_matrix = matrix;
    }

    /// The normalizing model matrix derived from the scene bounds.
    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    pub fn patches(&self) -> &[BezierPatch] {
        &self.patches
    }

    pub fn vertex_buffer(&self) -> &[ControlPoint] {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &[u32] {
        &self.index_buffer
    }

    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Control-point indices of patch `i`, in canonical order.
    ///
    /// Every patch kind in the scene consumes a fixed 10 indices, so the
    /// slice arithmetic needs no prefix sums.
    pub fn patch_indices(&self, i: usize) -> &[u32] {
        &self.index_buffer[i * TRIANGLE_POINT_COUNT..(i + 1) * TRIANGLE_POINT_COUNT]
    }

    /// Raw bytes of the vertex buffer, laid out for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_buffer)
    }

    /// Raw bytes of the index buffer, laid out for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.index_buffer)
    }

    /// Bounding box of the de-homogenized vertex positions.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertex_buffer.iter().map(|&v| euclidean(v)))
    }

    /// Summary counters for status displays.
    pub fn stats(&self) -> SceneStats {
        SceneStats {
            patch_count: self.patches.len(),
            vertex_count: self.vertex_buffer.len(),
            index_count: self.index_buffer.len(),
            bounds: self.bounds(),
        }
    }
}

/// Summary of a scene, suitable for a status bar or JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneStats {
    pub patch_count: usize,
    pub vertex_count: usize,
    pub index_count: usize,
    pub bounds: BoundingBox,
}
