//! Writer for the `.bezier` scene format.

use std::fmt::Write as _;

use beztri_core::BezierScene;

/// Writer for `.bezier` scene text.
///
/// Output is canonical: one `v` line per vertex-buffer entry in buffer
/// order, one `p` line per patch with all 10 indices explicit. Reading the
/// output back reproduces the vertex and index buffers exactly.
pub struct SceneWriter;

impl SceneWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Render a scene to `.bezier` text.
    pub fn write(&self, scene: &BezierScene) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "# bezier scene: {} patches, {} control points",
            scene.patch_count(),
            scene.vertex_buffer().len()
        );
        for v in scene.vertex_buffer() {
            let _ = writeln!(out, "v {} {} {} {}", v.x, v.y, v.z, v.w);
        }
        for i in 0..scene.patch_count() {
            out.push('p');
            for index in scene.patch_indices(i) {
                let _ = write!(out, " {}", index);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for SceneWriter {
    fn default() -> Self {
        Self::new()
    }
}
