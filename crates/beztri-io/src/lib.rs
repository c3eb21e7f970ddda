//! beztri-io: Import and export of `.bezier` scene text.
//!
//! # Format
//!
//! ```text
//! # comment (blank lines are ignored too)
//! v x y z w            homogeneous control point, w is the rational weight
//! p i0 ... i8 [i9]     cubic triangle patch, zero-based vertex indices
//! ```
//!
//! The nine boundary indices follow the canonical corner/edge order of
//! [`beztri_core::TriangleControlPoint`]; the optional 10th names the
//! interior point. When it is absent the importer synthesizes the interior
//! point from the boundary and appends it to the vertex buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use beztri_io::{import_scene, ImportOptions, SceneReader};
//!
//! let scene = import_scene("scenes/pyramid.bezier")?;
//! println!("{} patches", scene.patch_count());
//!
//! // In-memory data, tolerant of malformed lines:
//! let scene = SceneReader::new()
//!     .read_str(&text, &ImportOptions::new().skip_malformed())?;
//! ```

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{ImportError, Result};
pub use options::{ImportOptions, MalformedLinePolicy};
pub use reader::{interpolate_center, SceneReader, BOUNDARY_POINT_COUNT};
pub use writer::SceneWriter;

use std::path::Path;

use beztri_core::BezierScene;

/// Import a scene from a `.bezier` file.
pub fn import_scene(path: impl AsRef<Path>) -> Result<BezierScene> {
    import_scene_with_options(path, &ImportOptions::default())
}

/// Import a scene from a `.bezier` file with explicit options.
pub fn import_scene_with_options(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<BezierScene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::io(path, source))?;
    SceneReader::new().read_str(&text, options)
}

/// Write a scene to a `.bezier` file, interior points explicit.
pub fn export_scene(path: impl AsRef<Path>, scene: &BezierScene) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, SceneWriter::new().write(scene))
        .map_err(|source| ImportError::io(path, source))
}
