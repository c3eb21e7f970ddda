//! beztri-core: Data model for rational Bezier triangle scenes.
//!
//! This crate defines the patch and scene types shared by the importer,
//! the CPU tessellator, and any renderer built on top of them.
//!
//! # Architecture
//!
//! ```text
//! .bezier text ──> beztri-io ──> BezierScene ──┬─> renderer (external)
//!                                              ├─> beztri-mesh
//!                                              └─> beztri-cli
//! ```
//!
//! A `BezierScene` carries its patches twice: as typed `BezierPatch` values
//! for CPU-side consumers, and as flat vertex/index buffers laid out for
//! direct GPU upload (10 indices per triangle patch, patch-major). The
//! importer keeps both views consistent; everything downstream treats the
//! scene as read-only.
//!
//! # Quick Start
//!
//! ```ignore
//! use beztri_core::{BezierScene, euclidean};
//!
//! let scene: BezierScene = beztri_io::import_scene("scenes/simpletriangle.bezier")?;
//! for patch in scene.patches() {
//!     println!("{:?}: {} control points", patch.kind(), patch.point_count());
//! }
//! let corner = euclidean(scene.vertex_buffer()[0]);
//! ```

pub mod bounds;
pub mod patch;
pub mod point;
pub mod scene;

pub use bounds::BoundingBox;
pub use patch::{
    BezierPatch, BezierTriangle, PatchError, PatchKind, TriangleControlPoint,
    TRIANGLE_POINT_COUNT,
};
pub use point::{euclidean, ControlPoint};
pub use scene::{BezierScene, SceneStats};
