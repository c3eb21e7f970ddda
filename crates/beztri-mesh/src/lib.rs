//! # Beztri Mesh
//!
//! Surface evaluation and tessellation for rational Bézier triangle scenes.
//!
//! ## Features
//!
//! - **Evaluation**: rational de Casteljau point and normal evaluation at
//!   arbitrary barycentric coordinates
//! - **Tessellation**: uniform subdivision of patches into indexed triangle
//!   meshes with per-vertex normals
//! - **Meshes**: a minimal CPU-side mesh container with transform and merge
//!   operations
//!
//! ## Quick Start
//!
//! ```
//! use beztri_mesh::{tessellate_scene, TessellationOptions};
//!
//! let scene = beztri_core::BezierScene::new();
//! let mesh = tessellate_scene(&scene, &TessellationOptions::default());
//! assert_eq!(mesh.vertex_count(), 0);
//! ```

pub mod eval;
pub mod mesh;
pub mod tessellate;

pub use eval::{evaluate, SurfacePoint};
pub use mesh::Mesh;
pub use tessellate::{
    tessellate_patch, tessellate_scene, tessellate_triangle, TessellationOptions,
};
