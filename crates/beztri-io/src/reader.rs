//! Reader for the `.bezier` scene format.
//!
//! The format is line oriented: `v` lines declare homogeneous control
//! points, `p` lines declare cubic triangle patches by vertex index, `#`
//! starts a comment. A patch line carries 9 boundary indices and an
//! optional 10th center index; when the center is omitted it is synthesized
//! from the boundary via [`interpolate_center`] and appended to the vertex
//! list.

use beztri_core::{
    euclidean, BezierScene, BezierTriangle, BoundingBox, ControlPoint, TRIANGLE_POINT_COUNT,
};
use glam::Mat4;
use nom::{
    character::complete::{space1, u32 as unsigned},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    IResult,
};
use tracing::{debug, warn};

use crate::error::{ImportError, Result};
use crate::options::{ImportOptions, MalformedLinePolicy};

/// Number of numeric fields in a vertex line.
const VERTEX_FIELD_COUNT: usize = 4;

/// Number of boundary indices in a patch line without an explicit center.
pub const BOUNDARY_POINT_COUNT: usize = TRIANGLE_POINT_COUNT - 1;

/// Reader for `.bezier` scene text.
pub struct SceneReader;

impl SceneReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Check whether the data looks like `.bezier` text.
    ///
    /// Fast check on the first content line only.
    pub fn can_read(&self, data: &[u8]) -> bool {
        let text = match std::str::from_utf8(data) {
            Ok(s) => s,
            Err(_) => return false,
        };
        match content_lines(text).next() {
            Some(line) => matches!(
                line.content.split_whitespace().next(),
                Some("v") | Some("p")
            ),
            None => true,
        }
    }

    /// Read a scene from raw bytes.
    pub fn read(&self, data: &[u8], options: &ImportOptions) -> Result<BezierScene> {
        let text = std::str::from_utf8(data)?;
        self.read_str(text, options)
    }

    /// Read a scene from text.
    ///
    /// On success the returned scene holds the flattened vertex and index
    /// buffers plus the normalizing model matrix derived from the bounds of
    /// the declared vertices.
    pub fn read_str(&self, text: &str, options: &ImportOptions) -> Result<BezierScene> {
        let mut state = ImportState::new();
        for line in content_lines(text) {
            if let Err(err) = state.parse_line(&line) {
                if options.on_malformed == MalformedLinePolicy::Skip
                    && matches!(err, ImportError::MalformedLine { .. })
                {
                    warn!(%err, "skipping malformed line");
                    continue;
                }
                return Err(err);
            }
        }
        Ok(state.finish())
    }
}

impl Default for SceneReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthesize the interior control point of a cubic triangle from its nine
/// boundary points in canonical order.
///
/// Midpoint construction from Farin, "Curves and Surfaces for CAGD" p. 342,
/// applied componentwise to homogeneous coordinates:
///
/// ```text
/// B111 = 1/4 (B210 + B120 + B021 + B012 + B102 + B201)
///      - 1/6 (B300 + B030 + B003)
/// ```
pub fn interpolate_center(boundary: &[ControlPoint; BOUNDARY_POINT_COUNT]) -> ControlPoint {
    let corners: ControlPoint = boundary[..3].iter().sum();
    let edges: ControlPoint = boundary[3..].iter().sum();
    edges * 0.25 - corners * (1.0 / 6.0)
}

/// Accumulator state for one import call.
struct ImportState {
    scene: BezierScene,
    vertices: Vec<ControlPoint>,
    indices: Vec<u32>,
    bounds: BoundingBox,
    synthesized: usize,
}

impl ImportState {
    fn new() -> Self {
        Self {
            scene: BezierScene::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: BoundingBox::EMPTY,
            synthesized: 0,
        }
    }

    fn parse_line(&mut self, line: &Line<'_>) -> Result<()> {
        let (kind, rest) = match line.content.split_once(char::is_whitespace) {
            Some((kind, rest)) => (kind, rest.trim_start()),
            None => (line.content, ""),
        };
        match kind {
            "v" => self.parse_vertex(line, rest),
            "p" => self.parse_patch(line, rest),
            _ => {
                warn!(line = line.number, kind, "skipping unknown line kind");
                Ok(())
            }
        }
    }

    /// Handle `v x y z w`: append the control point and fold its Euclidean
    /// position into the running bounds.
    fn parse_vertex(&mut self, line: &Line<'_>, rest: &str) -> Result<()> {
        let (_, fields) = float_fields(rest).map_err(|_| {
            ImportError::malformed(line.number, line.content, "vertex components must be numeric")
        })?;
        if fields.len() != VERTEX_FIELD_COUNT {
            return Err(ImportError::malformed(
                line.number,
                line.content,
                format!("expected 4 vertex components, found {}", fields.len()),
            ));
        }
        let point = ControlPoint::new(
            fields[0] as f32,
            fields[1] as f32,
            fields[2] as f32,
            fields[3] as f32,
        );
        self.bounds.expand(euclidean(point));
        self.vertices.push(point);
        Ok(())
    }

    /// Handle `p i0 .. i8 [i9]`: resolve the indices against the vertices
    /// seen so far, synthesizing the center when the 10th index is absent.
    fn parse_patch(&mut self, line: &Line<'_>, rest: &str) -> Result<()> {
        let (_, mut indices) = index_fields(rest).map_err(|_| {
            ImportError::malformed(
                line.number,
                line.content,
                "patch indices must be unsigned integers",
            )
        })?;
        if indices.len() != BOUNDARY_POINT_COUNT && indices.len() != TRIANGLE_POINT_COUNT {
            return Err(ImportError::malformed(
                line.number,
                line.content,
                format!("expected 9 or 10 patch indices, found {}", indices.len()),
            ));
        }
        for &index in &indices {
            if index as usize >= self.vertices.len() {
                return Err(ImportError::IndexOutOfRange {
                    line: line.number,
                    index,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        if indices.len() == BOUNDARY_POINT_COUNT {
            let boundary: [ControlPoint; BOUNDARY_POINT_COUNT] =
                std::array::from_fn(|i| self.vertices[indices[i] as usize]);
            indices.push(self.vertices.len() as u32);
            self.vertices.push(interpolate_center(&boundary));
            self.synthesized += 1;
        }
        let points: Vec<ControlPoint> = indices.iter().map(|&i| self.vertices[i as usize]).collect();
        let patch = BezierTriangle::from_slice(&points)?;
        self.indices.extend_from_slice(&indices);
        self.scene.add_triangle(patch);
        Ok(())
    }

    /// Hand the accumulated buffers to the scene and derive the model matrix.
    fn finish(mut self) -> BezierScene {
        let matrix = if self.vertices.is_empty() {
            Mat4::IDENTITY
        } else if !self.bounds.is_valid() {
            warn!("vertex positions give no finite bounds; using identity model matrix");
            Mat4::IDENTITY
        } else {
            if self.bounds.size().max_element() <= 0.0 {
                warn!("scene has zero spatial extent; model matrix only recenters");
            }
            self.bounds.normalizing_transform()
        };
        debug!(
            patches = self.scene.patch_count(),
            vertices = self.vertices.len(),
            indices = self.indices.len(),
            synthesized = self.synthesized,
            "imported bezier scene"
        );
        self.scene.set_vertex_buffer(self.vertices);
        self.scene.set_index_buffer(self.indices);
        self.scene.set_model_matrix(matrix);
        self.scene
    }
}

/// A content line with its 1-based position in the source text.
struct Line<'a> {
    number: usize,
    content: &'a str,
}

/// Iterate trimmed content lines, dropping blanks and `#` comments.
fn content_lines(input: &str) -> impl Iterator<Item = Line<'_>> {
    input.lines().enumerate().filter_map(|(i, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some(Line {
                number: i + 1,
                content: trimmed,
            })
        }
    })
}

/// Parse whitespace-separated floating-point tokens to the end of input.
fn float_fields(input: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(separated_list1(space1, double))(input)
}

/// Parse whitespace-separated unsigned-integer tokens to the end of input.
fn index_fields(input: &str) -> IResult<&str, Vec<u32>> {
    all_consuming(separated_list1(space1, unsigned))(input)
}
