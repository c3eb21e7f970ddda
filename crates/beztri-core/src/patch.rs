//! Bezier patch types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::point::ControlPoint;

/// Number of control points in a cubic triangle patch.
pub const TRIANGLE_POINT_COUNT: usize = 10;

/// Errors from patch construction.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Wrong number of control points for the patch kind.
    #[error("expected {expected} control points, found {found}")]
    InvalidArity { expected: usize, found: usize },
}

/// The kind of patch.
///
/// The set of kinds is closed so renderers can match exhaustively. `Quad`
/// is declared for that purpose only: no quad payload type exists and the
/// scene format never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatchKind {
    Triangle,
    Quad,
}

/// Control-point labels of a cubic triangle, in canonical order.
///
/// `Bijk` weights the barycentric monomial `u^i v^j w^k`. Storage and wire
/// order are corners, then edge points, then the center:
///
/// ```text
/// 0..=2   B300 B030 B003
/// 3..=8   B210 B120 B021 B012 B102 B201
/// 9       B111
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum TriangleControlPoint {
    B300 = 0,
    B030 = 1,
    B003 = 2,
    B210 = 3,
    B120 = 4,
    B021 = 5,
    B012 = 6,
    B102 = 7,
    B201 = 8,
    B111 = 9,
}

impl TriangleControlPoint {
    /// Position of this label in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A rational cubic Bezier triangle: exactly 10 homogeneous control points.
///
/// Immutable after construction. The control points follow the canonical
/// order of [`TriangleControlPoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierTriangle {
    points: [ControlPoint; TRIANGLE_POINT_COUNT],
}

impl BezierTriangle {
    /// Create a patch from control points in canonical order.
    pub fn new(points: [ControlPoint; TRIANGLE_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Create a patch from a slice, checking the arity.
    pub fn from_slice(points: &[ControlPoint]) -> Result<Self, PatchError> {
        let points: [ControlPoint; TRIANGLE_POINT_COUNT] =
            points.try_into().map_err(|_| PatchError::InvalidArity {
                expected: TRIANGLE_POINT_COUNT,
                found: points.len(),
            })?;
        Ok(Self { points })
    }

    /// All control points in canonical order.
    pub fn control_points(&self) -> &[ControlPoint; TRIANGLE_POINT_COUNT] {
        &self.points
    }

    /// Look up a control point by label.
    pub fn point(&self, label: TriangleControlPoint) -> ControlPoint {
        self.points[label.index()]
    }

    /// Number of control points consumed from the scene's index buffer.
    pub fn point_count(&self) -> usize {
        TRIANGLE_POINT_COUNT
    }

    pub fn kind(&self) -> PatchKind {
        PatchKind::Triangle
    }
}

/// A patch of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BezierPatch {
    Triangle(BezierTriangle),
}

impl BezierPatch {
    pub fn kind(&self) -> PatchKind {
        match self {
            BezierPatch::Triangle(_) => PatchKind::Triangle,
        }
    }

    /// Number of control points consumed from the scene's index buffer.
    pub fn point_count(&self) -> usize {
        match self {
            BezierPatch::Triangle(t) => t.point_count(),
        }
    }
}

impl From<BezierTriangle> for BezierPatch {
    fn from(t: BezierTriangle) -> Self {
        BezierPatch::Triangle(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_points() -> [ControlPoint; TRIANGLE_POINT_COUNT] {
        std::array::from_fn(|i| ControlPoint::new(i as f32, 0.0, 0.0, 1.0))
    }

    #[test]
    fn test_from_slice_accepts_ten_points() {
        let points = numbered_points();
        let patch = BezierTriangle::from_slice(&points).unwrap();
        assert_eq!(patch.control_points(), &points);
    }

    #[test]
    fn test_from_slice_rejects_wrong_arity() {
        let points = numbered_points();
        let err = BezierTriangle::from_slice(&points[..9]).unwrap_err();
        assert!(matches!(
            err,
            PatchError::InvalidArity {
                expected: 10,
                found: 9
            }
        ));
    }

    #[test]
    fn test_label_order() {
        assert_eq!(TriangleControlPoint::B300.index(), 0);
        assert_eq!(TriangleControlPoint::B003.index(), 2);
        assert_eq!(TriangleControlPoint::B210.index(), 3);
        assert_eq!(TriangleControlPoint::B201.index(), 8);
        assert_eq!(TriangleControlPoint::B111.index(), 9);
    }

    #[test]
    fn test_point_lookup_by_label() {
        let patch = BezierTriangle::new(numbered_points());
        assert_eq!(patch.point(TriangleControlPoint::B021).x, 5.0);
        assert_eq!(patch.point(TriangleControlPoint::B111).x, 9.0);
    }

    #[test]
    fn test_patch_kind() {
        let patch = BezierPatch::from(BezierTriangle::new(numbered_points()));
        assert_eq!(patch.kind(), PatchKind::Triangle);
        assert_eq!(patch.point_count(), TRIANGLE_POINT_COUNT);
    }
}
