//! Homogeneous control points.

use glam::{Vec3, Vec4};

/// A homogeneous control point `(x, y, z, w)`; `w` is the rational weight.
pub type ControlPoint = Vec4;

/// Project a homogeneous point into Euclidean space.
///
/// Divides the spatial components by the weight. A zero weight produces
/// non-finite coordinates, which the scene bounds treat as invalid rather
/// than silently absorbing.
pub fn euclidean(p: ControlPoint) -> Vec3 {
    p.truncate() / p.w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_divides_by_weight() {
        let p = ControlPoint::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(euclidean(p), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_euclidean_unit_weight_is_identity() {
        let p = ControlPoint::new(1.5, -2.0, 0.25, 1.0);
        assert_eq!(euclidean(p), Vec3::new(1.5, -2.0, 0.25));
    }
}
