//! Rational patch evaluation via de Casteljau reduction.

use beztri_core::{euclidean, BezierTriangle, ControlPoint};
use glam::Vec3;

/// Position and unit normal of a point on a patch surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Evaluate a patch at barycentric coordinates `(u, v, w)`, `u + v + w = 1`.
///
/// `u = 1` lands on the `B300` corner, `v = 1` on `B030`, `w = 1` on
/// `B003`. Evaluation runs in homogeneous space, so rational weights curve
/// the surface correctly; the position is projected only at the end. The
/// normal comes from the tangent plane spanned by the last de Casteljau
/// step and is zero for degenerate patches.
pub fn evaluate(patch: &BezierTriangle, u: f32, v: f32, w: f32) -> SurfacePoint {
    let p = patch.control_points();

    // First reduction: cubic control net down to quadratic.
    let c200 = p[0] * u + p[3] * v + p[8] * w;
    let c020 = p[4] * u + p[1] * v + p[5] * w;
    let c002 = p[7] * u + p[6] * v + p[2] * w;
    let c110 = p[3] * u + p[4] * v + p[9] * w;
    let c011 = p[9] * u + p[5] * v + p[6] * w;
    let c101 = p[8] * u + p[9] * v + p[7] * w;

    // Second reduction: quadratic down to linear. These three points span
    // the tangent plane of the homogeneous surface.
    let d100 = c200 * u + c110 * v + c101 * w;
    let d010 = c110 * u + c020 * v + c011 * w;
    let d001 = c101 * u + c011 * v + c002 * w;

    let s = d100 * u + d010 * v + d001 * w;

    let t1 = projected_tangent(d100 - d001, s);
    let t2 = projected_tangent(d010 - d001, s);

    SurfacePoint {
        position: euclidean(s),
        normal: t1.cross(t2).normalize_or_zero(),
    }
}

/// Tangent of the projected surface along a homogeneous direction, up to
/// positive scale: the quotient rule for `xyz / w` with the `1 / w^2`
/// factor dropped.
fn projected_tangent(d: ControlPoint, s: ControlPoint) -> Vec3 {
    d.truncate() * s.w - s.truncate() * d.w
}

#[cfg(test)]
mod tests {
    use super::*;
    use beztri_core::TriangleControlPoint;

    /// Raised-edge patch over the unit triangle, unit weights.
    fn dome_patch() -> BezierTriangle {
        BezierTriangle::new([
            ControlPoint::new(0.0, 0.0, 0.0, 1.0),  // B300
            ControlPoint::new(1.0, 0.0, 0.0, 1.0),  // B030
            ControlPoint::new(0.0, 1.0, 0.0, 1.0),  // B003
            ControlPoint::new(0.3, 0.0, 0.3, 1.0),  // B210
            ControlPoint::new(0.7, 0.0, 0.3, 1.0),  // B120
            ControlPoint::new(0.7, 0.3, 0.3, 1.0),  // B021
            ControlPoint::new(0.3, 0.7, 0.3, 1.0),  // B012
            ControlPoint::new(0.0, 0.7, 0.3, 1.0),  // B102
            ControlPoint::new(0.0, 0.3, 0.3, 1.0),  // B201
            ControlPoint::new(0.33, 0.33, 0.5, 1.0), // B111
        ])
    }

    /// Degree-elevated flat triangle with corners a, b, c.
    fn flat_patch(a: Vec3, b: Vec3, c: Vec3) -> BezierTriangle {
        elevated_linear(a.extend(1.0), b.extend(1.0), c.extend(1.0))
    }

    /// Cubic elevation of the homogeneous-linear patch on corners a, b, c;
    /// the surface is exactly `u a + v b + w c`.
    fn elevated_linear(a: ControlPoint, b: ControlPoint, c: ControlPoint) -> BezierTriangle {
        let combine = |i: f32, j: f32, k: f32| (a * i + b * j + c * k) / 3.0;
        BezierTriangle::new([
            combine(3.0, 0.0, 0.0),
            combine(0.0, 3.0, 0.0),
            combine(0.0, 0.0, 3.0),
            combine(2.0, 1.0, 0.0),
            combine(1.0, 2.0, 0.0),
            combine(0.0, 2.0, 1.0),
            combine(0.0, 1.0, 2.0),
            combine(1.0, 0.0, 2.0),
            combine(2.0, 0.0, 1.0),
            combine(1.0, 1.0, 1.0),
        ])
    }

    #[test]
    fn test_corners_hit_corner_control_points() {
        let patch = dome_patch();
        let corners = [
            (1.0, 0.0, 0.0, TriangleControlPoint::B300),
            (0.0, 1.0, 0.0, TriangleControlPoint::B030),
            (0.0, 0.0, 1.0, TriangleControlPoint::B003),
        ];
        for (u, v, w, label) in corners {
            let point = evaluate(&patch, u, v, w);
            let expected = euclidean(patch.point(label));
            assert!((point.position - expected).length() < 1e-6);
        }
    }

    #[test]
    fn test_flat_patch_center_is_centroid() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 3.0, 0.0);
        let patch = flat_patch(a, b, c);

        let third = 1.0 / 3.0;
        let point = evaluate(&patch, third, third, third);
        assert!((point.position - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
        assert!((point.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_edge_is_cubic_bezier_curve() {
        // On the w = 0 edge the surface reduces to the cubic on
        // B300, B210, B120, B030; at the midpoint that is
        // (B300 + 3 B210 + 3 B120 + B030) / 8.
        let patch = dome_patch();
        let p = patch.control_points();
        let expected = euclidean((p[0] + p[3] * 3.0 + p[4] * 3.0 + p[1]) / 8.0);

        let point = evaluate(&patch, 0.5, 0.5, 0.0);
        assert!((point.position - expected).length() < 1e-6);
    }

    #[test]
    fn test_uniform_rescaling_is_invisible() {
        // Scaling every homogeneous control point by the same factor leaves
        // the projected surface unchanged.
        let patch = dome_patch();
        let scaled = BezierTriangle::new(patch.control_points().map(|p| p * 4.0));

        for (u, v) in [(0.2, 0.3), (0.6, 0.1), (0.1, 0.8), (0.25, 0.25)] {
            let w = 1.0 - u - v;
            let a = evaluate(&patch, u, v, w);
            let b = evaluate(&scaled, u, v, w);
            assert!((a.position - b.position).length() < 1e-5);
            assert!((a.normal - b.normal).length() < 1e-5);
        }
    }

    #[test]
    fn test_rational_weights_pull_the_surface() {
        // Ruled patch from a weight-2 apex down to two unit-weight corners.
        // The homogeneous surface stays linear under degree elevation, so
        // the exact value is known everywhere; at the parametric center it
        // differs from the Euclidean centroid because the apex weight pulls
        // the surface toward the apex.
        let apex = ControlPoint::new(0.0, 0.0, 2.0, 2.0);
        let b = ControlPoint::new(-1.0, -1.0, 0.0, 1.0);
        let c = ControlPoint::new(1.0, -1.0, 0.0, 1.0);
        let patch = elevated_linear(apex, b, c);

        let third = 1.0 / 3.0;
        let point = evaluate(&patch, third, third, third);
        let exact = euclidean((apex + b + c) / 3.0);
        assert!((point.position - exact).length() < 1e-5);

        let centroid = (euclidean(apex) + euclidean(b) + euclidean(c)) / 3.0;
        assert!((point.position - centroid).length() > 0.1);
    }

    #[test]
    fn test_interior_normals_are_unit_length() {
        let patch = dome_patch();
        for (u, v) in [(0.2, 0.2), (0.5, 0.25), (0.1, 0.6)] {
            let w = 1.0 - u - v;
            let point = evaluate(&patch, u, v, w);
            assert!((point.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_collapsed_patch_has_zero_normal() {
        let p = ControlPoint::new(2.0, -1.0, 3.0, 1.0);
        let patch = BezierTriangle::new([p; 10]);

        let point = evaluate(&patch, 0.3, 0.3, 0.4);
        assert!((point.position - Vec3::new(2.0, -1.0, 3.0)).length() < 1e-6);
        assert_eq!(point.normal, Vec3::ZERO);
    }
}
