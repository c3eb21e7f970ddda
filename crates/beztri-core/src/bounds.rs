//! Axis-aligned bounds and the normalizing view transform.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// The empty box: expanding it by any point yields that point's box.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl Iterator<Item = Vec3>) -> Self {
        let mut bounds = Self::EMPTY;
        for p in points {
            bounds.expand(p);
        }
        bounds
    }

    /// Grow the box to contain `point`.
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when both corners are finite and ordered on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Uniform scale that maps the longest extent to unit length.
    ///
    /// Clamps to 1 when the box has no extent, keeping the transform finite.
    pub fn normalizing_scale(&self) -> f32 {
        let size = self.size();
        let largest = size.x.max(size.y).max(size.z);
        if largest > 0.0 {
            1.0 / largest
        } else {
            1.0
        }
    }

    /// Transform that moves the box center to the origin and scales the
    /// longest extent to unit length. An invalid box yields the identity.
    pub fn normalizing_transform(&self) -> Mat4 {
        if !self.is_valid() {
            return Mat4::IDENTITY;
        }
        Mat4::from_scale(Vec3::splat(self.normalizing_scale()))
            * Mat4::from_translation(-self.center())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_from_empty() {
        let mut bounds = BoundingBox::EMPTY;
        bounds.expand(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(bounds.min, Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(bounds.max, Vec3::new(1.0, -2.0, 3.0));

        bounds.expand(Vec3::new(-1.0, 4.0, 0.0));
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn test_from_points() {
        let bounds = BoundingBox::from_points(
            [Vec3::ZERO, Vec3::new(2.0, 4.0, 8.0), Vec3::new(1.0, 1.0, 1.0)].into_iter(),
        );
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(2.0, 4.0, 8.0));
        assert_eq!(bounds.center(), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(bounds.size(), Vec3::new(2.0, 4.0, 8.0));
    }

    #[test]
    fn test_normalizing_transform_centers_and_scales() {
        let bounds = BoundingBox::new(Vec3::ZERO, Vec3::new(2.0, 4.0, 8.0));
        assert_eq!(bounds.normalizing_scale(), 0.125);

        let m = bounds.normalizing_transform();
        let center = m.transform_point3(Vec3::new(1.0, 2.0, 4.0));
        assert!(center.length() < 1e-6);

        let corner = m.transform_point3(Vec3::new(2.0, 4.0, 8.0));
        assert!((corner - Vec3::new(0.125, 0.25, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_empty_box_yields_identity() {
        assert!(!BoundingBox::EMPTY.is_valid());
        assert_eq!(BoundingBox::EMPTY.normalizing_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn test_single_point_box_centers_without_scaling() {
        let p = Vec3::new(3.0, -1.0, 2.0);
        let bounds = BoundingBox::new(p, p);
        assert!(bounds.is_valid());
        assert_eq!(bounds.normalizing_scale(), 1.0);

        let m = bounds.normalizing_transform();
        assert!(m.transform_point3(p).length() < 1e-6);
    }
}
