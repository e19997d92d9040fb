use cgmath::{Matrix3, Rad};

pub type Point3 = cgmath::Point3<f64>;
pub type Vector3 = cgmath::Vector3<f64>;

/// `min(max(value, min), max)`. NaN passes through untouched so callers can
/// detect it after clamping, and an inverted range resolves to `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    value.max(min).min(max)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation_y: f64,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation_y: 0.0,
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    pub fn from_translation_rotation(translation: Vector3, rotation_y: f64) -> Self {
        Self {
            translation,
            rotation_y,
            ..Self::identity()
        }
    }

    /// Scale, then rotate about +Y, then translate.
    pub fn apply(&self, point: Point3) -> Point3 {
        let scaled = Vector3::new(
            point.x * self.scale.x,
            point.y * self.scale.y,
            point.z * self.scale.z,
        );
        let rotated = Matrix3::from_angle_y(Rad(self.rotation_y)) * scaled;
        let moved = rotated + self.translation;
        Point3::new(moved.x, moved.y, moved.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = *first;
        let mut max = *first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Some(Self { min, max })
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }
}

/// Axis-aligned rectangle in wall-local coordinates: `x` runs along the wall
/// from its left edge, `y` up from the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WallRect {
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x, self.y),
            (self.x + self.width, self.y),
            (self.x + self.width, self.y + self.height),
            (self.x, self.y + self.height),
        ]
    }

    pub fn fits_within(&self, width: f64, height: f64, eps: f64) -> bool {
        self.corners().iter().all(|(x, y)| {
            *x >= -eps && *x <= width + eps && *y >= -eps && *y <= height + eps
        })
    }
}

/// The eight corners of a box of the given size centered on the origin.
pub fn box_corners(width: f64, height: f64, depth: f64) -> [Point3; 8] {
    let hx = width * 0.5;
    let hy = height * 0.5;
    let hz = depth * 0.5;
    [
        Point3::new(-hx, -hy, -hz),
        Point3::new(hx, -hy, -hz),
        Point3::new(hx, hy, -hz),
        Point3::new(-hx, hy, -hz),
        Point3::new(-hx, -hy, hz),
        Point3::new(hx, -hy, hz),
        Point3::new(hx, hy, hz),
        Point3::new(-hx, hy, hz),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn clamp_matches_min_max_composition() {
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(4.0, 0.0, 10.0), 4.0);
        assert_eq!(clamp(4.0, 5.0, 3.0), 3.0);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn half_turn_mirrors_x_and_z() {
        let transform = Transform::from_translation_rotation(Vector3::new(1.0, 2.0, 3.0), PI);
        let p = transform.apply(Point3::new(1.0, 0.0, 1.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.z, 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn scale_is_applied_before_translation() {
        let transform = Transform {
            translation: Vector3::new(0.0, 1.0, 0.0),
            rotation_y: 0.0,
            scale: Vector3::new(2.0, 3.0, 4.0),
        };
        let p = transform.apply(Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 4.0);
        assert_relative_eq!(p.z, 4.0);
    }

    #[test]
    fn aabb_size_and_center() {
        let points = [
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(3.0, 4.0, -2.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let bounds = Aabb::from_points(&points).expect("non-empty");
        assert_eq!(bounds.size(), Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(bounds.center(), Point3::new(1.0, 2.0, 0.0));
        let empty: [Point3; 0] = [];
        assert!(Aabb::from_points(&empty).is_none());
    }

    #[test]
    fn wall_rect_containment() {
        let rect = WallRect {
            x: 8.0,
            y: 0.0,
            width: 2.0,
            height: 2.5,
        };
        assert!(rect.fits_within(10.0, 2.5, 1.0e-9));
        assert!(!rect.fits_within(9.5, 2.5, 1.0e-9));
    }
}
