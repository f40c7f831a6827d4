// src/geometry.rs

use glam::DVec2;

/// A 2D point in normalized device space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at fraction `d` of the way from `self` to `other`.
    ///
    /// `d = 0.0` yields `self`, `d = 1.0` yields `other`. Values outside
    /// `[0, 1]` extrapolate along the same line.
    pub fn lerp(self, other: Point, d: f64) -> Point {
        Point::new(
            self.x * (1.0 - d) + other.x * d,
            self.y * (1.0 - d) + other.y * d,
        )
    }

    /// Rotates `self` about `pivot` by `theta` radians (counter-clockwise for positive angles).
    pub fn rotate_about(self, pivot: Point, theta: f64) -> Point {
        let local = DVec2::from(self) - DVec2::from(pivot);
        let rotated = DVec2::from_angle(theta).rotate(local);
        Point::from(rotated + DVec2::from(pivot))
    }

    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }

    /// Narrowed to `f32` for vertex upload.
    pub fn to_f32_array(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            a.distance(b) < EPS,
            "expected {:?} to be within {} of {:?}",
            a,
            EPS,
            b
        );
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let p1 = Point::new(-0.5, 2.0);
        let p2 = Point::new(1.5, -1.0);
        assert_close(p1.lerp(p2, 0.0), p1);
        assert_close(p1.lerp(p2, 1.0), p2);
        assert_close(p1.lerp(p2, 0.5), Point::new(0.5, 0.5));
    }

    #[test]
    fn lerp_thirds_are_not_truncated() {
        let p = Point::new(0.0, 0.0).lerp(Point::new(3.0, 0.0), 1.0 / 3.0);
        assert_close(p, Point::new(1.0, 0.0));
    }

    #[test]
    fn rotation_by_zero_and_full_turn_is_identity() {
        let p = Point::new(0.3, -0.7);
        for pivot in [Point::new(0.0, 0.0), Point::new(-2.0, 5.0), p] {
            assert_close(p.rotate_about(pivot, 0.0), p);
            assert_close(p.rotate_about(pivot, 2.0 * PI), p);
        }
    }

    #[test]
    fn rotation_quarter_turn_about_pivot() {
        let pivot = Point::new(1.0, 1.0);
        let p = Point::new(2.0, 1.0);
        assert_close(p.rotate_about(pivot, FRAC_PI_2), Point::new(1.0, 2.0));
        assert_close(p.rotate_about(pivot, -FRAC_PI_2), Point::new(1.0, 0.0));
    }

    #[test]
    fn dvec2_conversion_preserves_coordinates() {
        let p = Point::new(0.25, -4.0);
        assert_eq!(Point::from(DVec2::from(p)), p);
        assert_eq!(p.to_f32_array(), [0.25f32, -4.0f32]);
    }
}
