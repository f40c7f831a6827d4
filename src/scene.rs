// src/scene.rs

use crate::geometry::Point;
use crate::koch::{expected_len, generate_with, Subdivision};

/// Triangle whose edges seed the three Koch curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Unit-sided equilateral triangle, base along y = -0.5, wound counter-clockwise.
    pub fn unit() -> Self {
        Self::new(
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.0, 0.75f64.sqrt() - 0.5),
        )
    }

    /// Directed edges A->B, B->C, C->A.
    pub fn edges(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::unit()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Snowflake {
    pub triangle: Triangle,
    pub rule: Subdivision,
}

impl Snowflake {
    pub fn new(triangle: Triangle, rule: Subdivision) -> Self {
        Self { triangle, rule }
    }

    /// One independent point sequence per triangle edge, in edge order.
    pub fn sides(&self, iterations: u32) -> [Vec<Point>; 3] {
        self.triangle
            .edges()
            .map(|(start, end)| generate_with(self.rule, iterations, start, end))
    }

    /// Total points across all three sides, or `None` if the count overflows `usize`.
    pub fn vertex_count(&self, iterations: u32) -> Option<usize> {
        expected_len(self.rule, iterations)?.checked_mul(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_triangle_is_equilateral() {
        let [a, b, c] = Triangle::unit().vertices;
        let ab = a.distance(b);
        assert!((ab - 1.0).abs() < 1e-12);
        assert!((b.distance(c) - ab).abs() < 1e-12);
        assert!((c.distance(a) - ab).abs() < 1e-12);
    }

    #[test]
    fn sides_close_the_outline() {
        let flake = Snowflake::default();
        let sides = flake.sides(2);
        for i in 0..3 {
            let next = (i + 1) % 3;
            assert_eq!(sides[i].last(), sides[next].first());
        }
    }

    #[test]
    fn vertex_count_matches_generated_sides() {
        for rule in [Subdivision::Koch, Subdivision::Trisect] {
            let flake = Snowflake::new(Triangle::unit(), rule);
            let total: usize = flake.sides(3).iter().map(Vec::len).sum();
            assert_eq!(flake.vertex_count(3), Some(total));
        }
    }

    #[test]
    fn vertex_count_overflow_is_reported() {
        assert_eq!(Snowflake::default().vertex_count(40), None);
    }
}
