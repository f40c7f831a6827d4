// src/koch.rs

use std::f64::consts::FRAC_PI_3;

use crate::error::{FractalError, Result};
use crate::geometry::Point;

/// Upper bound on iterations; a single side at this depth holds 4^10 + 1 points.
pub const MAX_ITERATIONS: u32 = 10;

/// How each segment is replaced during one iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Subdivision {
    /// 1/3 point, notch peak, 2/3 point: four segments per segment.
    #[default]
    Koch,
    /// 1/3 and 2/3 points only, no notch: three collinear segments per segment.
    Trisect,
}

impl Subdivision {
    /// Segments each existing segment becomes after one iteration.
    pub fn branching(self) -> usize {
        match self {
            Subdivision::Koch => 4,
            Subdivision::Trisect => 3,
        }
    }

    fn push_intermediates(self, a: Point, b: Point, out: &mut Vec<Point>) {
        let one_third = a.lerp(b, 1.0 / 3.0);
        let two_thirds = a.lerp(b, 2.0 / 3.0);
        match self {
            Subdivision::Koch => {
                let peak = two_thirds.rotate_about(one_third, -FRAC_PI_3);
                out.extend_from_slice(&[one_third, peak, two_thirds]);
            }
            Subdivision::Trisect => {
                out.extend_from_slice(&[one_third, two_thirds]);
            }
        }
    }
}

/// Validates an iteration count coming from a signed source.
pub fn checked_iterations(iterations: i64) -> Result<u32> {
    if iterations < 0 {
        return Err(FractalError::InvalidArgument(iterations));
    }
    if iterations > MAX_ITERATIONS as i64 {
        return Err(FractalError::TooManyIterations {
            requested: iterations,
            max: MAX_ITERATIONS,
        });
    }
    Ok(iterations as u32)
}

/// Number of points `generate_with(rule, iterations, ..)` returns, or `None` if it overflows `usize`.
pub fn expected_len(rule: Subdivision, iterations: u32) -> Option<usize> {
    rule.branching().checked_pow(iterations)?.checked_add(1)
}

/// Koch curve from `start` to `end` after `iterations` subdivisions.
///
/// # Panics
///
/// Panics if `iterations` exceeds [`MAX_ITERATIONS`].
pub fn generate(iterations: u32, start: Point, end: Point) -> Vec<Point> {
    generate_with(Subdivision::Koch, iterations, start, end)
}

/// Like [`generate_with`], but reports an oversized count as an error.
pub fn try_generate_with(rule: Subdivision, iterations: u32, start: Point, end: Point) -> Result<Vec<Point>> {
    let iterations = checked_iterations(i64::from(iterations))?;
    Ok(generate_with(rule, iterations, start, end))
}

/// Iteratively rebuilds the point sequence, one generation per pass.
///
/// The first and last points of the result are always `start` and `end`.
///
/// # Panics
///
/// Panics if `iterations` exceeds [`MAX_ITERATIONS`].
pub fn generate_with(rule: Subdivision, iterations: u32, start: Point, end: Point) -> Vec<Point> {
    assert!(
        iterations <= MAX_ITERATIONS,
        "iteration count {} exceeds the maximum of {}",
        iterations,
        MAX_ITERATIONS
    );

    let mut current = vec![start, end];
    for _ in 0..iterations {
        let mut next = Vec::with_capacity((current.len() - 1) * rule.branching() + 1);
        for pair in current.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            next.push(a);
            rule.push_intermediates(a, b, &mut next);
        }
        next.push(end);
        current = next;
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn base() -> (Point, Point) {
        (Point::new(-0.5, -0.5), Point::new(0.5, -0.5))
    }

    #[test]
    fn zero_iterations_returns_endpoints() {
        let (p1, p2) = base();
        assert_eq!(generate(0, p1, p2), vec![p1, p2]);
        assert_eq!(generate_with(Subdivision::Trisect, 0, p1, p2), vec![p1, p2]);
    }

    #[test]
    fn koch_lengths_follow_power_of_four() {
        let (p1, p2) = base();
        for (k, len) in [(0, 2), (1, 5), (2, 17), (3, 65)] {
            let points = generate(k, p1, p2);
            assert_eq!(points.len(), len, "iterations = {}", k);
            assert_eq!(expected_len(Subdivision::Koch, k), Some(len));
        }
    }

    #[test]
    fn trisect_lengths_follow_power_of_three() {
        let (p1, p2) = base();
        for (k, len) in [(0, 2), (1, 4), (2, 10), (3, 28)] {
            let points = generate_with(Subdivision::Trisect, k, p1, p2);
            assert_eq!(points.len(), len, "iterations = {}", k);
        }
    }

    #[test]
    fn endpoints_are_preserved() {
        let p1 = Point::new(0.1, 0.9);
        let p2 = Point::new(-0.3, -0.2);
        for k in 0..6 {
            for rule in [Subdivision::Koch, Subdivision::Trisect] {
                let points = generate_with(rule, k, p1, p2);
                assert_eq!(points.first(), Some(&p1));
                assert_eq!(points.last(), Some(&p2));
            }
        }
    }

    #[test]
    fn single_koch_step_matches_closed_form() {
        let (p1, p2) = base();
        let points = generate(1, p1, p2);
        let peak_y = -0.5 - 3f64.sqrt() / 6.0;
        let expected = [
            p1,
            Point::new(-1.0 / 6.0, -0.5),
            Point::new(0.0, peak_y),
            Point::new(1.0 / 6.0, -0.5),
            p2,
        ];
        assert_eq!(points.len(), expected.len());
        for (got, want) in points.iter().zip(expected.iter()) {
            assert!(got.distance(*want) < EPS, "{:?} != {:?}", got, want);
        }
    }

    #[test]
    fn every_koch_segment_has_equal_length() {
        let (p1, p2) = base();
        let points = generate(3, p1, p2);
        let expected = p1.distance(p2) / 27.0;
        for pair in points.windows(2) {
            assert!((pair[0].distance(pair[1]) - expected).abs() < EPS);
        }
    }

    #[test]
    fn trisect_points_stay_on_the_segment() {
        let (p1, p2) = base();
        for p in generate_with(Subdivision::Trisect, 3, p1, p2) {
            assert!((p.y - p1.y).abs() < EPS);
            assert!(p.x >= p1.x - EPS && p.x <= p2.x + EPS);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let (p1, p2) = base();
        assert_eq!(generate(4, p1, p2), generate(4, p1, p2));
    }

    #[test]
    fn checked_iterations_rejects_out_of_range() {
        assert_eq!(checked_iterations(-1), Err(FractalError::InvalidArgument(-1)));
        assert_eq!(
            checked_iterations(MAX_ITERATIONS as i64 + 1),
            Err(FractalError::TooManyIterations {
                requested: MAX_ITERATIONS as i64 + 1,
                max: MAX_ITERATIONS,
            })
        );
        assert_eq!(checked_iterations(0), Ok(0));
        assert_eq!(checked_iterations(MAX_ITERATIONS as i64), Ok(MAX_ITERATIONS));
    }

    #[test]
    fn expected_len_reports_overflow() {
        assert_eq!(expected_len(Subdivision::Koch, 10), Some(1_048_577));
        assert_eq!(expected_len(Subdivision::Koch, 40), None);
        assert_eq!(expected_len(Subdivision::Trisect, u32::MAX), None);
    }

    #[test]
    fn oversized_iterations_are_rejected_before_generating() {
        let (p1, p2) = base();
        assert_eq!(
            try_generate_with(Subdivision::Koch, 40, p1, p2),
            Err(FractalError::TooManyIterations { requested: 40, max: MAX_ITERATIONS })
        );
        assert_eq!(
            try_generate_with(Subdivision::Koch, 2, p1, p2).map(|points| points.len()),
            Ok(17)
        );
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum")]
    fn generate_panics_past_the_maximum() {
        let (p1, p2) = base();
        generate(40, p1, p2);
    }

    #[test]
    fn generate_at_the_maximum_has_exact_length() {
        let (p1, p2) = base();
        let points = generate_with(Subdivision::Trisect, MAX_ITERATIONS, p1, p2);
        assert_eq!(Some(points.len()), expected_len(Subdivision::Trisect, MAX_ITERATIONS));
    }
}
