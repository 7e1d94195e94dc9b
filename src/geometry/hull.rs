use std::cmp::Ordering;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::geometry::types::{Point2D, Ring};
use crate::validation::{count, finite, Constraint, ValidationError, ValidationResult};

pub const MIN_HULL_POINTS: usize = 3;
pub const MAX_HULL_POINTS: usize = 10_000;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct HullRequest {
    /// List of `[lon, lat]` pairs
    pub coordinates: Vec<Vec<f64>>,
}

impl HullRequest {
    pub fn validate(&self) -> ValidationResult<Vec<Point2D>> {
        count(
            "coordinates",
            self.coordinates.len(),
            MIN_HULL_POINTS,
            MAX_HULL_POINTS,
        )?;

        self.coordinates
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                let field = format!("coordinates[{}]", i);
                match pair.as_slice() {
                    [x, y] => Ok(Point2D::new(finite(&field, *x)?, finite(&field, *y)?)),
                    _ => Err(ValidationError::new(field, Constraint::Arity(2))),
                }
            })
            .collect()
    }
}

/// Z component of (a - o) x (b - o); positive for a left turn.
fn cross(o: Point2D, a: Point2D, b: Point2D) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn half_hull<'a>(points: impl Iterator<Item = &'a Point2D>) -> Vec<Point2D> {
    let mut chain: Vec<Point2D> = Vec::new();
    for &p in points {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Convex hull by Andrew's monotone chain.
///
/// The ring runs counter-clockwise starting at the lowest-x (then lowest-y) point.
/// Collinear points are dropped. Input with fewer than three non-collinear points
/// yields a padded degenerate ring (repeated vertices, zero area) rather than an
/// error; empty input degenerates to the origin.
pub fn convex_hull(points: &[Point2D]) -> Ring {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();

    if sorted.len() <= 1 {
        let p = sorted.first().copied().unwrap_or(Point2D::ORIGIN);
        return Ring::close(vec![p; MIN_HULL_POINTS]);
    }

    let mut lower = half_hull(sorted.iter());
    let mut upper = half_hull(sorted.iter().rev());
    lower.pop();
    upper.pop();

    let mut hull = lower;
    hull.extend(upper);

    if hull.len() < MIN_HULL_POINTS {
        let missing = MIN_HULL_POINTS - hull.len();
        let padding: Vec<Point2D> = hull.iter().cycle().take(missing).copied().collect();
        hull.extend(padding);
    }

    Ring::close(hull)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Twice the signed area; positive for counter-clockwise winding.
    fn signed_area2(ring: &Ring) -> f64 {
        ring.vertices()
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum()
    }

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2D> {
        raw.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    #[test]
    fn test_square_with_interior_point() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
        let ring = convex_hull(&input);

        assert_eq!(ring.len(), 5);
        assert!(ring.is_closed());
        assert!(!ring.vertices().contains(&Point2D::new(0.5, 0.5)));
        for corner in &input[..4] {
            assert!(ring.vertices().contains(corner));
        }
    }

    #[test]
    fn test_counter_clockwise_winding() {
        let input = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 1.0)]);
        let ring = convex_hull(&input);
        assert!(signed_area2(&ring) > 0.0);
        assert_eq!(ring.vertices()[0], Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_first_vertex_only_repeated_at_closure() {
        let input = pts(&[(3.0, 1.0), (0.0, 0.0), (2.0, 5.0), (-1.0, 2.0), (1.0, 1.0)]);
        let ring = convex_hull(&input);
        let first = ring.vertices()[0];
        let open = &ring.vertices()[..ring.len() - 1];
        assert_eq!(open.iter().filter(|p| **p == first).count(), 1);
        assert_eq!(ring.vertices()[ring.len() - 1], first);
    }

    #[test]
    fn test_collinear_points_excluded() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let ring = convex_hull(&input);
        assert!(!ring.vertices().contains(&Point2D::new(1.0, 0.0)));
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn test_duplicates_removed() {
        let input = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let ring = convex_hull(&input);
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn test_collinear_input_is_padded() {
        let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let ring = convex_hull(&input);
        assert_eq!(ring.len(), 4);
        assert!(ring.is_closed());
        assert_eq!(signed_area2(&ring), 0.0);
    }

    #[test]
    fn test_single_distinct_point() {
        let input = pts(&[(5.0, 6.0), (5.0, 6.0), (5.0, 6.0)]);
        let ring = convex_hull(&input);
        assert_eq!(ring.len(), 4);
        assert!(ring.vertices().iter().all(|p| *p == Point2D::new(5.0, 6.0)));
    }

    #[test]
    fn test_empty_input_degenerates_to_origin() {
        let ring = convex_hull(&[]);
        assert!(ring.is_closed());
        assert!(ring.vertices().iter().all(|p| *p == Point2D::ORIGIN));
    }

    #[test]
    fn test_validation() {
        let too_few = HullRequest {
            coordinates: vec![vec![0.0, 0.0], vec![1.0, 1.0]],
        };
        let err = too_few.validate().unwrap_err();
        assert_eq!(err.field, "coordinates");
        assert_eq!(err.constraint, Constraint::Count { min: 3, max: 10_000 });

        let bad_pair = HullRequest {
            coordinates: vec![vec![0.0, 0.0], vec![1.0], vec![1.0, 1.0]],
        };
        let err = bad_pair.validate().unwrap_err();
        assert_eq!(err.field, "coordinates[1]");
        assert_eq!(err.constraint, Constraint::Arity(2));

        let too_many = HullRequest {
            coordinates: vec![vec![0.0, 0.0]; MAX_HULL_POINTS + 1],
        };
        let err = too_many.validate().unwrap_err();
        assert_eq!(err.field, "coordinates");
        assert_eq!(err.constraint, Constraint::Count { min: 3, max: 10_000 });

        let non_finite = HullRequest {
            coordinates: vec![vec![0.0, 0.0], vec![f64::NAN, 1.0], vec![1.0, 1.0]],
        };
        let err = non_finite.validate().unwrap_err();
        assert_eq!(err.field, "coordinates[1]");
        assert_eq!(err.constraint, Constraint::NotFinite);

        let ok = HullRequest {
            coordinates: vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0]],
        };
        assert_eq!(ok.validate().unwrap().len(), 3);
    }
}
