//! Closest pair of points by divide and conquer, with a replayable trace.
//!
//! The points are sorted by `x` once. The recursion then:
//! - solves sets of at most [`BASE_CASE_SIZE`] points by brute force (`conquer`),
//! - otherwise splits at `mid = n / 2` (`divide`), solves the left half and then
//!   the right half, and
//! - checks the strip of points closer than the current best distance to the
//!   dividing line (`merge`), recording a second `merge` only when the strip
//!   holds a strictly closer pair.
//!
//! Ties are resolved deterministically: brute force keeps the first minimal
//! `(i, j)` pair, the left half beats the right half on equal distances, and a
//! strip pair only replaces the divide-side pair on strict improvement.
//!
//! Every [`Point`] keeps the `id` it was given at parse time, so records that
//! carry re-sorted or filtered subsets can always be matched back to the input.

use serde::Serialize;

use crate::traits::{StepSink, TraceStep, Traced};
use crate::utils::format_number;

/// Largest point set solved by brute force.
pub const BASE_CASE_SIZE: usize = 3;

/// An input point. `id` is its index in the original, unsorted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub id: usize,
}

impl Point {
    pub fn new(x: f64, y: f64, id: usize) -> Self {
        Self { x, y, id }
    }
}

/// The closest pair found and its Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestPairResult {
    pub point1: Point,
    pub point2: Point,
    pub distance: f64,
}

impl ClosestPairResult {
    fn pair(&self) -> (Point, Point) {
        (self.point1, self.point2)
    }
}

/// The two halves produced by a recursive divide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
}

/// What a `merge` record reports about the strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum StripOutcome {
    /// The strip membership about to be scanned.
    Scan { strip_points: Vec<Point> },
    /// The scan found a pair strictly closer than both halves.
    Closer {
        closest_pair: (Point, Point),
        distance: f64,
    },
}

/// One event of a closest-pair run.
///
/// `points` is the working subset shown at that event, not necessarily the
/// full input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ClosestPairStep {
    /// The initial sort (no `split`) or a recursive split into halves.
    Divide {
        points: Vec<Point>,
        #[serde(flatten)]
        split: Option<Split>,
        description: String,
    },
    /// A brute-forced base case.
    Conquer {
        points: Vec<Point>,
        closest_pair: (Point, Point),
        distance: f64,
        description: String,
    },
    /// Strip examination after both halves returned.
    Merge {
        points: Vec<Point>,
        #[serde(flatten)]
        outcome: StripOutcome,
        description: String,
    },
    /// The global answer, over the full sorted input.
    Result {
        points: Vec<Point>,
        closest_pair: (Point, Point),
        distance: f64,
        description: String,
    },
}

impl ClosestPairStep {
    /// Working subset visualized at this step.
    pub fn points(&self) -> &[Point] {
        match self {
            ClosestPairStep::Divide { points, .. }
            | ClosestPairStep::Conquer { points, .. }
            | ClosestPairStep::Merge { points, .. }
            | ClosestPairStep::Result { points, .. } => points,
        }
    }

    /// Closest pair carried by this step, if any.
    pub fn closest_pair(&self) -> Option<(Point, Point)> {
        match self {
            ClosestPairStep::Conquer { closest_pair, .. }
            | ClosestPairStep::Result { closest_pair, .. }
            | ClosestPairStep::Merge {
                outcome: StripOutcome::Closer { closest_pair, .. },
                ..
            } => Some(*closest_pair),
            _ => None,
        }
    }

    /// Distance carried by this step, if any.
    pub fn distance(&self) -> Option<f64> {
        match self {
            ClosestPairStep::Conquer { distance, .. }
            | ClosestPairStep::Result { distance, .. }
            | ClosestPairStep::Merge {
                outcome: StripOutcome::Closer { distance, .. },
                ..
            } => Some(*distance),
            _ => None,
        }
    }

    /// Strip membership, for the scan variant of `merge`.
    pub fn strip_points(&self) -> Option<&[Point]> {
        match self {
            ClosestPairStep::Merge {
                outcome: StripOutcome::Scan { strip_points },
                ..
            } => Some(strip_points),
            _ => None,
        }
    }
}

impl TraceStep for ClosestPairStep {
    fn tag(&self) -> &'static str {
        match self {
            ClosestPairStep::Divide { .. } => "divide",
            ClosestPairStep::Conquer { .. } => "conquer",
            ClosestPairStep::Merge { .. } => "merge",
            ClosestPairStep::Result { .. } => "result",
        }
    }

    fn description(&self) -> &str {
        match self {
            ClosestPairStep::Divide { description, .. }
            | ClosestPairStep::Conquer { description, .. }
            | ClosestPairStep::Merge { description, .. }
            | ClosestPairStep::Result { description, .. } => description,
        }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Check every pair; the first strictly smaller distance wins.
///
/// # Panics
/// Panics if `pts` has fewer than 2 points.
pub fn brute_force(pts: &[Point]) -> ClosestPairResult {
    assert!(pts.len() >= 2, "brute_force needs at least 2 points");

    let mut best = ClosestPairResult {
        point1: pts[0],
        point2: pts[1],
        distance: f64::INFINITY,
    };
    for (i, p) in pts.iter().enumerate() {
        for q in &pts[i + 1..] {
            let d = distance(p, q);
            if d < best.distance {
                best = ClosestPairResult {
                    point1: *p,
                    point2: *q,
                    distance: d,
                };
            }
        }
    }
    best
}

/// Search the strip for a pair closer than `d`.
///
/// The strip is sorted by `y` on a private copy; for each point the scan moves
/// forward only while the `y` gap is below the running minimum. Returns `None`
/// if no pair beats `d`.
pub fn strip_closest(strip: &[Point], d: f64) -> Option<ClosestPairResult> {
    let mut sorted = strip.to_vec();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y));

    let mut best: Option<ClosestPairResult> = None;
    let mut min_dist = d;
    for (i, p) in sorted.iter().enumerate() {
        for q in &sorted[i + 1..] {
            if q.y - p.y >= min_dist {
                break;
            }
            let dist = distance(p, q);
            if dist < min_dist {
                min_dist = dist;
                best = Some(ClosestPairResult {
                    point1: *p,
                    point2: *q,
                    distance: dist,
                });
            }
        }
    }
    best
}

/// Find the closest pair of `points` and record every step.
///
/// Callers are expected to validate input first (see
/// [`crate::input::parse_closest_pair_input`]).
///
/// # Panics
/// Panics if `points` has fewer than 2 elements.
///
/// ```
/// use dnc_trace::problems::closest_pair::{find_closest_pair, Point};
///
/// let points = [Point::new(0.0, 0.0, 0), Point::new(3.0, 4.0, 1), Point::new(1.0, 1.0, 2)];
/// let traced = find_closest_pair(&points);
/// assert_eq!((traced.result.point1.id, traced.result.point2.id), (0, 2));
/// assert!((traced.result.distance - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn find_closest_pair(points: &[Point]) -> Traced<ClosestPairResult, ClosestPairStep> {
    let mut steps = Vec::new();
    let result = find_closest_pair_into(points, &mut steps);
    Traced { result, steps }
}

/// Like [`find_closest_pair`], but appends the steps to `sink`.
///
/// # Panics
/// Panics if `points` has fewer than 2 elements.
pub fn find_closest_pair_into<K>(points: &[Point], sink: &mut K) -> ClosestPairResult
where
    K: StepSink<ClosestPairStep>,
{
    assert!(
        points.len() >= 2,
        "closest pair needs at least 2 points, got {}",
        points.len()
    );

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("find_closest_pair", n = points.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.id.cmp(&b.id)));

    sink.record(ClosestPairStep::Divide {
        points: sorted.clone(),
        split: None,
        description: format!("Start: Sorted {} points by x-coordinate", sorted.len()),
    });

    let result = solve(&sorted, sink);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        id1 = result.point1.id,
        id2 = result.point2.id,
        distance = result.distance,
        "closest pair found"
    );

    sink.record(ClosestPairStep::Result {
        points: sorted,
        closest_pair: result.pair(),
        distance: result.distance,
        description: format!(
            "Final Result: Closest pair found with distance {}",
            format_number(result.distance, 4)
        ),
    });

    result
}

fn solve<K: StepSink<ClosestPairStep>>(pts: &[Point], sink: &mut K) -> ClosestPairResult {
    let n = pts.len();

    if n <= BASE_CASE_SIZE {
        let result = brute_force(pts);
        sink.record(ClosestPairStep::Conquer {
            points: pts.to_vec(),
            closest_pair: result.pair(),
            distance: result.distance,
            description: format!(
                "Base case: {n} points. Brute force finds closest pair with distance {}",
                format_number(result.distance, 4)
            ),
        });
        return result;
    }

    let mid = n / 2;
    let mid_x = pts[mid].x;
    let (left, right) = pts.split_at(mid);

    #[cfg(feature = "tracing")]
    tracing::trace!(n, mid, mid_x, "divide");

    sink.record(ClosestPairStep::Divide {
        points: pts.to_vec(),
        split: Some(Split {
            left: left.to_vec(),
            right: right.to_vec(),
        }),
        description: format!(
            "Divide: Split {n} points at x = {} into left ({}) and right ({}) halves",
            format_number(mid_x, 2),
            left.len(),
            right.len()
        ),
    });

    let left_result = solve(left, sink);
    let right_result = solve(right, sink);

    let mut best = if left_result.distance <= right_result.distance {
        left_result
    } else {
        right_result
    };
    let min_dist = best.distance;

    let strip: Vec<Point> = pts
        .iter()
        .filter(|p| (p.x - mid_x).abs() < min_dist)
        .copied()
        .collect();

    if strip.len() > 1 {
        #[cfg(feature = "tracing")]
        tracing::trace!(strip = strip.len(), min_dist, "merge");

        let candidate = strip_closest(&strip, min_dist);
        sink.record(ClosestPairStep::Merge {
            points: pts.to_vec(),
            description: format!(
                "Merge: Check {} points in strip (within distance {} of dividing line)",
                strip.len(),
                format_number(min_dist, 4)
            ),
            outcome: StripOutcome::Scan {
                strip_points: strip,
            },
        });

        if let Some(found) = candidate.filter(|c| c.distance < min_dist) {
            best = found;
            sink.record(ClosestPairStep::Merge {
                points: pts.to_vec(),
                outcome: StripOutcome::Closer {
                    closest_pair: found.pair(),
                    distance: found.distance,
                },
                description: format!(
                    "Found closer pair in strip with distance {}",
                    format_number(found.distance, 4)
                ),
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Point::new(x, y, id))
            .collect()
    }

    #[test]
    fn three_points_is_a_single_base_case() {
        let points = pts(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]);
        let traced = find_closest_pair(&points);
        assert_eq!(traced.result.point1.id, 0);
        assert_eq!(traced.result.point2.id, 2);
        assert!((traced.result.distance - 2f64.sqrt()).abs() < 1e-12);

        let tags: Vec<_> = traced.steps.iter().map(|s| s.tag()).collect();
        assert_eq!(tags, vec!["divide", "conquer", "result"]);
    }

    #[test]
    fn brute_force_keeps_first_minimum() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let r = brute_force(&points);
        assert_eq!((r.point1.id, r.point2.id), (0, 1));
        assert_eq!(r.distance, 1.0);
    }

    #[test]
    fn strip_returns_none_without_improvement() {
        let strip = pts(&[(0.0, 0.0), (0.0, 5.0)]);
        assert!(strip_closest(&strip, 2.0).is_none());
        let found = strip_closest(&strip, 6.0).expect("pair within bound");
        assert_eq!(found.distance, 5.0);
    }

    #[test]
    fn strip_scan_respects_y_order() {
        let strip = pts(&[(0.0, 10.0), (0.5, 0.0), (0.0, 0.2)]);
        let found = strip_closest(&strip, f64::INFINITY).expect("some pair");
        assert_eq!((found.point1.id, found.point2.id), (1, 2));
    }

    #[test]
    fn closer_pair_across_the_split_is_recorded() {
        // Halves: {(0,0),(1,10)} and {(1.1,0),(5,10)}; crossing pair is (0,0)-(1.1,0)
        let points = pts(&[(0.0, 0.0), (1.0, 10.0), (1.1, 0.0), (5.0, 10.0)]);
        let traced = find_closest_pair(&points);
        assert_eq!((traced.result.point1.id, traced.result.point2.id), (0, 2));

        let merges: Vec<_> = traced
            .steps
            .iter()
            .filter(|s| matches!(s, ClosestPairStep::Merge { .. }))
            .collect();
        assert_eq!(merges.len(), 2);
        assert!(merges[0].strip_points().is_some());
        assert_eq!(merges[1].distance(), Some(traced.result.distance));
    }

    #[test]
    fn left_half_wins_ties() {
        let points = pts(&[(0.0, 0.0), (0.0, 1.0), (10.0, 0.0), (10.0, 1.0)]);
        let traced = find_closest_pair(&points);
        assert_eq!((traced.result.point1.id, traced.result.point2.id), (0, 1));

        // The strip holds no better pair, so only the scan record is emitted.
        let tags: Vec<&str> = traced.steps.iter().map(|s| s.tag()).collect();
        assert_eq!(
            tags,
            ["divide", "divide", "conquer", "conquer", "merge", "result"]
        );
        assert!(matches!(
            &traced.steps[4],
            ClosestPairStep::Merge {
                outcome: StripOutcome::Scan { .. },
                ..
            }
        ));
    }

    #[test]
    fn divide_description_matches_split() {
        let points = pts(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (6.5, 1.0)]);
        let traced = find_closest_pair(&points);
        let divide = &traced.steps[1];
        assert_eq!(
            divide.description(),
            "Divide: Split 4 points at x = 4.00 into left (2) and right (2) halves"
        );
    }

    #[test]
    #[should_panic(expected = "at least 2 points")]
    fn single_point_is_a_caller_error() {
        let _ = find_closest_pair(&pts(&[(1.0, 1.0)]));
    }

    #[test]
    fn serializes_with_type_tag() {
        let points = pts(&[(0.0, 0.0), (3.0, 4.0)]);
        let traced = find_closest_pair(&points);
        let json = serde_json::to_value(&traced.steps[1]).expect("serializable");
        assert_eq!(json["type"], "conquer");
        assert_eq!(json["distance"], 5.0);
        assert_eq!(json["closestPair"][1]["id"], 1);
    }
}
