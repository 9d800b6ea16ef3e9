//! Running π estimation over a point sequence.
//!
//! # Governing Equation
//!
//! ```text
//! π̂(n) = 4 · #{ i ≤ n : x_i² + y_i² ≤ 1 } / n
//! ```
//!
//! The whole history is computed in one forward pass and then frozen;
//! frames only ever read prefixes of it.

use pi_core::types::{Classification, Point};
use tracing::info;

/// Incremental inside-count accumulator.
///
/// # Examples
///
/// ```rust
/// use pi_core::types::{Classification, Point};
/// use pi_engine::estimator::RunningEstimate;
///
/// let mut running = RunningEstimate::new();
/// assert_eq!(running.push(Point::new(0.0, 0.0)), (Classification::Inside, 4.0));
/// assert_eq!(running.push(Point::new(1.0, 1.0)), (Classification::Outside, 2.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunningEstimate {
    inside: usize,
    count: usize,
}

impl RunningEstimate {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `point`, folds it in and returns its label with the new estimate.
    #[inline]
    pub fn push(&mut self, point: Point) -> (Classification, f64) {
        let label = point.classify();
        if label.is_inside() {
            self.inside += 1;
        }
        self.count += 1;
        (label, self.estimate())
    }

    /// Points classified inside so far.
    #[inline]
    pub fn inside_count(&self) -> usize {
        self.inside
    }

    /// Points seen so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current estimate `4 · inside / count`, or 0 before any point.
    #[inline]
    pub fn estimate(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            4.0 * self.inside as f64 / self.count as f64
        }
    }
}

/// Frozen classification and estimate sequences of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    /// Label of the i-th point, in generation order.
    pub labels: Vec<Classification>,
    /// Running estimate after the first i+1 points.
    pub estimates: Vec<f64>,
}

impl History {
    /// Number of points covered.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no points were processed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Inside labels among the first `n` points.
    pub fn inside_count(&self, n: usize) -> usize {
        self.labels
            .iter()
            .take(n)
            .filter(|label| label.is_inside())
            .count()
    }

    /// Estimate after all points, if any.
    pub fn final_estimate(&self) -> Option<f64> {
        self.estimates.last().copied()
    }
}

/// Converts an ordered point sequence into its [`History`].
///
/// An empty input yields an empty history.
///
/// # Examples
///
/// ```rust
/// use pi_core::types::{Classification, Point};
/// use pi_engine::estimator::compute_history;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.5, 0.0),
///     Point::new(2.0, 2.0),
/// ];
/// let history = compute_history(&points);
///
/// assert_eq!(history.labels[1], Classification::Outside);
/// assert_eq!(history.estimates[3], 2.0);
/// ```
pub fn compute_history(points: &[Point]) -> History {
    let mut running = RunningEstimate::new();
    let mut labels = Vec::with_capacity(points.len());
    let mut estimates = Vec::with_capacity(points.len());

    for &point in points {
        let (label, estimate) = running.push(point);
        labels.push(label);
        estimates.push(estimate);
    }

    info!(
        n = running.count(),
        inside = running.inside_count(),
        estimate = running.estimate(),
        "history computed"
    );
    History { labels, estimates }
}
