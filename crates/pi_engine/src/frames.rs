//! Frame scheduling and the frozen per-source history.
//!
//! [`FrameSampler`] picks F+1 evenly spaced cumulative counts
//! `k_i = round(i·N/F)`; [`FrameStore`] holds the points, labels and running
//! estimates that every frame reads a prefix of.

use pi_core::types::{Classification, Point};
use pi_core::{PiError, PiResult};
use tracing::warn;

use crate::estimator::{compute_history, History};
use crate::source::PointSource;

/// Evenly spaced frame checkpoints over N points.
///
/// # Examples
///
/// ```rust
/// use pi_engine::frames::FrameSampler;
///
/// let sampler = FrameSampler::new(4).unwrap();
/// assert_eq!(sampler.frame_indices(16), vec![0, 4, 8, 12, 16]);
///
/// let sampler = FrameSampler::from_points_per_frame(16, 2).unwrap();
/// assert_eq!(sampler.frame_count(), 8);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSampler {
    frame_count: usize,
}

impl FrameSampler {
    /// Creates a sampler emitting `frame_count` data frames.
    ///
    /// # Errors
    ///
    /// Returns `PiError::InvalidFrameCount` if `frame_count` is 0.
    pub fn new(frame_count: usize) -> PiResult<Self> {
        if frame_count == 0 {
            return Err(PiError::InvalidFrameCount(frame_count));
        }
        Ok(Self { frame_count })
    }

    /// Creates a sampler advancing `points_per_frame` points each frame,
    /// i.e. `F = n_points / points_per_frame`.
    ///
    /// # Errors
    ///
    /// - `PiError::InvalidParameter` if `points_per_frame` is 0 or does not divide `n_points`
    /// - `PiError::InvalidFrameCount` if that leaves no frames
    pub fn from_points_per_frame(n_points: usize, points_per_frame: usize) -> PiResult<Self> {
        if points_per_frame == 0 {
            return Err(PiError::invalid_parameter(
                "points_per_frame",
                "must be at least 1",
            ));
        }
        if n_points % points_per_frame != 0 {
            return Err(PiError::invalid_parameter(
                "points_per_frame",
                format!("{} does not divide {} points", points_per_frame, n_points),
            ));
        }
        Self::new(n_points / points_per_frame)
    }

    /// Number of data frames F.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// All F+1 checkpoints `k_0 = 0, …, k_F = n_points`.
    ///
    /// Uses round-half-up, so indices may repeat when F does not divide N.
    pub fn frame_indices(&self, n_points: usize) -> Vec<usize> {
        let f = self.frame_count as u128;
        let n = n_points as u128;
        (0..=f)
            .map(|i| ((2 * i * n + f) / (2 * f)) as usize)
            .collect()
    }

    /// Checkpoints that carry data: `k_0` dropped, duplicates removed.
    ///
    /// Every returned prefix length is at least 1 and strictly greater
    /// than the one before it.
    pub fn data_indices(&self, n_points: usize) -> Vec<usize> {
        let all = self.frame_indices(n_points);
        let mut data: Vec<usize> = Vec::with_capacity(all.len().saturating_sub(1));
        let mut last = 0;
        for &k in all.iter().skip(1) {
            if k > last {
                data.push(k);
                last = k;
            }
        }

        let dropped = self.frame_count - data.len();
        if dropped > 0 {
            warn!(
                n_points,
                frame_count = self.frame_count,
                dropped,
                "frame count does not divide point count, dropping repeated frames"
            );
        }
        data
    }
}

/// Frozen points, labels and running estimates for one source.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStore {
    points: Vec<Point>,
    history: History,
}

impl FrameStore {
    /// Runs the estimator over `points` and freezes the result.
    pub fn from_points(points: Vec<Point>) -> Self {
        let history = compute_history(&points);
        Self { points, history }
    }

    /// Drains `source` and freezes its history.
    ///
    /// # Errors
    ///
    /// Propagates errors from the source.
    pub fn from_source<S: PointSource>(source: &mut S) -> PiResult<Self> {
        let points = source.drain()?;
        Ok(Self::from_points(points))
    }

    /// Assembles a store from a precomputed history.
    ///
    /// # Errors
    ///
    /// Returns `PiError::HistoryMismatch` if the lengths disagree.
    pub fn from_parts(points: Vec<Point>, history: History) -> PiResult<Self> {
        if history.labels.len() != history.estimates.len()
            || history.labels.len() != points.len()
        {
            return Err(PiError::HistoryMismatch {
                labels: history.labels.len(),
                estimates: history.estimates.len(),
            });
        }
        Ok(Self { points, history })
    }

    /// Total point count N.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when N is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in generation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The frozen history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Estimate after all N points.
    pub fn final_estimate(&self) -> Option<f64> {
        self.history.final_estimate()
    }

    /// Growing prefix of length `k`, for `1 <= k <= N`.
    pub fn prefix(&self, k: usize) -> Option<Prefix<'_>> {
        if k == 0 || k > self.len() {
            return None;
        }
        Some(Prefix {
            points: &self.points[..k],
            labels: &self.history.labels[..k],
            estimates: &self.history.estimates[..k],
        })
    }
}

/// Read-only view of the first `len()` entries of a [`FrameStore`].
#[derive(Copy, Clone, Debug)]
pub struct Prefix<'a> {
    /// Points in the prefix
    pub points: &'a [Point],
    /// Labels in the prefix
    pub labels: &'a [Classification],
    /// Running estimates in the prefix
    pub estimates: &'a [f64],
}

impl Prefix<'_> {
    /// Prefix length k.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; prefixes have length at least 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The estimate `estimates[k - 1]`.
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.estimates[self.estimates.len() - 1]
    }

    /// Inside labels in the prefix.
    pub fn inside_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_inside()).count()
    }
}
