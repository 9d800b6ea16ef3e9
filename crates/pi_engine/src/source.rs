//! Point sources for quadrant sampling.
//!
//! A [`PointSource`] yields exactly N points through [`PointSource::next_point`]
//! and fails with [`PiError::SourceExhausted`] on the (N+1)-th call.
//!
//! - [`PseudoRandomSource`]: independent uniform draws over the signed unit
//!   square [-1, 1]² or, for side-by-side comparison, the quadrant [0, 1)²
//! - [`QuasiRandomSource`]: a precomputed 2D Sobol net over [0, 1)², consumed
//!   through an index cursor in a fixed order

use pi_core::types::{AxisBounds, Point};
use pi_core::{PiError, PiResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::rng::{LowDiscrepancySequence, SampleRng, SobolSequence, MAX_SOBOL_POINTS};

/// Sampling strategy behind a source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Uniform pseudo-random draws
    Pseudorandom,
    /// Unscrambled Sobol low-discrepancy sequence
    Quasirandom,
}

impl SourceKind {
    /// Panel title used by renderers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Pseudorandom => "Pseudorandom Number Generation",
            Self::Quasirandom => "Quasirandom Number Generation (Sobol Sequence)",
        }
    }

    /// Scatter window matching the region the source samples.
    pub fn scatter_bounds(self) -> AxisBounds {
        match self {
            Self::Pseudorandom => AxisBounds::signed_unit(),
            Self::Quasirandom => AxisBounds::unit_quadrant(),
        }
    }
}

/// Region a pseudorandom source draws from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleRegion {
    /// `[-1, 1]²`, each coordinate a uniform magnitude times a random sign.
    #[default]
    SignedSquare,
    /// `[0, 1)²`, the region the Sobol source covers.
    UnitQuadrant,
}

impl SampleRegion {
    /// Scatter window for points drawn from this region.
    pub fn scatter_bounds(self) -> AxisBounds {
        match self {
            Self::SignedSquare => AxisBounds::signed_unit(),
            Self::UnitQuadrant => AxisBounds::unit_quadrant(),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pseudorandom => write!(f, "pseudorandom"),
            Self::Quasirandom => write!(f, "quasirandom"),
        }
    }
}

/// Pull-based producer of exactly `total()` points.
pub trait PointSource {
    /// Sampling strategy of this source.
    fn kind(&self) -> SourceKind;

    /// Total number of points N this source produces.
    fn total(&self) -> usize;

    /// Number of points already produced.
    fn produced(&self) -> usize;

    /// Scatter window covering every point this source produces.
    fn scatter_bounds(&self) -> AxisBounds {
        self.kind().scatter_bounds()
    }

    /// Produces the next point.
    ///
    /// # Errors
    ///
    /// Returns `PiError::SourceExhausted` once `total()` points have been produced.
    fn next_point(&mut self) -> PiResult<Point>;

    /// Points still available.
    fn remaining(&self) -> usize {
        self.total() - self.produced()
    }

    /// Returns `true` once all N points have been produced.
    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Drains every remaining point in production order.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PointSource::next_point`].
    fn drain(&mut self) -> PiResult<Vec<Point>> {
        let mut points = Vec::with_capacity(self.remaining());
        while !self.is_exhausted() {
            points.push(self.next_point()?);
        }
        Ok(points)
    }
}

/// Independent uniform points over a [`SampleRegion`].
///
/// Over the signed square each call draws `x = u1·s1`, `y = u2·s2` with
/// `u ∈ [0, 1)` and `s ∈ {-1, +1}`; over the unit quadrant it draws
/// `x = u1`, `y = u2`. The only state is the generator and the produced count.
///
/// # Examples
///
/// ```rust
/// use pi_engine::rng::SampleRng;
/// use pi_engine::source::{PointSource, PseudoRandomSource, SampleRegion};
///
/// let mut source = PseudoRandomSource::new(3, SampleRng::from_seed(1));
/// let points = source.drain().unwrap();
/// assert_eq!(points.len(), 3);
/// assert!(source.next_point().is_err());
///
/// let mut source = PseudoRandomSource::new(100, SampleRng::from_seed(1))
///     .with_region(SampleRegion::UnitQuadrant);
/// assert!(source.drain().unwrap().iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct PseudoRandomSource {
    rng: SampleRng,
    region: SampleRegion,
    total: usize,
    produced: usize,
}

impl PseudoRandomSource {
    /// Creates a source of `total` points drawn from `rng` over the signed square.
    pub fn new(total: usize, rng: SampleRng) -> Self {
        debug!(total, seed = ?rng.seed(), "pseudorandom source ready");
        Self {
            rng,
            region: SampleRegion::SignedSquare,
            total,
            produced: 0,
        }
    }

    /// Draws from `region` instead.
    pub fn with_region(mut self, region: SampleRegion) -> Self {
        self.region = region;
        self
    }

    /// Region the points are drawn from.
    pub fn region(&self) -> SampleRegion {
        self.region
    }

    /// Seed of the underlying generator, `None` if entropy-seeded.
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }
}

impl PointSource for PseudoRandomSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Pseudorandom
    }

    fn total(&self) -> usize {
        self.total
    }

    fn produced(&self) -> usize {
        self.produced
    }

    fn scatter_bounds(&self) -> AxisBounds {
        self.region.scatter_bounds()
    }

    fn next_point(&mut self) -> PiResult<Point> {
        if self.produced >= self.total {
            return Err(PiError::SourceExhausted {
                produced: self.produced,
            });
        }
        let point = match self.region {
            SampleRegion::SignedSquare => {
                let x = self.rng.gen_signed_unit();
                Point::new(x, self.rng.gen_signed_unit())
            }
            SampleRegion::UnitQuadrant => {
                let x = self.rng.gen_uniform();
                Point::new(x, self.rng.gen_uniform())
            }
        };
        self.produced += 1;
        Ok(point)
    }
}

/// Order in which precomputed Sobol points are handed out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SobolOrder {
    /// Last generated point first.
    #[default]
    Reverse,
    /// Generation order.
    Forward,
}

/// Precomputed 2D Sobol points behind a read-only cursor.
///
/// All N points are generated at construction. The arena is never mutated;
/// `next_point` only moves the cursor.
///
/// # Examples
///
/// ```rust
/// use pi_core::types::Point;
/// use pi_engine::source::{PointSource, QuasiRandomSource, SobolOrder};
///
/// let mut source = QuasiRandomSource::new(4, SobolOrder::Forward).unwrap();
/// assert_eq!(source.next_point().unwrap(), Point::new(0.0, 0.0));
/// assert_eq!(source.next_point().unwrap(), Point::new(0.5, 0.5));
///
/// assert!(QuasiRandomSource::new(10, SobolOrder::Reverse).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct QuasiRandomSource {
    points: Vec<Point>,
    order: SobolOrder,
    cursor: usize,
}

impl QuasiRandomSource {
    /// Generates the first `total` points of the 2D Sobol sequence.
    ///
    /// # Errors
    ///
    /// - `PiError::InvalidSobolCount` if `total` is zero or not a power of two
    /// - `PiError::SobolCapacity` if `total` exceeds [`MAX_SOBOL_POINTS`]
    pub fn new(total: usize, order: SobolOrder) -> PiResult<Self> {
        if !total.is_power_of_two() {
            return Err(PiError::InvalidSobolCount(total));
        }
        if total > MAX_SOBOL_POINTS {
            return Err(PiError::SobolCapacity {
                requested: total,
                max: MAX_SOBOL_POINTS,
            });
        }

        let mut sequence = SobolSequence::new(2)?;
        let points = (0..total)
            .map(|_| {
                let p = sequence.next_point();
                Point::new(p[0], p[1])
            })
            .collect();

        debug!(total, ?order, "quasirandom source generated");
        Ok(Self {
            points,
            order,
            cursor: 0,
        })
    }

    /// Consumption order of this source.
    pub fn order(&self) -> SobolOrder {
        self.order
    }

    /// The precomputed points in generation order.
    pub fn generated(&self) -> &[Point] {
        &self.points
    }
}

impl PointSource for QuasiRandomSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Quasirandom
    }

    fn total(&self) -> usize {
        self.points.len()
    }

    fn produced(&self) -> usize {
        self.cursor
    }

    fn next_point(&mut self) -> PiResult<Point> {
        let total = self.points.len();
        if self.cursor >= total {
            return Err(PiError::SourceExhausted {
                produced: self.cursor,
            });
        }
        let slot = match self.order {
            SobolOrder::Forward => self.cursor,
            SobolOrder::Reverse => total - 1 - self.cursor,
        };
        self.cursor += 1;
        Ok(self.points[slot])
    }
}
