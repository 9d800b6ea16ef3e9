//! Simulation configuration.
//!
//! Point count, frame schedule, seeding and the π reference are explicit
//! parameters validated once at build time, rather than module-level
//! constants.

use pi_core::{PiError, PiResult, PI_REFERENCE};

use crate::frames::FrameSampler;
use crate::rng::SampleRng;
use crate::source::{PseudoRandomSource, QuasiRandomSource, SampleRegion, SobolOrder};

/// Maximum number of points per source.
pub const MAX_POINTS: usize = 1 << 24;

/// Frame schedule as requested by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FrameSpec {
    Count(usize),
    PointsPerFrame(usize),
}

/// Validated parameters for one animation run.
///
/// Use [`SimulationConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pi_engine::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_points(1 << 14)
///     .points_per_frame(1 << 4)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_points(), 16_384);
/// assert_eq!(config.frame_count(), 1_024);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    n_points: usize,
    frame_count: usize,
    seed: Option<u64>,
    pi_reference: f64,
    sobol_order: SobolOrder,
    pseudo_region: SampleRegion,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Points per source N.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Data frames F.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Seed for the pseudorandom source, `None` for entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Reference value for error reporting.
    #[inline]
    pub fn pi_reference(&self) -> f64 {
        self.pi_reference
    }

    /// Consumption order of the quasirandom source.
    #[inline]
    pub fn sobol_order(&self) -> SobolOrder {
        self.sobol_order
    }

    /// Region the pseudorandom source draws from.
    #[inline]
    pub fn pseudo_region(&self) -> SampleRegion {
        self.pseudo_region
    }

    /// Frame sampler for this configuration.
    pub fn frame_sampler(&self) -> PiResult<FrameSampler> {
        FrameSampler::new(self.frame_count)
    }

    /// Pseudorandom source of N points.
    pub fn pseudo_source(&self) -> PseudoRandomSource {
        PseudoRandomSource::new(self.n_points, SampleRng::from_optional_seed(self.seed))
            .with_region(self.pseudo_region)
    }

    /// Quasirandom source of N points.
    ///
    /// # Errors
    ///
    /// Returns `PiError::InvalidSobolCount` if N is not a power of two.
    pub fn quasi_source(&self) -> PiResult<QuasiRandomSource> {
        QuasiRandomSource::new(self.n_points, self.sobol_order)
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_points: Option<usize>,
    frames: Option<FrameSpec>,
    seed: Option<u64>,
    pi_reference: Option<f64>,
    sobol_order: SobolOrder,
    pseudo_region: SampleRegion,
}

impl SimulationConfigBuilder {
    /// Sets the number of points per source.
    #[inline]
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Sets the number of data frames directly.
    #[inline]
    pub fn frame_count(mut self, frame_count: usize) -> Self {
        self.frames = Some(FrameSpec::Count(frame_count));
        self
    }

    /// Sets the number of points added per frame; F = N / points_per_frame.
    #[inline]
    pub fn points_per_frame(mut self, points_per_frame: usize) -> Self {
        self.frames = Some(FrameSpec::PointsPerFrame(points_per_frame));
        self
    }

    /// Seeds the pseudorandom source.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seeds the pseudorandom source if `seed` is given.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the reference value of π.
    #[inline]
    pub fn pi_reference(mut self, pi_reference: f64) -> Self {
        self.pi_reference = Some(pi_reference);
        self
    }

    /// Sets the quasirandom consumption order.
    #[inline]
    pub fn sobol_order(mut self, order: SobolOrder) -> Self {
        self.sobol_order = order;
        self
    }

    /// Sets the region the pseudorandom source draws from.
    #[inline]
    pub fn pseudo_region(mut self, region: SampleRegion) -> Self {
        self.pseudo_region = region;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PiError` if:
    /// - `n_points` is not set, zero or above [`MAX_POINTS`]
    /// - no frame schedule is set, or it yields zero frames or more frames than points
    /// - `points_per_frame` does not divide `n_points`
    /// - `pi_reference` is not finite and positive
    pub fn build(self) -> PiResult<SimulationConfig> {
        let n_points = self
            .n_points
            .ok_or_else(|| PiError::invalid_parameter("n_points", "must be specified"))?;
        if n_points == 0 || n_points > MAX_POINTS {
            return Err(PiError::invalid_parameter(
                "n_points",
                format!("{} not in [1, {}]", n_points, MAX_POINTS),
            ));
        }

        let sampler = match self.frames {
            None => {
                return Err(PiError::invalid_parameter(
                    "frame_count",
                    "frame_count or points_per_frame must be specified",
                ))
            }
            Some(FrameSpec::Count(count)) => FrameSampler::new(count)?,
            Some(FrameSpec::PointsPerFrame(ppf)) => {
                FrameSampler::from_points_per_frame(n_points, ppf)?
            }
        };
        if sampler.frame_count() > n_points {
            return Err(PiError::invalid_parameter(
                "frame_count",
                format!(
                    "{} frames exceed {} points",
                    sampler.frame_count(),
                    n_points
                ),
            ));
        }

        let pi_reference = self.pi_reference.unwrap_or(PI_REFERENCE);
        if !pi_reference.is_finite() || pi_reference <= 0.0 {
            return Err(PiError::invalid_parameter(
                "pi_reference",
                format!("{} must be finite and positive", pi_reference),
            ));
        }

        Ok(SimulationConfig {
            n_points,
            frame_count: sampler.frame_count(),
            seed: self.seed,
            pi_reference,
            sobol_order: self.sobol_order,
            pseudo_region: self.pseudo_region,
        })
    }
}
