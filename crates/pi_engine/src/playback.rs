//! Frame playback.
//!
//! A [`Playback`] owns one or more frozen [`Series`] of equal length and a
//! [`FrameSampler`]. Running it hands the renderer the layout, then every
//! data frame in order, then a summary. With two series (pseudorandom and
//! quasirandom) the frames advance in lock-step, which is the side-by-side
//! comparison run.
//!
//! ```text
//! PointSource ──► Estimator ──► FrameStore ──┐
//!                                            ├──► Playback ──► Renderer
//!                               FrameSampler ┘
//! ```

use pi_core::types::AxisBounds;
use pi_core::{PiError, PiResult};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::EngineResult;
use crate::frames::{FrameSampler, FrameStore};
use crate::render::{Frame, FrameView, PanelLayout, PlotLayout, Renderer};
use crate::source::{PointSource, SourceKind};

/// Frozen history of one source plus its panel setup.
#[derive(Clone, Debug)]
pub struct Series {
    kind: SourceKind,
    store: FrameStore,
    scatter_bounds: AxisBounds,
}

impl Series {
    /// Wraps a store, using the source's default scatter window.
    pub fn new(kind: SourceKind, store: FrameStore) -> Self {
        Self {
            kind,
            store,
            scatter_bounds: kind.scatter_bounds(),
        }
    }

    /// Drains `source` and freezes its history, using the source's scatter window.
    ///
    /// # Errors
    ///
    /// Propagates errors from the source.
    pub fn from_source<S: PointSource>(source: &mut S) -> PiResult<Self> {
        let kind = source.kind();
        let bounds = source.scatter_bounds();
        let store = FrameStore::from_source(source)?;
        Ok(Self::new(kind, store).with_scatter_bounds(bounds))
    }

    /// Overrides the scatter window.
    pub fn with_scatter_bounds(mut self, bounds: AxisBounds) -> Self {
        self.scatter_bounds = bounds;
        self
    }

    /// Source of this series.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The frozen history.
    pub fn store(&self) -> &FrameStore {
        &self.store
    }
}

/// End-of-run figures for one series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesOutcome {
    /// Source of the series
    pub kind: SourceKind,
    /// Points in the series
    pub n_points: usize,
    /// Points classified inside
    pub inside: usize,
    /// Estimate after all points
    pub final_estimate: Option<f64>,
    /// `|π_ref − final_estimate|`
    pub absolute_error: Option<f64>,
}

/// Result of a playback run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaybackSummary {
    /// Data frames handed to the renderer
    pub frames_rendered: usize,
    /// Reference value errors were measured against
    pub pi_reference: f64,
    /// One outcome per series, in playback order
    pub outcomes: Vec<SeriesOutcome>,
}

/// Ordered, forward-only frame playback over frozen histories.
///
/// # Examples
///
/// ```rust
/// use pi_engine::config::SimulationConfig;
/// use pi_engine::playback::Playback;
/// use pi_engine::render::TextRenderer;
/// use pi_engine::source::SourceKind;
///
/// let config = SimulationConfig::builder()
///     .n_points(64)
///     .points_per_frame(16)
///     .build()
///     .unwrap();
/// let playback = Playback::from_config(&config, &[SourceKind::Quasirandom]).unwrap();
///
/// let mut renderer = TextRenderer::new(Vec::new());
/// let summary = playback.run(&mut renderer).unwrap();
/// assert_eq!(summary.frames_rendered, 4);
/// ```
#[derive(Clone, Debug)]
pub struct Playback {
    sampler: FrameSampler,
    pi_reference: f64,
    series: Vec<Series>,
}

impl Playback {
    /// Creates an empty playback.
    pub fn new(sampler: FrameSampler, pi_reference: f64) -> Self {
        Self {
            sampler,
            pi_reference,
            series: Vec::new(),
        }
    }

    /// Generates and freezes one series per entry of `kinds`.
    ///
    /// # Errors
    ///
    /// Returns `PiError` if a source cannot be built (for example a
    /// quasirandom source with N not a power of two).
    pub fn from_config(config: &SimulationConfig, kinds: &[SourceKind]) -> PiResult<Self> {
        let mut playback = Self::new(config.frame_sampler()?, config.pi_reference());
        for &kind in kinds {
            let series = match kind {
                SourceKind::Pseudorandom => Series::from_source(&mut config.pseudo_source())?,
                SourceKind::Quasirandom => Series::from_source(&mut config.quasi_source()?)?,
            };
            playback.push(series);
        }
        Ok(playback)
    }

    /// Appends a series; it is drawn after the ones already added.
    pub fn push(&mut self, series: Series) {
        debug!(kind = %series.kind, n = series.store.len(), "series added");
        self.series.push(series);
    }

    /// Builder-style [`Playback::push`].
    pub fn with_series(mut self, series: Series) -> Self {
        self.push(series);
        self
    }

    /// Series in playback order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Shared point count N of all series.
    ///
    /// # Errors
    ///
    /// Returns `PiError::InvalidParameter` if there are no series or their
    /// lengths differ.
    pub fn n_points(&self) -> PiResult<usize> {
        let first = self
            .series
            .first()
            .ok_or_else(|| PiError::invalid_parameter("series", "at least one series required"))?;
        let n = first.store.len();
        if let Some(other) = self.series.iter().find(|s| s.store.len() != n) {
            return Err(PiError::invalid_parameter(
                "series",
                format!(
                    "{} has {} points but {} has {}",
                    other.kind,
                    other.store.len(),
                    first.kind,
                    n
                ),
            ));
        }
        Ok(n)
    }

    /// Cumulative counts at which data frames are drawn.
    ///
    /// # Errors
    ///
    /// See [`Playback::n_points`].
    pub fn schedule(&self) -> PiResult<Vec<usize>> {
        Ok(self.sampler.data_indices(self.n_points()?))
    }

    /// Axis setup for the renderer.
    ///
    /// # Errors
    ///
    /// See [`Playback::n_points`].
    pub fn layout(&self) -> PiResult<PlotLayout> {
        let n_points = self.n_points()?;
        Ok(PlotLayout {
            n_points,
            frame_count: self.sampler.data_indices(n_points).len(),
            pi_reference: self.pi_reference,
            estimate_bounds: AxisBounds::estimate_axis(n_points),
            panels: self
                .series
                .iter()
                .map(|s| PanelLayout {
                    kind: s.kind,
                    title: s.kind.title(),
                    scatter_bounds: s.scatter_bounds,
                })
                .collect(),
        })
    }

    /// Data frame for prefix length `k`, or `None` if `k` is out of range.
    pub fn frame(&self, number: usize, total: usize, k: usize) -> Option<Frame<'_>> {
        let views = self
            .series
            .iter()
            .map(|s| {
                s.store
                    .prefix(k)
                    .map(|prefix| FrameView::new(s.kind, prefix, self.pi_reference))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Frame {
            number,
            total,
            prefix_len: k,
            views,
        })
    }

    /// Plays every frame into `renderer`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Pi` if the series are inconsistent and
    /// `EngineError::Render` if the renderer fails.
    pub fn run<R: Renderer>(&self, renderer: &mut R) -> EngineResult<PlaybackSummary> {
        let layout = self.layout()?;
        let schedule = self.sampler.data_indices(layout.n_points);
        let total = schedule.len();

        renderer.begin(&layout)?;
        let mut rendered = 0;
        for (i, &k) in schedule.iter().enumerate() {
            if let Some(frame) = self.frame(i + 1, total, k) {
                debug!(frame = frame.number, k, "rendering frame");
                renderer.render_frame(&frame)?;
                rendered += 1;
            }
        }

        let summary = self.summary(rendered);
        for outcome in &summary.outcomes {
            info!(
                kind = %outcome.kind,
                n = outcome.n_points,
                estimate = ?outcome.final_estimate,
                error = ?outcome.absolute_error,
                "playback finished"
            );
        }
        renderer.finish(&summary)?;
        Ok(summary)
    }

    fn summary(&self, frames_rendered: usize) -> PlaybackSummary {
        let outcomes = self
            .series
            .iter()
            .map(|s| {
                let history = s.store.history();
                let final_estimate = history.final_estimate();
                SeriesOutcome {
                    kind: s.kind,
                    n_points: s.store.len(),
                    inside: history.inside_count(history.len()),
                    final_estimate,
                    absolute_error: final_estimate.map(|e| (self.pi_reference - e).abs()),
                }
            })
            .collect();

        PlaybackSummary {
            frames_rendered,
            pi_reference: self.pi_reference,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SampleRng;
    use crate::source::{PseudoRandomSource, QuasiRandomSource, SobolOrder};
    use pi_core::types::Point;
    use pi_core::PI_REFERENCE;

    fn quasi_series(n: usize) -> Series {
        Series::from_source(&mut QuasiRandomSource::new(n, SobolOrder::Reverse).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_playback_rejected() {
        let playback = Playback::new(FrameSampler::new(4).unwrap(), PI_REFERENCE);
        assert!(matches!(
            playback.n_points(),
            Err(PiError::InvalidParameter { name: "series", .. })
        ));
    }

    #[test]
    fn test_mismatched_series_rejected() {
        let playback = Playback::new(FrameSampler::new(4).unwrap(), PI_REFERENCE)
            .with_series(quasi_series(16))
            .with_series(quasi_series(32));
        assert!(playback.layout().is_err());
    }

    #[test]
    fn test_layout_panels_follow_series_order() {
        let pseudo = Series::from_source(&mut PseudoRandomSource::new(
            16,
            SampleRng::from_seed(1),
        ))
        .unwrap();
        let playback = Playback::new(FrameSampler::new(4).unwrap(), PI_REFERENCE)
            .with_series(pseudo)
            .with_series(quasi_series(16));

        let layout = playback.layout().unwrap();
        assert_eq!(layout.n_points, 16);
        assert_eq!(layout.frame_count, 4);
        assert_eq!(layout.panels.len(), 2);
        assert_eq!(layout.panels[0].kind, SourceKind::Pseudorandom);
        assert_eq!(layout.panels[1].scatter_bounds, AxisBounds::unit_quadrant());
        assert_eq!(layout.estimate_bounds, AxisBounds::estimate_axis(16));
    }

    #[test]
    fn test_frame_views_read_prefix() {
        let store = FrameStore::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.5, 0.0),
            Point::new(2.0, 2.0),
        ]);
        let playback = Playback::new(FrameSampler::new(2).unwrap(), 3.0)
            .with_series(Series::new(SourceKind::Pseudorandom, store));

        let frame = playback.frame(1, 2, 2).unwrap();
        assert_eq!(frame.prefix_len, 2);
        assert_eq!(frame.views[0].estimate, 2.0);
        assert_eq!(frame.views[0].error, 1.0);
        assert!(playback.frame(1, 2, 0).is_none());
        assert!(playback.frame(1, 2, 5).is_none());
    }

    #[test]
    fn test_with_scatter_bounds() {
        let bounds = AxisBounds::new(0.0, 2.0, 0.0, 2.0).unwrap();
        let series = quasi_series(4).with_scatter_bounds(bounds);
        let playback =
            Playback::new(FrameSampler::new(1).unwrap(), PI_REFERENCE).with_series(series);
        assert_eq!(playback.layout().unwrap().panels[0].scatter_bounds, bounds);
    }

    #[test]
    fn test_summary_uses_reference() {
        let config = SimulationConfig::builder()
            .n_points(1024)
            .points_per_frame(64)
            .pi_reference(std::f64::consts::PI)
            .build()
            .unwrap();
        let playback = Playback::from_config(&config, &[SourceKind::Quasirandom]).unwrap();
        let summary = playback.summary(0);

        let outcome = &summary.outcomes[0];
        let estimate = outcome.final_estimate.unwrap();
        assert_eq!(
            outcome.absolute_error,
            Some((std::f64::consts::PI - estimate).abs())
        );
        assert_eq!(outcome.n_points, 1024);
    }
}
