//! Renderer boundary.
//!
//! Plot drawing lives outside this crate. A [`Renderer`] receives one
//! [`PlotLayout`] up front (the `k_0 = 0` axis-setup frame), then every data
//! [`Frame`] in increasing order, then the [`PlaybackSummary`]. Nothing flows
//! back into the engine.
//!
//! Two renderers ship with the crate:
//! - [`TextRenderer`]: human-readable frame log
//! - [`JsonRenderer`]: one JSON object per line, for external plotting tools

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use pi_core::types::AxisBounds;
use serde::Serialize;
use std::io;

use crate::frames::Prefix;
use crate::playback::PlaybackSummary;
use crate::source::SourceKind;

/// Static setup for one scatter panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelLayout {
    /// Source shown in the panel
    pub kind: SourceKind,
    /// Panel title
    pub title: &'static str,
    /// Scatter window
    pub scatter_bounds: AxisBounds,
}

/// Axis setup sent before the first data frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotLayout {
    /// Total points N per source
    pub n_points: usize,
    /// Data frames that will follow
    pub frame_count: usize,
    /// Value drawn as the horizontal reference line
    pub pi_reference: f64,
    /// Convergence-curve window
    pub estimate_bounds: AxisBounds,
    /// One panel per source, in playback order
    pub panels: Vec<PanelLayout>,
}

/// One source's contribution to a frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameView<'a> {
    /// Source of the data
    pub kind: SourceKind,
    /// Points, labels and estimates up to the frame's prefix length
    pub prefix: Prefix<'a>,
    /// `estimates[k - 1]`
    pub estimate: f64,
    /// `|π_ref − estimate|`
    pub error: f64,
}

impl<'a> FrameView<'a> {
    /// Title line shown above the convergence curve.
    ///
    /// ```rust
    /// use pi_core::types::Point;
    /// use pi_engine::frames::FrameStore;
    /// use pi_engine::render::FrameView;
    /// use pi_engine::source::SourceKind;
    ///
    /// let store = FrameStore::from_points(vec![Point::new(0.0, 0.0)]);
    /// let view = FrameView::new(SourceKind::Pseudorandom, store.prefix(1).unwrap(), 3.0);
    /// assert_eq!(view.title(), "π estimate = 4.000000   Error = 1.000000");
    /// ```
    pub fn title(&self) -> String {
        format!(
            "π estimate = {:.6}   Error = {:.6}",
            self.estimate, self.error
        )
    }

    /// Builds a view of `prefix`, measuring error against `pi_reference`.
    pub fn new(kind: SourceKind, prefix: Prefix<'a>, pi_reference: f64) -> Self {
        let estimate = prefix.estimate();
        Self {
            kind,
            prefix,
            estimate,
            error: (pi_reference - estimate).abs(),
        }
    }
}

/// A data frame: the same prefix length across every source.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// 1-based frame number
    pub number: usize,
    /// Data frames in this playback
    pub total: usize,
    /// Cumulative point count k
    pub prefix_len: usize,
    /// One view per source, in playback order
    pub views: Vec<FrameView<'a>>,
}

/// Consumer of prepared frame data.
///
/// Calls arrive strictly in order: `begin`, `render_frame` for frames
/// 1..=F, `finish`.
pub trait Renderer {
    /// Sets up axes before any data frame.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the output.
    fn begin(&mut self, layout: &PlotLayout) -> io::Result<()>;

    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the output.
    fn render_frame(&mut self, frame: &Frame<'_>) -> io::Result<()>;

    /// Called once after the final frame.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the output.
    fn finish(&mut self, _summary: &PlaybackSummary) -> io::Result<()> {
        Ok(())
    }
}
