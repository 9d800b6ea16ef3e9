//! Plain-text frame log.

use std::io::{self, Write};

use super::{Frame, PlotLayout, Renderer};
use crate::playback::PlaybackSummary;

/// Writes one line per source per frame.
///
/// ```text
/// [  12/1024] n=192    pseudorandom inside=151    π estimate = 3.145833   Error = 0.004241
/// ```
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn begin(&mut self, layout: &PlotLayout) -> io::Result<()> {
        writeln!(
            self.out,
            "# {} points, {} frames, reference π = {}",
            layout.n_points, layout.frame_count, layout.pi_reference
        )?;
        for panel in &layout.panels {
            let b = panel.scatter_bounds;
            writeln!(
                self.out,
                "# {}: {} x=[{}, {}] y=[{}, {}]",
                panel.kind, panel.title, b.x_min, b.x_max, b.y_min, b.y_max
            )?;
        }
        Ok(())
    }

    fn render_frame(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        for view in &frame.views {
            writeln!(
                self.out,
                "[{:>4}/{}] n={:<6} {:<12} inside={:<6} {}",
                frame.number,
                frame.total,
                frame.prefix_len,
                view.kind,
                view.prefix.inside_count(),
                view.title()
            )?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &PlaybackSummary) -> io::Result<()> {
        for outcome in &summary.outcomes {
            match (outcome.final_estimate, outcome.absolute_error) {
                (Some(estimate), Some(error)) => writeln!(
                    self.out,
                    "# final {}: n={} estimate={:.6} error={:.6}",
                    outcome.kind, outcome.n_points, estimate, error
                )?,
                _ => writeln!(self.out, "# final {}: no points", outcome.kind)?,
            }
        }
        self.out.flush()
    }
}
