//! JSON-lines frame stream.

use pi_core::types::{Classification, Point};
use serde::Serialize;
use std::io::{self, Write};

use super::{Frame, PlotLayout, Renderer};
use crate::playback::PlaybackSummary;
use crate::source::SourceKind;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Record<'a> {
    Layout(&'a PlotLayout),
    Frame(FrameRecord<'a>),
    Summary(&'a PlaybackSummary),
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    number: usize,
    total: usize,
    prefix_len: usize,
    series: Vec<SeriesRecord<'a>>,
}

#[derive(Serialize)]
struct SeriesRecord<'a> {
    kind: SourceKind,
    estimate: f64,
    error: f64,
    inside: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<&'a [Point]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [Classification]>,
}

/// Emits one JSON object per line: a `layout` record, one `frame` record
/// per frame and a closing `summary` record.
///
/// With `include_points` each frame also carries the full point and label
/// prefix, which grows to N entries by the last frame.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
    include_points: bool,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, include_points: bool) -> Self {
        Self {
            out,
            include_points,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn begin(&mut self, layout: &PlotLayout) -> io::Result<()> {
        self.write_record(&Record::Layout(layout))
    }

    fn render_frame(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let series = frame
            .views
            .iter()
            .map(|view| SeriesRecord {
                kind: view.kind,
                estimate: view.estimate,
                error: view.error,
                inside: view.prefix.inside_count(),
                points: self.include_points.then_some(view.prefix.points),
                labels: self.include_points.then_some(view.prefix.labels),
            })
            .collect();

        self.write_record(&Record::Frame(FrameRecord {
            number: frame.number,
            total: frame.total,
            prefix_len: frame.prefix_len,
            series,
        }))
    }

    fn finish(&mut self, summary: &PlaybackSummary) -> io::Result<()> {
        self.write_record(&Record::Summary(summary))?;
        self.out.flush()
    }
}
