//! Animation run command
//!
//! Builds the requested sources, prepares every frame and streams them to a
//! text or JSON renderer on stdout or a file.

use pi_engine::playback::{Playback, PlaybackSummary};
use pi_engine::render::{JsonRenderer, Renderer, TextRenderer};
use pi_core::PiResult;
use pi_engine::config::SimulationConfig;
use pi_engine::source::{SampleRegion, SourceKind};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::{AnimationConfig, RunConfig, RunOverrides};
use crate::Result;

/// Which sources to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pseudorandom points only
    Pseudo,
    /// Sobol points only
    Quasi,
    /// Both sources in lock-step
    Compare,
}

impl Mode {
    /// Sources in panel order.
    pub fn kinds(self) -> &'static [SourceKind] {
        match self {
            Mode::Pseudo => &[SourceKind::Pseudorandom],
            Mode::Quasi => &[SourceKind::Quasirandom],
            Mode::Compare => &[SourceKind::Pseudorandom, SourceKind::Quasirandom],
        }
    }

    /// Region of the pseudorandom source: the signed square on its own,
    /// the unit quadrant when shown next to the Sobol panel.
    pub fn pseudo_region(self) -> SampleRegion {
        match self {
            Mode::Compare => SampleRegion::UnitQuadrant,
            Mode::Pseudo | Mode::Quasi => SampleRegion::SignedSquare,
        }
    }

    /// Engine configuration for this mode.
    pub fn simulation(
        self,
        config: &AnimationConfig,
        overrides: &RunOverrides,
    ) -> PiResult<SimulationConfig> {
        config.simulation(self.run_config(config), self.pseudo_region(), overrides)
    }

    /// Section of the configuration file for this mode.
    pub fn run_config(self, config: &AnimationConfig) -> RunConfig {
        match self {
            Mode::Pseudo => config.pseudo,
            Mode::Quasi => config.quasi,
            Mode::Compare => config.compare,
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable frame log
    Text,
    /// One JSON object per line
    Json,
}

/// Options from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Values overriding the configuration file
    pub overrides: RunOverrides,
    /// Output encoding, text when unset
    pub format: Option<OutputFormat>,
    /// Include point coordinates in JSON frames
    pub include_points: bool,
    /// Output file, stdout when unset
    pub output: Option<PathBuf>,
}

/// Run the animation command
pub fn run(config: &AnimationConfig, mode: Mode, options: &RunOptions) -> Result<()> {
    let simulation = mode.simulation(config, &options.overrides)?;

    info!("Preparing {:?} animation...", mode);
    info!("  Points per source: {}", simulation.n_points());
    info!("  Frames: {}", simulation.frame_count());
    if let Some(seed) = simulation.seed() {
        info!("  Seed: {}", seed);
    }

    let playback = Playback::from_config(&simulation, mode.kinds())?;
    let format = options.format.unwrap_or(OutputFormat::Text);

    let summary = match &options.output {
        Some(path) => {
            info!("  Output: {}", path.display());
            let out = BufWriter::new(File::create(path)?);
            render(&playback, format, options.include_points, out)?
        }
        None => {
            let stdout = io::stdout();
            render(&playback, format, options.include_points, stdout.lock())?
        }
    };

    info!("Rendered {} frames", summary.frames_rendered);
    Ok(())
}

/// Plays `playback` into `out` with the renderer for `format`.
pub fn render<W: Write>(
    playback: &Playback,
    format: OutputFormat,
    include_points: bool,
    out: W,
) -> Result<PlaybackSummary> {
    match format {
        OutputFormat::Text => {
            let mut renderer = TextRenderer::new(out);
            let summary = play(playback, &mut renderer)?;
            renderer.into_inner().flush()?;
            Ok(summary)
        }
        OutputFormat::Json => {
            let mut renderer = JsonRenderer::new(out, include_points);
            let summary = play(playback, &mut renderer)?;
            renderer.into_inner().flush()?;
            Ok(summary)
        }
    }
}

fn play<R: Renderer>(playback: &Playback, renderer: &mut R) -> Result<PlaybackSummary> {
    Ok(playback.run(renderer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_core::types::AxisBounds;
    use pi_engine::source::SobolOrder;

    fn small_options(format: OutputFormat, output: Option<PathBuf>) -> RunOptions {
        RunOptions {
            overrides: RunOverrides {
                n_points: Some(64),
                points_per_frame: Some(16),
                seed: Some(3),
                sobol_order: Some(SobolOrder::Reverse),
            },
            format: Some(format),
            include_points: false,
            output,
        }
    }

    #[test]
    fn test_mode_kinds() {
        assert_eq!(Mode::Pseudo.kinds(), &[SourceKind::Pseudorandom]);
        assert_eq!(Mode::Quasi.kinds(), &[SourceKind::Quasirandom]);
        assert_eq!(Mode::Compare.kinds().len(), 2);
    }

    #[test]
    fn test_compare_samples_unit_quadrant() {
        let config = AnimationConfig {
            seed: Some(5),
            ..AnimationConfig::default()
        };
        let simulation = Mode::Compare
            .simulation(&config, &RunOverrides::default())
            .unwrap();
        let playback = Playback::from_config(&simulation, Mode::Compare.kinds()).unwrap();

        let layout = playback.layout().unwrap();
        for panel in &layout.panels {
            assert_eq!(panel.scatter_bounds, AxisBounds::unit_quadrant());
        }
        let pseudo = playback.series()[0].store();
        assert_eq!(pseudo.len(), 16_384);
        assert!(pseudo.points().iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
    }

    #[test]
    fn test_pseudo_mode_keeps_signed_square() {
        let simulation = Mode::Pseudo
            .simulation(&AnimationConfig::default(), &RunOverrides::default())
            .unwrap();
        assert_eq!(simulation.pseudo_region(), SampleRegion::SignedSquare);
    }

    #[test]
    fn test_render_text_to_buffer() {
        let config = AnimationConfig::default();
        let options = small_options(OutputFormat::Text, None);
        let simulation = Mode::Compare
            .simulation(&config, &options.overrides)
            .unwrap();
        let playback = Playback::from_config(&simulation, Mode::Compare.kinds()).unwrap();

        let mut out = Vec::new();
        let summary = render(&playback, OutputFormat::Text, false, &mut out).unwrap();
        assert_eq!(summary.frames_rendered, 4);
        assert_eq!(summary.outcomes.len(), 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("π estimate"));
    }

    #[test]
    fn test_run_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.jsonl");
        let config = AnimationConfig::default();

        run(
            &config,
            Mode::Quasi,
            &small_options(OutputFormat::Json, Some(path.clone())),
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // layout + 4 frames + summary
        assert_eq!(content.lines().count(), 6);
    }

    #[test]
    fn test_run_rejects_non_power_of_two_quasi() {
        let mut options = small_options(OutputFormat::Text, None);
        options.overrides.n_points = Some(60);
        options.overrides.points_per_frame = Some(15);

        let result = run(&AnimationConfig::default(), Mode::Quasi, &options);
        assert!(matches!(result, Err(crate::CliError::Pi(_))));
    }
}
