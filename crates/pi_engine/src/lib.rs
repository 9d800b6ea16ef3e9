//! # pi_engine: Quadrant Sampling and Frame Preparation (Layer 2)
//!
//! Estimates π by Monte Carlo quadrant sampling and prepares the data an
//! animation needs, frame by frame:
//!
//! 1. A [`PointSource`](source::PointSource) produces N points, either
//!    pseudorandom ([`PseudoRandomSource`](source::PseudoRandomSource)) or
//!    quasirandom ([`QuasiRandomSource`](source::QuasiRandomSource), Sobol).
//! 2. The [`estimator`] classifies every point against the unit circle and
//!    records the running estimate `4 · inside / n` in one forward pass.
//! 3. A [`FrameSampler`](frames::FrameSampler) picks evenly spaced
//!    cumulative counts; [`Playback`](playback::Playback) hands each growing
//!    prefix to a [`Renderer`](render::Renderer).
//!
//! All history is computed before the first frame and is read-only
//! afterwards. Everything runs on the calling thread.
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_engine::config::SimulationConfig;
//! use pi_engine::playback::Playback;
//! use pi_engine::render::JsonRenderer;
//! use pi_engine::source::SourceKind;
//!
//! let config = SimulationConfig::builder()
//!     .n_points(1 << 10)
//!     .points_per_frame(1 << 4)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let playback = Playback::from_config(
//!     &config,
//!     &[SourceKind::Pseudorandom, SourceKind::Quasirandom],
//! )
//! .unwrap();
//!
//! let mut renderer = JsonRenderer::new(Vec::new(), false);
//! let summary = playback.run(&mut renderer).unwrap();
//! assert_eq!(summary.frames_rendered, 64);
//! assert_eq!(summary.outcomes.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod estimator;
pub mod frames;
pub mod playback;
pub mod render;
pub mod rng;
pub mod source;

pub use error::{EngineError, EngineResult};
