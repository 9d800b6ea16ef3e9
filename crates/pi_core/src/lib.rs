//! # pi_core: Foundation Types for Quadrant Monte Carlo
//!
//! ## Layer 1 (Foundation) Role
//!
//! pi_core is the bottom layer of the workspace, providing:
//! - Sample geometry: [`Point`](types::Point), [`Classification`](types::Classification)
//! - Display bounds for scatter and convergence panels (`types::bounds`)
//! - The reference value of π used for error reporting ([`PI_REFERENCE`])
//! - Error types: [`PiError`] (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pi_* crates, with minimal external dependencies:
//! - thiserror: Structured error derivation
//! - serde: Serialisation of frame data for renderers
//!
//! ## Usage Examples
//!
//! ```rust
//! use pi_core::types::{Classification, Point};
//!
//! let p = Point::new(1.0, 0.0);
//! assert_eq!(p.classify(), Classification::Inside);
//!
//! let q = Point::new(1.0, 1.0);
//! assert_eq!(q.classify(), Classification::Outside);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod types;

pub use error::{PiError, PiResult};

/// Reference value of π displayed alongside every estimate.
///
/// This is the truncated constant the convergence plots have always been
/// compared against (ten decimal places), not `std::f64::consts::PI`.
/// Error values computed against it are bit-comparable with earlier runs.
#[allow(clippy::approx_constant)]
pub const PI_REFERENCE: f64 = 3.1415926535;
