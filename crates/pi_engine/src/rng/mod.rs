//! # Random Number Generation Infrastructure
//!
//! Point generators for the two sampling strategies:
//!
//! - [`prng`]: Pseudo-random uniform/sign draws over a seedable `StdRng`
//! - [`qmc`]: The [`LowDiscrepancySequence`] trait and an unscrambled
//!   Sobol generator with Joe-Kuo direction numbers
//!
//! ## Reproducibility
//!
//! - `SampleRng::from_seed` gives a deterministic stream; `SampleRng::from_entropy`
//!   (the default for animations) does not.
//! - `SobolSequence` is fully deterministic: the same dimension always yields
//!   the same points in the same (Gray-code) order.
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_engine::rng::{LowDiscrepancySequence, SampleRng, SobolSequence};
//!
//! let mut rng = SampleRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut sobol = SobolSequence::new(2).unwrap();
//! assert_eq!(sobol.next_point(), &[0.0, 0.0]);
//! assert_eq!(sobol.next_point(), &[0.5, 0.5]);
//! ```

mod prng;
mod qmc;

pub use prng::SampleRng;
pub use qmc::{LowDiscrepancySequence, SobolSequence, MAX_SOBOL_DIMENSION, MAX_SOBOL_POINTS};

#[cfg(test)]
mod tests;
