//! Sample geometry and display types.
//!
//! This module provides:
//! - `point`: 2D sample points and the inclusive unit-circle test
//! - `bounds`: Axis bounds handed to renderers for panel setup
//!
//! # Re-exports
//!
//! - [`Point`], [`Classification`] from `point`
//! - [`AxisBounds`] from `bounds`

pub mod bounds;
pub mod point;

pub use bounds::AxisBounds;
pub use point::{Classification, Point};
