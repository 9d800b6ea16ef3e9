//! Axis bounds for scatter and convergence panels.

use serde::{Deserialize, Serialize};

use crate::error::{PiError, PiResult};

/// Lower edge of the estimate axis.
pub const ESTIMATE_Y_MIN: f64 = 3.08;

/// Upper edge of the estimate axis.
pub const ESTIMATE_Y_MAX: f64 = 3.20;

/// Rectangular display window `[x_min, x_max] × [y_min, y_max]`.
///
/// # Examples
///
/// ```
/// use pi_core::types::AxisBounds;
///
/// let b = AxisBounds::signed_unit();
/// assert_eq!(b.x_min, -1.0);
/// assert_eq!(b.y_max, 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Left edge
    pub x_min: f64,
    /// Right edge
    pub x_max: f64,
    /// Bottom edge
    pub y_min: f64,
    /// Top edge
    pub y_max: f64,
}

impl AxisBounds {
    /// Creates bounds, rejecting empty or non-finite ranges.
    ///
    /// # Errors
    ///
    /// Returns `PiError::InvalidParameter` if either range is empty,
    /// inverted or non-finite.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PiResult<Self> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Scatter window for the signed pseudorandom square, [-1, 1]².
    pub const fn signed_unit() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }

    /// Scatter window for the quasirandom quadrant.
    ///
    /// The lower edge sits just above zero so the first Sobol point at the
    /// origin does not land on the axis lines.
    pub const fn unit_quadrant() -> Self {
        Self {
            x_min: 0.001,
            x_max: 1.0,
            y_min: 0.001,
            y_max: 1.0,
        }
    }

    /// Convergence-curve window for `n_points` samples.
    pub fn estimate_axis(n_points: usize) -> Self {
        Self {
            x_min: 0.0,
            x_max: n_points as f64,
            y_min: ESTIMATE_Y_MIN,
            y_max: ESTIMATE_Y_MAX,
        }
    }

    /// Checks that both ranges are finite and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `PiError::InvalidParameter` naming the offending axis.
    pub fn validate(&self) -> PiResult<()> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(PiError::invalid_parameter(
                "axis_bounds",
                "bounds must be finite",
            ));
        }
        if self.x_min >= self.x_max {
            return Err(PiError::invalid_parameter(
                "axis_bounds",
                format!("x range [{}, {}] is empty", self.x_min, self.x_max),
            ));
        }
        if self.y_min >= self.y_max {
            return Err(PiError::invalid_parameter(
                "axis_bounds",
                format!("y range [{}, {}] is empty", self.y_min, self.y_max),
            ));
        }
        Ok(())
    }

    /// Returns `true` if `(x, y)` lies inside the closed window.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
