//! 2D sample points and their circle classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sampled point in the plane.
///
/// Pseudorandom points lie in the signed unit square [-1, 1]²;
/// quasirandom points lie in [0, 1)². The circle test is the same for both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Classifies the point against the unit circle.
    ///
    /// The boundary is inclusive: `x² + y² <= 1` is [`Classification::Inside`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pi_core::types::{Classification, Point};
    ///
    /// assert_eq!(Point::new(0.0, 1.0).classify(), Classification::Inside);
    /// assert_eq!(Point::new(0.8, 0.7).classify(), Classification::Outside);
    /// ```
    #[inline]
    pub fn classify(&self) -> Classification {
        if self.norm_squared() <= 1.0 {
            Classification::Inside
        } else {
            Classification::Outside
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Binary label for a sampled point.
///
/// Renderers use [`Classification::category`] as the marker colour index:
/// 0 for inside, 1 for outside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// On or within the unit circle
    Inside,
    /// Strictly outside the unit circle
    Outside,
}

impl Classification {
    /// Returns `true` for [`Classification::Inside`].
    #[inline]
    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }

    /// Colour-map category: 0 inside, 1 outside.
    #[inline]
    pub fn category(self) -> u8 {
        match self {
            Self::Inside => 0,
            Self::Outside => 1,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inside => write!(f, "inside"),
            Self::Outside => write!(f, "outside"),
        }
    }
}
