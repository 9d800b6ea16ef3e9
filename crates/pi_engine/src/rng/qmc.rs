//! Quasi-Monte Carlo sequences.
//!
//! This module defines the interface for low-discrepancy sequences and an
//! unscrambled Sobol generator. Points are produced in Gray-code order
//! (Antonov-Saleev), so the first point is the origin and every prefix of
//! length 2^m is a (0, m, d)-net in base 2 for the first dimensions.
//!
//! ## Direction Numbers
//!
//! Dimension 1 is the van der Corput sequence in base 2. Dimensions 2 and up
//! use the Joe-Kuo D6 primitive polynomials and initial direction numbers
//! (`new-joe-kuo-6.21201`), truncated to [`MAX_SOBOL_DIMENSION`].

use pi_core::{PiError, PiResult};

/// Number of bits in each direction number.
const BITS: usize = 32;

/// Scale from a 32-bit integer state to [0, 1).
const SCALE: f64 = 1.0 / 4_294_967_296.0;

/// Highest dimension with embedded direction numbers.
pub const MAX_SOBOL_DIMENSION: usize = 8;

/// Largest point count accepted by sources built on [`SobolSequence`].
///
/// The generator itself indexes up to 2^32 points; this cap keeps the
/// value representable as `usize` on 32-bit targets.
pub const MAX_SOBOL_POINTS: usize = 1 << 31;

/// Primitive polynomial entry from the Joe-Kuo table.
struct Primitive {
    /// Polynomial degree `s`.
    degree: usize,
    /// Interior coefficients `a`, most significant first.
    coefficients: u32,
    /// Initial direction integers `m_1..m_s`.
    initial: &'static [u32],
}

/// Joe-Kuo D6 parameters for dimensions 2 through [`MAX_SOBOL_DIMENSION`].
const JOE_KUO: [Primitive; MAX_SOBOL_DIMENSION - 1] = [
    Primitive {
        degree: 1,
        coefficients: 0,
        initial: &[1],
    },
    Primitive {
        degree: 2,
        coefficients: 1,
        initial: &[1, 3],
    },
    Primitive {
        degree: 3,
        coefficients: 1,
        initial: &[1, 3, 1],
    },
    Primitive {
        degree: 3,
        coefficients: 2,
        initial: &[1, 1, 1],
    },
    Primitive {
        degree: 4,
        coefficients: 1,
        initial: &[1, 1, 3, 3],
    },
    Primitive {
        degree: 4,
        coefficients: 4,
        initial: &[1, 3, 5, 13],
    },
    Primitive {
        degree: 5,
        coefficients: 2,
        initial: &[1, 1, 5, 5, 17],
    },
];

/// Trait for low-discrepancy sequences used in quasi-Monte Carlo methods.
///
/// Low-discrepancy sequences cover the unit hypercube more evenly than
/// pseudo-random draws, so quadrature estimates converge faster.
pub trait LowDiscrepancySequence {
    /// Returns the dimensionality of the sequence.
    fn dimension(&self) -> usize;

    /// Returns the current point and advances the sequence.
    ///
    /// The slice has `dimension()` values, each in [0, 1).
    fn next_point(&mut self) -> &[f64];

    /// Resets the sequence to its initial state.
    ///
    /// After calling this method, the sequence produces the same points
    /// as a newly initialised instance.
    fn reset(&mut self);

    /// Skips ahead by `n` points in the sequence.
    fn skip(&mut self, n: usize);
}

/// Unscrambled Sobol sequence generator.
///
/// # Examples
///
/// ```rust
/// use pi_engine::rng::{LowDiscrepancySequence, SobolSequence};
///
/// let mut sobol = SobolSequence::new(2).unwrap();
/// let first_four: Vec<Vec<f64>> = (0..4).map(|_| sobol.next_point().to_vec()).collect();
///
/// assert_eq!(first_four[0], vec![0.0, 0.0]);
/// assert_eq!(first_four[1], vec![0.5, 0.5]);
/// assert_eq!(first_four[2], vec![0.75, 0.25]);
/// assert_eq!(first_four[3], vec![0.25, 0.75]);
/// ```
#[derive(Clone, Debug)]
pub struct SobolSequence {
    /// Direction numbers, one row of `BITS` entries per dimension.
    directions: Vec<[u32; BITS]>,
    /// Integer state of the next point to emit.
    state: Vec<u32>,
    /// Scaled copy of the last emitted point.
    buffer: Vec<f64>,
    /// Index of the next point to emit.
    index: u64,
}

impl SobolSequence {
    /// Creates a Sobol generator of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns `PiError::InvalidDimension` if `dimension` is 0 or greater
    /// than [`MAX_SOBOL_DIMENSION`].
    pub fn new(dimension: usize) -> PiResult<Self> {
        if dimension == 0 || dimension > MAX_SOBOL_DIMENSION {
            return Err(PiError::InvalidDimension {
                dimension,
                max: MAX_SOBOL_DIMENSION,
            });
        }

        Ok(Self {
            directions: (0..dimension).map(direction_numbers).collect(),
            state: vec![0; dimension],
            buffer: vec![0.0; dimension],
            index: 0,
        })
    }

    /// Index of the next point to be emitted.
    #[inline]
    pub fn position(&self) -> u64 {
        self.index
    }

    /// Moves the integer state one point forward in Gray-code order.
    fn advance(&mut self) {
        // Column of the rightmost zero bit of the current index.
        let column = self.index.trailing_ones() as usize;
        if column >= BITS {
            // Index space exhausted; wrap to the start like a fresh generator.
            self.state.iter_mut().for_each(|x| *x = 0);
            self.index = 0;
            return;
        }
        for (x, v) in self.state.iter_mut().zip(&self.directions) {
            *x ^= v[column];
        }
        self.index += 1;
    }
}

impl LowDiscrepancySequence for SobolSequence {
    fn dimension(&self) -> usize {
        self.state.len()
    }

    fn next_point(&mut self) -> &[f64] {
        for (out, &x) in self.buffer.iter_mut().zip(&self.state) {
            *out = f64::from(x) * SCALE;
        }
        self.advance();
        &self.buffer
    }

    fn reset(&mut self) {
        self.state.iter_mut().for_each(|x| *x = 0);
        self.buffer.iter_mut().for_each(|x| *x = 0.0);
        self.index = 0;
    }

    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

/// Builds the 32 direction numbers `v_k = m_k / 2^k` (as left-aligned
/// integers) for the zero-based dimension `dim`.
fn direction_numbers(dim: usize) -> [u32; BITS] {
    let mut v = [0u32; BITS];

    if dim == 0 {
        for (k, slot) in v.iter_mut().enumerate() {
            *slot = 1 << (BITS - 1 - k);
        }
        return v;
    }

    let primitive = &JOE_KUO[dim - 1];
    let (s, a, m) = (primitive.degree, primitive.coefficients, primitive.initial);

    for k in 0..BITS {
        if k < s {
            v[k] = m[k] << (BITS - 1 - k);
        } else {
            let mut value = v[k - s] ^ (v[k - s] >> s);
            for j in 1..s {
                if (a >> (s - 1 - j)) & 1 == 1 {
                    value ^= v[k - j];
                }
            }
            v[k] = value;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_dimension_is_van_der_corput() {
        let mut sobol = SobolSequence::new(1).unwrap();
        // Gray-code order of the base-2 radical inverse.
        let expected = [0.0, 0.5, 0.75, 0.25, 0.375, 0.875, 0.625, 0.125];
        for &e in &expected {
            assert_eq!(sobol.next_point()[0], e);
        }
    }

    #[test]
    fn test_second_dimension_first_eight() {
        let mut sobol = SobolSequence::new(2).unwrap();
        let expected = [
            [0.0, 0.0],
            [0.5, 0.5],
            [0.75, 0.25],
            [0.25, 0.75],
            [0.375, 0.375],
            [0.875, 0.875],
            [0.625, 0.125],
            [0.125, 0.625],
        ];
        for e in &expected {
            assert_eq!(sobol.next_point(), e);
        }
    }

    #[test]
    fn test_direction_numbers_leading_bit() {
        for dim in 0..MAX_SOBOL_DIMENSION {
            let v = direction_numbers(dim);
            // m_1 is always 1, so v_1 is exactly one half.
            assert_eq!(v[0], 1 << 31, "dimension {}", dim);
        }
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            SobolSequence::new(0),
            Err(PiError::InvalidDimension { dimension: 0, .. })
        ));
        assert!(matches!(
            SobolSequence::new(MAX_SOBOL_DIMENSION + 1),
            Err(PiError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_skip_matches_next_point() {
        let mut walked = SobolSequence::new(3).unwrap();
        for _ in 0..37 {
            walked.next_point();
        }
        let mut skipped = SobolSequence::new(3).unwrap();
        skipped.skip(37);

        assert_eq!(walked.position(), skipped.position());
        assert_eq!(walked.next_point(), skipped.next_point());
    }

    #[test]
    fn test_reset() {
        let mut sobol = SobolSequence::new(2).unwrap();
        let first: Vec<f64> = sobol.next_point().to_vec();
        sobol.skip(100);
        sobol.reset();
        assert_eq!(sobol.position(), 0);
        assert_eq!(sobol.next_point(), first.as_slice());
    }

    #[test]
    fn test_power_of_two_prefix_is_stratified() {
        // Each of the 16 columns of width 1/16 holds exactly one point.
        let mut sobol = SobolSequence::new(2).unwrap();
        let mut columns = [0usize; 16];
        let mut rows = [0usize; 16];
        for _ in 0..16 {
            let p = sobol.next_point();
            columns[(p[0] * 16.0) as usize] += 1;
            rows[(p[1] * 16.0) as usize] += 1;
        }
        assert!(columns.iter().all(|&c| c == 1));
        assert!(rows.iter().all(|&c| c == 1));
    }
}
