//! Distance metrics over dense `f64` points.
//!
//! Every metric checks dimensions first and fails with
//! [`Error::DimensionMismatch`] rather than comparing a prefix.
//!
//! | Metric | Formula |
//! |---|---|
//! | [`Euclidean`] | `sqrt(Σ (a_i - b_i)²)` |
//! | [`Manhattan`] | `Σ |a_i - b_i|` |
//! | [`Chebyshev`] | `max |a_i - b_i|` |
//! | [`Minkowski`] | `(Σ |a_i - b_i|^p)^(1/p)` |
//! | [`Cosine`] | `1 - (a·b) / (‖a‖ ‖b‖)` |

use super::traits::Distance;
use crate::error::{Error, Result};

#[inline]
fn check_dims(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}

#[inline]
fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[inline]
fn max_abs(v: &[f64]) -> f64 {
    v.iter().map(|x| x.abs()).fold(0.0, f64::max)
}

/// Euclidean (L2) distance between `a` and `b`.
///
/// ```
/// let d = knn_vote::euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(d, 5.0);
/// ```
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    Ok(squared_euclidean(a, b).sqrt())
}

/// Euclidean (L2) distance. The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Distance for Euclidean {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        euclidean(a, b)
    }
}

/// Manhattan (L1, taxicab) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Distance for Manhattan {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        check_dims(a, b)?;
        Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
    }
}

/// Chebyshev (L∞) distance: the largest coordinate-wise difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Distance for Chebyshev {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        check_dims(a, b)?;
        Ok(a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    }
}

/// Minkowski (Lp) distance of order `p`.
///
/// `p = 1` is Manhattan, `p = 2` is Euclidean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minkowski {
    p: f64,
}

impl Minkowski {
    /// Create a Minkowski metric of order `p`.
    ///
    /// Orders below 1 (or NaN) do not satisfy the triangle inequality and are rejected.
    pub fn new(p: f64) -> Result<Self> {
        if p.is_nan() || p < 1.0 {
            return Err(Error::InvalidParameter {
                name: "p",
                message: "must be at least 1",
            });
        }
        Ok(Self { p })
    }

    /// The order of this metric.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distance for Minkowski {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        check_dims(a, b)?;
        // Scale by the largest difference so `powf` neither underflows nor overflows.
        let m = Chebyshev.distance(a, b)?;
        if self.p.is_infinite() || m == 0.0 || m.is_infinite() {
            return Ok(m);
        }
        let sum: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| ((x - y).abs() / m).powf(self.p))
            .sum();
        Ok(m * sum.powf(self.p.recip()))
    }
}

/// Cosine distance, `1 - cosine similarity`.
///
/// Two zero vectors are at distance 0; a zero vector and a non-zero vector
/// are at distance 1. Results are clamped to `[0, 2]`.
///
/// Each vector is rescaled by its largest absolute coordinate before the dot
/// product, so finite coordinates of any magnitude stay representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cosine;

impl Distance for Cosine {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        check_dims(a, b)?;
        let scale_a = max_abs(a);
        let scale_b = max_abs(b);

        match (scale_a == 0.0, scale_b == 0.0) {
            (true, true) => Ok(0.0),
            (true, false) | (false, true) => Ok(1.0),
            (false, false) => {
                let mut dot = 0.0;
                let mut norm_a = 0.0;
                let mut norm_b = 0.0;
                for (x, y) in a.iter().zip(b.iter()) {
                    let (x, y) = (x / scale_a, y / scale_b);
                    dot += x * y;
                    norm_a += x * x;
                    norm_b += y * y;
                }
                Ok((1.0 - dot / (norm_a * norm_b).sqrt()).clamp(0.0, 2.0))
            }
        }
    }
}
