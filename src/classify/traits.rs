use crate::error::Result;

/// A training example: anything that can report a label and a position.
pub trait Labeled {
    /// Class label of this example.
    fn label(&self) -> &str;

    /// Coordinates of this example.
    fn position(&self) -> &[f64];
}

/// A dissimilarity measure between two points of equal dimension.
///
/// Implementations must return [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
/// when `a.len() != b.len()`, and otherwise a non-negative distance.
///
/// Any `Fn(&[f64], &[f64]) -> Result<f64>` is a `Distance`, so plain functions
/// such as [`euclidean`](super::euclidean) can be passed directly.
pub trait Distance {
    /// Compute the distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64>;
}

impl<F> Distance for F
where
    F: Fn(&[f64], &[f64]) -> Result<f64>,
{
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        self(a, b)
    }
}

/// A labeled point owning its label and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    /// Class label.
    pub label: String,
    /// Coordinates.
    pub position: Vec<f64>,
}

impl Example {
    /// Create a new example.
    pub fn new(label: impl Into<String>, position: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

impl Labeled for Example {
    fn label(&self) -> &str {
        &self.label
    }

    fn position(&self) -> &[f64] {
        &self.position
    }
}

impl Labeled for (String, Vec<f64>) {
    fn label(&self) -> &str {
        &self.0
    }

    fn position(&self) -> &[f64] {
        &self.1
    }
}

impl Labeled for (&str, Vec<f64>) {
    fn label(&self) -> &str {
        self.0
    }

    fn position(&self) -> &[f64] {
        &self.1
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn position(&self) -> &[f64] {
        (**self).position()
    }
}

impl<T: Labeled + ?Sized> Labeled for Box<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn position(&self) -> &[f64] {
        (**self).position()
    }
}
