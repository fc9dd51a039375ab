//! Exhaustive k-nearest-neighbors classification.
//!
//! `knn-vote` is a small library for classifying dense `f64` vectors by the labels
//! of their nearest training examples.
//!
//! The primary public API is under [`classify`], which provides:
//! - [`Knn`], a classifier that scans every stored example per query
//! - pluggable distance metrics (Euclidean by default)
//! - a plurality vote that returns every tied winner in a stable order

#![forbid(unsafe_code)]

pub mod classify;
pub mod error;

pub use classify::{
    euclidean, plurality, Chebyshev, Cosine, Distance, Euclidean, Example, Knn, Labeled,
    Manhattan, Minkowski, Neighbor,
};
pub use error::{Error, Result};
