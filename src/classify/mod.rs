//! Nearest-neighbor classification for labeled dense vectors.
//!
//! ## Components
//!
//! - **Distance**: a pluggable metric over `&[f64]` points. [`Euclidean`] is the
//!   default; [`Manhattan`], [`Chebyshev`], [`Minkowski`], and [`Cosine`] are
//!   provided, and any `Fn(&[f64], &[f64]) -> Result<f64>` works as well.
//! - **Classifier**: [`Knn`] stores a training set and answers queries by
//!   exhaustive linear scan. There is no spatial index.
//! - **Vote**: [`plurality`] turns the `k` nearest neighbors into the label(s)
//!   with the highest count.
//!
//! ## Training examples
//!
//! Anything implementing [`Labeled`] can be stored: the provided [`Example`],
//! `(String, Vec<f64>)` and `(&str, Vec<f64>)` tuples, references to examples,
//! or `Box<dyn Labeled>` for a mixed collection.
//!
//! ## Determinism
//!
//! Classification is a pure function of the stored set and the query:
//!
//! - neighbors at equal distance keep their training-set order,
//! - labels with equal counts are all returned, sorted lexicographically.
//!
//! ## Usage
//!
//! ```rust
//! use knn_vote::classify::{Example, Knn, Manhattan};
//!
//! let training = vec![
//!     Example::new("A", vec![0.0, 0.0]),
//!     Example::new("B", vec![10.0, 10.0]),
//!     Example::new("A", vec![1.0, 1.0]),
//! ];
//!
//! // Euclidean by default
//! let mut knn = Knn::new(2);
//! knn.train(training.clone()).unwrap();
//! assert_eq!(knn.classify(&[0.0, 1.0]).unwrap(), vec!["A"]);
//!
//! // Any metric can be swapped in
//! let mut l1 = Knn::with_distance(3, Manhattan);
//! l1.train(training).unwrap();
//! let nearest = l1.neighbors(&[0.0, 1.0]).unwrap();
//! assert_eq!(nearest[0].distance, 1.0);
//!
//! // Too few examples for k
//! let mut big_k = Knn::new(5);
//! assert!(big_k.train(vec![Example::new("A", vec![0.0])]).is_err());
//! ```

mod distance;
mod knn;
mod traits;
mod vote;

pub use distance::{euclidean, Chebyshev, Cosine, Euclidean, Manhattan, Minkowski};
pub use knn::{Knn, Neighbor};
pub use traits::{Distance, Example, Labeled};
pub use vote::plurality;
