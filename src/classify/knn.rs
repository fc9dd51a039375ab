//! k-nearest-neighbors classifier with exhaustive search.
//!
//! # The Algorithm
//!
//! k-NN is a lazy learner: training stores the examples, and all work happens
//! at query time.
//!
//! 1. Compute the distance from the query to every stored example.
//! 2. Sort ascending by distance.
//! 3. Keep the first `k`.
//! 4. Return the label(s) with the highest count among those `k`.
//!
//! ## Ties
//!
//! - **Equal distances**: the sort is stable, so examples at the same distance
//!   keep their training-set order. Whichever come first fill the `k` slots.
//! - **Equal counts**: every tied label is returned, ordered lexicographically
//!   (see [`plurality`](super::plurality)).
//!
//! ## Complexity
//!
//! - **Time**: O(n·d + n log n) per query for n examples of dimension d.
//! - **Space**: O(n) per query for the distance list.

use std::cmp::Ordering;

use super::distance::Euclidean;
use super::traits::{Distance, Labeled};
use super::vote;
use crate::error::{Error, Result};

/// One of the selected nearest neighbors of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Distance from the query to the training example.
    pub distance: f64,
    /// Label of the training example.
    pub label: String,
}

/// k-nearest-neighbors classifier.
///
/// `T` is the training example type; `D` the distance metric.
#[derive(Debug, Clone)]
pub struct Knn<T, D = Euclidean> {
    /// Number of neighbors that vote.
    k: usize,
    /// Metric used between the query and each example position.
    distance: D,
    /// Stored training set; `None` until the first successful `train`.
    examples: Option<Vec<T>>,
}

impl<T: Labeled> Knn<T, Euclidean> {
    /// Create a classifier using Euclidean distance.
    ///
    /// `k` is validated by [`train`](Knn::train); zero is rejected there.
    pub fn new(k: usize) -> Self {
        Self::with_distance(k, Euclidean)
    }
}

impl<T: Labeled> Default for Knn<T, Euclidean> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T: Labeled, D: Distance> Knn<T, D> {
    /// Create a classifier with a custom distance metric.
    ///
    /// # Arguments
    ///
    /// * `k` - Number of nearest neighbors that vote.
    /// * `distance` - Any [`Distance`], including plain functions and closures.
    pub fn with_distance(k: usize, distance: D) -> Self {
        Self {
            k,
            distance,
            examples: None,
        }
    }

    /// The configured number of neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The configured distance metric.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Whether a training set has been stored.
    pub fn is_trained(&self) -> bool {
        self.examples.is_some()
    }

    /// Number of stored training examples.
    pub fn len(&self) -> usize {
        self.examples.as_ref().map_or(0, Vec::len)
    }

    /// Whether no training examples are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored training set, if any.
    pub fn training_set(&self) -> Option<&[T]> {
        self.examples.as_deref()
    }

    /// Store `examples` as the reference set, replacing any previous one.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `k` is zero.
    /// - [`Error::InsufficientData`] if fewer than `k` examples are given.
    ///
    /// On error the previously stored set is left in place.
    pub fn train(&mut self, examples: Vec<T>) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        let n_items = examples.len();
        if n_items < self.k {
            return Err(Error::InsufficientData { k: self.k, n_items });
        }

        tracing::debug!(
            k = self.k,
            n_items,
            dim = examples.first().map_or(0, |e| e.position().len()),
            "stored training set"
        );
        self.examples = Some(examples);
        Ok(())
    }

    /// The `k` stored examples nearest to `query`, closest first.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyModel`] if the classifier has not been trained.
    /// - Any error from the metric, typically [`Error::DimensionMismatch`].
    ///   The first failure aborts the search.
    pub fn neighbors(&self, query: &[f64]) -> Result<Vec<Neighbor>> {
        let examples = self.examples.as_deref().ok_or(Error::EmptyModel)?;

        let mut scored: Vec<(f64, &T)> = Vec::with_capacity(examples.len());
        for example in examples {
            let d = self.distance.distance(query, example.position())?;
            scored.push((d, example));
        }

        // Stable: equal distances keep training-set order. NaN of either sign sorts last.
        scored.sort_by(|a, b| match (a.0.is_nan(), b.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.0.total_cmp(&b.0),
        });
        scored.truncate(self.k);

        Ok(scored
            .into_iter()
            .map(|(distance, example)| Neighbor {
                distance,
                label: example.label().to_owned(),
            })
            .collect())
    }

    /// Predict the label(s) of `query` by plurality vote over its `k` nearest neighbors.
    ///
    /// Returns a single label when one label has a strict plurality, otherwise
    /// every tied label in lexicographic order.
    ///
    /// # Errors
    ///
    /// Same as [`neighbors`](Knn::neighbors).
    pub fn classify(&self, query: &[f64]) -> Result<Vec<String>> {
        let nearest = self.neighbors(query)?;
        let winners = vote::plurality(&nearest);
        tracing::trace!(k = self.k, ?winners, "classified query");
        Ok(winners)
    }

    /// Classify each query in order, stopping at the first error.
    pub fn classify_batch<Q: AsRef<[f64]>>(&self, queries: &[Q]) -> Result<Vec<Vec<String>>> {
        queries.iter().map(|q| self.classify(q.as_ref())).collect()
    }
}
