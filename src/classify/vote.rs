//! Plurality vote over the labels of selected neighbors.
//!
//! Counts are ordered descending; labels with equal counts are ordered by
//! ascending byte-wise comparison of the label, so the result never depends
//! on hash iteration order.

use std::collections::HashMap;

use super::knn::Neighbor;

/// Return every label tied for the highest count among `neighbors`.
///
/// The result holds distinct labels, ordered lexicographically. It has more than
/// one entry only when several labels share the maximum count. An empty slice is
/// a caller error (there is nothing to vote over) and yields an empty vector.
pub fn plurality(neighbors: &[Neighbor]) -> Vec<String> {
    debug_assert!(!neighbors.is_empty(), "plurality vote over zero neighbors");

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(neighbors.len());
    for n in neighbors {
        *counts.entry(n.label.as_str()).or_insert(0) += 1;
    }

    let mut by_count: Vec<(&str, usize)> = counts.into_iter().collect();
    by_count.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let Some(&(_, top)) = by_count.first() else {
        return Vec::new();
    };

    by_count
        .into_iter()
        .take_while(|&(_, count)| count == top)
        .map(|(label, _)| label.to_owned())
        .collect()
}
