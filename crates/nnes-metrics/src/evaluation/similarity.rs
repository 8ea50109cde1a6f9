//! Jaccard similarity of node sets.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// `|a ∩ b| / |a ∪ b|`. Two empty sets have similarity 0.
#[must_use]
pub fn jaccard_similarity<T, H>(a: &HashSet<T, H>, b: &HashSet<T, H>) -> f64
where
    T: Eq + Hash,
    H: BuildHasher,
{
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        0.0
    } else {
        shared as f64 / union as f64
    }
}
