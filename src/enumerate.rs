use crate::universe::EdgeUniverse;
use crate::{Edge, Subgraph};
use itertools::Itertools;
use std::ops::RangeInclusive;

/// Edge counts a size-`n` subgraph is enumerated for: `n-1 ..= n*n - n`.
///
/// Empty for `n < 2`.
pub fn edge_count_range(n: usize) -> RangeInclusive<usize> {
    if n < 2 {
        #[allow(clippy::reversed_empty_ranges)]
        return 1..=0;
    }
    (n - 1)..=(n * n - n)
}

/// True if the endpoints of `edges` are exactly the labels `0..n`
pub fn is_spanning(edges: &[Edge], n: usize) -> bool {
    let mut seen = vec![false; n];
    for &(from, to) in edges {
        if from >= n || to >= n {
            return false;
        }
        seen[from] = true;
        seen[to] = true;
    }
    n > 0 && seen.iter().all(|&s| s)
}

/// All spanning subgraphs with the same edge count, in generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub k: usize,
    pub subgraphs: Vec<Subgraph>,
}

impl Bucket {
    pub fn len(&self) -> usize {
        self.subgraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subgraphs.is_empty()
    }
}

/// Enumerates spanning edge subsets of an `EdgeUniverse`.
///
/// Generation order is fixed: increasing edge count, then lexicographic order
/// of the universe indices within each count.
pub struct SubgraphEnumerator<'a> {
    universe: &'a EdgeUniverse,
}

impl<'a> SubgraphEnumerator<'a> {
    pub fn new(universe: &'a EdgeUniverse) -> Self {
        SubgraphEnumerator { universe }
    }

    /// Lazily generate the spanning `k`-subsets. Restartable by calling again.
    pub fn bucket(&self, k: usize) -> impl Iterator<Item = Subgraph> + 'a {
        let universe = self.universe;
        let n = universe.n();
        (0..universe.len())
            .combinations(k)
            .filter(move |combination| is_spanning(&universe.edges_of(combination), n))
    }

    /// Materialize every bucket over `edge_count_range(n)`
    pub fn enumerate(&self) -> Vec<Bucket> {
        edge_count_range(self.universe.n())
            .map(|k| Bucket {
                k,
                subgraphs: self.bucket(k).collect(),
            })
            .collect()
    }
}
