//! Relabeling permutations and the isomorphism test used by both the
//! classifier and the network scanner.

use crate::utils::{flatten, node_order};
use crate::Edge;
use itertools::Itertools;

/// A bijection over `0..n`: position `i` of a candidate's node order is sent to `relabeling[i]`
pub type Relabeling = Vec<usize>;

/// Capability interface for deciding whether two equal-size edge lists depict
/// the same pattern up to node relabeling.
///
/// `reference` may precompute whatever a motif needs so that `matches` can be
/// called repeatedly against many candidates.
pub trait IsomorphismTest {
    type Reference;

    fn reference(&self, motif: &[Edge]) -> Self::Reference;

    fn matches(&self, reference: &Self::Reference, candidate: &[Edge]) -> bool;

    fn is_isomorphic(&self, a: &[Edge], b: &[Edge]) -> bool {
        a.len() == b.len() && self.matches(&self.reference(a), b)
    }
}

/// Find all n! relabelings of `0..n`, in lexicographic order
pub fn all_relabelings(n: usize) -> Vec<Relabeling> {
    let mut all = Vec::new();
    let mut current = vec![0; n];
    let mut used = vec![false; n];

    backtrack(0, n, &mut current, &mut used, &mut all);

    all
}

/// Recursive backtracking over the unused targets of each position
fn backtrack(
    position: usize,
    n: usize,
    current: &mut Vec<usize>,
    used: &mut Vec<bool>,
    all: &mut Vec<Relabeling>,
) {
    if position == n {
        all.push(current.clone());
        return;
    }

    for target in 0..n {
        if !used[target] {
            current[position] = target;
            used[target] = true;
            backtrack(position + 1, n, current, used, all);
            used[target] = false;
        }
    }
}

/// Positions of each edge's endpoints within the candidate's first-occurrence node order
fn endpoint_positions(candidate: &[Edge]) -> (Vec<usize>, Vec<(usize, usize)>) {
    let nodes = node_order(&flatten(candidate));
    let position = |label: usize| nodes.iter().position(|&node| node == label).unwrap_or(0);
    let positions = candidate
        .iter()
        .map(|&(from, to)| (position(from), position(to)))
        .collect();
    (nodes, positions)
}

/// Relabel `candidate` by sending the i-th distinct label (first-occurrence order) to `relabeling[i]`.
///
/// Returns `None` if the candidate does not touch exactly `relabeling.len()` labels.
pub fn relabel(candidate: &[Edge], relabeling: &[usize]) -> Option<Vec<Edge>> {
    let (nodes, positions) = endpoint_positions(candidate);
    if nodes.len() != relabeling.len() {
        return None;
    }
    Some(
        positions
            .iter()
            .map(|&(a, b)| (relabeling[a], relabeling[b]))
            .collect(),
    )
}

/// Reference form of a motif: the set of all k! edge orderings of its edge list.
///
/// An ordering keeps each edge whole, so a sequence of edges equals one of the
/// orderings exactly when it is a rearrangement of the motif's edges. Membership
/// is decided by comparing sorted edge sequences instead of materializing k! lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeOrderings {
    edges: Vec<Edge>,
    sorted: Vec<Edge>,
}

impl EdgeOrderings {
    pub fn new(edges: &[Edge]) -> Self {
        let mut sorted = edges.to_vec();
        sorted.sort_unstable();
        EdgeOrderings {
            edges: edges.to_vec(),
            sorted,
        }
    }

    pub fn k(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if `sequence` is one of the k! orderings
    pub fn contains(&self, sequence: &[Edge]) -> bool {
        if sequence.len() != self.sorted.len() {
            return false;
        }
        let mut sorted = sequence.to_vec();
        sorted.sort_unstable();
        sorted == self.sorted
    }

    /// Every ordering, flattened to an endpoint sequence. Grows as k!.
    pub fn flattened_orderings(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        self.edges
            .iter()
            .copied()
            .permutations(self.edges.len())
            .map(|ordering| flatten(&ordering))
    }
}

/// Brute-force isomorphism test: try every relabeling of `0..n`.
///
/// Costs O(n! · k) per comparison.
#[derive(Debug, Clone)]
pub struct PermutationSearch {
    n: usize,
    relabelings: Vec<Relabeling>,
}

impl PermutationSearch {
    pub fn new(n: usize) -> Self {
        PermutationSearch {
            n,
            relabelings: all_relabelings(n),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn relabelings(&self) -> &[Relabeling] {
        &self.relabelings
    }

    /// First relabeling (in lexicographic order) that turns `candidate` into an ordering of `reference`
    pub fn witness(&self, reference: &EdgeOrderings, candidate: &[Edge]) -> Option<&Relabeling> {
        if candidate.len() != reference.k() {
            return None;
        }
        let (nodes, positions) = endpoint_positions(candidate);
        if nodes.len() != self.n {
            return None;
        }

        let mut relabeled = Vec::with_capacity(positions.len());
        self.relabelings.iter().find(|relabeling| {
            relabeled.clear();
            relabeled.extend(positions.iter().map(|&(a, b)| (relabeling[a], relabeling[b])));
            reference.contains(&relabeled)
        })
    }
}

impl IsomorphismTest for PermutationSearch {
    type Reference = EdgeOrderings;

    fn reference(&self, motif: &[Edge]) -> EdgeOrderings {
        EdgeOrderings::new(motif)
    }

    fn matches(&self, reference: &EdgeOrderings, candidate: &[Edge]) -> bool {
        self.witness(reference, candidate).is_some()
    }
}
