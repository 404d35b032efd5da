use crate::enumerate::{Bucket, SubgraphEnumerator};
use crate::isomorphism::{IsomorphismTest, PermutationSearch};
use crate::universe::EdgeUniverse;
use crate::{Edge, Subgraph};

/// Canonical representative of one isomorphism class of spanning subgraphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    /// Edge count shared by the motif and every member of its class
    pub k: usize,
    /// Universe indices of the representative
    pub edge_indices: Subgraph,
    /// Concrete edges of the representative
    pub edges: Vec<Edge>,
    /// Every subgraph of the class in generation order, representative first
    pub members: Vec<Subgraph>,
}

impl Motif {
    pub fn class_size(&self) -> usize {
        self.members.len()
    }
}

/// Immutable result of classification for one motif size `n`.
///
/// Motifs are ordered by edge count, then by the generation order of their representative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSet {
    n: usize,
    motifs: Vec<Motif>,
}

impl MotifSet {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Motif> {
        self.motifs.iter()
    }

    /// Motifs with `k` edges, paired with their position in the set
    pub fn with_edge_count(&self, k: usize) -> impl Iterator<Item = (usize, &Motif)> + '_ {
        self.motifs
            .iter()
            .enumerate()
            .filter(move |(_, motif)| motif.k == k)
    }
}

/// Matched flags for one bucket; built fresh for every bucket of every call
struct ClassifierState {
    matched: Vec<bool>,
}

impl ClassifierState {
    fn new(len: usize) -> Self {
        ClassifierState {
            matched: vec![false; len],
        }
    }
}

/// Partition `buckets` into isomorphism classes with the brute-force permutation search
pub fn classify(universe: &EdgeUniverse, buckets: &[Bucket]) -> MotifSet {
    classify_with(universe, buckets, &PermutationSearch::new(universe.n()))
}

/// Partition `buckets` into isomorphism classes using `test`.
///
/// Buckets are visited in increasing edge count. Within a bucket the first
/// unmatched subgraph becomes a motif and claims every later unmatched
/// subgraph the test accepts.
pub fn classify_with<T: IsomorphismTest>(
    universe: &EdgeUniverse,
    buckets: &[Bucket],
    test: &T,
) -> MotifSet {
    let mut ordered: Vec<&Bucket> = buckets.iter().collect();
    ordered.sort_by_key(|bucket| bucket.k);

    let mut motifs = Vec::new();
    for bucket in ordered {
        classify_bucket(universe, bucket, test, &mut motifs);
    }

    MotifSet {
        n: universe.n(),
        motifs,
    }
}

fn classify_bucket<T: IsomorphismTest>(
    universe: &EdgeUniverse,
    bucket: &Bucket,
    test: &T,
    motifs: &mut Vec<Motif>,
) {
    let edge_lists: Vec<Vec<Edge>> = bucket
        .subgraphs
        .iter()
        .map(|subgraph| universe.edges_of(subgraph))
        .collect();
    let mut state = ClassifierState::new(edge_lists.len());

    for i in 0..edge_lists.len() {
        if state.matched[i] {
            continue;
        }
        state.matched[i] = true;

        let reference = test.reference(&edge_lists[i]);
        let mut members = vec![bucket.subgraphs[i].clone()];

        // every index before i is already matched
        for j in (i + 1)..edge_lists.len() {
            if !state.matched[j] && test.matches(&reference, &edge_lists[j]) {
                state.matched[j] = true;
                members.push(bucket.subgraphs[j].clone());
            }
        }

        motifs.push(Motif {
            k: bucket.k,
            edge_indices: bucket.subgraphs[i].clone(),
            edges: edge_lists[i].clone(),
            members,
        });
    }
}

/// Enumerate and classify every motif of size `n`
pub fn motif_catalog(n: usize) -> MotifSet {
    let universe = EdgeUniverse::new(n);
    let buckets = SubgraphEnumerator::new(&universe).enumerate();
    classify(&universe, &buckets)
}
