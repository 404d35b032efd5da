use crate::classify::MotifSet;
use crate::enumerate::edge_count_range;
use crate::isomorphism::{IsomorphismTest, PermutationSearch};
use crate::utils::count_labels_up_to;
use crate::{Edge, MotifError, Network, Result, Subgraph};
use itertools::Itertools;
use rayon::prelude::*;

/// Occurrences of one motif in a network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Concrete edges of the motif representative
    pub motif: Vec<Edge>,
    pub k: usize,
    pub count: usize,
    /// Matched network edge lists, in scan order
    pub locations: Vec<Vec<Edge>>,
}

/// Counters and locations for a single scan; never shared between calls
struct ScanState {
    counters: Vec<usize>,
    locations: Vec<Vec<Vec<Edge>>>,
}

impl ScanState {
    fn new(num_motifs: usize) -> Self {
        ScanState {
            counters: vec![0; num_motifs],
            locations: vec![Vec::new(); num_motifs],
        }
    }

    fn record(&mut self, motif: usize, location: Vec<Edge>) {
        self.counters[motif] += 1;
        self.locations[motif].push(location);
    }

    fn into_records(self, motifs: &MotifSet) -> Vec<MatchRecord> {
        motifs
            .iter()
            .zip(self.counters)
            .zip(self.locations)
            .map(|((motif, count), locations)| MatchRecord {
                motif: motif.edges.clone(),
                k: motif.k,
                count,
                locations,
            })
            .collect()
    }
}

/// `k`-combinations of network edge indices touching exactly `n` distinct labels
pub fn candidate_combinations(
    network: &Network,
    n: usize,
    k: usize,
) -> impl Iterator<Item = Subgraph> + '_ {
    (0..network.num_edges())
        .combinations(k)
        .filter(move |combination| count_labels_up_to(&network.edges_of(combination), n) == n)
}

/// Motif references grouped for one edge count, in motif-set order
struct Prepared<R> {
    k: usize,
    references: Vec<(usize, R)>,
}

fn prepare<T: IsomorphismTest>(motifs: &MotifSet, test: &T) -> Vec<Prepared<T::Reference>> {
    edge_count_range(motifs.n())
        .map(|k| Prepared {
            k,
            references: motifs
                .with_edge_count(k)
                .map(|(index, motif)| (index, test.reference(&motif.edges)))
                .collect(),
        })
        .filter(|prepared| !prepared.references.is_empty())
        .collect()
}

/// Index of the first motif (in set order) matching `candidate`
fn first_match<T: IsomorphismTest>(
    test: &T,
    references: &[(usize, T::Reference)],
    candidate: &[Edge],
) -> Option<usize> {
    references
        .iter()
        .find(|(_, reference)| test.matches(reference, candidate))
        .map(|&(index, _)| index)
}

fn check_size(n: usize, motifs: &MotifSet) -> Result<()> {
    if motifs.n() != n {
        return Err(MotifError::InconsistentSize {
            motif_n: motifs.n(),
            scan_n: n,
        });
    }
    Ok(())
}

/// Count and locate every motif occurrence in `network`
pub fn scan(network: &Network, n: usize, motifs: &MotifSet) -> Result<Vec<MatchRecord>> {
    scan_with(network, n, motifs, &PermutationSearch::new(n))
}

/// Sequential scan using `test` for matching.
///
/// Combinations are visited by increasing edge count, then in lexicographic
/// order of network edge indices. Each combination is credited to at most one
/// motif: the first one it matches.
pub fn scan_with<T: IsomorphismTest>(
    network: &Network,
    n: usize,
    motifs: &MotifSet,
    test: &T,
) -> Result<Vec<MatchRecord>> {
    check_size(n, motifs)?;

    let mut state = ScanState::new(motifs.len());
    for prepared in prepare(motifs, test) {
        if prepared.k > network.num_edges() {
            continue;
        }
        for combination in candidate_combinations(network, n, prepared.k) {
            let edges = network.edges_of(&combination);
            if let Some(motif) = first_match(test, &prepared.references, &edges) {
                state.record(motif, edges);
            }
        }
    }

    Ok(state.into_records(motifs))
}

/// Parallel scan; output is identical to `scan`
pub fn scan_parallel(network: &Network, n: usize, motifs: &MotifSet) -> Result<Vec<MatchRecord>> {
    scan_parallel_with(network, n, motifs, &PermutationSearch::new(n))
}

/// Parallel scan using `test` for matching.
///
/// Each edge-count bucket is materialized and matched across the rayon pool,
/// then recorded in bucket order so counts and locations match `scan_with`.
pub fn scan_parallel_with<T>(
    network: &Network,
    n: usize,
    motifs: &MotifSet,
    test: &T,
) -> Result<Vec<MatchRecord>>
where
    T: IsomorphismTest + Sync,
    T::Reference: Send + Sync,
{
    check_size(n, motifs)?;

    let mut state = ScanState::new(motifs.len());
    for prepared in prepare(motifs, test) {
        if prepared.k > network.num_edges() {
            continue;
        }
        let combinations: Vec<Subgraph> = candidate_combinations(network, n, prepared.k).collect();

        let hits: Vec<Option<(usize, Vec<Edge>)>> = combinations
            .par_iter()
            .map(|combination| {
                let edges = network.edges_of(combination);
                first_match(test, &prepared.references, &edges).map(|motif| (motif, edges))
            })
            .collect();

        for (motif, edges) in hits.into_iter().flatten() {
            state.record(motif, edges);
        }
    }

    Ok(state.into_records(motifs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::motif_catalog;

    fn sample_network() -> Network {
        Network::from_edges(vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 3)])
    }

    #[test]
    fn finds_the_three_cycle() {
        let motifs = motif_catalog(3);
        let records = scan(&sample_network(), 3, &motifs).unwrap();
        let search = PermutationSearch::new(3);

        let cycle = records
            .iter()
            .find(|r| search.is_isomorphic(&r.motif, &[(0, 1), (1, 2), (2, 0)]))
            .unwrap();
        assert_eq!(cycle.count, 1);
        assert_eq!(cycle.locations, vec![vec![(0, 1), (1, 2), (2, 0)]]);
    }

    #[test]
    fn sample_network_totals() {
        let motifs = motif_catalog(3);
        let records = scan(&sample_network(), 3, &motifs).unwrap();

        // three 2-paths inside the cycle, the cycle itself, and nothing touching 3 or 4
        let total: usize = records.iter().map(|r| r.count).sum();
        assert_eq!(total, 4);
        for record in &records {
            assert_eq!(record.count, record.locations.len());
            for location in &record.locations {
                assert!(location.iter().all(|&(a, b)| a < 3 && b < 3));
                assert_eq!(location.len(), record.k);
            }
        }
    }

    #[test]
    fn candidates_touch_exactly_n_labels() {
        let network = sample_network();
        for k in 1..=network.num_edges() {
            for combination in candidate_combinations(&network, 3, k) {
                let edges = network.edges_of(&combination);
                assert_eq!(count_labels_up_to(&edges, 3), 3);
            }
        }
        // {(0,1),(3,4)} spans four labels, {(3,4),(4,3)} only two
        let pairs: Vec<Subgraph> = candidate_combinations(&network, 3, 2).collect();
        assert!(!pairs.contains(&vec![0, 3]));
        assert!(!pairs.contains(&vec![3, 4]));
        assert_eq!(pairs, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn combination_matches_at_most_one_motif() {
        let motifs = motif_catalog(3);
        let network = Network::from_edges(vec![(0, 1), (1, 0), (1, 2), (2, 1), (0, 2), (2, 0), (2, 3)]);
        let records = scan(&network, 3, &motifs).unwrap();

        let mut seen = std::collections::HashSet::new();
        for record in &records {
            for location in &record.locations {
                assert!(seen.insert(location.clone()), "{:?} matched twice", location);
            }
        }
    }

    #[test]
    fn scans_are_idempotent() {
        let motifs = motif_catalog(3);
        let network = sample_network();
        assert_eq!(scan(&network, 3, &motifs).unwrap(), scan(&network, 3, &motifs).unwrap());
    }

    #[test]
    fn parallel_scan_matches_sequential() {
        let motifs = motif_catalog(3);
        let network = Network::from_edges(vec![
            (0, 1),
            (1, 2),
            (2, 0),
            (2, 3),
            (3, 2),
            (3, 0),
            (5, 1),
        ]);
        assert_eq!(
            scan(&network, 3, &motifs).unwrap(),
            scan_parallel(&network, 3, &motifs).unwrap()
        );
    }

    #[test]
    fn empty_network_gives_zero_counts() {
        let motifs = motif_catalog(3);
        let records = scan(&Network::new(), 3, &motifs).unwrap();
        assert_eq!(records.len(), motifs.len());
        assert!(records.iter().all(|r| r.count == 0 && r.locations.is_empty()));
    }

    #[test]
    fn inconsistent_size_is_rejected() {
        let motifs = motif_catalog(2);
        let err = scan(&sample_network(), 3, &motifs).unwrap_err();
        assert!(matches!(err, MotifError::InconsistentSize { motif_n: 2, scan_n: 3 }));
    }

    #[test]
    fn degenerate_size_gives_no_records() {
        let motifs = motif_catalog(1);
        assert!(scan(&sample_network(), 1, &motifs).unwrap().is_empty());
    }

    #[test]
    fn two_label_scan_counts_edges_and_mutual_pairs() {
        let motifs = motif_catalog(2);
        let records = scan(&sample_network(), 2, &motifs).unwrap();
        assert_eq!(records[0].count, 5);
        assert_eq!(records[1].count, 1);
        assert_eq!(records[1].locations, vec![vec![(3, 4), (4, 3)]]);
    }
}
