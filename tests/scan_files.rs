use network_motif_finder::classify::motif_catalog;
use network_motif_finder::isomorphism::{IsomorphismTest, PermutationSearch};
use network_motif_finder::parser::parse_network_file;
use network_motif_finder::report::render_table;
use network_motif_finder::scan::{scan, scan_parallel};
use network_motif_finder::MotifError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_network(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn cycle_is_located_in_file_network() {
    let file = write_network("0 1\n1 2\n2 0\n3 4\n4 3\n");
    let network = parse_network_file(file.path()).unwrap();
    let motifs = motif_catalog(3);
    let records = scan(&network, 3, &motifs).unwrap();

    let search = PermutationSearch::new(3);
    let cycle = records
        .iter()
        .find(|r| search.is_isomorphic(&r.motif, &[(0, 1), (1, 2), (2, 0)]))
        .unwrap();
    assert!(cycle.count >= 1);
    assert!(cycle.locations.contains(&vec![(0, 1), (1, 2), (2, 0)]));

    // nothing involving nodes 3 or 4 can span exactly three labels here
    for record in &records {
        for location in &record.locations {
            assert!(location.iter().all(|&(a, b)| a < 3 && b < 3), "{:?}", location);
        }
    }
}

#[test]
fn malformed_file_reports_path_and_line() {
    let file = write_network("0 1\n1 2\n2 zero\n");
    let err = parse_network_file(file.path()).unwrap_err();
    match &err {
        MotifError::MalformedInput { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(*line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains(":3: malformed edge"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_network_file(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, MotifError::Io { .. }));
}

#[test]
fn empty_file_scans_to_zero_counts() {
    let file = write_network("");
    let network = parse_network_file(file.path()).unwrap();
    let motifs = motif_catalog(3);
    let records = scan(&network, 3, &motifs).unwrap();
    assert_eq!(records.len(), 13);
    assert!(records.iter().all(|r| r.count == 0));
    assert_eq!(render_table(&records, true).lines().count(), 14);
}

#[test]
fn size_larger_than_network_gives_zero_counts() {
    let file = write_network("0 1\n1 2\n");
    let network = parse_network_file(file.path()).unwrap();
    let motifs = motif_catalog(4);
    let records = scan(&network, 4, &motifs).unwrap();
    assert!(records.iter().all(|r| r.count == 0));
}

#[test]
fn parallel_and_sequential_agree_on_denser_network() {
    let content = "0 1\n1 0\n1 2\n2 3\n3 1\n0 3\n4 0\n2 4\n";
    let file = write_network(content);
    let network = parse_network_file(Path::new(file.path())).unwrap();
    let motifs = motif_catalog(3);

    let sequential = scan(&network, 3, &motifs).unwrap();
    assert_eq!(sequential, scan_parallel(&network, 3, &motifs).unwrap());
    assert_eq!(sequential, scan(&network, 3, &motifs).unwrap());

    // every occurrence is isomorphic to the motif it was credited to
    let search = PermutationSearch::new(3);
    for record in &sequential {
        for location in &record.locations {
            assert!(search.is_isomorphic(&record.motif, location));
        }
    }
}

#[test]
fn four_node_catalog_includes_disconnected_patterns() {
    let motifs = motif_catalog(4);
    // 218 digraphs on four unlabeled nodes, 16 with an isolated node, and the
    // two-disjoint-edges pattern falls below the smallest edge count of 3
    assert_eq!(motifs.len(), 201);

    let search = PermutationSearch::new(4);
    let pair_and_edge = [(0, 1), (1, 0), (2, 3)];
    let matching: Vec<_> = motifs
        .iter()
        .filter(|m| search.is_isomorphic(&m.edges, &pair_and_edge))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].k, 3);
}
