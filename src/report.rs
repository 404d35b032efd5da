use crate::classify::MotifSet;
use crate::scan::MatchRecord;
use crate::Edge;
use std::fmt::Write;

fn format_edges(edges: &[Edge]) -> String {
    format!("{:?}", edges)
}

fn format_locations(locations: &[Vec<Edge>]) -> String {
    let inner: Vec<String> = locations.iter().map(|l| format_edges(l)).collect();
    format!("[{}]", inner.join(", "))
}

/// Render one row per motif: index, motif edge list, counter and (optionally) locations
pub fn render_table(records: &[MatchRecord], show_locations: bool) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            [
                i.to_string(),
                format_edges(&record.motif),
                record.count.to_string(),
                format_locations(&record.locations),
            ]
        })
        .collect();

    let header = ["", "Motif", "Counter", "Locations"];
    let columns = if show_locations { 4 } else { 3 };
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .map(|row| row[c].len())
                .chain(std::iter::once(header[c].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let mut push_row = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    };

    push_row(&header[..columns]);
    for row in &rows {
        let cells: Vec<&str> = row[..columns].iter().map(String::as_str).collect();
        push_row(&cells);
    }

    out
}

/// Render the motif catalogue grouped by edge count
pub fn render_catalog(motifs: &MotifSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Motifs of size {}: {}", motifs.n(), motifs.len());

    let mut current_k = None;
    for (i, motif) in motifs.iter().enumerate() {
        if current_k != Some(motif.k) {
            current_k = Some(motif.k);
            let in_bucket = motifs.with_edge_count(motif.k).count();
            let _ = writeln!(out, "k = {} ({} motif(s))", motif.k, in_bucket);
        }
        let _ = writeln!(
            out,
            "  #{:<3} {}  class size {}",
            i,
            format_edges(&motif.edges),
            motif.class_size()
        );
    }

    out
}
