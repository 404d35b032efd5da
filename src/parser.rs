use crate::{Edge, MotifError, Network, Result};
use nom::{
    character::complete::{digit1, space0, space1},
    combinator::{all_consuming, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use std::path::{Path, PathBuf};

/// Parse a single unsigned node label
fn parse_label(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse one directed edge: two labels separated by spaces or tabs
fn parse_edge(input: &str) -> IResult<&str, Edge> {
    delimited(
        space0,
        separated_pair(parse_label, space1, parse_label),
        space0,
    )(input)
}

/// Explain why `line` is not a valid edge
fn describe_failure(line: &str) -> String {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return format!("expected 2 fields, found {}", fields.len());
    }
    match fields.iter().find(|field| field.parse::<usize>().is_err()) {
        Some(field) => format!("{:?} is not a non-negative integer", field),
        None => format!("cannot parse {:?}", line),
    }
}

/// Parse an edge list, reporting errors against `path`.
///
/// Blank lines are skipped; every other line must hold exactly two labels.
fn parse_edges(input: &str, path: &Path) -> Result<Network> {
    let mut edges = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match all_consuming(parse_edge)(line) {
            Ok((_, edge)) => edges.push(edge),
            Err(_) => {
                return Err(MotifError::MalformedInput {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: describe_failure(line),
                })
            }
        }
    }

    Ok(Network::from_edges(edges))
}

/// Parse a whitespace-separated edge list, one directed edge per line
pub fn parse_network(input: &str) -> Result<Network> {
    parse_edges(input, &PathBuf::from("<input>"))
}

/// Parse a network file
pub fn parse_network_file(path: &Path) -> Result<Network> {
    let content = std::fs::read_to_string(path).map_err(|source| MotifError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    parse_edges(&content, path)
}
