/// A directed edge (from, to)
pub type Edge = (usize, usize);

/// A fixed-size set of edge indices, either into an `EdgeUniverse` or into a
/// network's own edge list. Indices are kept in increasing order.
pub type Subgraph = Vec<usize>;

/// Represents a directed network as an ordered edge list over arbitrary labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    /// Edges in input order
    pub edges: Vec<Edge>,
}

impl Network {
    pub fn new() -> Self {
        Network { edges: Vec::new() }
    }

    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Network { edges }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn get_edge(&self, index: usize) -> Edge {
        self.edges[index]
    }

    /// Concrete edges addressed by a subgraph of edge indices
    pub fn edges_of(&self, subgraph: &[usize]) -> Vec<Edge> {
        subgraph.iter().map(|&i| self.edges[i]).collect()
    }

    /// Number of distinct node labels touched by any edge
    pub fn num_nodes(&self) -> usize {
        utils::node_order(&utils::flatten(&self.edges)).len()
    }
}

// Module declarations
pub mod classify;
pub mod enumerate;
pub mod error;
pub mod isomorphism;
pub mod parser;
pub mod report;
pub mod scan;
pub mod universe;
pub mod utils;

pub use error::{MotifError, Result};
