use crate::Edge;

/// All n·(n−1) possible directed edges among the labels `0..n`.
///
/// Edges are ordered by source, then target: for n = 3 this is
/// `(0,1) (0,2) (1,0) (1,2) (2,0) (2,1)`. Subgraphs address edges by their
/// position in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeUniverse {
    n: usize,
    edges: Vec<Edge>,
}

impl EdgeUniverse {
    /// Build the universe for `n` labels. Fewer than two labels give an empty universe.
    pub fn new(n: usize) -> Self {
        let mut edges = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));
        if n >= 2 {
            for from in 0..n {
                for to in 0..n {
                    if from != to {
                        edges.push((from, to));
                    }
                }
            }
        }
        EdgeUniverse { n, edges }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Edge {
        self.edges[index]
    }

    /// Concrete edges addressed by a subgraph of universe indices
    pub fn edges_of(&self, subgraph: &[usize]) -> Vec<Edge> {
        subgraph.iter().map(|&i| self.edges[i]).collect()
    }

    /// Position of `edge` in the universe, if it is a valid non-loop edge over `0..n`
    pub fn index_of(&self, (from, to): Edge) -> Option<usize> {
        if from == to || from >= self.n || to >= self.n {
            return None;
        }
        let column = if to < from { to } else { to - 1 };
        Some(from * (self.n - 1) + column)
    }
}
