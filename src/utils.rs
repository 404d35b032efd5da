use crate::Edge;

/// Calculate number of combinations C(n, k) without overflow
pub fn num_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k); // C(n,k) = C(n,n-k)
    let mut result = 1usize;

    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }

    result
}

/// Distinct labels in order of first appearance.
///
/// For example `[1, 0, 0, 2]` gives `[1, 0, 2]`.
pub fn node_order(labels: &[usize]) -> Vec<usize> {
    let mut order = Vec::new();
    for &label in labels {
        if !order.contains(&label) {
            order.push(label);
        }
    }
    order
}

/// Endpoint sequence of an edge list: `[(a, b), (c, d)]` becomes `[a, b, c, d]`
pub fn flatten(edges: &[Edge]) -> Vec<usize> {
    edges.iter().flat_map(|&(from, to)| [from, to]).collect()
}

/// Count distinct endpoint labels, stopping once `limit` is exceeded.
///
/// Returns a value in `0..=limit + 1`.
pub fn count_labels_up_to(edges: &[Edge], limit: usize) -> usize {
    let mut seen: Vec<usize> = Vec::with_capacity(limit + 1);
    for &(from, to) in edges {
        for label in [from, to] {
            if !seen.contains(&label) {
                seen.push(label);
                if seen.len() > limit {
                    return seen.len();
                }
            }
        }
    }
    seen.len()
}
