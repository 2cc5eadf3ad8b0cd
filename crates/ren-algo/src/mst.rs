//! Minimum spanning network construction over a demand node set.
//!
//! The planning scales this targets (tens to low hundreds of buildings) make
//! the dense formulation the right one: compute the full pairwise Euclidean
//! distance matrix, then run Prim's algorithm over it. Both steps are O(n²),
//! with no edge-list materialization or sorting.
//!
//! Determinism: for a fixed node insertion order the same tree always comes
//! out. Ties on equal candidate distances resolve toward the lowest node
//! index, both when selecting the next node and when recording its parent,
//! so downstream disconnect decisions stay reproducible.

use ren_core::{geometry, Link, LinkSet, Meters, NodeSet, PlanError, PlanResult};
use tracing::debug;

/// Full n×n matrix of pairwise Euclidean distances (symmetric, zero diagonal).
pub fn distance_matrix(nodes: &NodeSet) -> PlanResult<Vec<Vec<f64>>> {
    let n = nodes.len();
    let labels: Vec<&str> = nodes.labels().collect();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let span = geometry::distance(nodes, labels[i], labels[j])?;
            matrix[i][j] = span.value();
            matrix[j][i] = span.value();
        }
    }
    Ok(matrix)
}

/// Build the minimum spanning network connecting every node of the set.
///
/// Returns a [`LinkSet`] forming a spanning tree: connected, acyclic, with
/// exactly n−1 links for n ≥ 1 nodes. Sets with zero or one node yield an
/// empty link set. Coincident nodes yield zero-length links, which are
/// valid.
pub fn build_mst(nodes: &NodeSet) -> PlanResult<LinkSet> {
    let n = nodes.len();
    if n <= 1 {
        return Ok(LinkSet::default());
    }

    let labels: Vec<&str> = nodes.labels().collect();
    let matrix = distance_matrix(nodes)?;

    // Dense Prim, growing the tree from the first node.
    let mut in_tree = vec![false; n];
    in_tree[0] = true;
    let mut best = matrix[0].clone();
    let mut parent = vec![0usize; n];
    let mut links = Vec::with_capacity(n - 1);

    for _ in 1..n {
        let mut next = None;
        for candidate in 0..n {
            if in_tree[candidate] {
                continue;
            }
            match next {
                None => next = Some(candidate),
                Some(current) if best[candidate] < best[current] => next = Some(candidate),
                Some(_) => {}
            }
        }
        let next = next.ok_or_else(|| {
            PlanError::Structure("spanning tree ran out of candidate nodes".to_string())
        })?;

        in_tree[next] = true;
        links.push(Link::new(
            labels[parent[next]],
            labels[next],
            Meters(best[next]),
        ));

        for other in 0..n {
            if !in_tree[other] && matrix[next][other] < best[other] {
                best[other] = matrix[next][other];
                parent[other] = next;
            }
        }
    }

    let links = LinkSet::from_links(links)?;
    debug!(
        nodes = n,
        links = links.len(),
        total_m = links.total_length().value(),
        "built minimum spanning network"
    );
    Ok(links)
}
