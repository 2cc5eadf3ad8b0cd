//! Branch decomposition of a spanning network.
//!
//! A *branch* is the set of nodes hanging off a stem node through one or
//! more of its immediate neighbors. The higher-level optimizer prices each
//! branch both ways (kept on the shared network vs. served by standalone
//! systems), so the enumeration must be exact: every downstream node once,
//! the stem never.
//!
//! The traversal is an explicit breadth-first worklist rather than
//! recursion. The whole current frontier is drained before advancing, so
//! every sibling at a multi-child branch point is visited, and large trees
//! cannot hit recursion depth limits.

use std::collections::{HashSet, VecDeque};

use ren_core::LinkSet;
use thiserror::Error;
use tracing::debug;

/// Error type for branch decomposition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BranchError {
    /// A frontier label was the stem itself or not adjacent to it
    #[error("frontier node '{frontier}' is not a neighbor of stem '{stem}'")]
    NotAStemNeighbor {
        /// The offending frontier label
        frontier: String,
        /// The stem the caller anchored the branch on
        stem: String,
    },

    /// A node was reached through two different parents: the link set has a
    /// cycle and is not a tree
    #[error("cycle detected at node '{0}': the link set is not a tree")]
    CycleDetected(String),
}

/// Enumerate every node downstream of `stem` through the given frontier.
///
/// `frontier` holds immediate neighbors of the stem; duplicates are
/// collapsed. The result lists each reachable node exactly once, in
/// discovery order, never crossing back through the stem and never
/// containing it.
///
/// Fails with [`BranchError::CycleDetected`] instead of double-counting
/// when the link set turns out not to be a tree.
pub fn branch_nodes<'a>(
    links: &'a LinkSet,
    stem: &'a str,
    frontier: &[&'a str],
) -> Result<Vec<String>, BranchError> {
    for &start in frontier {
        if start == stem || !links.are_connected(stem, start) {
            return Err(BranchError::NotAStemNeighbor {
                frontier: start.to_string(),
                stem: stem.to_string(),
            });
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(stem);

    let mut result: Vec<String> = Vec::new();
    let mut queue: VecDeque<(&str, &str)> = VecDeque::new();
    for &start in frontier {
        if visited.insert(start) {
            result.push(start.to_string());
            queue.push_back((start, stem));
        }
    }

    while let Some((node, parent)) = queue.pop_front() {
        for next in links.neighbors(node) {
            if next == parent {
                continue;
            }
            // In a tree the only already-visited neighbor is the parent
            if !visited.insert(next) {
                return Err(BranchError::CycleDetected(next.to_string()));
            }
            result.push(next.to_string());
            queue.push_back((next, node));
        }
    }

    debug!(stem, nodes = result.len(), "decomposed branch");
    Ok(result)
}

/// Enumerate every node downstream of `stem` through all of its neighbors.
///
/// For a spanning tree this is the whole remaining network: every node
/// other than the stem, each exactly once.
pub fn downstream_of<'a>(links: &'a LinkSet, stem: &'a str) -> Result<Vec<String>, BranchError> {
    let frontier = links.neighbors(stem);
    branch_nodes(links, stem, &frontier)
}
