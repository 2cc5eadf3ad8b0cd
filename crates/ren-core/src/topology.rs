//! Topological analysis of planning networks (stats, subnetworks, tree checks).

use crate::{LinkSet, Meters, NodeSet, PlanError, PlanResult};
use anyhow::{anyhow, Result};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Summary statistics for a node/link pair (degree distribution, components, length).
#[derive(Debug, Clone, serde::Serialize)]
pub struct TopologyStats {
    pub node_count: usize,
    pub link_count: usize,
    pub connected_components: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree: usize,
    pub total_length: Meters,
}

impl std::fmt::Display for TopologyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} links ({:.0} m), {} component(s), degree {}..{}",
            self.node_count,
            self.link_count,
            self.total_length.value(),
            self.connected_components,
            self.min_degree,
            self.max_degree
        )
    }
}

/// Subnetwork summary: one entry per connected component of the link set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SubnetworkSummary {
    pub subnetwork_id: usize,
    pub node_count: usize,
}

/// Node assignment info so every node can be tagged with its component.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NodeAssignment {
    pub label: String,
    pub subnetwork_id: usize,
}

/// Aggregated subnetwork analysis result.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SubnetworkAnalysis {
    pub subnetworks: Vec<SubnetworkSummary>,
    pub assignments: Vec<NodeAssignment>,
}

/// Build a petgraph view of the node/link pair for component analysis.
///
/// Fails with `NodeNotFound` when a link references a label absent from the
/// node set.
fn as_graph<'a>(nodes: &'a NodeSet, links: &LinkSet) -> PlanResult<UnGraph<&'a str, f64>> {
    let mut graph = UnGraph::<&str, f64>::new_undirected();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();
    for node in nodes.iter() {
        indices.insert(node.label.as_str(), graph.add_node(node.label.as_str()));
    }
    for link in links.iter() {
        let a = endpoint_index(&indices, &link.node_a)?;
        let b = endpoint_index(&indices, &link.node_b)?;
        graph.add_edge(a, b, link.distance.value());
    }
    Ok(graph)
}

fn endpoint_index(indices: &HashMap<&str, NodeIndex>, endpoint: &str) -> PlanResult<NodeIndex> {
    indices
        .get(endpoint)
        .copied()
        .ok_or_else(|| PlanError::NodeNotFound(endpoint.to_string()))
}

/// Calculates network-level statistics such as degree distribution and component counts.
pub fn network_stats(nodes: &NodeSet, links: &LinkSet) -> Result<TopologyStats> {
    let graph =
        as_graph(nodes, links).map_err(|e| anyhow!("cannot build topology view: {}", e))?;

    let node_count = nodes.len();
    let mut degrees = Vec::with_capacity(node_count);
    for label in nodes.labels() {
        degrees.push(links.degree(label));
    }
    let min_degree = *degrees.iter().min().unwrap_or(&0);
    let max_degree = *degrees.iter().max().unwrap_or(&0);
    let avg_degree = if node_count == 0 {
        0.0
    } else {
        degrees.iter().copied().sum::<usize>() as f64 / node_count as f64
    };

    Ok(TopologyStats {
        node_count,
        link_count: links.len(),
        connected_components: connected_components(&graph),
        min_degree,
        avg_degree,
        max_degree,
        total_length: links.total_length(),
    })
}

/// Labels connected components (breadth-first search) and pulls subnetwork
/// metadata for reporting.
///
/// Nodes with no links form singleton subnetworks of their own.
pub fn subnetworks(nodes: &NodeSet, links: &LinkSet) -> Result<SubnetworkAnalysis> {
    for link in links.iter() {
        for endpoint in [&link.node_a, &link.node_b] {
            if !nodes.contains(endpoint) {
                return Err(anyhow!(
                    "link {} references unknown node '{}'",
                    link.label(),
                    endpoint
                ));
            }
        }
    }

    let positions: HashMap<&str, usize> = nodes.labels().zip(0..).collect();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut subnetworks = Vec::new();
    let mut assignments = Vec::new();
    let mut subnetwork_id = 0;
    for start in nodes.labels() {
        if visited.contains(start) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut members = Vec::new();
        while let Some(label) = queue.pop_front() {
            if !visited.insert(label) {
                continue;
            }
            members.push(label);
            for neighbor in links.neighbors(label) {
                if !visited.contains(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        subnetworks.push(SubnetworkSummary {
            subnetwork_id,
            node_count: members.len(),
        });
        for label in members {
            assignments.push(NodeAssignment {
                label: label.to_string(),
                subnetwork_id,
            });
        }
        subnetwork_id += 1;
    }
    assignments.sort_by_key(|assignment| positions.get(assignment.label.as_str()).copied());
    Ok(SubnetworkAnalysis {
        subnetworks,
        assignments,
    })
}

/// Fail-fast check that a link set is a spanning tree of the node set.
///
/// A spanning tree of n nodes has exactly n−1 links and a single connected
/// component; with the link count pinned, a cycle necessarily leaves some
/// node disconnected, so both violations surface here. Downstream branch
/// decomposition relies on this invariant for termination.
pub fn verify_spanning_tree(nodes: &NodeSet, links: &LinkSet) -> PlanResult<()> {
    let graph = as_graph(nodes, links)?;

    let n = nodes.len();
    if n == 0 {
        // as_graph already rejected any link referencing a node
        return Ok(());
    }
    if links.len() != n - 1 {
        return Err(PlanError::Structure(format!(
            "expected {} links spanning {} nodes, found {}",
            n - 1,
            n,
            links.len()
        )));
    }
    let components = connected_components(&graph);
    if components != 1 {
        return Err(PlanError::Structure(format!(
            "link set is disconnected: {} components",
            components
        )));
    }
    Ok(())
}
