//! # ren-core: Rural Network Modeling Core
//!
//! Provides the fundamental data structures for rural electrification
//! network planning.
//!
//! ## Design Philosophy
//!
//! A planning scenario is a set of **demand nodes** (buildings with
//! projected planar coordinates and, where surveyed, energy demand figures)
//! and a set of **links** (undirected connections weighted by Euclidean
//! distance). Links are kept as a flat, immutable edge list with an
//! adjacency index built once at construction:
//!
//! - Read-only after construction, so traversals need no synchronization
//! - Fast topological queries (degree, neighbors, connectivity)
//! - No pointer-linked tree nodes, hence no cyclic-reference concerns
//!
//! ## Quick Start
//!
//! ```
//! use ren_core::{Link, LinkSet, Meters, Node, NodeSet};
//!
//! let nodes = NodeSet::from_nodes([
//!     Node::new("school", 0.0, 0.0),
//!     Node::new("clinic", 3.0, 0.0).with_demand(1200.0, 150.0),
//!     Node::new("mill", 3.0, 4.0),
//! ])
//! .unwrap();
//!
//! let links = LinkSet::from_links([
//!     Link::new("school", "clinic", Meters(3.0)),
//!     Link::new("clinic", "mill", Meters(4.0)),
//! ])
//! .unwrap();
//!
//! assert_eq!(links.degree("clinic"), 2);
//! assert!(links.are_connected("school", "clinic"));
//! assert_eq!(links.neighbors("mill"), vec!["clinic"]);
//! assert_eq!(nodes.require("clinic").unwrap().demand.unwrap().max_power.value(), 150.0);
//! ```
//!
//! ## Core Data Structures
//!
//! - [`NodeSet`] - Ordered collection of demand nodes with O(1) label lookup
//! - [`Node`] - A labeled demand point, optionally carrying [`Demand`] figures
//! - [`LinkSet`] - Immutable undirected edge list plus adjacency index
//! - [`Link`] - A single undirected connection with its Euclidean length
//!
//! ## Label System
//!
//! Nodes are identified by caller-supplied string labels, unique within a
//! node set. Link identity is the unordered pair of endpoint labels; each
//! pair appears at most once and self-loops are rejected at construction.
//!
//! ## Modules
//!
//! - [`diagnostics`] - Validation and diagnostic reporting
//! - [`error`] - Unified error type and result alias
//! - [`geometry`] - Euclidean distances between labeled nodes
//! - [`topology`] - Topological analysis (stats, subnetworks, tree checks)
//! - [`units`] - Newtype unit wrappers (m, Wh, W, $)
//!
//! ## Integration with ren-algo
//!
//! The ren-algo crate builds minimum spanning networks over a [`NodeSet`],
//! decomposes the resulting [`LinkSet`] into branches, and prices standalone
//! Solar Home Systems for individual nodes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod topology;
pub mod units;

pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use error::{PlanError, PlanResult};
pub use topology::*;
pub use units::{Dollars, Meters, WattHours, Watts};

/// Energy demand figures surveyed for a node.
///
/// Only nodes considered for standalone service need demand figures; nodes
/// that are plain waypoints of the shared network can leave them out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    /// Battery capacity a standalone system must provide
    pub required_capacity: WattHours,
    /// Peak power a standalone system must deliver
    pub max_power: Watts,
}

impl Demand {
    /// Create demand figures from raw Wh / W values
    pub fn new(required_capacity: f64, max_power: f64) -> Self {
        Self {
            required_capacity: WattHours(required_capacity),
            max_power: Watts(max_power),
        }
    }
}

/// A demand node: a building at projected planar coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Caller-supplied label, unique within a node set
    pub label: String,
    /// X coordinate in meters (projected)
    pub x: f64,
    /// Y coordinate in meters (projected)
    pub y: f64,
    /// Demand figures, present where standalone service is considered
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub demand: Option<Demand>,
}

impl Node {
    /// Create a node without demand figures
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            demand: None,
        }
    }

    /// Attach demand figures (required capacity in Wh, max power in W)
    pub fn with_demand(mut self, required_capacity: f64, max_power: f64) -> Self {
        self.demand = Some(Demand::new(required_capacity, max_power));
        self
    }
}

/// An ordered collection of demand nodes with O(1) label lookup.
///
/// Construction enforces the node-set invariants: labels are unique and
/// coordinates are finite. Iteration order is insertion order, which keeps
/// downstream algorithms deterministic for a fixed input order.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeSet {
    /// Create an empty node set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node set from an iterator of nodes, enforcing invariants
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> PlanResult<Self> {
        let mut set = Self::new();
        for node in nodes {
            set.insert(node)?;
        }
        Ok(set)
    }

    /// Append a node, rejecting duplicate labels and non-finite coordinates
    pub fn insert(&mut self, node: Node) -> PlanResult<()> {
        if !node.x.is_finite() || !node.y.is_finite() {
            return Err(PlanError::NonFiniteCoordinate {
                label: node.label,
                x: node.x,
                y: node.y,
            });
        }
        if self.index.contains_key(&node.label) {
            return Err(PlanError::DuplicateLabel(node.label));
        }
        self.index.insert(node.label.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Look up a node by label
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.index.get(label).map(|&i| &self.nodes[i])
    }

    /// Look up a node by label, failing with `NodeNotFound` when absent
    pub fn require(&self, label: &str) -> PlanResult<&Node> {
        self.get(label)
            .ok_or_else(|| PlanError::NodeNotFound(label.to_string()))
    }

    /// True if the set holds a node under this label
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the set holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// Validate planning inputs for issues that compromise downstream use.
    ///
    /// Populates the provided `Diagnostics` with any warnings/errors found.
    pub fn validate_into(&self, diag: &mut Diagnostics) {
        if self.nodes.is_empty() {
            diag.add_error("structure", "Node set has no nodes");
            return; // Can't check further
        }

        let without_demand = self.nodes.iter().filter(|n| n.demand.is_none()).count();
        if without_demand == self.nodes.len() {
            diag.add_warning(
                "demand",
                "No node carries demand figures - standalone pricing will fail for every node",
            );
        } else if without_demand > 0 {
            diag.add_warning(
                "demand",
                &format!(
                    "{} of {} nodes carry no demand figures",
                    without_demand,
                    self.nodes.len()
                ),
            );
        }

        // Coincident coordinates produce zero-length links; legal, but worth surfacing
        let mut seen: HashMap<(u64, u64), &str> = HashMap::new();
        for node in &self.nodes {
            let key = (node.x.to_bits(), node.y.to_bits());
            if let Some(first) = seen.get(&key) {
                diag.add_warning_with_entity(
                    "geometry",
                    "coincident coordinates",
                    &format!("nodes '{}' and '{}'", first, node.label),
                );
            } else {
                seen.insert(key, &node.label);
            }
        }
    }
}

/// An undirected connection between two nodes, weighted by Euclidean distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// First endpoint label
    pub node_a: String,
    /// Second endpoint label
    pub node_b: String,
    /// Straight-line length of the connection
    pub distance: Meters,
}

impl Link {
    /// Create a link between two labeled nodes
    pub fn new(node_a: impl Into<String>, node_b: impl Into<String>, distance: Meters) -> Self {
        Self {
            node_a: node_a.into(),
            node_b: node_b.into(),
            distance,
        }
    }

    /// Derived label on the unordered endpoint pair, e.g. `"(clinic, school)"`
    pub fn label(&self) -> String {
        let (first, second) = self.key();
        format!("({}, {})", first, second)
    }

    /// True if this link touches the labeled node
    pub fn touches(&self, label: &str) -> bool {
        self.node_a == label || self.node_b == label
    }

    /// The endpoint opposite the given one, if the link touches it at all
    pub fn other_end(&self, label: &str) -> Option<&str> {
        if self.node_a == label {
            Some(&self.node_b)
        } else if self.node_b == label {
            Some(&self.node_a)
        } else {
            None
        }
    }

    /// Canonical unordered key (lexically smaller endpoint first)
    fn key(&self) -> (&str, &str) {
        if self.node_a <= self.node_b {
            (&self.node_a, &self.node_b)
        } else {
            (&self.node_b, &self.node_a)
        }
    }
}

/// An immutable collection of undirected links with an adjacency index.
///
/// Construction enforces the link-set invariants: no self-loops, each
/// unordered endpoint pair at most once, finite non-negative distances.
/// Whether the links form a spanning tree of some node set is a property of
/// the producer; [`topology::verify_spanning_tree`] checks it explicitly.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: Vec<Link>,
    adjacency: HashMap<String, Vec<usize>>,
}

impl LinkSet {
    /// Build a link set from an iterator of links, enforcing invariants
    pub fn from_links(links: impl IntoIterator<Item = Link>) -> PlanResult<Self> {
        let mut set = Self::default();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        for link in links {
            if link.node_a == link.node_b {
                return Err(PlanError::Structure(format!(
                    "link {} is a self-loop",
                    link.label()
                )));
            }
            if !link.distance.is_finite() || link.distance < Meters::ZERO {
                return Err(PlanError::Validation(format!(
                    "link {} has invalid distance {}",
                    link.label(),
                    link.distance.value()
                )));
            }
            let (first, second) = link.key();
            let key = (first.to_string(), second.to_string());
            if !seen.insert(key) {
                return Err(PlanError::Structure(format!(
                    "link {} appears more than once",
                    link.label()
                )));
            }
            let slot = set.links.len();
            set.adjacency
                .entry(link.node_a.clone())
                .or_default()
                .push(slot);
            set.adjacency
                .entry(link.node_b.clone())
                .or_default()
                .push(slot);
            set.links.push(link);
        }
        Ok(set)
    }

    /// All links in insertion order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Iterate links in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if the set holds no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of links touching the labeled node (0 for an unknown node)
    pub fn degree(&self, node: &str) -> usize {
        self.adjacency.get(node).map_or(0, |slots| slots.len())
    }

    /// True iff a link exists between the unordered pair of labels
    pub fn are_connected(&self, node_a: &str, node_b: &str) -> bool {
        self.adjacency.get(node_a).is_some_and(|slots| {
            slots
                .iter()
                .any(|&i| self.links[i].other_end(node_a) == Some(node_b))
        })
    }

    /// Distinct labels appearing opposite the given node, in link order.
    ///
    /// Empty for a node with no links; never an error.
    pub fn neighbors(&self, node: &str) -> Vec<&str> {
        match self.adjacency.get(node) {
            Some(slots) => slots
                .iter()
                .filter_map(|&i| self.links[i].other_end(node))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The link between the unordered pair of labels, if present
    pub fn find(&self, node_a: &str, node_b: &str) -> Option<&Link> {
        self.adjacency.get(node_a).and_then(|slots| {
            slots
                .iter()
                .map(|&i| &self.links[i])
                .find(|link| link.other_end(node_a) == Some(node_b))
        })
    }

    /// Distinct endpoint labels across all links, in first-appearance order
    pub fn endpoint_labels(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut labels = Vec::new();
        for link in &self.links {
            for endpoint in [link.node_a.as_str(), link.node_b.as_str()] {
                if seen.insert(endpoint) {
                    labels.push(endpoint);
                }
            }
        }
        labels
    }

    /// Total line length across all links
    pub fn total_length(&self) -> Meters {
        self.links.iter().map(|l| l.distance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_set_construction() {
        let nodes = NodeSet::from_nodes([
            Node::new("hut_0", 2.0, 3.0),
            Node::new("hut_1", 4.0, 6.0).with_demand(500.0, 40.0),
        ])
        .unwrap();

        assert_eq!(nodes.len(), 2);
        assert!(nodes.contains("hut_1"));
        assert_eq!(nodes.labels().collect::<Vec<_>>(), vec!["hut_0", "hut_1"]);
        let demand = nodes.require("hut_1").unwrap().demand.unwrap();
        assert_eq!(demand.required_capacity, WattHours(500.0));
        assert_eq!(demand.max_power, Watts(40.0));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = NodeSet::from_nodes([Node::new("hut_0", 0.0, 0.0), Node::new("hut_0", 1.0, 1.0)])
            .unwrap_err();
        assert!(matches!(err, PlanError::DuplicateLabel(label) if label == "hut_0"));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let err = NodeSet::from_nodes([Node::new("hut_0", f64::NAN, 0.0)]).unwrap_err();
        assert!(matches!(err, PlanError::NonFiniteCoordinate { .. }));
    }

    #[test]
    fn test_link_label_is_unordered() {
        let forward = Link::new("b", "a", Meters(1.0));
        let backward = Link::new("a", "b", Meters(1.0));
        assert_eq!(forward.label(), "(a, b)");
        assert_eq!(forward.label(), backward.label());
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = LinkSet::from_links([Link::new("a", "a", Meters(0.0))]).unwrap_err();
        assert!(matches!(err, PlanError::Structure(_)));
    }

    #[test]
    fn test_duplicate_pair_rejected_in_either_orientation() {
        let err = LinkSet::from_links([
            Link::new("a", "b", Meters(1.0)),
            Link::new("b", "a", Meters(1.0)),
        ])
        .unwrap_err();
        assert!(matches!(err, PlanError::Structure(_)));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = LinkSet::from_links([Link::new("a", "b", Meters(-1.0))]).unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)));
    }

    #[test]
    fn test_topology_queries_agree() {
        let links = LinkSet::from_links([
            Link::new("a", "b", Meters(3.0)),
            Link::new("b", "c", Meters(4.0)),
        ])
        .unwrap();

        // neighbors and are_connected agree in both directions
        for node in ["a", "b", "c"] {
            for other in ["a", "b", "c"] {
                assert_eq!(
                    links.neighbors(node).contains(&other),
                    links.are_connected(node, other)
                );
            }
        }

        // degree matches the neighbor count
        assert_eq!(links.degree("b"), links.neighbors("b").len());
        assert_eq!(links.degree("b"), 2);

        // unknown node: empty results, not an error
        assert_eq!(links.degree("z"), 0);
        assert!(links.neighbors("z").is_empty());
        assert!(!links.are_connected("a", "z"));
    }

    #[test]
    fn test_find_and_total_length() {
        let links = LinkSet::from_links([
            Link::new("a", "b", Meters(3.0)),
            Link::new("b", "c", Meters(4.0)),
        ])
        .unwrap();

        assert_eq!(links.find("c", "b").unwrap().distance, Meters(4.0));
        assert!(links.find("a", "c").is_none());
        assert_eq!(links.total_length(), Meters(7.0));
        assert_eq!(links.endpoint_labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_node_serde_round_trip() {
        let node = Node::new("hut_3", 1.5, -2.0).with_demand(800.0, 60.0);
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);

        // demand is optional on the wire
        let bare: Node = serde_json::from_str(r#"{"label":"hut_4","x":0.0,"y":1.0}"#).unwrap();
        assert!(bare.demand.is_none());
    }

    #[test]
    fn test_validate_into_flags_empty_and_coincident() {
        let mut diag = Diagnostics::new();
        NodeSet::new().validate_into(&mut diag);
        assert!(diag.has_errors());

        let mut diag = Diagnostics::new();
        let nodes = NodeSet::from_nodes([
            Node::new("a", 1.0, 1.0).with_demand(100.0, 10.0),
            Node::new("b", 1.0, 1.0).with_demand(100.0, 10.0),
        ])
        .unwrap();
        nodes.validate_into(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warning_count(), 1);
    }
}
