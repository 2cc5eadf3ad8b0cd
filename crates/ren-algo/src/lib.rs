//! # ren-algo: Network Planning Algorithms
//!
//! This crate provides the algorithms of the rural electrification planning
//! core: minimum spanning network construction, branch decomposition, and
//! standalone Solar Home System pricing.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`mst`] | Pairwise distance matrix and deterministic dense Prim MST |
//! | [`branch`] | Worklist enumeration of nodes downstream of a stem |
//! | [`shs`] | SHS catalog lookup and per-node standalone pricing |
//!
//! ## Architecture
//!
//! All operations are synchronous and stateless: each call takes its inputs
//! (node set, link set, catalog) explicitly and returns a fresh result
//! without mutating anything it was given. The higher-level disconnect
//! optimizer orchestrates calls across these modules; it is not part of
//! this crate.
//!
//! ## Example
//!
//! ```
//! use ren_algo::{branch_nodes, build_mst, standalone_price, ShsCatalog, ShsUnit};
//! use ren_core::{Node, NodeSet};
//!
//! let nodes = NodeSet::from_nodes([
//!     Node::new("a", 0.0, 0.0),
//!     Node::new("b", 3.0, 0.0).with_demand(60.0, 10.0),
//!     Node::new("c", 3.0, 4.0),
//! ])
//! .unwrap();
//!
//! let links = build_mst(&nodes).unwrap();
//! assert_eq!(links.len(), 2);
//!
//! let branch = branch_nodes(&links, "a", &["b"]).unwrap();
//! assert_eq!(branch, vec!["b", "c"]);
//!
//! let catalog = ShsCatalog::new(vec![
//!     ShsUnit::new(100.0, 50.0, 5.0),
//!     ShsUnit::new(300.0, 500.0, 50.0),
//! ]);
//! let price = standalone_price(&nodes, "b", &catalog).unwrap();
//! assert_eq!(price.value(), 300.0);
//! ```

pub mod branch;
pub mod mst;
pub mod shs;

pub use branch::{branch_nodes, downstream_of, BranchError};
pub use mst::{build_mst, distance_matrix};
pub use shs::{standalone_price, ShsCatalog, ShsPrice, ShsUnit};
