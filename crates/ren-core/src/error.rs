//! Unified error types for the ren ecosystem
//!
//! This module provides a common error type [`PlanError`] that can represent
//! errors from any part of the system. Algorithm-specific error types can be
//! converted to `PlanError` for uniform error handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use ren_core::{PlanError, PlanResult};
//!
//! fn plan_network(nodes: &NodeSet) -> PlanResult<()> {
//!     let links = build_mst(nodes)?;
//!     verify_spanning_tree(nodes, &links)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all planning operations.
///
/// This enum provides a common error representation for the ren ecosystem,
/// allowing lookup, validation, and structural errors to be handled
/// uniformly.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A label was looked up in a node set that does not contain it
    #[error("node '{0}' not found in node set")]
    NodeNotFound(String),

    /// A node was inserted under a label the set already holds
    #[error("duplicate node label '{0}'")]
    DuplicateLabel(String),

    /// A node carried a NaN or infinite coordinate
    #[error("node '{label}' has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate {
        /// Label of the offending node
        label: String,
        /// X coordinate as supplied
        x: f64,
        /// Y coordinate as supplied
        y: f64,
    },

    /// A node without demand figures was priced for standalone service
    #[error("node '{0}' carries no demand figures")]
    MissingDemand(String),

    /// Network structure errors (self-loops, duplicate links, non-tree link sets)
    #[error("Structure error: {0}")]
    Structure(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using PlanError.
pub type PlanResult<T> = Result<T, PlanError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for PlanError {
    fn from(err: anyhow::Error) -> Self {
        PlanError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for PlanError {
    fn from(s: String) -> Self {
        PlanError::Other(s)
    }
}

impl From<&str> for PlanError {
    fn from(s: &str) -> Self {
        PlanError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlanError::NodeNotFound("hut_12".to_string());
        assert_eq!(err.to_string(), "node 'hut_12' not found in node set");

        let err = PlanError::Structure("link set is not a tree".to_string());
        assert_eq!(err.to_string(), "Structure error: link set is not a tree");
    }

    #[test]
    fn test_conversion_from_anyhow() {
        let err: PlanError = anyhow::anyhow!("backing store unavailable").into();
        assert!(matches!(err, PlanError::Other(_)));
    }
}
