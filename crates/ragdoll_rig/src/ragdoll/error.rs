//! Error types for ragdoll collider helpers

use crate::physics::ShapeKind;
use crate::scene::SceneHost;
use thiserror::Error;

/// Errors reported by the ragdoll helpers
///
/// Every variant points at a scene set up in a way the requested operation
/// cannot handle; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RigError {
    /// Neither the node nor its rotator child carries a collider
    #[error("node '{node}' does not contain a collider")]
    NotFound {
        /// Node name
        node: String,
    },

    /// A rotator was requested for a bone without a collider
    #[error("bone '{bone}' does not have a collider attached to it or to a rotator node")]
    MissingCollider {
        /// Bone name
        bone: String,
    },

    /// The operation does not handle this collider shape
    #[error("{shape} colliders are not supported by {operation}")]
    UnsupportedShape {
        /// Offending shape
        shape: ShapeKind,
        /// Operation that rejected it
        operation: &'static str,
    },

    /// The migration target already owns a collider
    #[error("node '{node}' already has a collider")]
    ColliderOccupied {
        /// Node name
        node: String,
    },

    /// A world matrix could not be inverted (zero scale somewhere up the chain)
    #[error("node '{node}' has a degenerate world transform")]
    DegenerateTransform {
        /// Node name
        node: String,
    },

    /// The host no longer knows the node
    #[error("node {node} is not part of the scene")]
    StaleNode {
        /// Debug form of the node id
        node: String,
    },
}

/// Result alias for ragdoll helpers
pub type RigResult<T> = Result<T, RigError>;

impl RigError {
    pub(crate) fn stale<H: SceneHost>(node: H::Id) -> Self {
        Self::StaleNode {
            node: format!("{node:?}"),
        }
    }
}

/// Name of a node for error messages, falling back to the id
pub(crate) fn node_label<H: SceneHost>(host: &H, node: H::Id) -> String {
    host.name(node)
        .map_or_else(|| format!("{node:?}"), str::to_string)
}
