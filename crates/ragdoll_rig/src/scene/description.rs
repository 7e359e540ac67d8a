//! Serializable rig descriptions
//!
//! A description is a plain nested tree of nodes. It is what rig fixtures and
//! saved rigs are written as, in either TOML or RON.

use crate::config::Config;
use crate::foundation::math::Transform;
use crate::physics::Collider;
use serde::{Deserialize, Serialize};

/// One node and its subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Node name
    pub name: String,

    /// Transform relative to the parent
    #[serde(default)]
    pub transform: Transform,

    /// Collider attached to the node
    #[serde(default)]
    pub collider: Option<Collider>,

    /// Child nodes
    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

impl Config for NodeDescription {}

impl NodeDescription {
    /// Node with an identity transform and no collider
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder pattern: Set the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder pattern: Attach a collider
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Builder pattern: Append a child
    pub fn with_child(mut self, child: NodeDescription) -> Self {
        self.children.push(child);
        self
    }
}
