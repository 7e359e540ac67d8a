//! Node record stored by [`NodeTree`](super::NodeTree)

use crate::foundation::collections::NodeKey;
use crate::foundation::math::Transform;
use crate::physics::Collider;

/// A named point in the hierarchy
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) local: Transform,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub(crate) collider: Option<Collider>,
}

impl Node {
    pub(crate) fn new(name: &str, parent: Option<NodeKey>, local: Transform) -> Self {
        Self {
            name: name.to_string(),
            local,
            parent,
            children: Vec::new(),
            collider: None,
        }
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform relative to the parent
    pub fn local_transform(&self) -> &Transform {
        &self.local
    }

    /// Parent handle, `None` for roots
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Attached collider
    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }
}
