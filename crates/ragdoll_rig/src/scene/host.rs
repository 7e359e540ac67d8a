//! Scene host trait
//!
//! The editor owns the node hierarchy and its components. Ragdoll helpers only
//! reach it through this capability set, so any host (an engine editor, a test
//! tree) can be plugged in.

use crate::foundation::math::{Mat4, Point3, Quat, Transform};
use crate::physics::Collider;
use std::fmt;

/// Access to a host-owned hierarchy of named nodes carrying colliders
///
/// Lookups return `None` (and setters `false`) for ids the host does not know.
pub trait SceneHost {
    /// Node identifier
    type Id: Copy + Eq + fmt::Debug;

    /// Name of a node
    fn name(&self, node: Self::Id) -> Option<&str>;

    /// Parent of a node, `None` for roots
    fn parent(&self, node: Self::Id) -> Option<Self::Id>;

    /// Direct children in hierarchy order
    fn children(&self, node: Self::Id) -> Vec<Self::Id>;

    /// Transform relative to the parent
    fn local_transform(&self, node: Self::Id) -> Option<Transform>;

    /// Replace the transform relative to the parent
    fn set_local_transform(&mut self, node: Self::Id, transform: Transform) -> bool;

    /// Collider attached directly to a node
    fn collider(&self, node: Self::Id) -> Option<&Collider>;

    /// Mutable access to the collider attached directly to a node
    fn collider_mut(&mut self, node: Self::Id) -> Option<&mut Collider>;

    /// Attach a collider, returning the one it replaced
    fn attach_collider(&mut self, node: Self::Id, collider: Collider) -> Option<Collider>;

    /// Remove and return the collider attached to a node
    fn detach_collider(&mut self, node: Self::Id) -> Option<Collider>;

    /// Create a node under `parent` (or as a root)
    ///
    /// Returns `None` when `parent` is unknown.
    fn create_node(&mut self, name: &str, parent: Option<Self::Id>, local: Transform) -> Option<Self::Id>;

    /// Destroy a node together with its subtree
    fn destroy_node(&mut self, node: Self::Id) -> bool;

    /// First direct child with the given name
    fn find_child(&self, node: Self::Id, name: &str) -> Option<Self::Id> {
        self.children(node)
            .into_iter()
            .find(|child| self.name(*child) == Some(name))
    }

    /// Local-to-world matrix, composed parent first
    fn world_matrix(&self, node: Self::Id) -> Option<Mat4> {
        let local = self.local_transform(node)?.to_matrix();
        match self.parent(node) {
            Some(parent) => Some(self.world_matrix(parent)? * local),
            None => Some(local),
        }
    }

    /// World-space rotation
    fn world_rotation(&self, node: Self::Id) -> Option<Quat> {
        let local = self.local_transform(node)?.rotation;
        match self.parent(node) {
            Some(parent) => Some(self.world_rotation(parent)? * local),
            None => Some(local),
        }
    }

    /// World-space position of the node origin
    fn world_position(&self, node: Self::Id) -> Option<Point3> {
        self.world_matrix(node)
            .map(|matrix| matrix.transform_point(&Point3::origin()))
    }

    /// Set the world-space rotation, keeping the local position and scale
    fn set_world_rotation(&mut self, node: Self::Id, rotation: Quat) -> bool {
        let parent_rotation = match self.parent(node) {
            Some(parent) => match self.world_rotation(parent) {
                Some(rotation) => rotation,
                None => return false,
            },
            None => Quat::identity(),
        };
        let Some(mut local) = self.local_transform(node) else {
            return false;
        };
        local.rotation = parent_rotation.inverse() * rotation;
        self.set_local_transform(node, local)
    }

    /// Every node of the subtree rooted at `root`, root first, depth-first
    fn descendants(&self, root: Self::Id) -> Vec<Self::Id> {
        let mut visited = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            visited.push(node);
            stack.extend(self.children(node).into_iter().rev());
        }
        visited
    }
}
