//! In-memory scene host
//!
//! `NodeTree` keeps nodes in a slot map so handles stay valid while other
//! nodes are created and destroyed. It is the host used by tests and by tools
//! that edit rigs outside an engine editor.

use crate::foundation::collections::{NodeKey, NodeMap};
use crate::foundation::math::Transform;
use crate::physics::Collider;
use crate::scene::description::NodeDescription;
use crate::scene::host::SceneHost;
use crate::scene::node::Node;

/// Slot-map backed node hierarchy
#[derive(Debug, Default, Clone)]
pub struct NodeTree {
    nodes: NodeMap<Node>,
    roots: Vec<NodeKey>,
}

impl NodeTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node
    pub fn add_root(&mut self, name: &str, local: Transform) -> NodeKey {
        let key = self.nodes.insert(Node::new(name, None, local));
        self.roots.push(key);
        key
    }

    /// Add a child node, `None` when `parent` is unknown
    pub fn add_child(&mut self, parent: NodeKey, name: &str, local: Transform) -> Option<NodeKey> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let key = self.nodes.insert(Node::new(name, Some(parent), local));
        self.nodes[parent].children.push(key);
        Some(key)
    }

    /// Node record
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Root nodes in insertion order
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follow a `/`-separated chain of child names starting below `from`
    pub fn find_path(&self, from: NodeKey, path: &str) -> Option<NodeKey> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(from, |node, segment| self.find_child(node, segment))
    }

    /// Instantiate a description under `parent` (or as a root)
    ///
    /// Returns the handle of the description's top node, `None` when `parent`
    /// is unknown.
    pub fn spawn(&mut self, description: &NodeDescription, parent: Option<NodeKey>) -> Option<NodeKey> {
        let key = match parent {
            Some(parent) => self.add_child(parent, &description.name, description.transform.clone())?,
            None => self.add_root(&description.name, description.transform.clone()),
        };
        self.nodes[key].collider = description.collider;
        for child in &description.children {
            self.spawn(child, Some(key))?;
        }
        Some(key)
    }

    /// Capture a subtree as a description
    pub fn describe(&self, key: NodeKey) -> Option<NodeDescription> {
        let node = self.nodes.get(key)?;
        let children = node
            .children()
            .iter()
            .map(|child| self.describe(*child))
            .collect::<Option<Vec<_>>>()?;
        Some(NodeDescription {
            name: node.name().to_string(),
            transform: node.local_transform().clone(),
            collider: node.collider().copied(),
            children,
        })
    }
}

impl SceneHost for NodeTree {
    type Id = NodeKey;

    fn name(&self, node: NodeKey) -> Option<&str> {
        self.nodes.get(node).map(Node::name)
    }

    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes.get(node).and_then(Node::parent)
    }

    fn children(&self, node: NodeKey) -> Vec<NodeKey> {
        self.nodes
            .get(node)
            .map(|n| n.children().to_vec())
            .unwrap_or_default()
    }

    fn local_transform(&self, node: NodeKey) -> Option<Transform> {
        self.nodes.get(node).map(|n| n.local_transform().clone())
    }

    fn set_local_transform(&mut self, node: NodeKey, transform: Transform) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.local = transform;
                true
            }
            None => false,
        }
    }

    fn collider(&self, node: NodeKey) -> Option<&Collider> {
        self.nodes.get(node)?.collider()
    }

    fn collider_mut(&mut self, node: NodeKey) -> Option<&mut Collider> {
        self.nodes.get_mut(node)?.collider.as_mut()
    }

    fn attach_collider(&mut self, node: NodeKey, collider: Collider) -> Option<Collider> {
        self.nodes.get_mut(node)?.collider.replace(collider)
    }

    fn detach_collider(&mut self, node: NodeKey) -> Option<Collider> {
        self.nodes.get_mut(node)?.collider.take()
    }

    fn create_node(&mut self, name: &str, parent: Option<NodeKey>, local: Transform) -> Option<NodeKey> {
        match parent {
            Some(parent) => self.add_child(parent, name, local),
            None => Some(self.add_root(name, local)),
        }
    }

    fn destroy_node(&mut self, node: NodeKey) -> bool {
        let Some(parent) = self.nodes.get(node).map(Node::parent) else {
            return false;
        };
        for key in self.descendants(node) {
            self.nodes.remove(key);
        }
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|child| *child != node);
                }
            }
            None => self.roots.retain(|root| *root != node),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Point3, Quat, Vec3};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_world_matrix_composes_parent_first() {
        let mut tree = NodeTree::new();
        let turn = Quat::from_axis_angle(&Vec3::y_axis(), FRAC_PI_2);
        let hips = tree.add_root("Hips", Transform::from_position_rotation(Vec3::new(0.0, 1.0, 0.0), turn));
        let leg = tree
            .add_child(hips, "LeftUpperLeg", Transform::from_position(Vec3::new(1.0, 0.0, 0.0)))
            .expect("parent exists");

        // +X in the hips frame points along world -Z
        let position = tree.world_position(leg).expect("known node");
        assert_relative_eq!(position, Point3::new(0.0, 1.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_set_world_rotation_under_rotated_parent() {
        let mut tree = NodeTree::new();
        let turn = Quat::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
        let chest = tree.add_root("Chest", Transform::from_position_rotation(Vec3::zeros(), turn));
        let arm = tree.add_child(chest, "Arm", Transform::identity()).expect("parent exists");

        let target = Quat::from_axis_angle(&Vec3::x_axis(), 0.3);
        assert!(tree.set_world_rotation(arm, target));
        assert_relative_eq!(tree.world_rotation(arm).expect("known node"), target, epsilon = 1e-5);
    }

    #[test]
    fn test_descendants_are_preorder() {
        let description = NodeDescription::new("Hips")
            .with_child(NodeDescription::new("Spine").with_child(NodeDescription::new("Chest")))
            .with_child(NodeDescription::new("Leg"));
        let mut tree = NodeTree::new();
        let hips = tree.spawn(&description, None).expect("root spawn");

        let names: Vec<_> = tree
            .descendants(hips)
            .into_iter()
            .filter_map(|key| tree.name(key).map(str::to_string))
            .collect();
        assert_eq!(names, ["Hips", "Spine", "Chest", "Leg"]);
    }

    #[test]
    fn test_find_path_and_destroy_subtree() {
        let description = NodeDescription::new("Hips")
            .with_child(NodeDescription::new("Spine").with_child(NodeDescription::new("Chest")));
        let mut tree = NodeTree::new();
        let hips = tree.spawn(&description, None).expect("root spawn");
        let spine = tree.find_path(hips, "Spine").expect("spine");
        let chest = tree.find_path(hips, "Spine/Chest").expect("chest");

        assert!(tree.destroy_node(spine));
        assert_eq!(tree.len(), 1);
        assert!(tree.get(chest).is_none());
        assert!(tree.children(hips).is_empty());
        assert!(!tree.destroy_node(spine));
    }

    #[test]
    fn test_describe_roundtrips_spawn() {
        let description = NodeDescription::new("Hips")
            .with_collider(Collider::cuboid(Vec3::new(0.3, 0.2, 0.2), Vec3::zeros()))
            .with_child(NodeDescription::new("Spine").with_transform(Transform::from_position(Vec3::new(0.0, 0.2, 0.0))));
        let mut tree = NodeTree::new();
        let hips = tree.spawn(&description, None).expect("root spawn");

        assert_eq!(tree.describe(hips), Some(description));
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let mut tree = NodeTree::new();
        let root = tree.add_root("Root", Transform::identity());
        assert!(tree.destroy_node(root));
        assert!(tree.add_child(root, "Orphan", Transform::identity()).is_none());
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }
}
