//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a node stored in a [`NodeTree`](crate::scene::NodeTree)
    pub struct NodeKey;
}

/// Handle-based map keyed by node handles
pub type NodeMap<T> = SlotMap<NodeKey, T>;
