//! Scene hierarchy access
//!
//! The [`SceneHost`] trait is the seam between the collider helpers and
//! whatever owns the node hierarchy. [`NodeTree`] is the in-memory host.

pub mod description;
pub mod host;
pub mod node;
pub mod tree;

pub use description::NodeDescription;
pub use host::SceneHost;
pub use node::Node;
pub use tree::NodeTree;
