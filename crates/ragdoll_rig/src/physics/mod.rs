//! Physics module for collider shapes
//!
//! Provides the collider component and the bounding volumes that ragdoll
//! helpers read and reposition.

pub mod aabb;
pub mod collider;

pub use aabb::Aabb;
pub use collider::{
    BoxShape,
    CapsuleShape,
    Collider,
    ColliderShape,
    MeshShape,
    ShapeKind,
    SphereShape,
};
