//! Ragdoll collider helpers
//!
//! Editor-time tools for fitting colliders to a bone hierarchy:
//! - dominant axis selection for capsule directions
//! - farthest-descendant lookup for bone lengths
//! - collider center access in world space
//! - rotator nodes that let a collider turn independently of its bone

pub mod axis;
pub mod error;
pub mod helper;
pub mod reach;
pub mod rotator;

pub use axis::{abs_components, dominant_axis, dominant_axis_unit_vector};
pub use error::{RigError, RigResult};
pub use helper::RagdollHelper;
pub use reach::find_farthest_descendant;
pub use rotator::migrate_collider;
