//! # Ragdoll Rig
//!
//! Editor-time helpers for configuring physics colliders on a ragdoll bone
//! hierarchy.
//!
//! ## Features
//!
//! - **Axis Utilities**: Pick the dominant axis of a bone direction
//! - **Reach Lookup**: Find the farthest node below a bone
//! - **Collider Placement**: Read and move collider centers in world space
//! - **Rotator Nodes**: Rotate a collider without rotating its bone
//! - **Undo Journal**: Every scene edit is reported to a pluggable journal
//!
//! ## Quick Start
//!
//! ```rust
//! use ragdoll_rig::prelude::*;
//!
//! let mut tree = NodeTree::new();
//! let bone = tree.add_root("Spine", Transform::identity());
//! tree.attach_collider(bone, Collider::cuboid(Vec3::new(1.0, 1.0, 1.0), Vec3::zeros()));
//!
//! let helper = RagdollHelper::new(RigConfig::default());
//! let mut undo = UndoStack::new();
//! let rotator = helper.get_or_create_rotator_node(&mut tree, &mut undo, bone)?;
//!
//! assert_eq!(tree.name(rotator), Some("Spine_ColliderRotator"));
//! assert!(tree.collider(bone).is_none());
//! # Ok::<(), RigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod ragdoll;
pub mod scene;
pub mod undo;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, RigConfig},
        foundation::{
            collections::NodeKey,
            math::{Axis, Point3, Quat, Transform, Vec3},
        },
        physics::{Aabb, Collider, ColliderShape, ShapeKind},
        ragdoll::{
            dominant_axis, dominant_axis_unit_vector, find_farthest_descendant, migrate_collider,
            RagdollHelper, RigError, RigResult,
        },
        scene::{NodeDescription, NodeTree, SceneHost},
        undo::{Edit, EditJournal, NoJournal, UndoStack},
    };
}
