//! Undo journal integration
//!
//! Every scene mutation made by the ragdoll helpers is reported to an
//! [`EditJournal`] together with a short label. The journal belongs to the
//! host; [`NoJournal`] discards edits and [`UndoStack`] keeps them so they can
//! be reverted.

pub mod stack;

pub use stack::UndoStack;

use crate::foundation::math::Transform;
use crate::physics::Collider;

/// A single recorded scene mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Edit<Id> {
    /// A node's local transform was replaced
    TransformChanged {
        /// Edited node
        node: Id,
        /// Transform before the edit
        before: Transform,
        /// Transform after the edit
        after: Transform,
    },
    /// A collider's fields changed in place
    ColliderChanged {
        /// Node owning the collider
        node: Id,
        /// Collider before the edit
        before: Collider,
        /// Collider after the edit
        after: Collider,
    },
    /// A node was created
    NodeCreated {
        /// The new node
        node: Id,
        /// Its name
        name: String,
    },
    /// A collider was attached to a node
    ColliderAdded {
        /// Receiving node
        node: Id,
        /// Attached collider
        collider: Collider,
    },
    /// A collider was removed from a node
    ColliderRemoved {
        /// Previous owner
        node: Id,
        /// Removed collider
        collider: Collider,
    },
}

impl<Id: Copy> Edit<Id> {
    /// Node the edit applies to
    pub fn node(&self) -> Id {
        match self {
            Self::TransformChanged { node, .. }
            | Self::ColliderChanged { node, .. }
            | Self::NodeCreated { node, .. }
            | Self::ColliderAdded { node, .. }
            | Self::ColliderRemoved { node, .. } => *node,
        }
    }
}

/// Receiver of scene edits
pub trait EditJournal<Id> {
    /// Record one edit under a human-readable label
    fn record(&mut self, label: &'static str, edit: Edit<Id>);
}

/// Journal that drops every edit
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJournal;

impl<Id> EditJournal<Id> for NoJournal {
    fn record(&mut self, _label: &'static str, _edit: Edit<Id>) {}
}
