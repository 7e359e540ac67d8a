//! Rotator nodes and collider migration
//!
//! A collider is rotated independently of its bone by moving it onto a child
//! node named `<bone><suffix>`, created with an identity local transform the
//! first time it is needed.

use crate::foundation::math::Transform;
use crate::physics::{BoxShape, CapsuleShape, Collider, ColliderShape};
use crate::ragdoll::error::{node_label, RigError, RigResult};
use crate::ragdoll::helper::RagdollHelper;
use crate::scene::SceneHost;
use crate::undo::{Edit, EditJournal};

impl RagdollHelper {
    /// Rotator node of `bone`, created on first use
    ///
    /// Creating the rotator moves the bone's collider onto it, so the bone must
    /// carry a capsule or box collider at that point. Later calls return the
    /// existing node untouched.
    pub fn get_or_create_rotator_node<H, J>(
        &self,
        host: &mut H,
        journal: &mut J,
        bone: H::Id,
    ) -> RigResult<H::Id>
    where
        H: SceneHost,
        J: EditJournal<H::Id> + ?Sized,
    {
        let bone_name = host
            .name(bone)
            .ok_or_else(|| RigError::stale::<H>(bone))?
            .to_string();
        let rotator_name = self.config().rotator_name(&bone_name);

        if let Some(rotator) = host.find_child(bone, &rotator_name) {
            return Ok(rotator);
        }

        let collider = host
            .collider(bone)
            .copied()
            .ok_or_else(|| RigError::MissingCollider { bone: bone_name.clone() })?;
        // Reject unsupported shapes before anything is created
        reattached(&collider)?;

        let rotator = host
            .create_node(&rotator_name, Some(bone), Transform::identity())
            .ok_or_else(|| RigError::stale::<H>(bone))?;
        journal.record("Create rotator", Edit::NodeCreated { node: rotator, name: rotator_name });

        migrate_collider(host, journal, bone, rotator)?;
        log::debug!("Created collider rotator for bone '{}'", bone_name);
        Ok(rotator)
    }
}

/// Move the collider of `from` onto `to`
///
/// Only capsules and boxes can move. The new collider copies every shape
/// parameter and the trigger flag; the original is removed, so exactly one
/// collider remains, owned by `to`.
pub fn migrate_collider<H, J>(host: &mut H, journal: &mut J, from: H::Id, to: H::Id) -> RigResult<()>
where
    H: SceneHost,
    J: EditJournal<H::Id> + ?Sized,
{
    let original = host
        .collider(from)
        .copied()
        .ok_or_else(|| RigError::NotFound { node: node_label(&*host, from) })?;
    let moved = reattached(&original)?;

    if host.name(to).is_none() {
        return Err(RigError::stale::<H>(to));
    }
    if host.collider(to).is_some() {
        return Err(RigError::ColliderOccupied { node: node_label(&*host, to) });
    }

    host.attach_collider(to, moved);
    journal.record("Attach collider", Edit::ColliderAdded { node: to, collider: moved });
    host.detach_collider(from);
    journal.record("Remove collider", Edit::ColliderRemoved { node: from, collider: original });

    log::debug!("Moved {} collider from {:?} to {:?}", original.kind(), from, to);
    Ok(())
}

fn reattached(original: &Collider) -> RigResult<Collider> {
    let shape = match &original.shape {
        ColliderShape::Capsule(capsule) => ColliderShape::Capsule(CapsuleShape {
            direction: capsule.direction,
            radius: capsule.radius,
            height: capsule.height,
            center: capsule.center,
        }),
        ColliderShape::Box(cuboid) => ColliderShape::Box(BoxShape {
            size: cuboid.size,
            center: cuboid.center,
        }),
        other => {
            return Err(RigError::UnsupportedShape {
                shape: other.kind(),
                operation: "migrate_collider",
            })
        }
    };

    Ok(Collider {
        shape,
        is_trigger: original.is_trigger,
    })
}
