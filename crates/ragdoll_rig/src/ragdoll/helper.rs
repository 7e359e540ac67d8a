//! Collider lookup and world-space repositioning
//!
//! A bone's collider either sits on the bone itself or on its rotator child
//! (`<bone><suffix>`). The rotator lets the collider turn without turning the
//! bone. All positions handled here are collider centers in world space.

use crate::config::RigConfig;
use crate::foundation::math::{Point3, Quat, Vec3};
use crate::physics::Collider;
use crate::ragdoll::error::{node_label, RigError, RigResult};
use crate::scene::SceneHost;
use crate::undo::{Edit, EditJournal};

/// Entry point for the ragdoll collider helpers
#[derive(Debug, Clone, Default)]
pub struct RagdollHelper {
    config: RigConfig,
}

impl RagdollHelper {
    /// Create a helper with the given settings
    pub fn new(config: RigConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Node actually owning the collider of `node`
    ///
    /// A collider attached to `node` wins over one on its rotator child.
    pub fn resolve_collider_owner<H: SceneHost>(&self, host: &H, node: H::Id) -> RigResult<H::Id> {
        if host.collider(node).is_some() {
            return Ok(node);
        }

        let name = host.name(node).ok_or_else(|| RigError::stale::<H>(node))?;
        host.find_child(node, &self.config.rotator_name(name))
            .filter(|rotator| host.collider(*rotator).is_some())
            .ok_or_else(|| RigError::NotFound { node: name.to_string() })
    }

    /// Collider of `node`, looked up as in [`resolve_collider_owner`](Self::resolve_collider_owner)
    pub fn resolve_collider<'h, H: SceneHost>(&self, host: &'h H, node: H::Id) -> RigResult<&'h Collider> {
        let owner = self.resolve_collider_owner(host, node)?;
        host.collider(owner)
            .ok_or_else(|| RigError::NotFound { node: node_label(host, node) })
    }

    /// World-space rotation of the node owning the collider
    pub fn collider_world_rotation<H: SceneHost>(&self, host: &H, node: H::Id) -> RigResult<Quat> {
        let owner = self.resolve_collider_owner(host, node)?;
        host.world_rotation(owner)
            .ok_or_else(|| RigError::stale::<H>(owner))
    }

    /// World-space collider center, accepting every shape
    ///
    /// Meshes use the center of their baked bounds. A shape with no center
    /// to read falls back to the owner's local origin instead of failing;
    /// [`collider_world_position`](Self::collider_world_position) is the
    /// strict counterpart.
    pub fn collider_center_world<H: SceneHost>(&self, host: &H, node: H::Id) -> RigResult<Point3> {
        let owner = self.resolve_collider_owner(host, node)?;
        let collider = host.collider(owner).ok_or_else(|| RigError::stale::<H>(owner))?;
        let center = collider.shape.lenient_center().unwrap_or_else(|| {
            log::warn!(
                "{} collider on '{}' has no center, using its origin",
                collider.kind(),
                node_label(host, owner)
            );
            Vec3::zeros()
        });

        let world = host.world_matrix(owner).ok_or_else(|| RigError::stale::<H>(owner))?;
        Ok(world.transform_point(&Point3::from(center)))
    }

    /// World-space collider center for capsules, boxes and spheres
    pub fn collider_world_position<H: SceneHost>(&self, host: &H, node: H::Id) -> RigResult<Point3> {
        let owner = self.resolve_collider_owner(host, node)?;
        let collider = host.collider(owner).ok_or_else(|| RigError::stale::<H>(owner))?;
        let center = collider.shape.center().ok_or(RigError::UnsupportedShape {
            shape: collider.kind(),
            operation: "collider_world_position",
        })?;

        let world = host.world_matrix(owner).ok_or_else(|| RigError::stale::<H>(owner))?;
        Ok(world.transform_point(&Point3::from(center)))
    }

    /// Move the collider center of `node` to `position` (world space)
    ///
    /// Only capsules, boxes and spheres are accepted; anything else fails
    /// before the scene is touched.
    pub fn set_collider_world_position<H, J>(
        &self,
        host: &mut H,
        journal: &mut J,
        node: H::Id,
        position: Point3,
    ) -> RigResult<()>
    where
        H: SceneHost,
        J: EditJournal<H::Id> + ?Sized,
    {
        let owner = self.resolve_collider_owner(&*host, node)?;
        let before = *host.collider(owner).ok_or_else(|| RigError::stale::<H>(owner))?;

        let mut after = before;
        let center = after.shape.center_mut().ok_or(RigError::UnsupportedShape {
            shape: before.kind(),
            operation: "set_collider_world_position",
        })?;
        let world = host.world_matrix(owner).ok_or_else(|| RigError::stale::<H>(owner))?;
        let inverse = world.try_inverse().ok_or_else(|| RigError::DegenerateTransform {
            node: node_label(&*host, owner),
        })?;
        *center = inverse.transform_point(&position).coords;

        let slot = host.collider_mut(owner).ok_or_else(|| RigError::stale::<H>(owner))?;
        *slot = after;
        log::debug!("Collider center of {:?} set to {:?} (local)", owner, after.shape.center());
        journal.record("Set collider position", Edit::ColliderChanged { node: owner, before, after });
        Ok(())
    }

    /// Rotate `node` to `rotation` (world space) while its collider center
    /// stays where it is in the world
    ///
    /// Meant for rotator nodes, whose collider would otherwise swing around
    /// the bone.
    pub fn rotate_collider_preserving_position<H, J>(
        &self,
        host: &mut H,
        journal: &mut J,
        node: H::Id,
        rotation: Quat,
    ) -> RigResult<()>
    where
        H: SceneHost,
        J: EditJournal<H::Id> + ?Sized,
    {
        let previous = self.collider_world_position(&*host, node)?;

        let before = host.local_transform(node).ok_or_else(|| RigError::stale::<H>(node))?;
        if !host.set_world_rotation(node, rotation) {
            return Err(RigError::stale::<H>(node));
        }
        let after = host.local_transform(node).ok_or_else(|| RigError::stale::<H>(node))?;
        log::debug!("Rotated {:?} to {:?}", node, rotation);
        journal.record("Rotate collider", Edit::TransformChanged { node, before, after });

        self.set_collider_world_position(host, journal, node, previous)?;

        let restored = self.collider_world_position(&*host, node)?;
        let drift = (restored - previous).norm();
        if drift > self.config.position_tolerance {
            log::warn!(
                "Collider of '{}' drifted by {} while rotating",
                node_label(&*host, node),
                drift
            );
        }
        Ok(())
    }
}
