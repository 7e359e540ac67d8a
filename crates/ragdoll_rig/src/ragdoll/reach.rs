//! Longest-reach lookup over a bone subtree

use crate::ragdoll::error::{RigError, RigResult};
use crate::scene::SceneHost;

/// Node of the subtree (root included) farthest from `root` in world space
///
/// Distances are compared strictly, so on a tie the node met first in
/// depth-first order wins, and `root` itself is returned when nothing lies
/// farther than it.
pub fn find_farthest_descendant<H: SceneHost>(host: &H, root: H::Id) -> RigResult<H::Id> {
    let origin = host
        .world_position(root)
        .ok_or_else(|| RigError::stale::<H>(root))?;

    let mut longest = -1.0_f32;
    let mut farthest = root;
    for node in host.descendants(root) {
        let Some(position) = host.world_position(node) else {
            continue;
        };
        let length = (position - origin).norm_squared();
        if length > longest {
            longest = length;
            farthest = node;
        }
    }

    log::trace!("Farthest node from {:?} is {:?} (squared distance {})", root, farthest, longest);
    Ok(farthest)
}
