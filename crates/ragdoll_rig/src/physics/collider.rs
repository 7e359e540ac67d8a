//! Collider components attached to ragdoll bones
//!
//! A collider is a shape plus the flags shared by every shape. Shapes store
//! their center in the local space of the node that owns the collider.

use crate::foundation::math::{Axis, Vec3};
use crate::physics::aabb::Aabb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capsule parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapsuleShape {
    /// Radius of the hemispherical caps
    pub radius: f32,
    /// Total height including both caps
    pub height: f32,
    /// Local axis the capsule extends along
    pub direction: Axis,
    /// Local-space center
    pub center: Vec3,
}

/// Box parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    /// Full edge lengths
    pub size: Vec3,
    /// Local-space center
    pub center: Vec3,
}

/// Sphere parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereShape {
    /// Sphere radius
    pub radius: f32,
    /// Local-space center
    pub center: Vec3,
}

/// Mesh parameters
///
/// Only the precomputed local bounds of the baked mesh are kept; `None` when
/// no mesh has been baked yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshShape {
    /// Local bounding volume of the baked mesh
    pub bounds: Option<Aabb>,
}

/// The concrete shape of a collider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Capsule aligned with one local axis
    Capsule(CapsuleShape),
    /// Oriented box
    Box(BoxShape),
    /// Sphere
    Sphere(SphereShape),
    /// Baked triangle mesh
    Mesh(MeshShape),
}

/// Shape discriminant, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`ColliderShape::Capsule`]
    Capsule,
    /// [`ColliderShape::Box`]
    Box,
    /// [`ColliderShape::Sphere`]
    Sphere,
    /// [`ColliderShape::Mesh`]
    Mesh,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Capsule => "capsule",
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Mesh => "mesh",
        };
        f.write_str(name)
    }
}

impl ColliderShape {
    /// Shape discriminant
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Capsule(_) => ShapeKind::Capsule,
            Self::Box(_) => ShapeKind::Box,
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Mesh(_) => ShapeKind::Mesh,
        }
    }

    /// Stored center of the primitive shapes
    ///
    /// Mesh colliders have no editable center and return `None`.
    pub fn center(&self) -> Option<Vec3> {
        match self {
            Self::Capsule(capsule) => Some(capsule.center),
            Self::Box(cuboid) => Some(cuboid.center),
            Self::Sphere(sphere) => Some(sphere.center),
            Self::Mesh(_) => None,
        }
    }

    /// Mutable access to the stored center of the primitive shapes
    pub fn center_mut(&mut self) -> Option<&mut Vec3> {
        match self {
            Self::Capsule(capsule) => Some(&mut capsule.center),
            Self::Box(cuboid) => Some(&mut cuboid.center),
            Self::Sphere(sphere) => Some(&mut sphere.center),
            Self::Mesh(_) => None,
        }
    }

    /// Center including meshes, read from the baked bounds
    ///
    /// `None` only for a mesh collider without baked bounds.
    pub fn lenient_center(&self) -> Option<Vec3> {
        match self {
            Self::Mesh(mesh) => mesh.bounds.as_ref().map(Aabb::center),
            _ => self.center(),
        }
    }
}

/// Collider attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// The collision shape
    pub shape: ColliderShape,

    /// Is this a trigger volume (generates events but no physical response)?
    #[serde(default)]
    pub is_trigger: bool,
}

impl Collider {
    /// Create a new solid collider
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            is_trigger: false,
        }
    }

    /// Capsule collider
    pub fn capsule(radius: f32, height: f32, direction: Axis, center: Vec3) -> Self {
        Self::new(ColliderShape::Capsule(CapsuleShape {
            radius,
            height,
            direction,
            center,
        }))
    }

    /// Box collider
    pub fn cuboid(size: Vec3, center: Vec3) -> Self {
        Self::new(ColliderShape::Box(BoxShape { size, center }))
    }

    /// Sphere collider
    pub fn sphere(radius: f32, center: Vec3) -> Self {
        Self::new(ColliderShape::Sphere(SphereShape { radius, center }))
    }

    /// Mesh collider from baked local bounds
    pub fn mesh(bounds: Option<Aabb>) -> Self {
        Self::new(ColliderShape::Mesh(MeshShape { bounds }))
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Shape discriminant
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}
