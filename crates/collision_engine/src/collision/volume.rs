//! Bounding volumes attached to game entities
//!
//! Shapes are stored in model space and carry a cached world-space copy
//! recomputed by [`CollideVolume::transform`], so hit-tests never transform
//! geometry on the fly.

use slotmap::new_key_type;

use crate::collision::layer::LayerId;
use crate::collision::mesh::CollideMesh;
use crate::collision::primitives::{Aabb, BoundingSphere, Ray};
use crate::foundation::math::{transform_point, Mat4};

new_key_type! {
    /// Stable handle to a volume registered with a [`CollisionContext`]
    ///
    /// [`CollisionContext`]: crate::collision::context::CollisionContext
    pub struct VolumeKey;
}

/// Opaque reference to the game entity that placed a volume
///
/// The collision system never interprets this value; callers use it to map
/// hit results back to their own objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(
    /// Caller-chosen entity identifier
    pub u64,
);

/// Shape variants a volume can carry
///
/// Each variant stores its local-space definition next to the world-space
/// copy that hit-tests read.
#[derive(Debug, Clone)]
pub enum VolumeShape {
    /// Axis-aligned box
    Box {
        /// Model-space box
        local: Aabb,
        /// World-space box, recomputed on transform
        world: Aabb,
    },
    /// Sphere; the radius is not scaled by transforms
    Sphere {
        /// Model-space sphere
        local: BoundingSphere,
        /// World-space sphere, recomputed on transform
        world: BoundingSphere,
    },
    /// Ray for picking and line-of-sight queries
    Ray {
        /// Model-space ray
        local: Ray,
        /// World-space ray, recomputed on transform
        world: Ray,
    },
    /// Triangle mesh, optionally quad-tree indexed
    Model(CollideMesh),
}

/// A named bounding volume
///
/// Belongs to at most one layer at a time; the layer membership is a plain
/// id rather than a pointer, so a volume stays valid and reusable after
/// removal from its layer.
#[derive(Debug, Clone)]
pub struct CollideVolume {
    name: String,
    owner: Option<OwnerId>,
    layer: Option<LayerId>,
    shape: VolumeShape,
}

impl CollideVolume {
    /// Create a box volume
    pub fn boxed(name: impl Into<String>, local: Aabb) -> Self {
        Self::with_shape(name, VolumeShape::Box { local, world: local })
    }

    /// Create a sphere volume
    pub fn sphere(name: impl Into<String>, local: BoundingSphere) -> Self {
        Self::with_shape(name, VolumeShape::Sphere { local, world: local })
    }

    /// Create a ray volume
    pub fn ray(name: impl Into<String>, local: Ray) -> Self {
        Self::with_shape(name, VolumeShape::Ray { local, world: local })
    }

    /// Create a triangle-mesh volume
    pub fn model(name: impl Into<String>, mesh: CollideMesh) -> Self {
        Self::with_shape(name, VolumeShape::Model(mesh))
    }

    fn with_shape(name: impl Into<String>, shape: VolumeShape) -> Self {
        Self {
            name: name.into(),
            owner: None,
            layer: None,
            shape,
        }
    }

    /// Attach the owning game entity's reference
    #[must_use]
    pub fn with_owner(mut self, owner: OwnerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// The volume's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning game entity, if any
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    /// The layer this volume currently belongs to, if any
    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    pub(crate) fn set_layer(&mut self, layer: Option<LayerId>) {
        self.layer = layer;
    }

    /// The volume's shape, world-space copies included
    pub fn shape(&self) -> &VolumeShape {
        &self.shape
    }

    /// Mutable access to the shape, e.g. to attach a mesh index
    pub fn shape_mut(&mut self) -> &mut VolumeShape {
        &mut self.shape
    }

    /// Recompute the world-space shape from the local definition
    ///
    /// Idempotent: repeated calls with the same matrix leave the world
    /// state unchanged. Must be called before hit-tests reflect a moved
    /// object.
    pub fn transform(&mut self, matrix: &Mat4) {
        match &mut self.shape {
            VolumeShape::Box { local, world } => {
                let corners = local.corners().map(|c| transform_point(matrix, c));
                *world = Aabb::from_points(&corners);
            }
            VolumeShape::Sphere { local, world } => {
                world.center = transform_point(matrix, local.center);
                world.radius = local.radius;
            }
            VolumeShape::Ray { local, world } => {
                world.origin = transform_point(matrix, local.origin);
                world.direction = matrix.transform_vector(&local.direction).normalize();
            }
            VolumeShape::Model(mesh) => mesh.transform(matrix),
        }
    }
}
