//! # Collision Engine
//!
//! A 3D collision detection library for real-time games.
//!
//! ## Features
//!
//! - **Bounding Volumes**: boxes, spheres, rays, and triangle meshes with
//!   cached world-space transforms
//! - **Collision Layers**: named, queryable groups of volumes per
//!   collidable category
//! - **Nearest-Hit Queries**: pairwise shape dispatch returning the
//!   closest hit across a layer
//! - **Quad-Tree Acceleration**: XZ-plane spatial index for static
//!   terrain-style meshes
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let mut context = CollisionContext::new();
//! let enemies = context.create_layer("enemies");
//!
//! let target = context.insert_volume(
//!     CollideVolume::sphere("enemy-core", BoundingSphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0))
//!         .with_owner(OwnerId(7)),
//! );
//! context.add_to_layer(enemies, target)?;
//!
//! let probe = context.insert_volume(CollideVolume::ray(
//!     "aim",
//!     Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0)),
//! ));
//!
//! let hit = context
//!     .hit_test(probe, enemies, ResultPolicy::NearestOne)?
//!     .expect("ray points at the enemy");
//! assert!((hit.distance - 4.0).abs() < 1e-4);
//! assert_eq!(hit.owner, Some(OwnerId(7)));
//! # Ok::<(), collision_engine::CollisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod foundation;
pub mod spatial;

pub use collision::{
    CollideMesh, CollideVolume, CollisionContext, CollisionError, CollisionLayer,
    CollisionResult, LayerId, OwnerId, ResultPolicy, VolumeKey, VolumeShape,
};

/// Common imports for library users
pub mod prelude {
    pub use crate::collision::{
        Aabb, BoundingSphere, CollideMesh, CollideVolume, CollisionContext, CollisionError,
        CollisionLayer, CollisionResult, LayerId, OwnerId, Ray, ResultPolicy, Triangle,
        TriangleHit, VolumeKey, VolumeShape,
    };
    pub use crate::foundation::math::{Mat4, Transform, Vec3};
    pub use crate::spatial::{QuadTree, QuadTreeConfig};
}
