//! Collision detection for game objects
//!
//! Provides layered hit-testing between bounding volumes, with quad-tree
//! acceleration for static triangle meshes.
//!
//! # Architecture
//!
//! This module follows Game Engine Architecture 3rd Edition (GEA 13.3.4):
//! - **Model Space Storage**: shapes are stored in local coordinates
//! - **Cached World Transforms**: `transform` recomputes a world-space copy
//!   once per move; hit-tests only read the cache
//! - **Layer Filtering**: volumes are grouped into named layers so queries
//!   test one collidable category at a time
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (rays, spheres, boxes, triangles)
//! - [`mesh`] - Triangle-mesh collision geometry with optional quad-tree index
//! - [`volume`] - Named bounding volumes with cached world-space shapes
//! - [`layer`] - Insertion-ordered volume collections
//! - [`context`] - Layer registry and nearest-one hit-test dispatch

pub mod context;
pub mod layer;
pub mod mesh;
pub mod primitives;
pub mod volume;

// Re-export commonly used types
pub use context::{CollisionContext, CollisionError, CollisionResult, ResultPolicy};
pub use layer::{CollisionLayer, LayerId};
pub use mesh::CollideMesh;
pub use primitives::{Aabb, BoundingSphere, Ray, Triangle, TriangleHit};
pub use volume::{CollideVolume, OwnerId, VolumeKey, VolumeShape};
