//! Triangle-mesh collision geometry
//!
//! Stores triangles in model space, keeps a transformed world-space copy
//! for testing, and optionally accelerates queries with a quad-tree index
//! rebuilt when the applied transform changes.

use crate::collision::primitives::{BoundingSphere, Ray, Triangle, TriangleHit};
use crate::foundation::math::{transform_point, Mat4, Vec3};
use crate::spatial::{QuadTree, QuadTreeConfig};

/// A triangle-mesh collision shape
///
/// Model-space triangles are never modified after construction; the
/// world-space copy is recomputed by [`CollideMesh::transform`]. Queries
/// without a spatial index scan triangles in order and stop at the first
/// hit; indexed queries return the closest hit.
#[derive(Debug, Clone)]
pub struct CollideMesh {
    /// Triangles in model space (local coordinates, never modified)
    local_triangles: Vec<Triangle>,

    /// Triangles in world space, rebuilt on transform change
    world_triangles: Vec<Triangle>,

    /// Optional spatial index over the world-space triangles
    quadtree: Option<QuadTree>,

    /// Index configuration, preserved across rebuilds
    quadtree_config: Option<QuadTreeConfig>,

    /// Matrix last applied by `transform`
    last_matrix: Option<Mat4>,

    /// Number of index builds performed (instrumentation)
    rebuilds: u32,
}

impl CollideMesh {
    /// Create a mesh from a flat triangle list (vertices in groups of 3)
    ///
    /// A trailing incomplete group is ignored.
    pub fn from_triangle_soup(vertices: &[Vec3]) -> Self {
        let triangles = vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
            .collect();
        Self::from_triangles(triangles)
    }

    /// Create a mesh from model-space vertices and triangle indices
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for the vertex array; mismatched
    /// indices are a caller programming error.
    pub fn from_vertices(vertices: &[Vec3], indices: &[u32]) -> Self {
        let triangles = indices
            .chunks_exact(3)
            .map(|chunk| {
                Triangle::new(
                    vertices[chunk[0] as usize],
                    vertices[chunk[1] as usize],
                    vertices[chunk[2] as usize],
                )
            })
            .collect();
        Self::from_triangles(triangles)
    }

    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self {
            world_triangles: triangles.clone(),
            local_triangles: triangles,
            quadtree: None,
            quadtree_config: None,
            last_matrix: None,
            rebuilds: 0,
        }
    }

    /// Attach a quad-tree index, built over the current world-space triangles
    ///
    /// The configuration (including max depth) is retained and reused for
    /// every rebuild triggered by a transform change.
    pub fn enable_quadtree(&mut self, config: QuadTreeConfig) {
        self.quadtree = Some(QuadTree::build(self.world_triangles.clone(), &config));
        self.quadtree_config = Some(config);
        self.rebuilds += 1;
    }

    /// Recompute the world-space triangles from the model-space set
    ///
    /// Skips all work when `matrix` equals the previously applied matrix,
    /// so a stationary mesh is never re-transformed or re-indexed. The
    /// replacement index is built fully before being swapped in.
    pub fn transform(&mut self, matrix: &Mat4) {
        if self.last_matrix.as_ref() == Some(matrix) {
            return;
        }

        self.world_triangles = self
            .local_triangles
            .iter()
            .map(|tri| {
                Triangle::new(
                    transform_point(matrix, tri.v0),
                    transform_point(matrix, tri.v1),
                    transform_point(matrix, tri.v2),
                )
            })
            .collect();
        self.last_matrix = Some(*matrix);

        if let Some(config) = self.quadtree_config {
            let rebuilt = QuadTree::build(self.world_triangles.clone(), &config);
            self.quadtree = Some(rebuilt);
            self.rebuilds += 1;
            log::trace!(
                "rebuilt quad tree after transform change ({} rebuilds total)",
                self.rebuilds
            );
        }
    }

    /// Test a ray against the mesh
    ///
    /// With an index attached this returns the closest hit; the unindexed
    /// scan returns the first triangle hit encountered, which is expected
    /// for low-triangle-count meshes.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<TriangleHit> {
        if let Some(tree) = &self.quadtree {
            return tree.query_ray(ray);
        }

        for triangle in &self.world_triangles {
            if let Some(t) = triangle.intersect_ray(ray) {
                return Some(TriangleHit {
                    distance: t,
                    point: ray.point_at(t),
                    normal: triangle.normal(),
                });
            }
        }
        None
    }

    /// Test a sphere against the mesh
    ///
    /// Same first-hit/closest-hit split as [`CollideMesh::intersect_ray`].
    /// The reported distance is the center-to-contact distance minus the
    /// sphere radius (negative when penetrating).
    pub fn intersect_sphere(&self, sphere: &BoundingSphere) -> Option<TriangleHit> {
        if let Some(tree) = &self.quadtree {
            return tree.query_sphere(sphere);
        }

        for triangle in &self.world_triangles {
            if let Some((point, center_dist)) = triangle.intersect_sphere(sphere) {
                return Some(TriangleHit {
                    distance: center_dist - sphere.radius,
                    point,
                    normal: triangle.normal(),
                });
            }
        }
        None
    }

    /// The world-space triangles
    pub fn triangles(&self) -> &[Triangle] {
        &self.world_triangles
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.local_triangles.len()
    }

    /// The attached spatial index, if any
    pub fn quadtree(&self) -> Option<&QuadTree> {
        self.quadtree.as_ref()
    }

    /// Number of index builds performed so far
    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}
