//! Quad-tree spatial partitioning for static triangle meshes
//!
//! Recursively divides a mesh's triangles into four quadrants over the XZ
//! plane to bound the candidate-triangle set tested per query. The Y axis
//! is ignored for partitioning; the split is intended for horizontal
//! terrain-style meshes.

use serde::{Deserialize, Serialize};

use crate::collision::primitives::{Aabb, BoundingSphere, Ray, Triangle, TriangleHit};
use crate::foundation::math::Vec3;

/// Configuration for quad-tree construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadTreeConfig {
    /// Maximum subdivision depth; 0 builds a single leaf
    pub max_depth: u32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

/// Single node in the quad-tree hierarchy
///
/// Branch nodes hold the triangles that straddle their split lines (the
/// "medline" set); leaves hold every triangle that reached them.
/// A node is a leaf iff it has no children.
#[derive(Debug, Clone)]
pub struct QuadNode {
    /// World-space bounds of this node
    pub bounds: Aabb,

    /// Depth in the tree (0 = root)
    pub depth: u32,

    /// Medline triangles at branch nodes, all remaining triangles at leaves
    pub triangles: Vec<Triangle>,

    /// Child quadrants; empty for leaves, at most four entries
    pub children: Vec<QuadNode>,
}

impl QuadNode {
    /// Check if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn build(bounds: Aabb, triangles: Vec<Triangle>, depth: u32, remaining: u32) -> Self {
        if remaining == 0 {
            return Self {
                bounds,
                depth,
                triangles,
                children: Vec::new(),
            };
        }

        let center = bounds.center();
        let mut medline = Vec::new();
        let mut quadrants: [Vec<Triangle>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

        for triangle in triangles {
            match quadrant_of_triangle(&triangle, center) {
                Some(q) => quadrants[q].push(triangle),
                None => medline.push(triangle),
            }
        }

        let mut children = Vec::new();
        for (quadrant, assigned) in quadrants.into_iter().enumerate() {
            if assigned.is_empty() {
                continue;
            }
            let child_bounds = quadrant_bounds(&bounds, quadrant);
            children.push(Self::build(child_bounds, assigned, depth + 1, remaining - 1));
        }

        Self {
            bounds,
            depth,
            triangles: medline,
            children,
        }
    }

    fn count_triangles(&self) -> usize {
        let mut count = self.triangles.len();
        for child in &self.children {
            count += child.count_triangles();
        }
        count
    }

    fn count_nodes(&self) -> usize {
        let mut count = 1;
        for child in &self.children {
            count += child.count_nodes();
        }
        count
    }

    /// Visit this node and all children with a ray query
    ///
    /// Children are visited unconditionally; the node's own triangle list
    /// is only tested when the ray enters the node's bounds.
    fn query_ray(&self, ray: &Ray, best: &mut Option<TriangleHit>) {
        if self.bounds.intersect_ray(ray).is_some() {
            for triangle in &self.triangles {
                if let Some(t) = triangle.intersect_ray(ray) {
                    if best.as_ref().map_or(true, |hit| t < hit.distance) {
                        *best = Some(TriangleHit {
                            distance: t,
                            point: ray.point_at(t),
                            normal: triangle.normal(),
                        });
                    }
                }
            }
        }

        for child in &self.children {
            child.query_ray(ray, best);
        }
    }

    /// Visit this node and all children with a sphere query
    fn query_sphere(&self, sphere: &BoundingSphere, best: &mut Option<TriangleHit>) {
        if self.bounds.intersects_sphere(sphere) {
            for triangle in &self.triangles {
                if let Some((point, center_dist)) = triangle.intersect_sphere(sphere) {
                    let distance = center_dist - sphere.radius;
                    if best.as_ref().map_or(true, |hit| distance < hit.distance) {
                        *best = Some(TriangleHit {
                            distance,
                            point,
                            normal: triangle.normal(),
                        });
                    }
                }
            }
        }

        for child in &self.children {
            child.query_sphere(sphere, best);
        }
    }
}

/// Quadrant index for a triangle, None when it straddles a split line
///
/// A triangle belongs to a quadrant only when all three vertices fall
/// strictly inside it; vertices exactly on a split line count as straddling.
fn quadrant_of_triangle(triangle: &Triangle, center: Vec3) -> Option<usize> {
    let q0 = quadrant_of_vertex(triangle.v0, center)?;
    let q1 = quadrant_of_vertex(triangle.v1, center)?;
    let q2 = quadrant_of_vertex(triangle.v2, center)?;
    if q0 == q1 && q1 == q2 {
        Some(q0)
    } else {
        None
    }
}

fn quadrant_of_vertex(vertex: Vec3, center: Vec3) -> Option<usize> {
    if vertex.x == center.x || vertex.z == center.z {
        return None; // On a split line
    }
    let x_bit = usize::from(vertex.x > center.x);
    let z_bit = usize::from(vertex.z > center.z);
    Some((z_bit << 1) | x_bit)
}

/// Bounds of one XZ quadrant of a node; the Y range is carried through
fn quadrant_bounds(bounds: &Aabb, quadrant: usize) -> Aabb {
    let center = bounds.center();
    let (min, max) = (bounds.min, bounds.max);
    let (min_x, max_x) = if quadrant & 1 == 0 {
        (min.x, center.x)
    } else {
        (center.x, max.x)
    };
    let (min_z, max_z) = if quadrant & 2 == 0 {
        (min.z, center.z)
    } else {
        (center.z, max.z)
    };
    Aabb::new(
        Vec3::new(min_x, min.y, min_z),
        Vec3::new(max_x, max.y, max_z),
    )
}

/// Quad-tree spatial index over a triangle mesh
#[derive(Debug, Clone)]
pub struct QuadTree {
    /// Root node covering the whole mesh
    root: QuadNode,

    /// Depth bound the tree was built with
    max_depth: u32,
}

impl QuadTree {
    /// Build a quad tree over the given world-space triangles
    ///
    /// Extents are derived from the triangle vertices themselves. An empty
    /// triangle list produces a single-leaf tree that reports no hits.
    pub fn build(triangles: Vec<Triangle>, config: &QuadTreeConfig) -> Self {
        let vertices: Vec<Vec3> = triangles
            .iter()
            .flat_map(|t| [t.v0, t.v1, t.v2])
            .collect();
        let bounds = Aabb::from_points(&vertices);

        let triangle_count = triangles.len();
        let root = QuadNode::build(bounds, triangles, 0, config.max_depth);
        log::debug!(
            "built quad tree: {} triangles, {} nodes, max depth {}",
            triangle_count,
            root.count_nodes(),
            config.max_depth
        );

        Self {
            root,
            max_depth: config.max_depth,
        }
    }

    /// The root node of the tree
    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    /// Depth bound the tree was built with
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Total number of triangles stored across all nodes
    ///
    /// Every input triangle is stored in exactly one node, so this always
    /// equals the size of the triangle list the tree was built from.
    pub fn triangle_count(&self) -> usize {
        self.root.count_triangles()
    }

    /// Find the closest ray hit across all nodes
    pub fn query_ray(&self, ray: &Ray) -> Option<TriangleHit> {
        let mut best = None;
        self.root.query_ray(ray, &mut best);
        best
    }

    /// Find the closest sphere contact across all nodes
    pub fn query_sphere(&self, sphere: &BoundingSphere) -> Option<TriangleHit> {
        let mut best = None;
        self.root.query_sphere(sphere, &mut best);
        best
    }
}
