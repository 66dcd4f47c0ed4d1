//! Collision context: layer registry and hit-test dispatch
//!
//! The context owns every registered volume in a keyed arena and groups
//! them into named layers. A hit-test scans one target layer in insertion
//! order, dispatches on the shape pair, and keeps the nearest result.

use slotmap::SlotMap;
use thiserror::Error;

use crate::collision::layer::{CollisionLayer, LayerId};
use crate::collision::mesh::CollideMesh;
use crate::collision::primitives::{Aabb, BoundingSphere, Ray};
use crate::collision::volume::{CollideVolume, OwnerId, VolumeKey, VolumeShape};
use crate::foundation::math::Vec3;

/// Errors raised by collision context operations
#[derive(Error, Debug)]
pub enum CollisionError {
    /// The volume key does not refer to a registered volume
    #[error("volume key is not registered with this context")]
    UnknownVolume,
    /// No layer with the given id exists
    #[error("no layer with id {0:?}")]
    UnknownLayer(LayerId),
    /// The volume is already a member of the layer
    #[error("volume '{volume}' is already a member of layer '{layer}'")]
    DuplicateVolume {
        /// Name of the volume that was added twice
        volume: String,
        /// Name of the layer it already belongs to
        layer: String,
    },
}

/// Hit-test aggregation policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultPolicy {
    /// Keep only the minimum-distance result across all tested volumes
    #[default]
    NearestOne,
}

/// Result of a hit-test against a layer
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Distance to the detected hit; negative for penetrating spheres
    pub distance: f32,
    /// Number of sub-tests that hit during the layer scan; aggregation
    /// bookkeeping rather than a user-facing value
    pub collide_count: u32,
    /// The volume that produced the nearest hit
    pub volume: VolumeKey,
    /// Owner reference of the hit volume, if any
    pub owner: Option<OwnerId>,
    /// Point of intersection; not all shape pairs report one
    pub point: Option<Vec3>,
    /// Surface normal at the intersection; only mesh tests report one
    pub normal: Option<Vec3>,
}

/// Registry of collision layers and their volumes
///
/// Layers persist for the life of a play session and are cleared wholesale
/// on level teardown. All operations are synchronous and deterministic for
/// identical inputs.
#[derive(Debug, Default)]
pub struct CollisionContext {
    volumes: SlotMap<VolumeKey, CollideVolume>,
    layers: Vec<CollisionLayer>,
}

impl CollisionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer, deriving its id from a hash of the name
    ///
    /// Ids are probed to uniqueness within this context, so two layers may
    /// share a name but never an id.
    pub fn create_layer(&mut self, name: &str) -> LayerId {
        let mut id = LayerId(fxhash::hash64(name));
        while self.layers.iter().any(|layer| layer.id() == id) {
            id = LayerId(id.0.wrapping_add(1));
        }
        log::debug!("created collision layer '{}' (id {:#018x})", name, id.0);
        self.layers.push(CollisionLayer::new(id, name));
        id
    }

    /// Look up a layer by id
    pub fn layer(&self, id: LayerId) -> Option<&CollisionLayer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    /// Look up a layer by name, first match in creation order
    pub fn layer_by_name(&self, name: &str) -> Option<&CollisionLayer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }

    /// Number of layers in the context
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Register a volume with the context
    pub fn insert_volume(&mut self, volume: CollideVolume) -> VolumeKey {
        self.volumes.insert(volume)
    }

    /// Unregister a volume, detaching it from its layer first
    pub fn remove_volume(&mut self, key: VolumeKey) -> Option<CollideVolume> {
        self.remove_from_layer(key);
        self.volumes.remove(key)
    }

    /// Shared access to a registered volume
    pub fn volume(&self, key: VolumeKey) -> Option<&CollideVolume> {
        self.volumes.get(key)
    }

    /// Mutable access to a registered volume, e.g. for per-frame transforms
    pub fn volume_mut(&mut self, key: VolumeKey) -> Option<&mut CollideVolume> {
        self.volumes.get_mut(key)
    }

    /// Number of registered volumes
    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    /// Add a volume to a layer
    ///
    /// A volume belongs to at most one layer; adding it to a second layer
    /// detaches it from the first. Adding it to a layer it already belongs
    /// to is a caller logic error.
    pub fn add_to_layer(&mut self, layer: LayerId, volume: VolumeKey) -> Result<(), CollisionError> {
        let Some(layer_index) = self.layers.iter().position(|l| l.id() == layer) else {
            return Err(CollisionError::UnknownLayer(layer));
        };
        let Some(current) = self.volumes.get(volume).map(CollideVolume::layer) else {
            return Err(CollisionError::UnknownVolume);
        };
        if current.is_some() && current != Some(layer) {
            self.remove_from_layer(volume);
        }

        if self.layers[layer_index].insert(volume) {
            self.volumes[volume].set_layer(Some(layer));
            Ok(())
        } else {
            Err(CollisionError::DuplicateVolume {
                volume: self.volumes[volume].name().to_owned(),
                layer: self.layers[layer_index].name().to_owned(),
            })
        }
    }

    /// Detach a volume from its owning layer, if any
    ///
    /// Returns whether removal occurred; clears the volume's layer
    /// back-reference either way.
    pub fn remove_from_layer(&mut self, volume: VolumeKey) -> bool {
        let Some(layer_id) = self.volumes.get(volume).and_then(CollideVolume::layer) else {
            return false;
        };
        let removed = self
            .layers
            .iter_mut()
            .find(|l| l.id() == layer_id)
            .is_some_and(|l| l.remove(volume));
        self.volumes[volume].set_layer(None);
        removed
    }

    /// First volume in a layer (insertion order) with the given name
    pub fn find_in_layer(&self, layer: LayerId, name: &str) -> Option<VolumeKey> {
        self.layer(layer)?
            .members()
            .iter()
            .copied()
            .find(|&key| self.volumes.get(key).is_some_and(|v| v.name() == name))
    }

    /// Membership test by key equality
    pub fn layer_contains(&self, layer: LayerId, volume: VolumeKey) -> bool {
        self.layer(layer).is_some_and(|l| l.contains(volume))
    }

    /// Drop all layers and volumes (level teardown)
    pub fn clear(&mut self) {
        log::debug!(
            "clearing collision context: {} layers, {} volumes",
            self.layers.len(),
            self.volumes.len()
        );
        self.layers.clear();
        self.volumes.clear();
    }

    /// Test a source volume against every volume in a target layer
    ///
    /// Volumes are tested in layer insertion order; the source volume is
    /// skipped by key equality. Shape pairs without a defined test never
    /// hit. With [`ResultPolicy::NearestOne`] the single smallest-distance
    /// result is returned, or `None` when nothing hit.
    pub fn hit_test(
        &self,
        source: VolumeKey,
        target: LayerId,
        policy: ResultPolicy,
    ) -> Result<Option<CollisionResult>, CollisionError> {
        let source_volume = self.volumes.get(source).ok_or(CollisionError::UnknownVolume)?;
        let layer = self.layer(target).ok_or(CollisionError::UnknownLayer(target))?;

        let mut nearest: Option<CollisionResult> = None;
        let mut hits = 0u32;
        for &key in layer.members() {
            if key == source {
                continue;
            }
            let Some(target_volume) = self.volumes.get(key) else {
                continue;
            };
            let Some(pair) = test_pair(source_volume.shape(), target_volume.shape()) else {
                continue;
            };

            hits += 1;
            if nearest.as_ref().map_or(true, |best| pair.distance < best.distance) {
                nearest = Some(CollisionResult {
                    distance: pair.distance,
                    collide_count: 0,
                    volume: key,
                    owner: target_volume.owner(),
                    point: pair.point,
                    normal: pair.normal,
                });
            }
        }

        if let Some(result) = &mut nearest {
            result.collide_count = hits;
        }
        match policy {
            ResultPolicy::NearestOne => Ok(nearest),
        }
    }
}

/// Outcome of one pairwise shape test
struct PairHit {
    distance: f32,
    point: Option<Vec3>,
    normal: Option<Vec3>,
}

/// Dispatch on the (source, target) shape pair
///
/// The supported pairs are exactly the arms below; everything else
/// (model-sourced tests, box against model) reports no hit.
fn test_pair(source: &VolumeShape, target: &VolumeShape) -> Option<PairHit> {
    match (source, target) {
        (VolumeShape::Box { world: a, .. }, VolumeShape::Box { world: b, .. }) => box_vs_box(a, b),
        (VolumeShape::Box { world: b, .. }, VolumeShape::Sphere { world: s, .. })
        | (VolumeShape::Sphere { world: s, .. }, VolumeShape::Box { world: b, .. }) => {
            sphere_vs_box(s, b)
        }
        (VolumeShape::Box { world: b, .. }, VolumeShape::Ray { world: r, .. })
        | (VolumeShape::Ray { world: r, .. }, VolumeShape::Box { world: b, .. }) => ray_vs_box(r, b),
        (VolumeShape::Sphere { world: a, .. }, VolumeShape::Sphere { world: b, .. }) => {
            sphere_vs_sphere(a, b)
        }
        (VolumeShape::Sphere { world: s, .. }, VolumeShape::Model(mesh)) => sphere_vs_model(s, mesh),
        (VolumeShape::Ray { world: r, .. }, VolumeShape::Sphere { world: s, .. }) => {
            ray_vs_sphere(r, s)
        }
        (VolumeShape::Ray { world: r, .. }, VolumeShape::Model(mesh)) => ray_vs_model(r, mesh),
        _ => None,
    }
}

fn box_vs_box(a: &Aabb, b: &Aabb) -> Option<PairHit> {
    if !a.intersects(b) {
        return None;
    }
    // Center-to-center distance, not penetration depth
    Some(PairHit {
        distance: (a.center() - b.center()).magnitude(),
        point: None,
        normal: None,
    })
}

fn sphere_vs_box(sphere: &BoundingSphere, bbox: &Aabb) -> Option<PairHit> {
    if !bbox.intersects_sphere(sphere) {
        return None;
    }
    // Sphere center to box center minus radius, a coarse approximation
    Some(PairHit {
        distance: (sphere.center - bbox.center()).magnitude() - sphere.radius,
        point: None,
        normal: None,
    })
}

fn ray_vs_box(ray: &Ray, bbox: &Aabb) -> Option<PairHit> {
    bbox.intersect_ray(ray).map(|t| PairHit {
        distance: t,
        point: None,
        normal: None,
    })
}

fn sphere_vs_sphere(a: &BoundingSphere, b: &BoundingSphere) -> Option<PairHit> {
    if !a.intersects(b) {
        return None;
    }
    let between = b.center - a.center;
    // Negative when the spheres overlap
    let distance = between.magnitude() - (a.radius + b.radius);
    // Midpoint-direction approximation of the contact point
    let point = a.center + between.normalize() * distance;
    Some(PairHit {
        distance,
        point: Some(point),
        normal: None,
    })
}

fn ray_vs_sphere(ray: &Ray, sphere: &BoundingSphere) -> Option<PairHit> {
    let t = sphere.intersect_ray(ray)?;
    // Surface-point approximation: the direction from the ray origin to
    // the sphere center scaled by the radius, not the true ray/sphere
    // intersection point
    let direction = (sphere.center - ray.origin).normalize();
    Some(PairHit {
        distance: t,
        point: Some(sphere.center + direction * sphere.radius),
        normal: None,
    })
}

fn sphere_vs_model(sphere: &BoundingSphere, mesh: &CollideMesh) -> Option<PairHit> {
    mesh.intersect_sphere(sphere).map(|hit| PairHit {
        distance: hit.distance,
        point: Some(hit.point),
        normal: Some(hit.normal),
    })
}

fn ray_vs_model(ray: &Ray, mesh: &CollideMesh) -> Option<PairHit> {
    mesh.intersect_ray(ray).map(|hit| PairHit {
        distance: hit.distance,
        point: Some(hit.point),
        normal: Some(hit.normal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::logging;
    use crate::foundation::math::Transform;
    use crate::spatial::QuadTreeConfig;
    use approx::assert_relative_eq;

    fn sphere_at(name: &str, center: Vec3, radius: f32) -> CollideVolume {
        CollideVolume::sphere(name, BoundingSphere::new(center, radius))
    }

    fn unit_box_at(name: &str, center: Vec3) -> CollideVolume {
        CollideVolume::boxed(
            name,
            Aabb::from_center_extents(center, Vec3::new(1.0, 1.0, 1.0)),
        )
    }

    #[test]
    fn overlapping_spheres_report_negative_distance() {
        logging::init_for_tests();
        let mut context = CollisionContext::new();
        let enemies = context.create_layer("enemies");

        let target = context.insert_volume(
            sphere_at("enemy", Vec3::new(1.5, 0.0, 0.0), 1.0).with_owner(OwnerId(42)),
        );
        context.add_to_layer(enemies, target).unwrap();

        let probe = context.insert_volume(sphere_at("probe", Vec3::zeros(), 1.0));
        let result = context
            .hit_test(probe, enemies, ResultPolicy::NearestOne)
            .unwrap()
            .expect("spheres overlap");

        assert_relative_eq!(result.distance, -0.5, epsilon = 1e-5);
        assert_eq!(result.volume, target);
        assert_eq!(result.owner, Some(OwnerId(42)));
        assert_eq!(result.collide_count, 1);
    }

    #[test]
    fn ray_against_sphere_reports_entry_distance_and_surface_point() {
        let mut context = CollisionContext::new();
        let targets = context.create_layer("targets");

        let sphere = context.insert_volume(sphere_at("orb", Vec3::zeros(), 1.0));
        context.add_to_layer(targets, sphere).unwrap();

        let ray = context.insert_volume(CollideVolume::ray(
            "shot",
            Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0)),
        ));
        let result = context
            .hit_test(ray, targets, ResultPolicy::NearestOne)
            .unwrap()
            .expect("ray points at sphere");

        assert_relative_eq!(result.distance, 9.0, epsilon = 1e-5);
        // The approximated surface point sits along origin->center, on the
        // far side of the center
        assert_relative_eq!(result.point.unwrap(), Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
        assert!(result.normal.is_none());
    }

    #[test]
    fn disjoint_boxes_do_not_hit() {
        let mut context = CollisionContext::new();
        let walls = context.create_layer("walls");

        let wall = context.insert_volume(CollideVolume::boxed(
            "wall",
            Aabb::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0)),
        ));
        context.add_to_layer(walls, wall).unwrap();

        let probe = context.insert_volume(CollideVolume::boxed(
            "probe",
            Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)),
        ));
        let result = context.hit_test(probe, walls, ResultPolicy::NearestOne).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn adding_a_volume_to_its_layer_twice_is_an_error() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("pickups");
        let volume = context.insert_volume(sphere_at("coin", Vec3::zeros(), 0.5));

        context.add_to_layer(layer, volume).unwrap();
        let err = context.add_to_layer(layer, volume).unwrap_err();
        assert!(matches!(err, CollisionError::DuplicateVolume { .. }));
    }

    #[test]
    fn nearest_one_keeps_the_smallest_distance() {
        let mut context = CollisionContext::new();
        let targets = context.create_layer("targets");

        let far = context.insert_volume(sphere_at("far", Vec3::new(0.0, 0.0, 10.0), 1.0));
        let near = context.insert_volume(sphere_at("near", Vec3::new(0.0, 0.0, 5.0), 1.0));
        context.add_to_layer(targets, far).unwrap();
        context.add_to_layer(targets, near).unwrap();

        let ray = context.insert_volume(CollideVolume::ray(
            "shot",
            Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0)),
        ));
        let result = context
            .hit_test(ray, targets, ResultPolicy::NearestOne)
            .unwrap()
            .expect("both spheres are on the ray");

        assert_eq!(result.volume, near);
        assert_relative_eq!(result.distance, 4.0, epsilon = 1e-5);
        assert_eq!(result.collide_count, 2);
    }

    #[test]
    fn source_volume_is_skipped_inside_its_own_layer() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("actors");

        let solo = context.insert_volume(sphere_at("solo", Vec3::zeros(), 1.0));
        context.add_to_layer(layer, solo).unwrap();

        let result = context.hit_test(solo, layer, ResultPolicy::NearestOne).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn missing_arguments_raise_errors() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("terrain");
        let volume = context.insert_volume(sphere_at("rock", Vec3::zeros(), 1.0));

        let bogus_layer = LayerId(0xdead_beef);
        assert!(matches!(
            context.hit_test(volume, bogus_layer, ResultPolicy::NearestOne),
            Err(CollisionError::UnknownLayer(_))
        ));

        context.remove_volume(volume);
        assert!(matches!(
            context.hit_test(volume, layer, ResultPolicy::NearestOne),
            Err(CollisionError::UnknownVolume)
        ));
    }

    #[test]
    fn box_and_ray_hit_in_both_orderings() {
        let mut context = CollisionContext::new();
        let layer_a = context.create_layer("a");
        let layer_b = context.create_layer("b");

        let bbox = context.insert_volume(unit_box_at("crate", Vec3::new(0.0, 0.0, 5.0)));
        let ray = context.insert_volume(CollideVolume::ray(
            "beam",
            Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0)),
        ));
        context.add_to_layer(layer_a, bbox).unwrap();
        context.add_to_layer(layer_b, ray).unwrap();

        let from_ray = context
            .hit_test(ray, layer_a, ResultPolicy::NearestOne)
            .unwrap()
            .expect("ray enters box");
        assert_relative_eq!(from_ray.distance, 4.0, epsilon = 1e-5);
        assert!(from_ray.point.is_none());

        let from_box = context
            .hit_test(bbox, layer_b, ResultPolicy::NearestOne)
            .unwrap()
            .expect("box against ray uses the same test");
        assert_relative_eq!(from_box.distance, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn sphere_against_box_uses_center_distance_minus_radius() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("walls");

        let bbox = context.insert_volume(unit_box_at("wall", Vec3::new(2.0, 0.0, 0.0)));
        context.add_to_layer(layer, bbox).unwrap();

        let probe = context.insert_volume(sphere_at("probe", Vec3::zeros(), 1.5));
        let result = context
            .hit_test(probe, layer, ResultPolicy::NearestOne)
            .unwrap()
            .expect("sphere reaches the box face");
        assert_relative_eq!(result.distance, 0.5, epsilon = 1e-5);
        assert!(result.point.is_none());
    }

    #[test]
    fn ray_against_indexed_model_reports_nearest_triangle() {
        logging::init_for_tests();
        let mut context = CollisionContext::new();
        let terrain = context.create_layer("terrain");

        let quad = [
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(-5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, 5.0),
        ];
        let mut mesh = CollideMesh::from_triangle_soup(&quad);
        mesh.enable_quadtree(QuadTreeConfig { max_depth: 2 });

        let ground = context.insert_volume(CollideVolume::model("ground", mesh));
        context.add_to_layer(terrain, ground).unwrap();

        // Raise the terrain by 2 and confirm the hit tracks the transform
        let matrix = Transform::from_position(Vec3::new(0.0, 2.0, 0.0)).to_matrix();
        if let Some(volume) = context.volume_mut(ground) {
            volume.transform(&matrix);
        }

        let ray = context.insert_volume(CollideVolume::ray(
            "drop",
            Ray::new(Vec3::new(1.0, 10.0, 1.0), Vec3::new(0.0, -1.0, 0.0)),
        ));
        let result = context
            .hit_test(ray, terrain, ResultPolicy::NearestOne)
            .unwrap()
            .expect("ray falls onto the terrain");

        assert_relative_eq!(result.distance, 8.0, epsilon = 1e-4);
        assert_relative_eq!(result.point.unwrap(), Vec3::new(1.0, 2.0, 1.0), epsilon = 1e-4);
        assert_relative_eq!(result.normal.unwrap(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn sphere_against_model_reports_contact() {
        let mut context = CollisionContext::new();
        let terrain = context.create_layer("terrain");

        let quad = [
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(-5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, 5.0),
        ];
        let ground = context.insert_volume(CollideVolume::model(
            "ground",
            CollideMesh::from_triangle_soup(&quad),
        ));
        context.add_to_layer(terrain, ground).unwrap();

        let ball = context.insert_volume(sphere_at("ball", Vec3::new(0.0, 0.5, 0.0), 1.0));
        let result = context
            .hit_test(ball, terrain, ResultPolicy::NearestOne)
            .unwrap()
            .expect("ball rests on the ground");
        assert_relative_eq!(result.distance, -0.5, epsilon = 1e-5);
        assert!(result.normal.is_some());
    }

    #[test]
    fn unsupported_shape_pairs_never_hit() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("meshes");

        let quad = [
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
        ];
        let mesh = context.insert_volume(CollideVolume::model(
            "mesh",
            CollideMesh::from_triangle_soup(&quad),
        ));
        context.add_to_layer(layer, mesh).unwrap();

        // Box against model has no defined test
        let probe = context.insert_volume(unit_box_at("probe", Vec3::zeros()));
        let result = context.hit_test(probe, layer, ResultPolicy::NearestOne).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn find_and_membership_follow_insertion_order() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("props");

        let first = context.insert_volume(sphere_at("barrel", Vec3::zeros(), 1.0));
        let second = context.insert_volume(sphere_at("barrel", Vec3::new(5.0, 0.0, 0.0), 1.0));
        context.add_to_layer(layer, first).unwrap();
        context.add_to_layer(layer, second).unwrap();

        assert_eq!(context.find_in_layer(layer, "barrel"), Some(first));
        assert_eq!(context.find_in_layer(layer, "missing"), None);
        assert!(context.layer_contains(layer, second));
    }

    #[test]
    fn removal_clears_the_layer_back_reference() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("props");
        let volume = context.insert_volume(sphere_at("vase", Vec3::zeros(), 1.0));

        context.add_to_layer(layer, volume).unwrap();
        assert_eq!(context.volume(volume).unwrap().layer(), Some(layer));

        assert!(context.remove_from_layer(volume));
        assert_eq!(context.volume(volume).unwrap().layer(), None);
        assert!(!context.layer_contains(layer, volume));

        // Detaching an unattached volume is a no-op
        assert!(!context.remove_from_layer(volume));
    }

    #[test]
    fn adding_to_a_second_layer_moves_the_volume() {
        let mut context = CollisionContext::new();
        let first = context.create_layer("active");
        let second = context.create_layer("inactive");
        let volume = context.insert_volume(sphere_at("drone", Vec3::zeros(), 1.0));

        context.add_to_layer(first, volume).unwrap();
        context.add_to_layer(second, volume).unwrap();

        assert!(!context.layer_contains(first, volume));
        assert!(context.layer_contains(second, volume));
        assert_eq!(context.volume(volume).unwrap().layer(), Some(second));
    }

    #[test]
    fn identically_named_layers_get_distinct_ids() {
        let mut context = CollisionContext::new();
        let first = context.create_layer("duplicate");
        let second = context.create_layer("duplicate");

        assert_ne!(first, second);
        // Name lookup resolves to the first layer created with that name
        assert_eq!(context.layer_by_name("duplicate").map(CollisionLayer::id), Some(first));
    }

    #[test]
    fn clear_drops_layers_and_volumes() {
        let mut context = CollisionContext::new();
        let layer = context.create_layer("level");
        let volume = context.insert_volume(sphere_at("thing", Vec3::zeros(), 1.0));
        context.add_to_layer(layer, volume).unwrap();

        context.clear();
        assert_eq!(context.layer_count(), 0);
        assert_eq!(context.volume_count(), 0);
        assert!(context.layer(layer).is_none());
    }
}
