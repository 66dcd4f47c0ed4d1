//! Collision layers
//!
//! A layer groups the volumes of one collidable category ("enemies",
//! "terrain") under a name and a stable numeric id, so hit-tests can be
//! filtered to the category they care about.

use crate::collision::volume::VolumeKey;

/// Stable numeric id of a layer, unique within its context
///
/// Derived from a hash of the layer name at creation time; ties between
/// identically-named layers are resolved by probing, so the id is the
/// deterministic handle while name lookup is first-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(
    /// The hash-derived id value
    pub u64,
);

/// An insertion-ordered collection of volumes sharing a name and id
#[derive(Debug, Clone)]
pub struct CollisionLayer {
    id: LayerId,
    name: String,
    members: Vec<VolumeKey>,
}

impl CollisionLayer {
    pub(crate) fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// The layer's numeric id
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The layer's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member volumes in insertion order
    pub fn members(&self) -> &[VolumeKey] {
        &self.members
    }

    /// Number of member volumes
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the layer has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membership test by key equality
    pub fn contains(&self, volume: VolumeKey) -> bool {
        self.members.contains(&volume)
    }

    /// Append a member; returns false (and leaves the layer unchanged)
    /// when the volume is already present
    pub(crate) fn insert(&mut self, volume: VolumeKey) -> bool {
        if self.contains(volume) {
            return false;
        }
        self.members.push(volume);
        true
    }

    /// Remove a member; returns whether removal occurred
    pub(crate) fn remove(&mut self, volume: VolumeKey) -> bool {
        if let Some(index) = self.members.iter().position(|&k| k == volume) {
            self.members.remove(index);
            true
        } else {
            false
        }
    }
}
