//! Spatial partitioning structures for collision acceleration

pub mod quadtree;

pub use quadtree::{QuadNode, QuadTree, QuadTreeConfig};
