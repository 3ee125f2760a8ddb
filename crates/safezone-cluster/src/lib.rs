//! # safezone-cluster
//!
//! Groups case points into clusters: the connected components of the
//! "within eps degrees" relation, so every point belongs to exactly one
//! cluster (minimum cluster size 1).
//!
//! Distances are planar in degree space, not geodesic. See
//! [`safezone_core::geo::planar_distance_deg`].

pub mod components;
pub mod engine;
mod summary;

pub use engine::ClusterEngine;
