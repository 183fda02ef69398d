//! Star Geometry Library
//!
//! Vertex generation for the starlab primitive-assembly demos.
//!
//! ## Core Types
//!
//! - [`Vec3`] - vertex position
//! - [`Topology`] - triangle fan, list or strip assembly
//! - [`StarShape`] - regular star generated from a point count and two radii
//! - [`StarOutline`] - hand-placed vertex arrays
//!
//! Geometry here is pure data. Colours and GPU buffers live in `starlab_render`.

mod vec3;
mod error;
pub mod topology;
pub mod star;
pub mod outline;

pub use vec3::Vec3;
pub use error::GeometryError;
pub use topology::{Topology, triangulate_fan};
pub use star::{StarShape, MAX_POINTS};
pub use outline::{StarOutline, OUTLINES};
