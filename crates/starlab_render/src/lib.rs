//! Star Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws star batches.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::StarPipeline`] - list and strip pipelines with a shared view uniform
//! - [`batch::StarBatch`] - CPU-side geometry and colour for one draw call
//!
//! Geometry comes from `starlab_geometry`; the common types are re-exported.

pub mod context;
pub mod pipeline;
pub mod batch;

pub use starlab_geometry::{StarShape, StarOutline, Topology, Vec3};

pub use batch::StarBatch;
