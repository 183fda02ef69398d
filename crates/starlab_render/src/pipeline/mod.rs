//! Star rendering pipeline
//!
//! GPU vertex types and the list/strip render pipelines.

pub mod types;
pub mod star_pipeline;

pub use types::{StarVertex, ViewUniforms, view_scale, target_color, srgb_to_linear};
pub use star_pipeline::{StarPipeline, StarMesh};
