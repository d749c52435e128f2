//! Feature catalog, the generic pipeline, and library-only insight helpers.

pub mod definition;
pub mod insights;
pub mod pipeline;

pub use definition::{FeatureDefinition, FeatureId};
pub use pipeline::{
    FeaturePipeline, FeatureResult, Persistence, PipelineError, PipelineOutcome,
    PipelineServices, PipelineState,
};
