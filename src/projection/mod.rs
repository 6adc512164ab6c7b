//! Projection engine for compound-growth checkpoint projections

mod engine;
mod results;

pub use engine::{
    checkpoints, compute_projection, invest_monthly, ProjectionConfig, ProjectionEngine,
    DEFAULT_CHECKPOINT_STEP,
};
pub use results::ProjectionResult;
