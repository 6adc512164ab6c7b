//! Investment Estimator - compound-growth projections for recurring monthly investments
//!
//! This library provides:
//! - Validated investment parameters with defaults and JSON loading
//! - Month-by-month compounding projected to periodic year checkpoints
//! - Abbreviated currency formatting and text/JSON/CSV reports
//! - The interactive prompt loop used to gather parameters

pub mod params;
pub mod projection;
pub mod report;
pub mod input;

// Re-export commonly used types
pub use params::{InvestmentParameters, ParameterError, PartialParameters};
pub use projection::{compute_projection, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use report::{format_num, format_result, render_report};
