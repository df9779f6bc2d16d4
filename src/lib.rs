//! Real Savings - projection engine for periodic savings plans
//!
//! This library provides:
//! - Validation of plan inputs (capital, monthly contribution, rates, horizon)
//! - Yearly timelines of invested capital, nominal value and inflation-adjusted value
//!   under monthly compounding
//! - Final-year summaries (interest earned, purchasing-power loss, composition)
//! - CSV and plain-text report export
//! - Parallel batch runs over many scenarios

pub mod error;
pub mod params;
pub mod projection;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use error::{ExportError, ProjectionError, ScenarioLoadError};
pub use params::{HorizonInput, HorizonPolicy, InputBounds, ProjectionParams, RawInputs};
pub use projection::{
    compute_timeline, ProjectionConfig, ProjectionEngine, ProjectionResult, Summary, TimelineRow,
};
pub use scenario::ScenarioRunner;
