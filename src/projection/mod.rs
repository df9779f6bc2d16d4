//! Projection engine for yearly savings timelines

mod engine;
pub mod growth;
mod timeline;

pub use engine::{compute_timeline, ProjectionConfig, ProjectionEngine};
pub use growth::MONTHS_PER_YEAR;
pub use timeline::{Composition, ProjectionResult, Summary, TimelineRow};
