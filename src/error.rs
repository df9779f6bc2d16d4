//! Error types for validation, scenario loading and export

use thiserror::Error;

/// Errors raised before a projection runs
///
/// Validation happens up front, so a projection never returns partial rows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A monetary or rate field is negative or not finite, or the horizon is out of range
    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Final balance would overflow the whole-unit money range
    #[error("projection over {horizon_years} years exceeds the money range (nominal {nominal})")]
    Unrepresentable { horizon_years: u32, nominal: f64 },

    /// Retirement age is not after the current age and the policy forbids flooring
    #[error(
        "horizon collapsed: retirement age {retirement_age} is not after current age {current_age}"
    )]
    HorizonCollapse {
        current_age: u32,
        retirement_age: u32,
    },
}

/// Errors from the tabular and document export adapters
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors while reading a scenario file
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Row has neither `Years` nor a complete `CurrentAge`/`RetirementAge` pair
    #[error("scenario '{name}' has no horizon (set Years or CurrentAge and RetirementAge)")]
    MissingHorizon { name: String },

    /// Row parsed but failed validation
    #[error("scenario '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: ProjectionError,
    },
}
