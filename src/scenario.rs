//! Scenario runner for batch projections
//!
//! Projects many parameter sets with one shared engine. Each projection is
//! independent, so batches run in parallel.

use rayon::prelude::*;

use crate::error::ProjectionError;
use crate::params::{NamedInputs, ProjectionParams, RawInputs};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Outcome of one named scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult, ProjectionError>,
}

/// Batch runner over a shared engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [4.0, 6.0, 8.0] {
///     let inputs = RawInputs { annual_interest_rate_percent: rate, ..RawInputs::default() };
///     let result = runner.run(&inputs)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Validate and project a single set of inputs
    pub fn run(&self, inputs: &RawInputs) -> Result<ProjectionResult, ProjectionError> {
        self.engine.project_inputs(inputs)
    }

    /// Project already-validated parameter sets in parallel, preserving order
    pub fn run_batch(&self, params: &[ProjectionParams]) -> Vec<ProjectionResult> {
        params.par_iter().map(|p| self.engine.project(p)).collect()
    }

    /// Run named scenarios in parallel; a failing scenario does not stop the others
    pub fn run_named(&self, scenarios: &[NamedInputs]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: self.engine.project_inputs(&scenario.inputs),
            })
            .collect()
    }

    /// Run variations of one base input with different interest rates
    pub fn run_rates(
        &self,
        base: &RawInputs,
        rates_percent: &[f64],
    ) -> Vec<Result<ProjectionResult, ProjectionError>> {
        rates_percent
            .par_iter()
            .map(|&rate| {
                let inputs = RawInputs {
                    annual_interest_rate_percent: rate,
                    ..base.clone()
                };
                self.engine.project_inputs(&inputs)
            })
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}
