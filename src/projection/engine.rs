//! Core projection engine for yearly savings timelines

use log::debug;

use super::growth::{
    contribution_future_value, growth_factor, inflation_factor, round_money, MONTHS_PER_YEAR,
};
use super::timeline::{ProjectionResult, Summary, TimelineRow};
use crate::error::ProjectionError;
use crate::params::{HorizonPolicy, InputBounds, ProjectionParams, RawInputs};

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectionConfig {
    /// Handling of age pairs with no saving period
    pub horizon_policy: HorizonPolicy,

    /// If Some, inputs outside these ranges are logged before projecting
    pub input_bounds: Option<InputBounds>,
}

/// Main projection engine
///
/// Holds only configuration; every projection is independent, so one engine
/// can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate raw inputs under this engine's horizon policy
    ///
    /// Out-of-range inputs are only logged when bounds are configured.
    pub fn validate(&self, inputs: &RawInputs) -> Result<ProjectionParams, ProjectionError> {
        if let Some(bounds) = &self.config.input_bounds {
            bounds.warn_out_of_range(inputs);
        }
        inputs.validate(self.config.horizon_policy)
    }

    /// Validate raw inputs, then project them
    pub fn project_inputs(&self, inputs: &RawInputs) -> Result<ProjectionResult, ProjectionError> {
        let params = self.validate(inputs)?;
        Ok(self.project(&params))
    }

    /// Run the projection for validated parameters
    pub fn project(&self, params: &ProjectionParams) -> ProjectionResult {
        let horizon = params.horizon_years();
        debug!(
            "projecting {} years: capital={} monthly={} rate={}% inflation={}%",
            horizon,
            params.initial_capital(),
            params.monthly_contribution(),
            params.annual_interest_rate_percent(),
            params.annual_inflation_rate_percent(),
        );

        let mut rows = Vec::with_capacity(horizon as usize + 1);
        let mut last = project_year(params, 0);
        rows.push(last);
        for year in 1..=horizon {
            last = project_year(params, year);
            rows.push(last);
        }

        let result = ProjectionResult {
            rows,
            summary: Summary::from_final_row(&last),
            start_age: params.current_age(),
        };

        debug!(
            "projection complete: nominal={} real={} invested={}",
            result.summary.nominal, result.summary.real, result.summary.invested_total
        );
        result
    }
}

/// Compute one timeline row from the closed forms
fn project_year(params: &ProjectionParams, year: u32) -> TimelineRow {
    let rate = params.interest_rate();
    let growth = growth_factor(rate, year);

    let nominal = params.initial_capital() * growth
        + contribution_future_value(params.monthly_contribution(), rate, growth, year);
    let invested = params.initial_capital()
        + params.monthly_contribution() * f64::from(MONTHS_PER_YEAR) * f64::from(year);
    let real = nominal / inflation_factor(params.inflation_rate(), year);

    TimelineRow {
        year,
        invested_capital: round_money(invested),
        nominal_value: round_money(nominal),
        real_value: round_money(real),
    }
}

/// Project validated parameters with the default configuration
pub fn compute_timeline(params: &ProjectionParams) -> ProjectionResult {
    ProjectionEngine::default().project(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HorizonInput, MAX_HORIZON_YEARS};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn params(
        capital: f64,
        monthly: f64,
        rate: f64,
        inflation: f64,
        years: u32,
    ) -> ProjectionParams {
        ProjectionParams::new(capital, monthly, rate, inflation, years).unwrap()
    }

    #[test]
    fn test_one_year_scenario() {
        let result = compute_timeline(&params(10_000.0, 500.0, 8.0, 3.0, 1));

        assert_eq!(result.rows.len(), 2);
        assert_eq!(
            result.rows[0],
            TimelineRow {
                year: 0,
                invested_capital: 10_000,
                nominal_value: 10_000,
                real_value: 10_000,
            }
        );

        let year1 = result.rows[1];
        assert_eq!(year1.year, 1);
        assert_eq!(year1.invested_capital, 16_000);

        let growth = (1.0_f64 + 0.08 / 12.0).powi(12);
        let expected = 10_000.0 * growth + 500.0 * (growth - 1.0) / (0.08 / 12.0);
        assert_eq!(year1.nominal_value, expected.round() as i64);
        assert_eq!(year1.nominal_value, 17_055);
        assert_eq!(year1.real_value, (expected / 1.03).round() as i64);
    }

    #[test]
    fn test_zero_rate_zero_inflation_scenario() {
        let result = compute_timeline(&params(0.0, 100.0, 0.0, 0.0, 2));

        assert_eq!(
            result.rows[2],
            TimelineRow {
                year: 2,
                invested_capital: 2_400,
                nominal_value: 2_400,
                real_value: 2_400,
            }
        );
        assert_eq!(result.summary.interest_earned, 0);
    }

    #[test]
    fn test_default_inputs_over_35_years() {
        let result = ProjectionEngine::default()
            .project_inputs(&RawInputs::default())
            .unwrap();

        assert_eq!(result.rows.len(), 36);
        assert_eq!(result.start_age, Some(30));
        assert_eq!(result.age_at(35), Some(65));
        assert_eq!(result.summary.invested_total, 220_000);
        assert_abs_diff_eq!(result.summary.nominal as f64, 1_309_867.0, epsilon = 1.0);
        assert_abs_diff_eq!(result.summary.real as f64, 465_505.0, epsilon = 1.0);
    }

    #[test]
    fn test_project_inputs_rejects_before_projecting() {
        let inputs = RawInputs {
            initial_capital: -10.0,
            ..RawInputs::default()
        };
        assert!(matches!(
            ProjectionEngine::default().project_inputs(&inputs),
            Err(ProjectionError::InvalidParameter { name: "initial_capital", .. })
        ));
    }

    #[test]
    fn test_horizon_policy_from_config() {
        let collapsed = RawInputs {
            horizon: HorizonInput::Ages { current_age: 70, retirement_age: 65 },
            ..RawInputs::default()
        };

        let floored = ProjectionEngine::default().project_inputs(&collapsed).unwrap();
        assert_eq!(floored.rows.len(), 2);

        let strict = ProjectionEngine::new(ProjectionConfig {
            horizon_policy: HorizonPolicy::Reject,
            input_bounds: Some(InputBounds::default()),
        });
        assert_eq!(
            strict.project_inputs(&collapsed),
            Err(ProjectionError::HorizonCollapse { current_age: 70, retirement_age: 65 })
        );
    }

    #[test]
    fn test_eighty_year_horizon() {
        let result = compute_timeline(&params(500_000.0, 10_000.0, 25.0, 15.0, 80));
        assert_eq!(result.rows.len(), 81);
        assert!(result.rows.iter().all(|r| r.nominal_value > 0 && r.real_value > 0));
        assert!(result.summary.nominal < i64::MAX);
    }

    #[test]
    fn test_long_horizons_never_saturate() {
        let longest = compute_timeline(&params(10_000.0, 500.0, 25.0, 15.0, MAX_HORIZON_YEARS));
        assert_eq!(longest.rows.len(), MAX_HORIZON_YEARS as usize + 1);
        assert!(longest.summary.nominal < i64::MAX);
        assert!(longest.rows.iter().all(|r| r.real_value > 0));

        let engine = ProjectionEngine::default();
        let too_long = RawInputs {
            horizon: HorizonInput::Years(6_000),
            ..RawInputs::default()
        };
        assert!(matches!(
            engine.project_inputs(&too_long),
            Err(ProjectionError::InvalidParameter { name: "horizon_years", .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let p = params(12_345.0, 678.0, 6.5, 2.25, 40);
        assert_eq!(compute_timeline(&p), compute_timeline(&p));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_timeline_invariants(
            capital in 0u32..500_000,
            monthly in 0u32..10_000,
            rate_bp in 0u32..2_500,
            inflation_bp in 0u32..1_500,
            years in 1u32..60,
        ) {
            let p = params(
                f64::from(capital),
                f64::from(monthly),
                f64::from(rate_bp) / 100.0,
                f64::from(inflation_bp) / 100.0,
                years,
            );
            let result = compute_timeline(&p);
            let rows = &result.rows;

            prop_assert_eq!(rows.len(), years as usize + 1);
            prop_assert_eq!(rows[0].year, 0);
            prop_assert_eq!(rows[0].invested_capital, i64::from(capital));

            for (index, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.year as usize, index);
                if rate_bp > 0 {
                    prop_assert!(row.nominal_value >= row.invested_capital);
                }
                if inflation_bp > 0 && row.year >= 1 {
                    prop_assert!(row.real_value <= row.nominal_value);
                }
                if rate_bp == 0 {
                    let linear = i64::from(capital) + i64::from(monthly) * 12 * i64::from(row.year);
                    prop_assert_eq!(row.nominal_value, linear);
                }
            }

            for pair in rows.windows(2) {
                prop_assert!(pair[1].invested_capital >= pair[0].invested_capital);
                prop_assert!(pair[1].nominal_value >= pair[0].nominal_value);
            }

            let s = result.summary;
            prop_assert_eq!(s.interest_earned, s.nominal - s.invested_total);
            prop_assert_eq!(s.nominal, rows[rows.len() - 1].nominal_value);
        }
    }
}
