//! Savings plan inputs and their validation

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::projection::growth::{contribution_future_value, growth_factor, MAX_MONEY};

/// Default starting values, matching the calculator's initial state
pub const DEFAULT_INITIAL_CAPITAL: f64 = 10_000.0;
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 500.0;
pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 8.0;
pub const DEFAULT_INFLATION_RATE_PERCENT: f64 = 3.0;
pub const DEFAULT_CURRENT_AGE: u32 = 30;
pub const DEFAULT_RETIREMENT_AGE: u32 = 65;

/// Longest supported saving period
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Validated, immutable projection inputs
///
/// Only obtainable through [`ProjectionParams::new`] or [`RawInputs::validate`],
/// so every instance satisfies the engine's preconditions: all monetary and
/// rate fields are finite and non-negative, the horizon is between one and
/// [`MAX_HORIZON_YEARS`] years, and every projected amount fits in an `i64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    initial_capital: f64,
    monthly_contribution: f64,
    annual_interest_rate_percent: f64,
    annual_inflation_rate_percent: f64,
    horizon_years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_age: Option<u32>,
}

impl ProjectionParams {
    /// Validate scalar inputs into a parameter set
    pub fn new(
        initial_capital: f64,
        monthly_contribution: f64,
        annual_interest_rate_percent: f64,
        annual_inflation_rate_percent: f64,
        horizon_years: u32,
    ) -> Result<Self, ProjectionError> {
        if !(1..=MAX_HORIZON_YEARS).contains(&horizon_years) {
            return Err(ProjectionError::InvalidParameter {
                name: "horizon_years",
                value: f64::from(horizon_years),
            });
        }

        let params = Self {
            initial_capital: non_negative("initial_capital", initial_capital)?,
            monthly_contribution: non_negative("monthly_contribution", monthly_contribution)?,
            annual_interest_rate_percent: non_negative(
                "annual_interest_rate_percent",
                annual_interest_rate_percent,
            )?,
            annual_inflation_rate_percent: non_negative(
                "annual_inflation_rate_percent",
                annual_inflation_rate_percent,
            )?,
            horizon_years,
            current_age: None,
        };

        // Nominal value peaks in the final year
        let rate = params.interest_rate();
        let growth = growth_factor(rate, horizon_years);
        let final_nominal = params.initial_capital * growth
            + contribution_future_value(params.monthly_contribution, rate, growth, horizon_years);
        if !(final_nominal.is_finite() && final_nominal <= MAX_MONEY) {
            return Err(ProjectionError::Unrepresentable { horizon_years, nominal: final_nominal });
        }

        Ok(params)
    }

    /// Attach the saver's current age (presentation only, never affects the numbers)
    pub fn with_current_age(mut self, current_age: u32) -> Self {
        self.current_age = Some(current_age);
        self
    }

    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    pub fn annual_interest_rate_percent(&self) -> f64 {
        self.annual_interest_rate_percent
    }

    pub fn annual_inflation_rate_percent(&self) -> f64 {
        self.annual_inflation_rate_percent
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    pub fn current_age(&self) -> Option<u32> {
        self.current_age
    }

    /// Annual interest rate as a decimal (8% -> 0.08)
    pub fn interest_rate(&self) -> f64 {
        self.annual_interest_rate_percent / 100.0
    }

    /// Annual inflation rate as a decimal
    pub fn inflation_rate(&self) -> f64 {
        self.annual_inflation_rate_percent / 100.0
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, ProjectionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ProjectionError::InvalidParameter { name, value })
    }
}

/// What to do when an age pair leaves no saving period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizonPolicy {
    /// Floor the horizon to one year and log a warning
    #[default]
    Floor,
    /// Fail with [`ProjectionError::HorizonCollapse`]
    Reject,
}

/// How the caller expressed the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizonInput {
    /// Number of years directly
    Years(u32),
    /// Derived as `retirement_age - current_age`
    Ages {
        #[serde(rename = "currentAge")]
        current_age: u32,
        #[serde(rename = "retirementAge")]
        retirement_age: u32,
    },
}

impl Default for HorizonInput {
    fn default() -> Self {
        HorizonInput::Ages {
            current_age: DEFAULT_CURRENT_AGE,
            retirement_age: DEFAULT_RETIREMENT_AGE,
        }
    }
}

impl HorizonInput {
    /// Resolve to `(horizon_years, current_age)` under the given policy
    pub fn resolve(&self, policy: HorizonPolicy) -> Result<(u32, Option<u32>), ProjectionError> {
        match *self {
            HorizonInput::Years(0) => Err(ProjectionError::InvalidParameter {
                name: "horizon_years",
                value: 0.0,
            }),
            HorizonInput::Years(years) => Ok((years, None)),
            HorizonInput::Ages { current_age, retirement_age } => {
                if retirement_age > current_age {
                    return Ok((retirement_age - current_age, Some(current_age)));
                }
                match policy {
                    HorizonPolicy::Floor => {
                        warn!(
                            "retirement age {} is not after current age {}; projecting 1 year",
                            retirement_age, current_age
                        );
                        Ok((horizon_from_ages(current_age, retirement_age), Some(current_age)))
                    }
                    HorizonPolicy::Reject => Err(ProjectionError::HorizonCollapse {
                        current_age,
                        retirement_age,
                    }),
                }
            }
        }
    }
}

/// Saving period between two ages, floored to one year
pub fn horizon_from_ages(current_age: u32, retirement_age: u32) -> u32 {
    retirement_age.saturating_sub(current_age).max(1)
}

/// Unvalidated inputs as they arrive from a form, CLI or config file
///
/// Missing fields in a JSON document fall back to the calculator defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInputs {
    pub initial_capital: f64,
    pub monthly_contribution: f64,
    pub annual_interest_rate_percent: f64,
    pub annual_inflation_rate_percent: f64,
    pub horizon: HorizonInput,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            initial_capital: DEFAULT_INITIAL_CAPITAL,
            monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
            annual_interest_rate_percent: DEFAULT_INTEREST_RATE_PERCENT,
            annual_inflation_rate_percent: DEFAULT_INFLATION_RATE_PERCENT,
            horizon: HorizonInput::default(),
        }
    }
}

impl RawInputs {
    /// Validate and normalise into [`ProjectionParams`]
    pub fn validate(&self, policy: HorizonPolicy) -> Result<ProjectionParams, ProjectionError> {
        let (horizon_years, current_age) = self.horizon.resolve(policy)?;
        let params = ProjectionParams::new(
            self.initial_capital,
            self.monthly_contribution,
            self.annual_interest_rate_percent,
            self.annual_inflation_rate_percent,
            horizon_years,
        )?;

        Ok(match current_age {
            Some(age) => params.with_current_age(age),
            None => params,
        })
    }
}

/// Advisory ranges of the interactive input controls
///
/// Values outside these ranges are still projected; they are only reported.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBounds {
    pub initial_capital: (f64, f64),
    pub monthly_contribution: (f64, f64),
    pub interest_rate_percent: (f64, f64),
    pub inflation_rate_percent: (f64, f64),
    pub current_age: (u32, u32),
    pub max_retirement_age: u32,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            initial_capital: (0.0, 500_000.0),
            monthly_contribution: (0.0, 10_000.0),
            interest_rate_percent: (0.1, 25.0),
            inflation_rate_percent: (0.1, 15.0),
            current_age: (18, 80),
            max_retirement_age: MAX_HORIZON_YEARS,
        }
    }
}

impl InputBounds {
    /// Names of the inputs lying outside the advisory ranges
    pub fn out_of_range(&self, inputs: &RawInputs) -> Vec<&'static str> {
        let within = |value: f64, (lo, hi): (f64, f64)| value >= lo && value <= hi;
        let mut fields = Vec::new();

        if !within(inputs.initial_capital, self.initial_capital) {
            fields.push("initial_capital");
        }
        if !within(inputs.monthly_contribution, self.monthly_contribution) {
            fields.push("monthly_contribution");
        }
        if !within(inputs.annual_interest_rate_percent, self.interest_rate_percent) {
            fields.push("annual_interest_rate_percent");
        }
        if !within(inputs.annual_inflation_rate_percent, self.inflation_rate_percent) {
            fields.push("annual_inflation_rate_percent");
        }
        if let HorizonInput::Ages { current_age, retirement_age } = inputs.horizon {
            let (lo, hi) = self.current_age;
            if current_age < lo || current_age > hi {
                fields.push("current_age");
            }
            if retirement_age > self.max_retirement_age {
                fields.push("retirement_age");
            }
        }

        fields
    }

    /// Log a warning for every out-of-range input, returning how many there were
    pub fn warn_out_of_range(&self, inputs: &RawInputs) -> usize {
        let fields = self.out_of_range(inputs);
        for field in &fields {
            warn!("{} is outside the usual input range", field);
        }
        fields.len()
    }
}
