//! Load savings scenarios from CSV
//!
//! Expected columns: `Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate`
//! plus either `Years` or `CurrentAge,RetirementAge`. Unused horizon columns may be
//! left empty or omitted.

use csv::Reader;
use serde::Deserialize;
use std::path::Path;

use super::{HorizonInput, HorizonPolicy, RawInputs};
use crate::error::ScenarioLoadError;

/// Default scenario file used by the batch runner
pub const DEFAULT_SCENARIOS_PATH: &str = "scenarios.csv";

/// A labelled set of raw inputs
#[derive(Debug, Clone, PartialEq)]
pub struct NamedInputs {
    pub name: String,
    pub inputs: RawInputs,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialCapital")]
    initial_capital: f64,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "InflationRate")]
    inflation_rate: f64,
    #[serde(rename = "Years", default)]
    years: Option<u32>,
    #[serde(rename = "CurrentAge", default)]
    current_age: Option<u32>,
    #[serde(rename = "RetirementAge", default)]
    retirement_age: Option<u32>,
}

impl CsvRow {
    fn into_named(self, policy: HorizonPolicy) -> Result<NamedInputs, ScenarioLoadError> {
        let horizon = match (self.years, self.current_age, self.retirement_age) {
            (Some(years), _, _) => HorizonInput::Years(years),
            (None, Some(current_age), Some(retirement_age)) => HorizonInput::Ages {
                current_age,
                retirement_age,
            },
            _ => return Err(ScenarioLoadError::MissingHorizon { name: self.name }),
        };

        let inputs = RawInputs {
            initial_capital: self.initial_capital,
            monthly_contribution: self.monthly_contribution,
            annual_interest_rate_percent: self.interest_rate,
            annual_inflation_rate_percent: self.inflation_rate,
            horizon,
        };

        // Reject bad rows at load time so a batch never starts on broken input
        if let Err(source) = inputs.validate(policy) {
            return Err(ScenarioLoadError::Invalid { name: self.name, source });
        }

        Ok(NamedInputs { name: self.name, inputs })
    }
}

/// Load all scenarios from a CSV file
///
/// `policy` must be the one the scenarios will be projected under, so that a
/// collapsed age pair fails here exactly when it would fail at run time.
pub fn load_scenarios<P: AsRef<Path>>(
    path: P,
    policy: HorizonPolicy,
) -> Result<Vec<NamedInputs>, ScenarioLoadError> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader, policy)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
    policy: HorizonPolicy,
) -> Result<Vec<NamedInputs>, ScenarioLoadError> {
    collect_rows(Reader::from_reader(reader), policy)
}

fn collect_rows<R: std::io::Read>(
    mut reader: Reader<R>,
    policy: HorizonPolicy,
) -> Result<Vec<NamedInputs>, ScenarioLoadError> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_named(policy)?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_load_years_and_ages() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,Years,CurrentAge,RetirementAge
baseline,10000,500,8,3,,30,65
short,0,100,0,0,2,,
";
        let scenarios = load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(
            scenarios[0].inputs.horizon,
            HorizonInput::Ages { current_age: 30, retirement_age: 65 }
        );
        assert_eq!(scenarios[0].inputs.monthly_contribution, 500.0);

        assert_eq!(scenarios[1].inputs.horizon, HorizonInput::Years(2));
        assert_eq!(scenarios[1].inputs.annual_interest_rate_percent, 0.0);
    }

    #[test]
    fn test_years_column_may_be_omitted() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,CurrentAge,RetirementAge
a,1000,50,5,2,40,60
";
        let scenarios = load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor).unwrap();
        assert_eq!(
            scenarios[0].inputs.horizon,
            HorizonInput::Ages { current_age: 40, retirement_age: 60 }
        );
    }

    #[test]
    fn test_missing_horizon() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,Years,CurrentAge,RetirementAge
nohorizon,1000,50,5,2,,40,
";
        let err = load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor).unwrap_err();
        assert!(matches!(
            err,
            ScenarioLoadError::MissingHorizon { ref name } if name == "nohorizon"
        ));
    }

    #[test]
    fn test_invalid_row_is_reported_with_its_name() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,Years
broken,-5,50,5,2,10
";
        let err = load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor).unwrap_err();
        match err {
            ScenarioLoadError::Invalid { name, source } => {
                assert_eq!(name, "broken");
                assert_eq!(
                    source,
                    ProjectionError::InvalidParameter { name: "initial_capital", value: -5.0 }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_collapsed_ages_follow_the_load_policy() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,CurrentAge,RetirementAge
late,1000,50,5,2,70,65
";
        let floored = load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor).unwrap();
        assert_eq!(floored.len(), 1);

        match load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Reject).unwrap_err() {
            ScenarioLoadError::Invalid { name, source } => {
                assert_eq!(name, "late");
                assert_eq!(
                    source,
                    ProjectionError::HorizonCollapse { current_age: 70, retirement_age: 65 }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_beyond_maximum_horizon_is_rejected() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,Years
forever,10000,500,25,15,6000
";
        let err = load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor).unwrap_err();
        assert!(matches!(
            err,
            ScenarioLoadError::Invalid {
                source: ProjectionError::InvalidParameter { name: "horizon_years", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_unparseable_number() {
        let data = "\
Name,InitialCapital,MonthlyContribution,InterestRate,InflationRate,Years
bad,lots,50,5,2,10
";
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes(), HorizonPolicy::Floor),
            Err(ScenarioLoadError::Csv(_))
        ));
    }
}
