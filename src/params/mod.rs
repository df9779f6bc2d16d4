//! Projection inputs, validation and scenario loading

mod data;
pub mod loader;

pub use data::{
    horizon_from_ages, HorizonInput, HorizonPolicy, InputBounds, ProjectionParams, RawInputs,
    DEFAULT_CURRENT_AGE, DEFAULT_INFLATION_RATE_PERCENT, DEFAULT_INITIAL_CAPITAL,
    DEFAULT_INTEREST_RATE_PERCENT, DEFAULT_MONTHLY_CONTRIBUTION, DEFAULT_RETIREMENT_AGE,
    MAX_HORIZON_YEARS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedInputs};
