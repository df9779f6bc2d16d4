//! Closed-form growth factors for monthly compounding
//!
//! Year `t` values come straight from the closed forms rather than from a
//! month-by-month roll-forward, so no floating-point error accumulates along
//! the timeline.

/// Compounding periods per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Compound growth of one unit after `years` at a nominal annual rate (decimal),
/// compounded monthly: `(1 + r/12)^(12·t)`
pub fn growth_factor(annual_rate: f64, years: u32) -> f64 {
    let n = f64::from(MONTHS_PER_YEAR);
    (1.0 + annual_rate / n).powf(n * f64::from(years))
}

/// Future value of end-of-month deposits (ordinary annuity)
///
/// `growth` must be the [`growth_factor`] for the same rate and horizon. A zero
/// rate falls back to plain accumulation; the annuity formula divides by `r/12`.
pub fn contribution_future_value(
    monthly_contribution: f64,
    annual_rate: f64,
    growth: f64,
    years: u32,
) -> f64 {
    let n = f64::from(MONTHS_PER_YEAR);
    if annual_rate > 0.0 {
        monthly_contribution * (growth - 1.0) / (annual_rate / n)
    } else {
        monthly_contribution * n * f64::from(years)
    }
}

/// Cumulative price level after `years` of annual inflation (decimal)
pub fn inflation_factor(annual_inflation: f64, years: u32) -> f64 {
    (1.0 + annual_inflation).powf(f64::from(years))
}

/// Largest money amount a projection may produce; integers up to here are exact in f64
pub const MAX_MONEY: f64 = 9.0e15;

/// Round to the nearest whole money unit
///
/// Inputs are non-negative and at most [`MAX_MONEY`] (enforced when parameters
/// are validated), so half-away-from-zero matches half-up and the cast is exact.
pub fn round_money(value: f64) -> i64 {
    debug_assert!(value.is_finite() && value.abs() <= MAX_MONEY);
    value.round() as i64
}
