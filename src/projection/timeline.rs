//! Timeline output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    /// Years elapsed since the start (0 = before any growth)
    pub year: u32,

    /// Initial capital plus contributions to date, without growth
    pub invested_capital: i64,

    /// Account balance in future currency units
    pub nominal_value: i64,

    /// Nominal value deflated to today's purchasing power
    pub real_value: i64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// One row per year, ascending from year 0
    pub rows: Vec<TimelineRow>,

    /// Final-year totals
    pub summary: Summary,

    /// Age at year 0 when the horizon came from an age pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_age: Option<u32>,
}

impl ProjectionResult {
    /// Assemble a result from generated rows
    ///
    /// Returns `None` for an empty sequence; the engine always emits at least
    /// the year-0 row.
    pub fn from_rows(rows: Vec<TimelineRow>, start_age: Option<u32>) -> Option<Self> {
        let summary = Summary::from_final_row(rows.last()?);
        Some(Self { rows, summary, start_age })
    }

    /// Last projected year
    pub fn horizon_years(&self) -> u32 {
        self.summary.year
    }

    /// Row for a given year
    pub fn row(&self, year: u32) -> Option<&TimelineRow> {
        self.rows.get(year as usize)
    }

    /// Saver's age in a given projection year, if the start age is known
    pub fn age_at(&self, year: u32) -> Option<u32> {
        self.start_age.map(|age| age + year)
    }
}

/// Final-year figures of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Year the summary was read from
    pub year: u32,
    pub nominal: i64,
    pub real: i64,
    pub invested_total: i64,
    /// `nominal - invested_total`
    pub interest_earned: i64,
}

impl Summary {
    /// Read the summary off the final row without recomputing anything
    pub fn from_final_row(row: &TimelineRow) -> Self {
        Self {
            year: row.year,
            nominal: row.nominal_value,
            real: row.real_value,
            invested_total: row.invested_capital,
            interest_earned: row.nominal_value - row.invested_capital,
        }
    }

    /// Face value lost to inflation: `nominal - real`
    pub fn purchasing_power_loss(&self) -> i64 {
        self.nominal - self.real
    }

    /// Split of the final balance into contributions and interest
    pub fn composition(&self) -> Composition {
        let contributed = self.invested_total;
        let interest = self.interest_earned.max(0);
        let total = contributed + interest;

        let (contributed_share, interest_share) = if total > 0 {
            (contributed as f64 / total as f64, interest as f64 / total as f64)
        } else {
            (0.0, 0.0)
        };

        Composition {
            contributed,
            interest,
            contributed_share,
            interest_share,
        }
    }
}

/// Contributions versus interest in the final balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub contributed: i64,
    /// Interest earned, never negative
    pub interest: i64,
    pub contributed_share: f64,
    pub interest_share: f64,
}
