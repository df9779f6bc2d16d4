//! Printable projection report
//!
//! Layout: title and generation date, a parameter block (five labelled values),
//! a results block (four labelled summary values), then the year-by-year table
//! with the same rows and columns as the CSV export, rendered as currency.

use chrono::{Local, NaiveDate};
use log::info;
use std::path::Path;

use super::format::{format_percent, CurrencyFormat};
use crate::error::ExportError;
use crate::params::ProjectionParams;
use crate::projection::ProjectionResult;

pub const DEFAULT_TITLE: &str = "Real Savings Projection";

const TABLE_HEADER: [&str; 4] = ["Year", "Invested Capital", "Nominal Value", "Real Value"];
const LABEL_WIDTH: usize = 24;

/// Renders and writes projection reports
#[derive(Debug, Clone)]
pub struct DocumentExporter {
    pub title: String,
    pub currency: CurrencyFormat,
    pub generated_on: NaiveDate,
}

impl Default for DocumentExporter {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            currency: CurrencyFormat::default(),
            generated_on: Local::now().date_naive(),
        }
    }
}

impl DocumentExporter {
    /// Render the report as plain text
    pub fn render(&self, params: &ProjectionParams, result: &ProjectionResult) -> String {
        let money = |amount: i64| self.currency.format(amount);
        let mut doc = String::new();

        doc.push_str(&format!("{}\n", self.title));
        doc.push_str(&format!("Generated {}\n\n", self.generated_on.format("%Y-%m-%d")));

        let years = params.horizon_years();
        let period = if years == 1 { "1 year".to_string() } else { format!("{} years", years) };
        let parameters = [
            ("Initial capital", self.currency.format_amount(params.initial_capital())),
            ("Monthly contribution", self.currency.format_amount(params.monthly_contribution())),
            ("Annual interest rate", format_percent(params.annual_interest_rate_percent())),
            ("Annual inflation rate", format_percent(params.annual_inflation_rate_percent())),
            ("Period", period),
        ];
        push_block(&mut doc, "Parameters", &parameters);

        let summary = &result.summary;
        let results = [
            ("Nominal value", money(summary.nominal)),
            ("Real value (adjusted)", money(summary.real)),
            ("Total contributed", money(summary.invested_total)),
            ("Interest earned", money(summary.interest_earned)),
        ];
        push_block(&mut doc, "Results", &results);

        let cells: Vec<[String; 4]> = result
            .rows
            .iter()
            .map(|row| {
                [
                    row.year.to_string(),
                    money(row.invested_capital),
                    money(row.nominal_value),
                    money(row.real_value),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADER.map(str::len);
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        push_table_line(&mut doc, &TABLE_HEADER.map(String::from), &widths);
        for line in &cells {
            push_table_line(&mut doc, line, &widths);
        }

        doc
    }

    /// Render and write the report to `path`
    pub async fn export<P: AsRef<Path>>(
        &self,
        path: P,
        params: &ProjectionParams,
        result: &ProjectionResult,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let document = self.render(params, result);
        tokio::fs::write(path, document).await?;
        info!("report written to {}", path.display());
        Ok(())
    }
}

fn push_block(doc: &mut String, heading: &str, entries: &[(&str, String)]) {
    doc.push_str(heading);
    doc.push('\n');
    for (label, value) in entries {
        let label = format!("{}:", label);
        doc.push_str(&format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH));
    }
    doc.push('\n');
}

fn push_table_line(doc: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect();
    doc.push_str(&line.join("  "));
    doc.push('\n');
}
