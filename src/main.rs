//! Real Savings CLI
//!
//! Command-line interface for projecting a savings plan

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use real_savings::export::{
    export_timeline_csv, format_compact, format_currency, format_percent, CurrencyFormat,
    DocumentExporter,
};
use real_savings::params::{DEFAULT_CURRENT_AGE, DEFAULT_RETIREMENT_AGE};
use real_savings::{
    HorizonInput, HorizonPolicy, InputBounds, ProjectionConfig, ProjectionEngine, ProjectionParams,
    ProjectionResult, RawInputs,
};

#[derive(Parser, Debug)]
#[command(
    name = "real_savings",
    about = "Project a monthly savings plan in nominal and inflation-adjusted terms"
)]
struct Cli {
    #[arg(
        long,
        env = "REAL_SAVINGS_CONFIG",
        help = "JSON file with plan inputs; flags override its values"
    )]
    config: Option<PathBuf>,
    #[arg(long, env = "REAL_SAVINGS_INITIAL_CAPITAL", allow_negative_numbers = true)]
    initial_capital: Option<f64>,
    #[arg(long, env = "REAL_SAVINGS_MONTHLY_CONTRIBUTION", allow_negative_numbers = true)]
    monthly_contribution: Option<f64>,
    #[arg(
        long,
        env = "REAL_SAVINGS_INTEREST_RATE",
        allow_negative_numbers = true,
        help = "Annual interest rate in percent, e.g. 8"
    )]
    interest_rate: Option<f64>,
    #[arg(
        long,
        env = "REAL_SAVINGS_INFLATION_RATE",
        allow_negative_numbers = true,
        help = "Annual inflation rate in percent, e.g. 3"
    )]
    inflation_rate: Option<f64>,
    #[arg(
        long,
        env = "REAL_SAVINGS_YEARS",
        conflicts_with_all = ["current_age", "retirement_age"],
        help = "Saving period in years"
    )]
    years: Option<u32>,
    #[arg(long, env = "REAL_SAVINGS_CURRENT_AGE")]
    current_age: Option<u32>,
    #[arg(long, env = "REAL_SAVINGS_RETIREMENT_AGE")]
    retirement_age: Option<u32>,
    #[arg(
        long,
        help = "Fail when retirement age is not after current age instead of projecting one year"
    )]
    reject_collapsed_horizon: bool,
    #[arg(long, help = "Write the yearly timeline as CSV")]
    csv: Option<PathBuf>,
    #[arg(long, help = "Write a plain-text report")]
    document: Option<PathBuf>,
    #[arg(long, help = "Print the full result as JSON instead of the text summary")]
    json: bool,
    #[arg(long, help = "Print the year-by-year table")]
    table: bool,
}

impl Cli {
    /// Config file (or defaults) overlaid with explicit flags
    fn inputs(&self) -> Result<RawInputs> {
        let mut inputs = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => RawInputs::default(),
        };

        if let Some(value) = self.initial_capital {
            inputs.initial_capital = value;
        }
        if let Some(value) = self.monthly_contribution {
            inputs.monthly_contribution = value;
        }
        if let Some(value) = self.interest_rate {
            inputs.annual_interest_rate_percent = value;
        }
        if let Some(value) = self.inflation_rate {
            inputs.annual_inflation_rate_percent = value;
        }

        if let Some(years) = self.years {
            inputs.horizon = HorizonInput::Years(years);
        } else if self.current_age.is_some() || self.retirement_age.is_some() {
            let (current_age, retirement_age) = match inputs.horizon {
                HorizonInput::Ages { current_age, retirement_age } => (current_age, retirement_age),
                HorizonInput::Years(_) => (DEFAULT_CURRENT_AGE, DEFAULT_RETIREMENT_AGE),
            };
            inputs.horizon = HorizonInput::Ages {
                current_age: self.current_age.unwrap_or(current_age),
                retirement_age: self.retirement_age.unwrap_or(retirement_age),
            };
        }

        Ok(inputs)
    }

    fn config(&self) -> ProjectionConfig {
        ProjectionConfig {
            horizon_policy: if self.reject_collapsed_horizon {
                HorizonPolicy::Reject
            } else {
                HorizonPolicy::Floor
            },
            input_bounds: Some(InputBounds::default()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let inputs = cli.inputs()?;
    let engine = ProjectionEngine::new(cli.config());

    let params = engine.validate(&inputs).context("invalid plan inputs")?;
    let result = engine.project(&params);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&params, &result);
        if cli.table {
            print_table(&result);
        }
    }

    if let Some(path) = &cli.csv {
        export_timeline_csv(path, &result.rows)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if let Some(path) = &cli.document {
        DocumentExporter::default()
            .export(path, &params, &result)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn print_summary(params: &ProjectionParams, result: &ProjectionResult) {
    let summary = &result.summary;
    let composition = summary.composition();
    let currency = CurrencyFormat::default();

    println!("Real Savings Projection");
    println!("=======================\n");

    println!(
        "Plan: {} initial + {}/month at {} for {} years (inflation {})",
        currency.format_amount(params.initial_capital()),
        currency.format_amount(params.monthly_contribution()),
        format_percent(params.annual_interest_rate_percent()),
        params.horizon_years(),
        format_percent(params.annual_inflation_rate_percent()),
    );
    println!();

    println!("Summary (year {}):", summary.year);
    println!(
        "  Nominal value:      {:>14}  ({})",
        format_currency(summary.nominal),
        format_compact(summary.nominal as f64)
    );
    println!(
        "  Real value:         {:>14}  ({})",
        format_currency(summary.real),
        format_compact(summary.real as f64)
    );
    println!("  Total contributed:  {:>14}", format_currency(summary.invested_total));
    println!("  Interest earned:    {:>14}", format_currency(summary.interest_earned));
    println!("  Lost to inflation:  {:>14}", format_currency(summary.purchasing_power_loss()));
    println!(
        "  Composition:        {:.1}% contributed / {:.1}% interest",
        composition.contributed_share * 100.0,
        composition.interest_share * 100.0,
    );
}

fn print_table(result: &ProjectionResult) {
    println!();
    println!("{:>5} {:>5} {:>12} {:>12} {:>12}", "Year", "Age", "Invested", "Nominal", "Real");
    println!("{}", "-".repeat(50));

    for row in &result.rows {
        let age = result
            .age_at(row.year)
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5} {:>5} {:>12} {:>12} {:>12}",
            row.year,
            age,
            format_compact(row.invested_capital as f64),
            format_compact(row.nominal_value as f64),
            format_compact(row.real_value as f64),
        );
    }
}
