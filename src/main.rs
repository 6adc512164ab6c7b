//! Investment Estimator CLI
//!
//! Prompts for any parameters not given on the command line, then prints the
//! projection at each checkpoint year

use anyhow::{Context, Result};
use clap::Parser;
use investment_estimator::input::{
    parse_percent, parse_positive_int, parse_tax_rate, parse_whole_amount, resolve_parameters,
};
use investment_estimator::params::{load_parameters, PartialParameters};
use investment_estimator::projection::DEFAULT_CHECKPOINT_STEP;
use investment_estimator::report::{write_output, OutputFormat, ProjectionReport};
use investment_estimator::{ProjectionConfig, ProjectionEngine};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "investment_estimator")]
#[command(about = "Project the future value of a recurring monthly investment", long_about = None)]
struct Cli {
    /// Long-term capital gains tax rate (e.g. 15% or 0.15)
    #[arg(long, value_parser = tax_rate_arg)]
    capital_gains_rate: Option<f64>,

    /// Average annual rate of return (e.g. 10% or 0.1)
    #[arg(long, value_parser = rate_arg)]
    annual_return_rate: Option<f64>,

    /// Amount invested every month (whole number)
    #[arg(long, value_parser = amount_arg)]
    monthly_contribution: Option<f64>,

    /// Years to invest
    #[arg(long, value_parser = count_arg)]
    years: Option<u32>,

    /// Current age, used to label each checkpoint
    #[arg(long, value_parser = count_arg)]
    age: Option<u32>,

    /// JSON file with parameter values; flags take precedence
    #[arg(long)]
    params: Option<PathBuf>,

    /// Years between reported checkpoints
    #[arg(long, default_value_t = DEFAULT_CHECKPOINT_STEP)]
    checkpoint_step: u32,

    /// Never prompt; use defaults and fail if the contribution is missing
    #[arg(long)]
    no_prompt: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> PartialParameters {
        PartialParameters {
            capital_gains_rate: self.capital_gains_rate,
            annual_return_rate: self.annual_return_rate,
            monthly_contribution: self.monthly_contribution,
            years_to_invest: self.years,
            age: self.age,
        }
    }
}

fn rate_arg(s: &str) -> Result<f64, String> {
    parse_percent(s).ok_or_else(|| format!("'{}' is not a positive percentage or decimal", s))
}

fn tax_rate_arg(s: &str) -> Result<f64, String> {
    parse_tax_rate(s).ok_or_else(|| format!("'{}' is not a percentage between 0 and 100", s))
}

fn amount_arg(s: &str) -> Result<f64, String> {
    parse_whole_amount(s).ok_or_else(|| format!("'{}' is not a positive whole number", s))
}

fn count_arg(s: &str) -> Result<u32, String> {
    parse_positive_int(s).ok_or_else(|| format!("'{}' is not a positive integer", s))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let from_file = match &cli.params {
        Some(path) => load_parameters(path)?,
        None => PartialParameters::default(),
    };

    let params = resolve_parameters(
        from_file,
        cli.overrides(),
        cli.no_prompt,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )
    .context("Invalid investment parameters")?;

    info!(
        "Projecting {} per month for {} years at {}% (capital gains tax {}%)",
        params.monthly_contribution(),
        params.years_to_invest(),
        params.annual_return_rate() * 100.0,
        params.capital_gains_rate() * 100.0
    );

    let engine = ProjectionEngine::new(ProjectionConfig {
        checkpoint_step: cli.checkpoint_step,
    });
    let results = engine.project(&params);

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Unable to create {:?}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let report = ProjectionReport {
        parameters: &params,
        config: engine.config(),
        results: &results,
    };
    write_output(writer, cli.format, &report)?;

    if let Some(path) = &cli.output {
        info!("Output written to {:?}", path);
    }

    Ok(())
}
