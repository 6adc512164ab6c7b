//! Report output in text, JSON or CSV form

use super::render::render_report;
use crate::params::InvestmentParameters;
use crate::projection::{ProjectionConfig, ProjectionResult};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output rendering selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// A complete projection run, as written by `write_json`
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport<'a> {
    pub parameters: &'a InvestmentParameters,
    pub config: &'a ProjectionConfig,
    pub results: &'a [ProjectionResult],
}

/// Write the report as pretty-printed JSON. Overflowed totals become `null`.
pub fn write_json<W: Write>(mut writer: W, report: &ProjectionReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write one CSV row per checkpoint, with a header row
pub fn write_csv<W: Write>(writer: W, results: &[ProjectionResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write a projection run in the chosen format
pub fn write_output<W: Write>(
    mut writer: W,
    format: OutputFormat,
    report: &ProjectionReport,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            write!(writer, "{}", render_report(report.results, report.parameters.age()))?;
            writer.flush()?;
        }
        OutputFormat::Json => write_json(writer, report)?,
        OutputFormat::Csv => write_csv(writer, report.results)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{compute_projection, ProjectionEngine};

    #[test]
    fn test_text_output_with_custom_step() {
        let params = InvestmentParameters::new(0.15, 0.10, 100.0, 7, 30).unwrap();
        let config = ProjectionConfig { checkpoint_step: 3 };
        let results = ProjectionEngine::new(config.clone()).project(&params);
        let report = ProjectionReport {
            parameters: &params,
            config: &config,
            results: &results,
        };

        let mut buffer = Vec::new();
        write_output(&mut buffer, OutputFormat::Text, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("After 3 years (age 33) you would have "));
        assert!(text.contains("After 6 years (age 36)"));
        assert!(text.contains("After 7 years (age 37)"));
        assert_eq!(text.matches("after tax).\n").count(), 3);
    }

    #[test]
    fn test_csv_output_through_write_output() {
        let params = InvestmentParameters::new(0.15, 0.10, 100.0, 5, 0).unwrap();
        let config = ProjectionConfig::default();
        let results = compute_projection(&params);
        let report = ProjectionReport {
            parameters: &params,
            config: &config,
            results: &results,
        };

        let mut buffer = Vec::new();
        write_output(&mut buffer, OutputFormat::Csv, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("5,"));
    }

    #[test]
    fn test_csv_output() {
        let params = InvestmentParameters::new(0.15, 0.10, 100.0, 12, 0).unwrap();
        let results = compute_projection(&params);

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &results).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "years,total_value,principal,profit,annual_return,annual_return_after_tax,overflowed"
        );
        assert_eq!(lines.len(), 1 + results.len());
        assert!(lines[1].starts_with("5,"));
        assert!(lines[3].starts_with("12,"));
    }

    #[test]
    fn test_json_output() {
        let params = InvestmentParameters::new(0.15, 0.10, 1e300, 500, 0).unwrap();
        let config = ProjectionConfig::default();
        let results = compute_projection(&params);
        let report = ProjectionReport {
            parameters: &params,
            config: &config,
            results: &results,
        };

        let mut buffer = Vec::new();
        write_json(&mut buffer, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let rows = value["results"].as_array().unwrap();
        assert_eq!(rows.len(), results.len());
        let last = rows.last().unwrap();
        assert_eq!(last["overflowed"], serde_json::Value::Bool(true));
        assert!(last["total_value"].is_null());
        assert_eq!(value["config"]["checkpoint_step"], 5);
    }
}
