//! Interactive parameter acquisition
//!
//! Each value is read with a retry loop: blank input takes the default (when
//! one exists), anything the parser rejects triggers the error prompt, and
//! the loop repeats until a value is accepted. Reader and writer are injected
//! so the loop can be driven from tests.

use crate::params::{
    InvestmentParameters, ParameterError, PartialParameters, DEFAULT_ANNUAL_RETURN_RATE,
    DEFAULT_CAP_GAINS_RATE, DEFAULT_YEARS_TO_INVEST,
};
use log::debug;
use std::io::{self, BufRead, Write};

pub const PERCENT_ERROR_PROMPT: &str = "Please enter a positive number with a percent symbol \
                                        or a positive decimal number (e.g. 10.5% or 0.105): ";

pub const INT_ERROR_PROMPT: &str = "Please enter a positive integer: ";

/// Prompt until `parse` accepts a line, returning the parsed value.
///
/// Blank input returns `default` when one is given. End of input is reported
/// as `UnexpectedEof`.
pub fn prompt_until_valid<R, W, T, F>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    error_prompt: &str,
    default: Option<T>,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    let mut current_prompt = prompt;
    let mut default = default;

    loop {
        write!(writer, "{}", current_prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }

        let input = line.trim();
        if input.is_empty() {
            if let Some(value) = default.take() {
                return Ok(value);
            }
        } else if let Some(value) = parse(input) {
            return Ok(value);
        }

        debug!("Rejected input {:?}", input);
        current_prompt = error_prompt;
    }
}

/// Parse `10.5%` or `0.105` into a positive finite rate
pub fn parse_percent(input: &str) -> Option<f64> {
    let rate = match input.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok()? / 100.0,
        None => input.parse::<f64>().ok()?,
    };

    (rate.is_finite() && rate > 0.0).then_some(rate)
}

/// Parse a tax rate: like `parse_percent`, but no more than 100%
pub fn parse_tax_rate(input: &str) -> Option<f64> {
    parse_percent(input).filter(|&rate| rate <= 1.0)
}

/// Parse a positive integer that fits in `u32`
pub fn parse_positive_int(input: &str) -> Option<u32> {
    input.parse::<u32>().ok().filter(|&value| value > 0)
}

/// Parse a positive whole number of any length (e.g. a 300-digit amount)
pub fn parse_whole_amount(input: &str) -> Option<f64> {
    let digits = input.strip_prefix('+').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Prompt for every value missing from `known`, in the order the
/// calculator asks for them
pub fn prompt_missing<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    known: PartialParameters,
) -> io::Result<PartialParameters> {
    let mut params = known;

    if params.capital_gains_rate.is_none() {
        let prompt = format!(
            "Long-term capital gains tax rate (default {:.0}%): ",
            DEFAULT_CAP_GAINS_RATE * 100.0
        );
        params.capital_gains_rate = Some(prompt_until_valid(
            reader,
            writer,
            &prompt,
            PERCENT_ERROR_PROMPT,
            Some(DEFAULT_CAP_GAINS_RATE),
            parse_tax_rate,
        )?);
    }

    if params.annual_return_rate.is_none() {
        let prompt = format!(
            "Average annual rate of return of your investment (default {:.0}%): ",
            DEFAULT_ANNUAL_RETURN_RATE * 100.0
        );
        params.annual_return_rate = Some(prompt_until_valid(
            reader,
            writer,
            &prompt,
            PERCENT_ERROR_PROMPT,
            Some(DEFAULT_ANNUAL_RETURN_RATE),
            parse_percent,
        )?);
    }

    if params.monthly_contribution.is_none() {
        params.monthly_contribution = Some(prompt_until_valid(
            reader,
            writer,
            "Monthly contribution: ",
            INT_ERROR_PROMPT,
            None,
            parse_whole_amount,
        )?);
    }

    if params.years_to_invest.is_none() {
        let prompt = format!("Years to invest (default {}): ", DEFAULT_YEARS_TO_INVEST);
        params.years_to_invest = Some(prompt_until_valid(
            reader,
            writer,
            &prompt,
            INT_ERROR_PROMPT,
            Some(DEFAULT_YEARS_TO_INVEST),
            parse_positive_int,
        )?);
    }

    if params.age.is_none() {
        params.age = Some(prompt_until_valid(
            reader,
            writer,
            "Age (Enter to skip): ",
            INT_ERROR_PROMPT,
            Some(0),
            parse_positive_int,
        )?);
    }

    Ok(params)
}

/// Errors from interactive acquisition
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("failed to read parameters: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Invalid(#[from] ParameterError),
}

/// Prompt for missing values and hand back a validated parameter set
pub fn acquire_parameters<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    known: PartialParameters,
) -> Result<InvestmentParameters, AcquireError> {
    let params = prompt_missing(reader, writer, known)?;
    Ok(params.with_defaults()?)
}

/// Combine parameter-file values with command-line overrides (overrides win),
/// then either validate them as-is (`no_prompt`, or nothing missing) or
/// prompt for whatever is still missing
pub fn resolve_parameters<R: BufRead, W: Write>(
    from_file: PartialParameters,
    overrides: PartialParameters,
    no_prompt: bool,
    reader: &mut R,
    writer: &mut W,
) -> Result<InvestmentParameters, AcquireError> {
    let known = from_file.merge(overrides);

    if no_prompt || known.is_complete() {
        Ok(known.with_defaults()?)
    } else {
        acquire_parameters(reader, writer, known)
    }
}
