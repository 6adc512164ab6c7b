//! Investment parameter structures and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default long-term capital gains tax rate (15%)
pub const DEFAULT_CAP_GAINS_RATE: f64 = 0.15;

/// Default average annual rate of return (10%)
pub const DEFAULT_ANNUAL_RETURN_RATE: f64 = 0.10;

/// Default investment horizon in years
pub const DEFAULT_YEARS_TO_INVEST: u32 = 20;

/// Reasons a set of parameters is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("capital gains rate must be between 0 and 1, got {0}")]
    CapitalGainsRateOutOfRange(f64),
    #[error("annual return rate must be a finite non-negative number, got {0}")]
    InvalidReturnRate(f64),
    #[error("monthly contribution must be a positive whole number, got {0}")]
    InvalidContribution(f64),
    #[error("years to invest must be at least 1")]
    ZeroYears,
    #[error("monthly contribution is required")]
    MissingContribution,
}

/// Validated inputs for a single projection
///
/// The contribution is a whole number stored as `f64` so that amounts far
/// beyond the integer types (e.g. 10^300) can still be projected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PartialParameters")]
pub struct InvestmentParameters {
    capital_gains_rate: f64,
    annual_return_rate: f64,
    monthly_contribution: f64,
    years_to_invest: u32,
    age: u32,
}

impl InvestmentParameters {
    /// Create a validated parameter set. An `age` of 0 means unspecified.
    pub fn new(
        capital_gains_rate: f64,
        annual_return_rate: f64,
        monthly_contribution: f64,
        years_to_invest: u32,
        age: u32,
    ) -> Result<Self, ParameterError> {
        if !(0.0..=1.0).contains(&capital_gains_rate) {
            return Err(ParameterError::CapitalGainsRateOutOfRange(capital_gains_rate));
        }
        if !annual_return_rate.is_finite() || annual_return_rate < 0.0 {
            return Err(ParameterError::InvalidReturnRate(annual_return_rate));
        }
        if !monthly_contribution.is_finite()
            || monthly_contribution <= 0.0
            || monthly_contribution.fract() != 0.0
        {
            return Err(ParameterError::InvalidContribution(monthly_contribution));
        }
        if years_to_invest == 0 {
            return Err(ParameterError::ZeroYears);
        }

        Ok(Self {
            capital_gains_rate,
            annual_return_rate,
            monthly_contribution,
            years_to_invest,
            age,
        })
    }

    pub fn capital_gains_rate(&self) -> f64 {
        self.capital_gains_rate
    }

    pub fn annual_return_rate(&self) -> f64 {
        self.annual_return_rate
    }

    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    pub fn years_to_invest(&self) -> u32 {
        self.years_to_invest
    }

    /// Age of the investor today (0 = unspecified)
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Monthly growth multiplier applied after each contribution
    pub fn monthly_growth_factor(&self) -> f64 {
        1.0 + self.annual_return_rate / 12.0
    }
}

/// Parameters gathered from flags, files, or prompts; any field may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialParameters {
    pub capital_gains_rate: Option<f64>,
    pub annual_return_rate: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub years_to_invest: Option<u32>,
    pub age: Option<u32>,
}

impl PartialParameters {
    /// Overlay `other` on top of `self`; values present in `other` win
    pub fn merge(self, other: PartialParameters) -> Self {
        Self {
            capital_gains_rate: other.capital_gains_rate.or(self.capital_gains_rate),
            annual_return_rate: other.annual_return_rate.or(self.annual_return_rate),
            monthly_contribution: other.monthly_contribution.or(self.monthly_contribution),
            years_to_invest: other.years_to_invest.or(self.years_to_invest),
            age: other.age.or(self.age),
        }
    }

    /// True when every value is present and nothing needs prompting
    pub fn is_complete(&self) -> bool {
        self.capital_gains_rate.is_some()
            && self.annual_return_rate.is_some()
            && self.monthly_contribution.is_some()
            && self.years_to_invest.is_some()
            && self.age.is_some()
    }

    /// Fill missing values with defaults and validate.
    /// The contribution has no default.
    pub fn with_defaults(self) -> Result<InvestmentParameters, ParameterError> {
        let monthly_contribution = self
            .monthly_contribution
            .ok_or(ParameterError::MissingContribution)?;

        InvestmentParameters::new(
            self.capital_gains_rate.unwrap_or(DEFAULT_CAP_GAINS_RATE),
            self.annual_return_rate.unwrap_or(DEFAULT_ANNUAL_RETURN_RATE),
            monthly_contribution,
            self.years_to_invest.unwrap_or(DEFAULT_YEARS_TO_INVEST),
            self.age.unwrap_or(0),
        )
    }
}

impl TryFrom<PartialParameters> for InvestmentParameters {
    type Error = ParameterError;

    fn try_from(partial: PartialParameters) -> Result<Self, Self::Error> {
        partial.with_defaults()
    }
}

impl From<InvestmentParameters> for PartialParameters {
    fn from(params: InvestmentParameters) -> Self {
        Self {
            capital_gains_rate: Some(params.capital_gains_rate),
            annual_return_rate: Some(params.annual_return_rate),
            monthly_contribution: Some(params.monthly_contribution),
            years_to_invest: Some(params.years_to_invest),
            age: Some(params.age),
        }
    }
}
