//! Per-checkpoint projection output

use crate::params::InvestmentParameters;
use serde::{Deserialize, Serialize};

/// Projection output for one checkpoint year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Years invested at this checkpoint
    pub years: u32,

    /// Account value after `years * 12` contributions
    pub total_value: f64,

    /// Sum of all contributions
    pub principal: f64,

    /// Growth above principal
    pub profit: f64,

    /// One year of growth on the total at the average rate
    pub annual_return: f64,

    /// `annual_return` net of capital gains tax
    pub annual_return_after_tax: f64,

    /// The total exceeded the finite f64 range; no breakdown is available
    pub overflowed: bool,
}

impl ProjectionResult {
    /// Build the breakdown for a finite total
    pub fn from_total(params: &InvestmentParameters, years: u32, total_value: f64) -> Self {
        let months = years as f64 * 12.0;
        let principal = params.monthly_contribution() * months;
        let annual_return = total_value * params.annual_return_rate();

        Self {
            years,
            total_value,
            principal,
            profit: total_value - principal,
            annual_return,
            annual_return_after_tax: annual_return * (1.0 - params.capital_gains_rate()),
            overflowed: false,
        }
    }

    /// Result for a checkpoint whose total overflowed to infinity
    pub fn overflow(years: u32) -> Self {
        Self {
            years,
            total_value: f64::INFINITY,
            principal: 0.0,
            profit: 0.0,
            annual_return: 0.0,
            annual_return_after_tax: 0.0,
            overflowed: true,
        }
    }
}
