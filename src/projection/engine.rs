//! Core projection engine for monthly compound-growth projections

use crate::params::InvestmentParameters;
use super::results::ProjectionResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Default spacing between reported checkpoint years
pub const DEFAULT_CHECKPOINT_STEP: u32 = 5;

/// Configuration for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Years between checkpoints (0 reports only the final year)
    pub checkpoint_step: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            checkpoint_step: DEFAULT_CHECKPOINT_STEP,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a projection, producing one result per checkpoint in ascending order.
    ///
    /// Stops after the first overflowed checkpoint: the total only grows with
    /// the horizon, so every later checkpoint would overflow as well.
    pub fn project(&self, params: &InvestmentParameters) -> Vec<ProjectionResult> {
        let checkpoint_years = checkpoints(params.years_to_invest(), self.config.checkpoint_step);
        let mut results = Vec::with_capacity(checkpoint_years.len());

        for years in checkpoint_years {
            let result = project_checkpoint(params, years);
            results.push(result);

            if result.overflowed {
                warn!("Projection overflowed at {} years; skipping later checkpoints", years);
                break;
            }

            debug!(
                "Checkpoint {} years: total={:.2} principal={:.2}",
                years, result.total_value, result.principal
            );
        }

        results
    }
}

/// Project with the default checkpoint spacing
pub fn compute_projection(params: &InvestmentParameters) -> Vec<ProjectionResult> {
    ProjectionEngine::default().project(params)
}

/// Checkpoint years: multiples of `step` below `years_to_invest`, then
/// `years_to_invest` itself
pub fn checkpoints(years_to_invest: u32, step: u32) -> Vec<u32> {
    let mut years = Vec::new();

    if step > 0 {
        years.extend((step..years_to_invest).step_by(step as usize));
    }
    years.push(years_to_invest);

    years
}

/// Account value after `months` contributions.
///
/// Each month the contribution is added first and the whole balance then
/// grows by one month at `annual_return_rate / 12`. Returns `f64::INFINITY`
/// once the balance leaves the finite range.
pub fn invest_monthly(params: &InvestmentParameters, months: u64) -> f64 {
    let contribution = params.monthly_contribution();
    let growth = params.monthly_growth_factor();
    let mut total = 0.0_f64;

    for _ in 0..months {
        total += contribution;
        total *= growth;

        if total.is_infinite() {
            break;
        }
    }

    total
}

/// Compute the result for a single checkpoint
fn project_checkpoint(params: &InvestmentParameters, years: u32) -> ProjectionResult {
    let total = invest_monthly(params, u64::from(years) * 12);

    if total == f64::INFINITY {
        ProjectionResult::overflow(years)
    } else {
        ProjectionResult::from_total(params, years, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params(monthly_contribution: f64, years_to_invest: u32) -> InvestmentParameters {
        InvestmentParameters::new(0.15, 0.10, monthly_contribution, years_to_invest, 0).unwrap()
    }

    #[test]
    fn test_checkpoints_not_multiple_of_step() {
        assert_eq!(checkpoints(17, 5), vec![5, 10, 15, 17]);
    }

    #[test]
    fn test_checkpoints_multiple_of_step() {
        assert_eq!(checkpoints(20, 5), vec![5, 10, 15, 20]);
    }

    #[test]
    fn test_checkpoints_short_horizon() {
        assert_eq!(checkpoints(3, 5), vec![3]);
        assert_eq!(checkpoints(5, 5), vec![5]);
        assert_eq!(checkpoints(1, 5), vec![1]);
    }

    #[test]
    fn test_checkpoints_custom_step() {
        assert_eq!(checkpoints(7, 2), vec![2, 4, 6, 7]);
        assert_eq!(checkpoints(12, 0), vec![12]);
    }

    #[test]
    fn test_one_year_projection() {
        let params = test_params(100.0, 1);
        let results = compute_projection(&params);

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.years, 1);
        assert_relative_eq!(result.principal, 1200.0);
        assert!(result.total_value > result.principal);
        assert_relative_eq!(result.profit, result.total_value - result.principal);

        // Contribute-then-grow matches the annuity-due closed form
        let g: f64 = 1.0 + 0.10 / 12.0;
        let expected = 100.0 * g * (g.powi(12) - 1.0) / (g - 1.0);
        assert_relative_eq!(result.total_value, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_return_and_tax_breakdown() {
        let params = test_params(500.0, 10);
        let results = compute_projection(&params);

        for result in &results {
            assert_relative_eq!(result.annual_return, result.total_value * 0.10);
            assert_relative_eq!(result.annual_return_after_tax, result.annual_return * 0.85);
        }
    }

    #[test]
    fn test_results_follow_checkpoints() {
        let params = test_params(100.0, 17);
        let years: Vec<u32> = compute_projection(&params).iter().map(|r| r.years).collect();
        assert_eq!(years, vec![5, 10, 15, 17]);
    }

    #[test]
    fn test_zero_return_rate_has_no_profit() {
        let params = InvestmentParameters::new(0.15, 0.0, 100.0, 3, 0).unwrap();
        let result = compute_projection(&params)[0];

        assert_relative_eq!(result.total_value, 3600.0);
        assert_relative_eq!(result.profit, 0.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let params = test_params(321.0, 23);
        let first = compute_projection(&params);
        let second = compute_projection(&params);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.total_value.to_bits(), b.total_value.to_bits());
            assert_eq!(a.profit.to_bits(), b.profit.to_bits());
        }
    }

    #[test]
    fn test_overflow_stops_projection() {
        let params = test_params(1e300, 500);
        let results = compute_projection(&params);

        let last = results.last().unwrap();
        assert!(last.overflowed);
        assert!(results.len() < checkpoints(500, 5).len());
        assert!(results[..results.len() - 1]
            .iter()
            .all(|r| !r.overflowed && r.total_value.is_finite()));
    }

    #[test]
    fn test_overflow_on_first_checkpoint() {
        let params = test_params(f64::MAX.floor(), 20);
        let results = compute_projection(&params);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].years, 5);
        assert!(results[0].overflowed);
    }

    #[test]
    fn test_checkpoint_step_from_config() {
        let engine = ProjectionEngine::new(ProjectionConfig { checkpoint_step: 2 });
        let params = test_params(100.0, 7);
        let years: Vec<u32> = engine.project(&params).iter().map(|r| r.years).collect();
        assert_eq!(years, vec![2, 4, 6, 7]);
    }

    #[test]
    fn test_month_count_beyond_u32() {
        // Checkpoints past u32::MAX / 12 years must not cap the month count
        let params = test_params(f64::MAX.floor(), u32::MAX);
        let months = u64::from(u32::MAX) * 12;
        assert!(months > u64::from(u32::MAX));
        assert_eq!(invest_monthly(&params, months), f64::INFINITY);

        let result = project_checkpoint(&params, u32::MAX);
        assert!(result.overflowed);
        assert_eq!(result.years, u32::MAX);
    }

    #[test]
    fn test_invest_monthly_zero_months() {
        let params = test_params(100.0, 1);
        assert_eq!(invest_monthly(&params, 0), 0.0);
    }
}
