//! Investment parameters, defaults, and parameter-file loading

mod data;
pub mod loader;

pub use data::{
    InvestmentParameters, ParameterError, PartialParameters, DEFAULT_ANNUAL_RETURN_RATE,
    DEFAULT_CAP_GAINS_RATE, DEFAULT_YEARS_TO_INVEST,
};
pub use loader::{load_parameters, load_parameters_from_reader};
