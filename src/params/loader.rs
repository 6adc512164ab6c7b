//! Load parameters from JSON files

use super::PartialParameters;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a (possibly partial) parameter set from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<PartialParameters> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open parameter file: {:?}", path))?;

    load_parameters_from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse parameter file: {:?}", path))
}

/// Load parameters from any reader (e.g., string buffer, stdin)
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<PartialParameters> {
    let params: PartialParameters = serde_json::from_reader(reader)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_file() {
        let json = r#"{ "monthly_contribution": 500, "years_to_invest": 30 }"#;
        let params = load_parameters_from_reader(json.as_bytes()).unwrap();

        assert_eq!(params.monthly_contribution, Some(500.0));
        assert_eq!(params.years_to_invest, Some(30));
        assert_eq!(params.capital_gains_rate, None);
        assert_eq!(params.age, None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(load_parameters_from_reader("{ not json".as_bytes()).is_err());
        assert!(load_parameters_from_reader(r#"{"years_to_invest": -3}"#.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = load_parameters("does/not/exist.json").unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }
}
