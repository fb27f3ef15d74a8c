use std::env;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::weights::{Weights, DEFAULT_WEIGHTS};

pub const WEIGHTS_PATH_VARIABLE: &str = "ACTORY_WEIGHTS_PATH";

pub const STRICT_VALIDATION_VARIABLE: &str = "ACTORY_STRICT_VALIDATION";

/// Returns the value of the named environment variable if it is set.
pub fn get_optional_variable(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Settings for scoring auditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub weights: Weights,
    pub strict_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            weights: DEFAULT_WEIGHTS,
            strict_validation: true,
        }
    }
}

impl Config {
    /// Reads `ACTORY_WEIGHTS_PATH` and `ACTORY_STRICT_VALIDATION`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_variables(
            get_optional_variable(WEIGHTS_PATH_VARIABLE).as_deref(),
            get_optional_variable(STRICT_VALIDATION_VARIABLE).as_deref(),
        )
    }

    pub fn from_variables(
        weights_path: Option<&str>,
        strict_validation: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let weights = match weights_path {
            Some(path) => load_weights(path)?,
            None => DEFAULT_WEIGHTS,
        };

        let strict_validation = match strict_validation {
            Some(value) => parse_flag(STRICT_VALIDATION_VARIABLE, value)?,
            None => true,
        };

        Ok(Config {
            weights,
            strict_validation,
        })
    }
}

/// Reads a JSON weights record from `path` and checks it.
pub fn load_weights(path: impl AsRef<Path>) -> Result<Weights, ConfigError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadWeights {
        path: path.to_owned(),
        source,
    })?;

    let weights: Weights =
        serde_json::from_str(&contents).map_err(|source| ConfigError::ParseWeights {
            path: path.to_owned(),
            source,
        })?;

    weights.validate_weights()?;

    Ok(weights)
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_owned(),
        }),
    }
}
