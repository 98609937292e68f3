use crate::params::ParamKind;
use thiserror::Error;

/// Errors raised while turning host arguments into a formula URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Formula '{0}' is not registered in this pack")]
    UnknownFormula(String),

    #[error("Formula '{formula}' accepts at most {expected} arguments, but received {found}")]
    ArityMismatch {
        formula: String,
        expected: usize,
        found: usize,
    },

    #[error("Required parameter '{param}' of formula '{formula}' is missing")]
    MissingParameter { formula: String, param: String },

    #[error("Parameter '{param}' of formula '{formula}' expects {expected}, but found {found}")]
    TypeMismatch {
        formula: String,
        param: String,
        expected: ParamKind,
        found: ParamKind,
    },

    #[error(
        "Formula '{formula}' takes repeated groups of {group_size} trailing arguments, but {found} were supplied"
    )]
    IncompleteVarargs {
        formula: String,
        group_size: usize,
        found: usize,
    },

    #[error("Failed to serialize chart definition: {0}")]
    Serialization(String),
}

/// Errors that can occur while loading a pack configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
