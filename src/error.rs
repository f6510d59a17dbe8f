//! Error types for goal parsing and ledger persistence.

use thiserror::Error;

/// Why a single persisted goal line could not be turned back into a goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalParseError {
    #[error("unknown goal type '{0}'")]
    UnknownType(String),

    #[error("{goal_type} goal needs {expected} fields, found {found}")]
    MissingFields {
        goal_type: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid integer in field '{field}': '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid boolean in field '{field}': '{value}'")]
    InvalidBool { field: &'static str, value: String },
}

/// Errors raised while saving or parsing a whole ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended before the score and goal count header.
    #[error("save data is truncated: expected score and goal count lines")]
    MissingHeader,

    #[error("invalid {field} line: '{value}'")]
    InvalidHeader { field: &'static str, value: String },
}

/// Errors reading the config file. A missing file is not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
