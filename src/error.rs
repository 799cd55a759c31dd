//! Error types for the URL rule engine.
//!
//! The matching engine itself never fails: match-time problems degrade to a
//! non-matching [`MatchResult`](crate::MatchResult) with a diagnostic detail.
//! These errors belong to the rule loader and to callers that want to
//! validate rules before building an engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuleEngineError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleEngineError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("JSON parsing error: {0}")]
    JsonError(String),
    #[error("YAML parsing error: {0}")]
    YamlError(String),
    #[error("Unsupported rule file format: {0}")]
    UnsupportedFormat(String),
    #[error("Rule {index}: {issue}")]
    InvalidRule { index: usize, issue: RuleIssue },
}

/// A single problem found while validating one rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleIssue {
    #[error("name must not be empty")]
    EmptyName,
    #[error("URL pattern must not be empty")]
    EmptyPattern,
    #[error("unknown match type '{0}'")]
    UnknownMatchType(String),
    #[error("invalid regex '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

impl RuleIssue {
    /// Attach the 1-based rule position this issue was found at.
    pub fn at(self, index: usize) -> RuleEngineError {
        RuleEngineError::InvalidRule { index, issue: self }
    }
}

impl From<std::io::Error> for RuleEngineError {
    fn from(err: std::io::Error) -> Self {
        RuleEngineError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for RuleEngineError {
    fn from(err: serde_json::Error) -> Self {
        RuleEngineError::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for RuleEngineError {
    fn from(err: serde_yaml::Error) -> Self {
        RuleEngineError::YamlError(err.to_string())
    }
}
