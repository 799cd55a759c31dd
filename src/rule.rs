//! Rule model shared by the loader and the matching engine.
//!
//! A [`Rule`] is a plain value: name, pattern text, declared
//! [`MatchStrategy`], enabled flag and a free-text description. The only
//! behavior it owns is validation.

use crate::error::RuleIssue;
use crate::matcher::classify::classify_pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Matching algorithm applied to a rule's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Unanchored regular expression search.
    Regex,
    /// Byte-for-byte equality with the whole URL.
    Exact,
    /// Case-insensitive containment of any keyword from a separated list.
    Keyword,
    /// Glob with `*` as the only wildcard, anchored at both ends.
    Wildcard,
    /// No strategy declared; inferred from the pattern text.
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl MatchStrategy {
    /// Lowercase name as used in rule files. `Unset` is the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Regex => "regex",
            MatchStrategy::Exact => "exact",
            MatchStrategy::Keyword => "keyword",
            MatchStrategy::Wildcard => "wildcard",
            MatchStrategy::Unset => "",
        }
    }

    /// Human-readable explanation of the strategy, suitable for a settings UI.
    pub fn description(self) -> &'static str {
        match self {
            MatchStrategy::Regex => "Regex match: supports full regular expression patterns",
            MatchStrategy::Exact => "Exact match: the URL must be identical to the pattern",
            MatchStrategy::Keyword => {
                "Keyword match: the URL contains any of the keywords \
                 (separate several with ',', ';' or '|')"
            }
            MatchStrategy::Wildcard => "Wildcard match: supports the * wildcard",
            MatchStrategy::Unset => "Unknown match type",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = RuleIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regex" => Ok(MatchStrategy::Regex),
            "exact" => Ok(MatchStrategy::Exact),
            "keyword" => Ok(MatchStrategy::Keyword),
            "wildcard" => Ok(MatchStrategy::Wildcard),
            "" => Ok(MatchStrategy::Unset),
            other => Err(RuleIssue::UnknownMatchType(other.to_string())),
        }
    }
}

/// A named, ordered matching directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(rename = "url_pattern")]
    pub pattern: String,
    #[serde(rename = "match_type", default)]
    pub strategy: MatchStrategy,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

impl Rule {
    /// Create an enabled rule with an empty description.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        strategy: MatchStrategy,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            strategy,
            enabled: true,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Strategy the engine will actually run for this rule.
    ///
    /// Declared strategies are returned as is; `Unset` goes through the
    /// legacy pattern classification.
    pub fn effective_strategy(&self) -> MatchStrategy {
        match self.strategy {
            MatchStrategy::Unset => classify_pattern(&self.pattern),
            declared => declared,
        }
    }

    /// Whether this rule's pattern is usable under `strategy`.
    ///
    /// Regex patterns must compile; every other strategy accepts any
    /// non-empty text. `Unset` is checked against the inferred strategy.
    pub fn is_valid_for(&self, strategy: MatchStrategy) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        match strategy {
            MatchStrategy::Regex => self.regex_error().is_none(),
            MatchStrategy::Unset => {
                let inferred = classify_pattern(&self.pattern);
                self.is_valid_for(inferred)
            }
            MatchStrategy::Exact | MatchStrategy::Keyword | MatchStrategy::Wildcard => true,
        }
    }

    /// Every problem with this rule, in a stable order.
    ///
    /// Only declared regex rules have their pattern compiled here; inferred
    /// regex rules are left to the engine's tolerant path.
    pub fn validate(&self) -> Vec<RuleIssue> {
        let mut issues = Vec::new();

        if self.name.is_empty() {
            issues.push(RuleIssue::EmptyName);
        }
        if self.pattern.is_empty() {
            issues.push(RuleIssue::EmptyPattern);
        } else if self.strategy == MatchStrategy::Regex && !self.is_valid_for(self.strategy) {
            issues.push(RuleIssue::InvalidRegex {
                pattern: self.pattern.clone(),
                reason: self
                    .regex_error()
                    .map(|e| e.to_string())
                    .unwrap_or_default(),
            });
        }

        issues
    }

    fn regex_error(&self) -> Option<regex::Error> {
        Regex::new(&self.pattern).err()
    }
}
