//! Engine tuning and rule file loading.
//!
//! [`EngineConfig`] holds the few knobs the matching engine has.
//! [`RulesConfig`] is the rule file loader: it reads a JSON or YAML rule
//! list, reports validation issues per rule position, and hands the enabled
//! rules to [`UrlMatcher`](crate::UrlMatcher) in file order.
//!
//! # Rule file format
//!
//! ```json
//! {
//!   "rules": [
//!     {
//!       "name": "GitHub",
//!       "url_pattern": "github.com, gitlab.com",
//!       "match_type": "keyword",
//!       "description": "Code hosting",
//!       "enabled": true
//!     }
//!   ]
//! }
//! ```
//!
//! `match_type` may be omitted or empty, in which case the strategy is
//! inferred from the pattern. `enabled` defaults to `false`.

use crate::error::{Result, RuleEngineError, RuleIssue};
use crate::rule::{MatchStrategy, Rule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default rule file name looked up by hosting applications.
pub const DEFAULT_RULES_FILE: &str = "config.json";

/// Matching engine configuration.
///
/// # Examples
///
/// ```rust
/// use url_rule_engine::EngineConfig;
///
/// // Keep all regex compilation lazy, always evaluate batches sequentially
/// let config = EngineConfig::default()
///     .with_precompile_regex(false)
///     .with_min_batch_size_for_parallelism(usize::MAX);
/// assert!(!config.precompile_regex);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Compile regex rules into the pattern cache at construction.
    ///
    /// When disabled every regex is compiled lazily on its first
    /// evaluation. Compile failures are tolerated either way.
    ///
    /// **Default**: true
    pub precompile_regex: bool,

    /// Minimum batch length for `evaluate_batch` to fan out over rayon.
    ///
    /// Shorter batches are evaluated on the calling thread, where the
    /// thread-pool handoff would cost more than the matching itself.
    ///
    /// **Default**: 64
    pub min_batch_size_for_parallelism: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precompile_regex: true,
            min_batch_size_for_parallelism: 64,
        }
    }
}

impl EngineConfig {
    pub fn with_precompile_regex(mut self, enabled: bool) -> Self {
        self.precompile_regex = enabled;
        self
    }

    pub fn with_min_batch_size_for_parallelism(mut self, size: usize) -> Self {
        self.min_batch_size_for_parallelism = size;
        self
    }
}

/// One rule as written in a rule file.
///
/// `match_type` stays raw text so an unknown strategy name is reported by
/// [`RulesConfig::validate_rules`] instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    pub url_pattern: String,
    #[serde(default)]
    pub match_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
}

impl RuleDefinition {
    /// Convert to a [`Rule`], mapping an unknown `match_type` to
    /// [`MatchStrategy::Unset`] so the engine infers it from the pattern.
    pub fn to_rule(&self) -> Rule {
        let strategy = self.match_type.parse().unwrap_or_else(|issue| {
            log::warn!(
                "rule '{}': {issue}, falling back to auto-detection",
                self.name
            );
            MatchStrategy::Unset
        });

        self.with_strategy(strategy)
    }

    /// Rule-level problems from [`Rule::validate`], followed by an unknown
    /// `match_type` if there is one.
    fn issues(&self) -> Vec<RuleIssue> {
        let (strategy, unknown) = match self.match_type.parse::<MatchStrategy>() {
            Ok(strategy) => (strategy, None),
            Err(issue) => (MatchStrategy::Unset, Some(issue)),
        };

        let mut issues = self.with_strategy(strategy).validate();
        issues.extend(unknown);
        issues
    }

    fn with_strategy(&self, strategy: MatchStrategy) -> Rule {
        Rule {
            name: self.name.clone(),
            pattern: self.url_pattern.clone(),
            strategy,
            enabled: self.enabled,
            description: self.description.clone(),
        }
    }
}

impl From<Rule> for RuleDefinition {
    fn from(rule: Rule) -> Self {
        Self {
            name: rule.name,
            url_pattern: rule.pattern,
            match_type: rule.strategy.as_str().to_string(),
            description: rule.description,
            enabled: rule.enabled,
        }
    }
}

/// A rule file: an ordered list of rule definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl RulesConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a rule file, choosing the parser by extension (`.json`,
    /// `.yaml` or `.yml`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let config = match extension.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(RuleEngineError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        log::info!(
            "loaded {} rules from {}",
            config.rules.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All problems in the file, each tagged with its 1-based rule position.
    ///
    /// Disabled rules are validated too.
    pub fn validate_rules(&self) -> Vec<RuleEngineError> {
        self.rules
            .iter()
            .enumerate()
            .flat_map(|(i, definition)| {
                definition
                    .issues()
                    .into_iter()
                    .map(move |issue| issue.at(i + 1))
            })
            .collect()
    }

    /// Enabled rules in file order.
    pub fn enabled_rules(&self) -> Vec<Rule> {
        self.rules
            .iter()
            .filter(|definition| definition.enabled)
            .map(RuleDefinition::to_rule)
            .collect()
    }
}

impl FromIterator<Rule> for RulesConfig {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(RuleDefinition::from).collect(),
        }
    }
}
