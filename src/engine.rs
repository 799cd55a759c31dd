//! Primary URL matching engine.
//!
//! [`UrlMatcher`] holds an ordered rule list and a compiled-pattern cache and
//! answers one question per call: which rule, if any, does this URL match
//! first?

use crate::config::{EngineConfig, RulesConfig};
use crate::matcher::cache::{CacheStats, PatternCache};
use crate::matcher::keywords::KeywordSet;
use crate::matcher::strategies::{
    exact_match, keyword_match, regex_match, MatchOutcome, WildcardPattern,
};
use crate::rule::{MatchStrategy, Rule};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of evaluating one URL against the rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    /// The first matching rule, as supplied to the engine
    pub rule: Option<Rule>,
    /// Strategy that produced the match, after auto-detection
    pub strategy: MatchStrategy,
    /// Human-readable diagnostic; not meant to be parsed
    pub detail: String,
}

impl MatchResult {
    pub const NO_MATCH_DETAIL: &'static str = "no rule matched";

    pub fn no_match() -> Self {
        Self {
            matched: false,
            rule: None,
            strategy: MatchStrategy::Unset,
            detail: Self::NO_MATCH_DETAIL.to_string(),
        }
    }

    pub fn rule_name(&self) -> Option<&str> {
        self.rule.as_ref().map(|rule| rule.name.as_str())
    }
}

/// Strategy-specific state prepared once per rule.
#[derive(Debug)]
enum RuleMatcher {
    Exact,
    Keyword(KeywordSet),
    Wildcard(WildcardPattern),
    /// Compiled form lives in the engine's pattern cache
    Regex,
}

#[derive(Debug)]
struct CompiledRule {
    rule: Rule,
    strategy: MatchStrategy,
    matcher: RuleMatcher,
}

impl CompiledRule {
    fn new(rule: Rule) -> Self {
        let strategy = rule.effective_strategy();
        let matcher = match strategy {
            MatchStrategy::Exact => RuleMatcher::Exact,
            MatchStrategy::Keyword => RuleMatcher::Keyword(KeywordSet::parse(&rule.pattern)),
            MatchStrategy::Wildcard => RuleMatcher::Wildcard(WildcardPattern::new(&rule.pattern)),
            // effective_strategy never yields Unset
            MatchStrategy::Regex | MatchStrategy::Unset => RuleMatcher::Regex,
        };

        Self {
            rule,
            strategy,
            matcher,
        }
    }

    fn evaluate(&self, url: &str, cache: &PatternCache) -> MatchOutcome {
        match &self.matcher {
            RuleMatcher::Exact => exact_match(url, &self.rule.pattern),
            RuleMatcher::Keyword(keywords) => keyword_match(url, keywords),
            RuleMatcher::Wildcard(pattern) => pattern.matches(url),
            RuleMatcher::Regex => regex_match(url, &self.rule.pattern, cache),
        }
    }
}

/// Ordered, first-match-wins URL rule engine.
///
/// Rules are fixed for the lifetime of the engine; build a new one to change
/// them. Evaluation takes `&self` and the engine is `Send + Sync`, so one
/// instance can serve concurrent callers behind an `Arc`.
///
/// # Examples
///
/// ```rust
/// use url_rule_engine::{MatchStrategy, Rule, UrlMatcher};
///
/// let matcher = UrlMatcher::new(vec![
///     Rule::new("docs", r"^https://docs\.", MatchStrategy::Regex),
///     Rule::new("code", "github.com, gitlab.com", MatchStrategy::Keyword),
/// ]);
///
/// let result = matcher.evaluate("https://GitHub.com/rust-lang/regex");
/// assert!(result.matched);
/// assert_eq!(result.rule_name(), Some("code"));
/// assert_eq!(result.strategy, MatchStrategy::Keyword);
///
/// assert!(!matcher.evaluate("https://example.org").matched);
/// ```
#[derive(Debug)]
pub struct UrlMatcher {
    rules: Vec<CompiledRule>,
    cache: PatternCache,
    config: EngineConfig,
}

impl UrlMatcher {
    /// Create an engine with the default [`EngineConfig`].
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self::with_config(rules, EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// Every rule is classified once here. With `precompile_regex` set,
    /// regex rules are compiled into the cache; failures are logged and the
    /// rule is left to fail again, harmlessly, at evaluation time.
    pub fn with_config(rules: impl IntoIterator<Item = Rule>, config: EngineConfig) -> Self {
        let rules: Vec<CompiledRule> = rules.into_iter().map(CompiledRule::new).collect();
        let cache = PatternCache::new();

        if config.precompile_regex {
            for compiled in rules.iter().filter(|c| c.strategy == MatchStrategy::Regex) {
                if let Err(e) = cache.precompile(&compiled.rule.pattern) {
                    log::warn!(
                        "rule '{}' has an invalid regex and will never match: {e}",
                        compiled.rule.name
                    );
                }
            }
        }

        log::info!(
            "url matcher ready: {} rules, {} compiled patterns",
            rules.len(),
            cache.len()
        );

        Self {
            rules,
            cache,
            config,
        }
    }

    /// Create an engine from the enabled rules of a rule file.
    pub fn from_rules_config(rules_config: &RulesConfig) -> Self {
        Self::new(rules_config.enabled_rules())
    }

    /// Evaluate `url` against the rules in order and return the first match.
    ///
    /// Disabled rules are skipped. Never fails: a rule that cannot be
    /// evaluated simply does not match.
    pub fn evaluate(&self, url: &str) -> MatchResult {
        for compiled in self.rules.iter().filter(|c| c.rule.enabled) {
            let outcome = compiled.evaluate(url, &self.cache);
            if outcome.matched {
                log::debug!("url {url} matched rule '{}'", compiled.rule.name);
                return MatchResult {
                    matched: true,
                    rule: Some(compiled.rule.clone()),
                    strategy: compiled.strategy,
                    detail: outcome.detail,
                };
            }
        }

        log::debug!("url {url} matched no rule");
        MatchResult::no_match()
    }

    /// Evaluate many URLs; results are in input order.
    ///
    /// Batches of at least `min_batch_size_for_parallelism` URLs are spread
    /// over the rayon thread pool.
    pub fn evaluate_batch<S>(&self, urls: &[S]) -> Vec<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        if urls.len() >= self.config.min_batch_size_for_parallelism {
            urls.par_iter()
                .map(|url| self.evaluate(url.as_ref()))
                .collect()
        } else {
            urls.iter().map(|url| self.evaluate(url.as_ref())).collect()
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Effective strategy of every rule, in rule order.
    pub fn effective_strategies(&self) -> Vec<MatchStrategy> {
        self.rules.iter().map(|compiled| compiled.strategy).collect()
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
