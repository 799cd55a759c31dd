//! # URL Rule Engine
//!
//! Decides whether a URL satisfies any of an ordered list of user-defined
//! rules. Each rule declares how its pattern is matched:
//!
//! | Strategy | Matches when |
//! |----------|--------------|
//! | `exact` | the URL is byte-for-byte equal to the pattern |
//! | `keyword` | the URL contains any keyword of a separated list, ignoring case |
//! | `wildcard` | the whole URL matches a `*` glob |
//! | `regex` | the regular expression finds a match anywhere in the URL |
//!
//! Rules without a declared strategy are classified from their pattern text
//! once, when the engine is built.
//!
//! The first matching rule wins; rule order is the precedence order.
//!
//! ## Quick Start
//!
//! ### Basic Usage
//!
//! ```rust
//! use url_rule_engine::{MatchStrategy, Rule, UrlMatcher};
//!
//! let matcher = UrlMatcher::new(vec![
//!     Rule::new("mail", "https://*.example.com/*", MatchStrategy::Wildcard),
//!     Rule::new("legacy", "^/admin", MatchStrategy::Unset),
//! ]);
//!
//! let result = matcher.evaluate("https://mail.example.com/inbox");
//! assert_eq!(result.rule_name(), Some("mail"));
//!
//! // Inferred as a regex because of the leading '^'
//! let result = matcher.evaluate("/admin/users");
//! assert_eq!(result.strategy, MatchStrategy::Regex);
//! ```
//!
//! ### Loading a Rule File
//!
//! ```rust
//! use url_rule_engine::{RulesConfig, UrlMatcher};
//!
//! let config = RulesConfig::from_json_str(r#"{
//!     "rules": [
//!         {"name": "Docs", "url_pattern": "docs.rs; crates.io", "match_type": "keyword", "enabled": true}
//!     ]
//! }"#)?;
//!
//! for issue in config.validate_rules() {
//!     eprintln!("{issue}");
//! }
//!
//! let matcher = UrlMatcher::from_rules_config(&config);
//! assert!(matcher.evaluate("https://crates.io/crates/regex").matched);
//! # Ok::<(), url_rule_engine::RuleEngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod rule;

pub use config::{EngineConfig, RuleDefinition, RulesConfig, DEFAULT_RULES_FILE};
pub use engine::{MatchResult, UrlMatcher};
pub use error::{Result, RuleEngineError, RuleIssue};
pub use matcher::{CacheStats, PatternCache};
pub use rule::{MatchStrategy, Rule};
