//! Per-strategy matching building blocks.
//!
//! The engine prepares each rule once and then calls into these modules on
//! every evaluation:
//!
//! - [`classify`] - legacy strategy inference for rules without a declared strategy
//! - [`keywords`] - keyword list parsing and case-insensitive containment
//! - [`strategies`] - exact, keyword, wildcard and regex match functions
//! - [`cache`] - compiled regex cache shared by eager and lazy compilation
//!
//! ## Example Usage
//!
//! ```rust
//! use url_rule_engine::matcher::{classify_pattern, wildcard_to_regex, PatternCache};
//! use url_rule_engine::matcher::strategies::regex_match;
//! use url_rule_engine::MatchStrategy;
//!
//! assert_eq!(classify_pattern("/admin/*"), MatchStrategy::Wildcard);
//! assert_eq!(wildcard_to_regex("*.rs"), r"^.*\.rs$");
//!
//! let cache = PatternCache::new();
//! assert!(regex_match("https://docs.rs", r"docs\.rs", &cache).matched);
//! assert_eq!(cache.len(), 1);
//! ```

pub mod cache;
pub mod classify;
pub mod keywords;
pub mod strategies;

pub use cache::{CacheStats, PatternCache};
pub use classify::classify_pattern;
pub use keywords::{parse_keywords, KeywordSet};
pub use strategies::{wildcard_to_regex, MatchOutcome, WildcardPattern};
