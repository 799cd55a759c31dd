//! Per-strategy match functions.
//!
//! Every function returns a [`MatchOutcome`] instead of a `Result`: a rule
//! that cannot be evaluated (bad regex, failed wildcard conversion) is a
//! non-match with a diagnostic detail, never an error.

use crate::matcher::cache::PatternCache;
use crate::matcher::keywords::KeywordSet;
use regex::Regex;

/// Verdict of one rule against one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
    pub detail: String,
}

impl MatchOutcome {
    pub fn hit(detail: impl Into<String>) -> Self {
        Self {
            matched: true,
            detail: detail.into(),
        }
    }

    pub fn miss(detail: impl Into<String>) -> Self {
        Self {
            matched: false,
            detail: detail.into(),
        }
    }
}

/// Byte-for-byte equality. No trimming, no case folding.
pub fn exact_match(url: &str, pattern: &str) -> MatchOutcome {
    if url == pattern {
        MatchOutcome::hit("exact match succeeded")
    } else {
        MatchOutcome::miss("exact match failed")
    }
}

/// Matches when at least one keyword is contained in `url`.
///
/// The detail says whether every keyword was found or only some; both are
/// matches.
pub fn keyword_match(url: &str, keywords: &KeywordSet) -> MatchOutcome {
    let found = keywords.find_in(url);
    if found.is_empty() {
        return MatchOutcome::miss("keyword match failed");
    }

    if found.len() == keywords.len() {
        MatchOutcome::hit(format!("all keywords matched: {found:?}"))
    } else {
        MatchOutcome::hit(format!("some keywords matched: {found:?}"))
    }
}

/// Translate a `*` glob into an anchored regular expression.
///
/// Everything except `*` is escaped, and each `*` becomes `.*`.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("^{body}$")
}

/// A wildcard pattern compiled once at engine construction.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    compiled: Result<Regex, String>,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Self {
        let compiled = Regex::new(&wildcard_to_regex(pattern)).map_err(|e| e.to_string());
        if let Err(e) = &compiled {
            log::warn!("wildcard pattern '{pattern}' could not be converted: {e}");
        }
        Self { compiled }
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.is_ok()
    }

    pub fn matches(&self, url: &str) -> MatchOutcome {
        match &self.compiled {
            Ok(regex) if regex.is_match(url) => MatchOutcome::hit("wildcard match succeeded"),
            Ok(_) => MatchOutcome::miss("wildcard match failed"),
            Err(e) => MatchOutcome::miss(format!("wildcard conversion failed: {e}")),
        }
    }
}

/// Unanchored regex search through the engine's pattern cache.
///
/// A pattern missing from the cache is compiled on demand and inserted.
/// When the pattern has capture groups the detail lists what the first
/// match captured; groups that did not participate show as empty strings.
pub fn regex_match(url: &str, pattern: &str, cache: &PatternCache) -> MatchOutcome {
    let regex = match cache.get_or_compile(pattern) {
        Ok(regex) => regex,
        Err(e) => return MatchOutcome::miss(format!("regex compilation failed: {e}")),
    };

    if regex.captures_len() <= 1 {
        return if regex.is_match(url) {
            MatchOutcome::hit("regex matched")
        } else {
            MatchOutcome::miss("regex did not match")
        };
    }

    match regex.captures(url) {
        Some(caps) => {
            let groups: Vec<&str> = caps
                .iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect();
            MatchOutcome::hit(format!("regex matched, captures: {groups:?}"))
        }
        None => MatchOutcome::miss("regex did not match"),
    }
}
