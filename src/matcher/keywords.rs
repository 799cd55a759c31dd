//! Keyword list parsing and case-insensitive containment search.
//!
//! A keyword pattern is split on exactly one separator kind, chosen by
//! priority: `,` then `;` then `|`. Once a separator is chosen the others
//! are ordinary characters, so `"a;b,c"` yields `["a;b", "c"]`.
//!
//! Small lists are scanned keyword by keyword. Lists of
//! [`AHOCORASICK_THRESHOLD`] or more keywords are compiled into one
//! AhoCorasick automaton at engine construction and searched in a single
//! pass.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

const SEPARATORS: [char; 3] = [',', ';', '|'];

/// Keyword count at which the automaton replaces the per-keyword scan.
pub const AHOCORASICK_THRESHOLD: usize = 8;

/// Split a keyword pattern into trimmed, non-empty keywords.
pub fn parse_keywords(pattern: &str) -> Vec<String> {
    let tokens: Vec<&str> = match SEPARATORS.iter().find(|&&sep| pattern.contains(sep)) {
        Some(&sep) => pattern.split(sep).collect(),
        None => vec![pattern],
    };

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
enum SearchStrategy {
    Simple,
    AhoCorasick(AhoCorasick),
}

/// A parsed keyword list ready for repeated searching.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    /// Keywords as written, used in diagnostics
    keywords: Vec<String>,
    /// Lowercased keywords, index-aligned with `keywords`
    lowered: Vec<String>,
    strategy: SearchStrategy,
}

impl KeywordSet {
    pub fn parse(pattern: &str) -> Self {
        let keywords = parse_keywords(pattern);
        let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        let strategy = if lowered.len() >= AHOCORASICK_THRESHOLD {
            // Standard semantics so overlapping search reports every keyword
            match AhoCorasickBuilder::new()
                .match_kind(MatchKind::Standard)
                .build(&lowered)
            {
                Ok(automaton) => SearchStrategy::AhoCorasick(automaton),
                Err(e) => {
                    log::warn!("falling back to simple keyword scan for '{pattern}': {e}");
                    SearchStrategy::Simple
                }
            }
        } else {
            SearchStrategy::Simple
        };

        Self {
            keywords,
            lowered,
            strategy,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn uses_automaton(&self) -> bool {
        matches!(self.strategy, SearchStrategy::AhoCorasick(_))
    }

    /// Keywords contained in `text`, ignoring case, in declaration order.
    pub fn find_in(&self, text: &str) -> Vec<&str> {
        if self.is_empty() {
            return Vec::new();
        }
        let haystack = text.to_lowercase();

        match &self.strategy {
            SearchStrategy::Simple => self
                .lowered
                .iter()
                .zip(&self.keywords)
                .filter(|(lowered, _)| haystack.contains(lowered.as_str()))
                .map(|(_, original)| original.as_str())
                .collect(),
            SearchStrategy::AhoCorasick(automaton) => {
                let mut seen = vec![false; self.keywords.len()];
                for found in automaton.find_overlapping_iter(haystack.as_str()) {
                    seen[found.pattern().as_usize()] = true;
                }
                seen.iter()
                    .zip(&self.keywords)
                    .filter(|(hit, _)| **hit)
                    .map(|(_, original)| original.as_str())
                    .collect()
            }
        }
    }
}
