//! Legacy strategy inference for rules written before `match_type` existed.

use crate::rule::MatchStrategy;

/// Characters that mark a pattern as a regular expression. `*` is excluded
/// so plain globs fall through to wildcard matching.
const REGEX_MARKERS: [char; 12] = ['(', ')', '[', ']', '{', '}', '^', '$', '+', '?', '|', '\\'];

/// Infer a strategy from pattern text: regex markers win, then `*` means
/// wildcard, anything else is a keyword list.
pub fn classify_pattern(pattern: &str) -> MatchStrategy {
    if pattern.contains(&REGEX_MARKERS[..]) {
        MatchStrategy::Regex
    } else if pattern.contains('*') {
        MatchStrategy::Wildcard
    } else {
        MatchStrategy::Keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_markers() {
        assert_eq!(classify_pattern("^/admin"), MatchStrategy::Regex);
        assert_eq!(classify_pattern("a+b"), MatchStrategy::Regex);
        assert_eq!(classify_pattern(r"foo\.com"), MatchStrategy::Regex);
        // A marker wins even when a '*' is also present
        assert_eq!(classify_pattern("(a)*"), MatchStrategy::Regex);
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(classify_pattern("/admin/*"), MatchStrategy::Wildcard);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(classify_pattern("admin"), MatchStrategy::Keyword);
        assert_eq!(classify_pattern("a,b;c"), MatchStrategy::Keyword);
        assert_eq!(classify_pattern(""), MatchStrategy::Keyword);
    }

    #[test]
    fn test_pipe_is_a_regex_marker() {
        // '|' doubles as a keyword separator, but classification sees it first
        assert_eq!(classify_pattern("gmail|outlook"), MatchStrategy::Regex);
    }
}
