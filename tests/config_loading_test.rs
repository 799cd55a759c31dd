//! Rule file loading, validation and engine construction from files.

use std::fs;
use tempfile::TempDir;
use url_rule_engine::{
    MatchStrategy, RuleEngineError, RuleIssue, RulesConfig, UrlMatcher, DEFAULT_RULES_FILE,
};

const JSON_RULES: &str = r#"{
    "rules": [
        {
            "name": "Chat",
            "url_pattern": "slack.com, discord.com",
            "match_type": "keyword",
            "description": "Chat apps",
            "enabled": true
        },
        {
            "name": "Terminal",
            "url_pattern": "https://shell.example.com/*",
            "match_type": "wildcard",
            "enabled": false
        },
        {
            "name": "Legacy docs",
            "url_pattern": "^https://docs\\.",
            "enabled": true
        }
    ]
}"#;

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_RULES_FILE);
    fs::write(&path, JSON_RULES).unwrap();

    let config = RulesConfig::from_file(&path).unwrap();
    assert_eq!(config.rules.len(), 3);
    assert!(config.validate_rules().is_empty());

    let matcher = UrlMatcher::from_rules_config(&config);
    assert_eq!(matcher.rule_count(), 2);

    let result = matcher.evaluate("https://app.slack.com/client");
    assert_eq!(result.rule_name(), Some("Chat"));
    assert_eq!(result.rule.unwrap().description, "Chat apps");

    let result = matcher.evaluate("https://docs.rs");
    assert_eq!(result.rule_name(), Some("Legacy docs"));
    assert_eq!(result.strategy, MatchStrategy::Regex);

    // Disabled in the file
    assert!(!matcher.evaluate("https://shell.example.com/session").matched);
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.yml");
    fs::write(
        &path,
        r#"
rules:
  - name: Search
    url_pattern: "https://www.google.com/search?q=*"
    match_type: wildcard
    enabled: true
"#,
    )
    .unwrap();

    let matcher = UrlMatcher::from_rules_config(&RulesConfig::from_file(&path).unwrap());
    assert!(matcher.evaluate("https://www.google.com/search?q=rust").matched);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(&path, "rules = []").unwrap();

    let err = RulesConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, RuleEngineError::UnsupportedFormat(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = RulesConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RuleEngineError::IoError(_)));
}

#[test]
fn test_invalid_rules_are_reported_and_tolerated() {
    let config = RulesConfig::from_json_str(
        r#"{"rules": [
            {"name": "broken", "url_pattern": "(unclosed", "match_type": "regex", "enabled": true},
            {"name": "odd", "url_pattern": "github", "match_type": "glob", "enabled": true}
        ]}"#,
    )
    .unwrap();

    let errors = config.validate_rules();
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        RuleEngineError::InvalidRule {
            index: 1,
            issue: RuleIssue::InvalidRegex { .. }
        }
    ));
    assert_eq!(
        errors[1].to_string(),
        "Rule 2: unknown match type 'glob'"
    );

    // The engine still builds and evaluates
    let matcher = UrlMatcher::from_rules_config(&config);
    assert!(!matcher.evaluate("(unclosed").matched);

    let result = matcher.evaluate("https://github.com");
    assert_eq!(result.rule_name(), Some("odd"));
    assert_eq!(result.strategy, MatchStrategy::Keyword);
}
