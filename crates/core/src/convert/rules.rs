//! User-supplied literal substitution rules.
//!
//! Rules run after script mapping, in list order, as global literal
//! substring replacement. Overlapping rules are order-dependent by design:
//! later rules observe earlier rules' output, matching how the rule list is
//! presented to the user.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{FeedtextError, Result};

/// One literal substitution, persisted in user preferences as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    pub from: String,
    pub to: String,
}

/// Trims both fields of every rule; order and count are preserved.
///
/// Applied both before rule application and before fingerprinting, so
/// equivalent-but-differently-whitespaced inputs behave identically.
pub fn normalize_rules(rules: &[CustomRule]) -> Vec<CustomRule> {
    rules
        .iter()
        .map(|rule| CustomRule { from: rule.from.trim().to_string(), to: rule.to.trim().to_string() })
        .collect()
}

/// Whether any rule survives normalization with a non-empty `from`.
///
/// A rule with an empty `from` is a no-op and is skipped during
/// application; a list of nothing but no-ops must not defeat the
/// converter's fast paths.
pub fn has_effective_rules(normalized: &[CustomRule]) -> bool {
    normalized.iter().any(|rule| !rule.from.is_empty())
}

/// Applies each rule in list order as global literal replacement.
pub(crate) fn apply_rules(text: String, normalized: &[CustomRule]) -> String {
    let mut converted = text;
    for rule in normalized {
        if rule.from.is_empty() {
            continue;
        }
        converted = converted.replace(&rule.from, &rule.to);
    }
    converted
}

/// A deterministic cache key for a rule list.
///
/// Two lists that are structurally equal after normalization produce the
/// same lowercase-hex SHA-256 string. Fields are length-prefix framed so
/// adjacent strings cannot collide (`["ab",""]` vs `["a","b"]`). Callers
/// use this as an external cache-invalidation key; the converter itself
/// never caches by rule set.
pub fn rules_fingerprint(rules: &[CustomRule]) -> String {
    let normalized = normalize_rules(rules);
    let mut hasher = Sha256::new();

    for rule in &normalized {
        hasher.update((rule.from.len() as u64).to_be_bytes());
        hasher.update(rule.from.as_bytes());
        hasher.update((rule.to.len() as u64).to_be_bytes());
        hasher.update(rule.to.as_bytes());
    }

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Parses a JSON array of `{from, to}` objects, as persisted by the
/// preferences store.
pub fn parse_rules_json(json: &str) -> Result<Vec<CustomRule>> {
    serde_json::from_str(json).map_err(|e| FeedtextError::RulesParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(from: &str, to: &str) -> CustomRule {
        CustomRule { from: from.to_string(), to: to.to_string() }
    }

    #[test]
    fn test_normalize_trims_both_fields() {
        let normalized = normalize_rules(&[rule(" 開放 ", " 开放 ")]);
        assert_eq!(normalized, vec![rule("開放", "开放")]);
    }

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let rules = [rule("b", "2"), rule("a", "1"), rule("", "x")];
        let normalized = normalize_rules(&rules);
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].from, "b");
        assert_eq!(normalized[1].from, "a");
    }

    #[test]
    fn test_has_effective_rules() {
        assert!(!has_effective_rules(&[]));
        assert!(!has_effective_rules(&normalize_rules(&[rule("   ", "x")])));
        assert!(has_effective_rules(&normalize_rules(&[rule(" a ", "")])));
    }

    #[test]
    fn test_apply_rules_in_list_order() {
        // Later rules see earlier rules' output; order-dependence on
        // overlapping rules is intentional.
        let normalized = normalize_rules(&[rule("ab", "x"), rule("xc", "y")]);
        assert_eq!(apply_rules("abc".to_string(), &normalized), "y");

        let reversed = normalize_rules(&[rule("xc", "y"), rule("ab", "x")]);
        assert_eq!(apply_rules("abc".to_string(), &reversed), "xc");
    }

    #[test]
    fn test_apply_rules_skips_empty_from() {
        let normalized = normalize_rules(&[rule("  ", "boom")]);
        assert_eq!(apply_rules("text".to_string(), &normalized), "text");
    }

    #[test]
    fn test_fingerprint_ignores_field_whitespace() {
        let loose = [rule(" 開放 ", " 开放 ")];
        let tight = [rule("開放", "开放")];
        assert_eq!(rules_fingerprint(&loose), rules_fingerprint(&tight));
    }

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        let ab = [rule("a", "1"), rule("b", "2")];
        let ba = [rule("b", "2"), rule("a", "1")];
        assert_ne!(rules_fingerprint(&ab), rules_fingerprint(&ba));
    }

    #[test]
    fn test_fingerprint_framing_prevents_field_collisions() {
        let joined = [rule("ab", "")];
        let split = [rule("a", "b")];
        assert_ne!(rules_fingerprint(&joined), rules_fingerprint(&split));
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = rules_fingerprint(&[]);
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_parse_rules_json() {
        let rules = parse_rules_json(r#"[{"from": "開放", "to": "开放"}]"#).unwrap();
        assert_eq!(rules, vec![rule("開放", "开放")]);

        assert!(matches!(
            parse_rules_json(r#"{"from": "a"}"#),
            Err(FeedtextError::RulesParse(_))
        ));
    }
}
