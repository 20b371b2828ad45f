//! Result validation against a preset's pattern

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::preset::Preset;

/// A compiled, fully anchored result pattern
///
/// Keeps the pattern as written in the preset file for display, and a
/// compiled copy wrapped in `\A(?:...)\z` so a match always spans the whole
/// result string.
#[derive(Debug, Clone)]
pub struct ResultPattern {
    source: String,
    anchored: Regex,
}

impl ResultPattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!(r"\A(?:{})\z", source))?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// The pattern as written in the configuration
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }
}

impl PartialEq for ResultPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl std::fmt::Display for ResultPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for ResultPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for ResultPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        ResultPattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Check a formatted base size against the preset's result pattern
///
/// The whole string has to match; surrounding whitespace is never accepted.
/// A mismatch is an ordinary `false`, not an error.
pub fn is_valid_result(formatted: &str, preset: &Preset) -> bool {
    preset.result_pattern.is_full_match(formatted)
}

/// Explanation shown to the user when a result is rejected
pub fn rejection_hint(preset: &Preset) -> String {
    let examples: String = preset
        .pattern_examples
        .iter()
        .map(|e| format!("\n  {}", e))
        .collect();
    format!(
        "Value cannot be validated against the pattern:\n\n{}\n\n\
         Examples for this pattern:{}\n\n\
         Note: Whitespace at the beginning or at the end is not allowed.",
        preset.result_pattern, examples
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_with_pattern(pattern: &str) -> Preset {
        let mut preset = Preset::fixture("Test", 3, None);
        preset.result_pattern = ResultPattern::new(pattern).unwrap();
        preset.pattern_examples = vec!["100 x 50 x 20".to_string()];
        preset
    }

    #[test]
    fn test_full_match_required() {
        let preset = preset_with_pattern(r"\d+ x \d+ x \d+");
        assert!(is_valid_result("100 x 50 x 20", &preset));
        assert!(!is_valid_result("100 x 50 x 20mm", &preset));
        assert!(!is_valid_result("x 100 x 50 x 20", &preset));
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        let preset = preset_with_pattern(r"\d+ x \d+ x \d+");
        assert!(!is_valid_result(" 100 x 50 x 20", &preset));
        assert!(!is_valid_result("100 x 50 x 20 ", &preset));
        assert!(!is_valid_result("100 x 50 x 20\n", &preset));
    }

    #[test]
    fn test_patterns_with_own_anchors_still_work() {
        let preset = preset_with_pattern(r"^\d+ x \d+$");
        assert!(is_valid_result("100 x 50", &preset));
        assert!(!is_valid_result("100 x 50\n", &preset));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let preset = preset_with_pattern(r"\d+|Ø\d+");
        assert!(is_valid_result("Ø20", &preset));
        assert!(!is_valid_result("20 x", &preset));
    }

    #[test]
    fn test_empty_result_is_invalid_for_numeric_patterns() {
        let preset = preset_with_pattern(r"\d+ x \d+ x \d+");
        assert!(!is_valid_result("", &preset));
    }

    #[test]
    fn test_invalid_pattern_fails_to_deserialize() {
        let result: Result<ResultPattern, _> = serde_yml::from_str("'(unclosed'");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejection_hint_lists_pattern_and_examples() {
        let preset = preset_with_pattern(r"\d+ x \d+ x \d+");
        let hint = rejection_hint(&preset);
        assert!(hint.contains(r"\d+ x \d+ x \d+"));
        assert!(hint.contains("\n  100 x 50 x 20"));
        assert!(hint.contains("Whitespace"));
    }
}
