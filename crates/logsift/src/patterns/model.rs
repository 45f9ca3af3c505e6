use grep_matcher::Matcher;
use grep_regex::{RegexCaptures, RegexMatcher};
use serde::{Deserialize, Serialize};

use crate::severity::{Confidence, Severity};

/// A raw pattern definition as it arrives from a declarative source.
///
/// Every field is optional at this stage so that a missing required field
/// surfaces as [`super::PatternError::MissingField`] from the registry rather
/// than as an opaque deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternDefinition {
    pub name: Option<String>,
    pub regex: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub suggestion: Option<String>,
    pub automated_fix: Option<String>,
    pub confidence: Option<String>,
    pub context_lines_after: Option<i64>,
    /// Replaces the raw line as the issue message; may reference capture groups.
    pub message: Option<String>,
}

impl PatternDefinition {
    /// Minimal definition with every required field set.
    pub fn new(name: &str, regex: &str, severity: &str, description: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            regex: Some(regex.to_string()),
            severity: Some(severity.to_string()),
            description: Some(description.to_string()),
            tags: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_automated_fix(mut self, command: &str) -> Self {
        self.automated_fix = Some(command.to_string());
        self
    }

    pub fn with_confidence(mut self, confidence: &str) -> Self {
        self.confidence = Some(confidence.to_string());
        self
    }

    pub fn with_context_lines_after(mut self, lines: i64) -> Self {
        self.context_lines_after = Some(lines);
        self
    }

    pub fn with_message(mut self, template: &str) -> Self {
        self.message = Some(template.to_string());
        self
    }
}

/// A validated, compiled pattern. Immutable once the registry hands it out.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: String,
    /// Source text of the regex, kept for diagnostics
    pub regex: String,
    pub matcher: RegexMatcher,
    pub severity: Severity,
    pub description: String,
    /// Insertion-ordered, without duplicates
    pub tags: Vec<String>,
    pub suggestion: Option<String>,
    pub automated_fix: Option<String>,
    pub confidence: Option<Confidence>,
    pub context_lines_after: Option<usize>,
    pub message: Option<String>,
}

impl PatternRule {
    /// Run the rule against one line. Returns the capture groups of the first
    /// match, or `None` when the line does not match.
    pub fn captures(&self, text: &str) -> Option<RegexCaptures> {
        let mut caps = self.matcher.new_captures().ok()?;
        match self.matcher.captures(text.as_bytes(), &mut caps) {
            Ok(true) => Some(caps),
            _ => None,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text.as_bytes()).unwrap_or(false)
    }
}
