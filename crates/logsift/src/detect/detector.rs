use super::issue::{Issue, Suggestion};
use super::template;
use crate::parser::NormalizedLine;
use crate::patterns::PatternRule;
use crate::severity::{Confidence, Severity};

/// Confidence reported for a suggestion whose pattern does not state one
const DEFAULT_CONFIDENCE: Confidence = Confidence::Medium;

/// Name of the capture group copied onto the issue as its error code
const CODE_GROUP: &str = "code";

/// Applies explicit levels and pattern rules to normalized lines.
///
/// Detection is one forward pass in line order:
/// - a line with an explicit level is an issue iff that level is issue-worthy,
///   and is never run through the patterns
/// - any other line is matched against the rules in order, first match wins
/// - a line that matches nothing produces nothing
///
/// The detector never caps its output.
#[derive(Debug, Clone)]
pub struct IssueDetector {
    issue_levels: Vec<Severity>,
}

impl IssueDetector {
    pub fn new(issue_levels: Vec<Severity>) -> Self {
        Self { issue_levels }
    }

    pub fn issue_levels(&self) -> &[Severity] {
        &self.issue_levels
    }

    pub fn detect(&self, lines: &[NormalizedLine], rules: &[PatternRule]) -> Vec<Issue> {
        let mut issues = Vec::new();

        for line in lines {
            let id = issues.len() + 1;

            if let Some(level) = line.level {
                if self.issue_levels.contains(&level) {
                    issues.push(explicit_issue(id, level, line));
                }
                continue;
            }

            let text = line.text();
            if text.trim().is_empty() {
                continue;
            }

            if let Some(issue) = rules.iter().find_map(|rule| match_rule(id, rule, line)) {
                tracing::trace!(
                    line = line.line_number,
                    pattern = issue.pattern_matched.as_deref().unwrap_or_default(),
                    "pattern matched"
                );
                issues.push(issue);
            }
        }

        tracing::debug!(issues = issues.len(), lines = lines.len(), "detection finished");
        issues
    }
}

impl Default for IssueDetector {
    fn default() -> Self {
        Self::new(vec![Severity::Error, Severity::Warning])
    }
}

fn explicit_issue(id: usize, severity: Severity, line: &NormalizedLine) -> Issue {
    Issue {
        id,
        severity,
        line_in_log: line.line_number,
        message: line.text().to_string(),
        file: None,
        file_line: None,
        context_before: Vec::new(),
        context_after: Vec::new(),
        suggestion: None,
        pattern_matched: None,
        tags: Vec::new(),
        code: None,
        context_lines_after: None,
    }
}

fn match_rule(id: usize, rule: &PatternRule, line: &NormalizedLine) -> Option<Issue> {
    let text = line.text();
    let caps = rule.captures(text)?;

    let message = match &rule.message {
        Some(t) => template::interpolate(t, &rule.matcher, &caps, text),
        None => text.to_string(),
    };

    let suggestion = rule.suggestion.as_ref().map(|action| Suggestion {
        action: action.clone(),
        description: rule.description.clone(),
        confidence: rule.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        automated_fix: rule
            .automated_fix
            .as_ref()
            .map(|t| template::interpolate(t, &rule.matcher, &caps, text)),
    });

    Some(Issue {
        id,
        severity: rule.severity,
        line_in_log: line.line_number,
        message,
        file: None,
        file_line: None,
        context_before: Vec::new(),
        context_after: Vec::new(),
        suggestion,
        pattern_matched: Some(rule.name.clone()),
        tags: rule.tags.clone(),
        code: template::named_group(CODE_GROUP, &rule.matcher, &caps, text),
        context_lines_after: rule.context_lines_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LogParser;
    use crate::patterns::{PatternDefinition, PatternRegistry};

    fn registry(defs: Vec<PatternDefinition>) -> PatternRegistry {
        PatternRegistry::load(defs).unwrap()
    }

    fn def(name: &str, regex: &str, severity: &str) -> PatternDefinition {
        PatternDefinition::new(name, regex, severity, &format!("{} description", name))
            .with_tags(&["test"])
    }

    fn detect(input: &str, registry: &PatternRegistry) -> Vec<Issue> {
        let parsed = LogParser::new().parse(input);
        IssueDetector::default().detect(&parsed.lines, registry.rules())
    }

    #[test]
    fn test_plain_line_matches_pattern() {
        let reg = registry(vec![def("conn_fail", "ERROR: Connection failed", "error")]);
        let issues = detect("ERROR: Connection failed\nINFO: retry\n", &reg);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, 1);
        assert_eq!(issues[0].line_in_log, 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].pattern_matched.as_deref(), Some("conn_fail"));
        assert_eq!(issues[0].message, "ERROR: Connection failed");
        assert_eq!(issues[0].tags, vec!["test"]);
    }

    #[test]
    fn test_first_match_wins() {
        let reg = registry(vec![
            def("specific", "Connection refused on port 5432", "error"),
            def("general", "Connection refused", "warning"),
        ]);
        let issues = detect("db: Connection refused on port 5432\napi: Connection refused\n", &reg);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].pattern_matched.as_deref(), Some("specific"));
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[1].pattern_matched.as_deref(), Some("general"));
        assert_eq!(issues[1].severity, Severity::Warning);
    }

    #[test]
    fn test_order_decides_not_specificity() {
        let reg = registry(vec![
            def("general", "refused", "warning"),
            def("specific", "Connection refused on port 5432", "error"),
        ]);
        let issues = detect("Connection refused on port 5432\n", &reg);
        assert_eq!(issues[0].pattern_matched.as_deref(), Some("general"));
    }

    #[test]
    fn test_explicit_level_bypasses_patterns() {
        let reg = registry(vec![def("boom", "boom", "warning")]);
        let input = "{\"level\":\"error\",\"message\":\"boom\"}\n{\"level\":\"info\",\"message\":\"boom\"}\n";
        let issues = detect(input, &reg);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].pattern_matched, None);
        assert_eq!(issues[0].message, "boom");
        assert!(issues[0].tags.is_empty());
    }

    #[test]
    fn test_json_without_level_uses_patterns() {
        let reg = registry(vec![def("disk", "disk full", "error")]);
        let issues = detect("{\"msg\":\"disk full\"}\n{\"msg\":\"ok\"}\n", &reg);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].pattern_matched.as_deref(), Some("disk"));
        assert_eq!(issues[0].message, "disk full");
    }

    #[test]
    fn test_configured_issue_levels() {
        let parsed = LogParser::new().parse(
            "{\"level\":\"info\",\"msg\":\"a\"}\n{\"level\":\"warn\",\"msg\":\"b\"}\n{\"level\":\"error\",\"msg\":\"c\"}\n",
        );

        let errors_only = IssueDetector::new(vec![Severity::Error]);
        let issues = errors_only.detect(&parsed.lines, &[]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_in_log, 3);

        let everything = IssueDetector::new(Severity::ALL.to_vec());
        assert_eq!(everything.detect(&parsed.lines, &[]).len(), 3);
    }

    #[test]
    fn test_no_match_no_issue() {
        let reg = registry(vec![def("x", "never matches this", "error")]);
        assert!(detect("all good\nstill fine\n", &reg).is_empty());
    }

    #[test]
    fn test_ids_follow_detection_order() {
        let reg = registry(vec![def("fail", "FAIL", "error")]);
        let issues = detect("FAIL a\nok\nFAIL b\n\nFAIL c\n", &reg);

        let ids: Vec<usize> = issues.iter().map(|i| i.id).collect();
        let lines: Vec<usize> = issues.iter().map(|i| i.line_in_log).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(lines, vec![1, 3, 5]);
    }

    #[test]
    fn test_info_pattern_produces_issue() {
        let reg = registry(vec![def("note", "^note: ", "info")]);
        let issues = detect("note: cache was cold\n", &reg);
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_suggestion_built_from_pattern() {
        let reg = registry(vec![def("mod", "No module named '(?P<module>[^']+)'", "error")
            .with_suggestion("Install the module")
            .with_automated_fix("pip install ${module}")
            .with_confidence("high")]);
        let issues = detect("ModuleNotFoundError: No module named 'yaml'\n", &reg);

        let suggestion = issues[0].suggestion.as_ref().unwrap();
        assert_eq!(suggestion.action, "Install the module");
        assert_eq!(suggestion.description, "mod description");
        assert_eq!(suggestion.confidence, Confidence::High);
        assert_eq!(suggestion.automated_fix.as_deref(), Some("pip install yaml"));
    }

    #[test]
    fn test_suggestion_defaults() {
        let reg = registry(vec![def("p", "oops", "error").with_suggestion("Look closer")]);
        let issues = detect("oops\n", &reg);

        let suggestion = issues[0].suggestion.as_ref().unwrap();
        assert_eq!(suggestion.confidence, Confidence::Medium);
        assert_eq!(suggestion.automated_fix, None);
    }

    #[test]
    fn test_fix_without_suggestion_is_dropped() {
        let reg = registry(vec![def("p", "oops", "error").with_automated_fix("make fix")]);
        let issues = detect("oops\n", &reg);
        assert!(issues[0].suggestion.is_none());
    }

    #[test]
    fn test_message_template_and_code() {
        let reg = registry(vec![def("ruff", r"^(?P<file>\S+):\d+:\d+: (?P<code>[A-Z]+\d+) ", "error")
            .with_message("$code in $file")]);
        let issues = detect("app.py:3:1: F401 `os` imported but unused\n", &reg);

        assert_eq!(issues[0].message, "F401 in app.py");
        assert_eq!(issues[0].code.as_deref(), Some("F401"));
    }

    #[test]
    fn test_context_override_carried() {
        let reg = registry(vec![def("tb", "^Traceback", "error").with_context_lines_after(7)]);
        let issues = detect("Traceback (most recent call last):\n", &reg);
        assert_eq!(issues[0].context_lines_after, Some(7));
    }

    #[test]
    fn test_ansi_colored_line_matches() {
        let reg = registry(vec![def("conn_fail", "^ERROR: Connection failed$", "error")]);
        let issues = detect("\x1b[31mERROR: Connection failed\x1b[0m\n", &reg);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "ERROR: Connection failed");
    }
}
