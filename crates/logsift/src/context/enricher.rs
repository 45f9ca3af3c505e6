use super::file_ref::find_file_ref;
use crate::detect::Issue;
use crate::parser::NormalizedLine;

/// Attaches context windows and file references to detected issues.
#[derive(Debug, Clone)]
pub struct ContextEnricher {
    context_lines: usize,
}

impl ContextEnricher {
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines }
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    pub fn enrich_all(&self, issues: &mut [Issue], lines: &[NormalizedLine]) {
        for issue in issues.iter_mut() {
            self.enrich(issue, lines);
        }
    }

    /// Fill `context_before`, `context_after`, `file` and `file_line`.
    ///
    /// Windows are clamped at the input boundaries. A pattern's
    /// `context_lines_after` replaces only the after window.
    pub fn enrich(&self, issue: &mut Issue, lines: &[NormalizedLine]) {
        let Some(idx) = issue.line_in_log.checked_sub(1).filter(|&i| i < lines.len()) else {
            tracing::debug!(line = issue.line_in_log, "issue line outside input, no context");
            return;
        };

        let before = self.context_lines;
        let after = issue.context_lines_after.unwrap_or(self.context_lines);

        let start = idx.saturating_sub(before);
        let end = idx.saturating_add(1).saturating_add(after).min(lines.len());

        issue.context_before = raw_contents(&lines[start..idx]);
        issue.context_after = raw_contents(&lines[idx + 1..end]);

        let found = std::iter::once(issue.message.as_str())
            .chain(issue.context_after.iter().map(String::as_str))
            .chain(issue.context_before.iter().map(String::as_str))
            .find_map(find_file_ref);

        if let Some(file_ref) = found {
            issue.file = Some(file_ref.path);
            issue.file_line = Some(file_ref.line);
        }
    }
}

impl Default for ContextEnricher {
    fn default() -> Self {
        Self::new(2)
    }
}

fn raw_contents(lines: &[NormalizedLine]) -> Vec<String> {
    lines.iter().map(|l| l.raw_content.clone()).collect()
}
