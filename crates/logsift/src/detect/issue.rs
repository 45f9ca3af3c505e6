use serde::{Deserialize, Serialize};

use crate::severity::{Confidence, Severity};

/// Fix recommendation attached to an issue by its pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub action: String,
    pub description: String,
    pub confidence: Confidence,
    /// Shell command with capture groups already substituted
    pub automated_fix: Option<String>,
}

impl Suggestion {
    pub fn is_automated(&self) -> bool {
        self.automated_fix.as_deref().is_some_and(|fix| !fix.trim().is_empty())
    }
}

/// One detected finding, tied to a single source line.
///
/// Field order is the serialized order of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based, in detection order
    pub id: usize,
    pub severity: Severity,
    pub line_in_log: usize,
    pub message: String,
    pub file: Option<String>,
    pub file_line: Option<usize>,
    pub context_before: Vec<String>,
    pub context_after: Vec<String>,
    pub suggestion: Option<Suggestion>,
    pub pattern_matched: Option<String>,
    pub tags: Vec<String>,
    /// Tool-specific error code taken from the pattern's `code` group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// After-context override from the matched pattern
    #[serde(skip)]
    pub context_lines_after: Option<usize>,
}

impl Issue {
    pub fn is_fixable(&self) -> bool {
        self.suggestion.as_ref().is_some_and(Suggestion::is_automated)
    }
}
