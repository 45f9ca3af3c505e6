//! Model: AnalyzerConfig.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::parser::MAX_LINE_SIZE;
use crate::severity::Severity;

/// Upper bound on the context window, per side
pub const MAX_CONTEXT_LINES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Lines of context kept before and after each issue
    pub context_lines: usize,
    /// Issues kept in the result, in detection order
    pub max_errors: usize,
    /// Explicit levels that count as issues
    pub issue_levels: Vec<Severity>,
    /// Longer lines are kept as plain text instead of being parsed
    pub max_line_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            context_lines: 2,
            max_errors: 10,
            issue_levels: vec![Severity::Error, Severity::Warning],
            max_line_bytes: MAX_LINE_SIZE,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.context_lines > MAX_CONTEXT_LINES {
            return Err(ConfigError::Invalid(format!(
                "context_lines must be <= {}, got {}",
                MAX_CONTEXT_LINES, self.context_lines
            )));
        }
        if self.max_errors == 0 {
            return Err(ConfigError::Invalid("max_errors must be > 0".to_string()));
        }
        if self.issue_levels.is_empty() {
            return Err(ConfigError::Invalid("issue_levels must not be empty".to_string()));
        }
        if self.max_line_bytes == 0 {
            return Err(ConfigError::Invalid("max_line_bytes must be > 0".to_string()));
        }
        Ok(())
    }
}
