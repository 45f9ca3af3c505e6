use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detect::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
}

impl RunStatus {
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            RunStatus::Success
        } else {
            RunStatus::Failed
        }
    }
}

/// Facts about the run that produced the log, supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RunInfo {
    pub exit_code: i32,
    pub duration_seconds: f64,
    pub command: String,
    pub timestamp: DateTime<Utc>,
    pub log_file: Option<String>,
}

impl Default for RunInfo {
    fn default() -> Self {
        Self {
            exit_code: 0,
            duration_seconds: 0.0,
            command: String::new(),
            timestamp: Utc::now(),
            log_file: None,
        }
    }
}

impl RunInfo {
    /// Run info for analysing an existing log file.
    ///
    /// The command that wrote the log is not known here, so `exit_code` (0,
    /// hence status `success`) and `duration_seconds` (0.0) are placeholders
    /// that describe nothing about that command. Callers that know the real
    /// values set them on the returned struct.
    pub fn for_log_file(path: &str) -> Self {
        Self {
            command: format!("analyze {}", path),
            log_file: Some(path.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub status: RunStatus,
    pub exit_code: i32,
    pub duration_seconds: f64,
    pub command: String,
    pub timestamp: DateTime<Utc>,
    pub log_file: Option<String>,
}

impl From<&RunInfo> for Summary {
    fn from(run: &RunInfo) -> Self {
        Self {
            status: RunStatus::from_exit_code(run.exit_code),
            exit_code: run.exit_code,
            duration_seconds: run.duration_seconds,
            command: run.command.clone(),
            timestamp: run.timestamp,
            log_file: run.log_file.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableItem {
    /// 1-based, in issue order
    pub priority: usize,
    pub file: Option<String>,
    pub line: Option<usize>,
    pub action: String,
    pub description: String,
    pub automated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Counted over the reported (possibly truncated) issues
    pub total_errors: usize,
    pub total_warnings: usize,
    pub fixable_errors: usize,
    pub log_size_bytes: usize,
    pub log_lines: usize,
    /// Issues detected before `max_errors` truncation
    pub total_detected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: Summary,
    pub errors: Vec<Issue>,
    pub actionable_items: Vec<ActionableItem>,
    pub stats: Stats,
}
