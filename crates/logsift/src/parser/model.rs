use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::severity::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// `key=value` / `key: value` token lines (logfmt and friends)
    Structured,
    /// Plain text fallback (no structure)
    PlainText,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Structured => "structured",
            LogFormat::PlainText => "plain_text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub format: LogFormat,
    /// Share of non-empty lines the detector accepted (0.0 - 1.0)
    pub confidence: f32,
    pub matched: bool,
}

impl DetectionResult {
    pub fn match_with_confidence(format: LogFormat, confidence: f32) -> Self {
        Self {
            format,
            confidence: confidence.clamp(0.0, 1.0),
            matched: true,
        }
    }

    pub fn no_match(format: LogFormat, confidence: f32) -> Self {
        Self {
            format,
            confidence: confidence.clamp(0.0, 1.0),
            matched: false,
        }
    }
}

/// Per-line parse failure. Never fatal: the line degrades to plain text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("JSON is not an object")]
    NotAnObject,

    #[error("Line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),
}

/// Fields a format parser pulled out of one line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLine {
    pub level: Option<Severity>,
    pub message: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLine {
    /// 1-based position in the input, blank lines included
    pub line_number: usize,
    /// Original text with ANSI escape sequences removed
    pub raw_content: String,
    /// Message field of a structured record, when the format has one
    pub message: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Explicit level from the source record. Never inferred from content.
    pub level: Option<Severity>,
}

impl NormalizedLine {
    pub fn plain(line_number: usize, raw_content: String) -> Self {
        Self {
            line_number,
            raw_content,
            message: None,
            timestamp: None,
            level: None,
        }
    }

    pub fn from_parsed(line_number: usize, raw_content: String, parsed: ParsedLine) -> Self {
        Self {
            line_number,
            raw_content,
            message: parsed.message,
            timestamp: parsed.timestamp,
            level: parsed.level,
        }
    }

    /// Text used for matching and as the default issue message.
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.raw_content)
    }
}

/// Output of one parse call: the format selected for the whole input and
/// the normalized lines in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    pub format: LogFormat,
    pub lines: Vec<NormalizedLine>,
}
