use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::parser::traits::*;
use crate::parser::MAX_LINE_SIZE;
use crate::severity::Severity;

const LEVEL_FIELDS: [&str; 4] = ["level", "lvl", "severity", "loglevel"];
const MESSAGE_FIELDS: [&str; 5] = ["message", "msg", "content", "text", "log"];
const TIME_FIELDS: [&str; 4] = ["timestamp", "time", "ts", "@timestamp"];

/// JSON-lines detector. Matches only when every non-empty line is a JSON object.
pub struct JsonDetector;

impl FormatDetector for JsonDetector {
    fn accepts(&self, line: &str) -> bool {
        let trimmed = line.trim();

        // Quick reject before paying for a full parse
        if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
            return false;
        }

        matches!(serde_json::from_str::<Value>(trimmed), Ok(Value::Object(_)))
    }

    fn detect(&self, lines: &[&str]) -> DetectionResult {
        match self.acceptance(lines) {
            (share, true) if share >= 1.0 => {
                DetectionResult::match_with_confidence(LogFormat::Json, share)
            }
            (share, _) => DetectionResult::no_match(LogFormat::Json, share),
        }
    }

    fn format(&self) -> LogFormat {
        LogFormat::Json
    }
}

/// JSON parser
pub struct JsonParser {
    max_line_bytes: usize,
}

impl JsonParser {
    pub fn new() -> Self {
        Self {
            max_line_bytes: MAX_LINE_SIZE,
        }
    }

    pub fn with_max_line_bytes(max_line_bytes: usize) -> Self {
        Self { max_line_bytes }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for JsonParser {
    fn parse(&self, line: &str) -> Result<ParsedLine, ParseError> {
        if line.len() > self.max_line_bytes {
            return Err(ParseError::LineTooLarge(line.len(), self.max_line_bytes));
        }

        let value: Value = serde_json::from_str(line.trim())
            .map_err(|e| ParseError::InvalidJson(e.to_string()))?;

        let obj = value.as_object().ok_or(ParseError::NotAnObject)?;

        // An unrecognised level string is treated as no level at all, so the
        // line still goes through pattern matching.
        let level = extract_string_field(obj, &LEVEL_FIELDS)
            .as_deref()
            .and_then(Severity::from_level);

        Ok(ParsedLine {
            level,
            message: extract_string_field(obj, &MESSAGE_FIELDS),
            timestamp: extract_timestamp(obj),
        })
    }

    fn format(&self) -> LogFormat {
        LogFormat::Json
    }
}

fn extract_string_field(obj: &Map<String, Value>, field_names: &[&str]) -> Option<String> {
    for field in field_names {
        if let Some(value) = obj.get(*field) {
            let result = match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            };

            if result.is_some() {
                return result;
            }
        }
    }
    None
}

fn extract_timestamp(obj: &Map<String, Value>) -> Option<DateTime<Utc>> {
    for field in TIME_FIELDS {
        if let Some(value) = obj.get(field) {
            let result = match value {
                Value::Number(n) => n.as_i64().and_then(from_unix),
                Value::String(s) => super::structured::parse_timestamp(s),
                _ => None,
            };

            if result.is_some() {
                return result;
            }
        }
    }
    None
}

/// Unix timestamp in seconds or milliseconds
pub(crate) fn from_unix(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 1_000_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_requires_every_line() {
        let detector = JsonDetector;
        let all_json = [r#"{"level":"info","msg":"a"}"#, "", r#"{"level":"error","msg":"b"}"#];
        let result = detector.detect(&all_json);
        assert!(result.matched);
        assert_eq!(result.format, LogFormat::Json);

        let mixed = [r#"{"level":"info","msg":"a"}"#, "plain text line"];
        let result = detector.detect(&mixed);
        assert!(!result.matched);
        assert!((result.confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_detector_rejects_non_objects() {
        let detector = JsonDetector;
        assert!(!detector.accepts("[1, 2, 3]"));
        assert!(!detector.accepts("\"just a string\""));
        assert!(!detector.accepts("{not json}"));
        assert!(detector.accepts("  {\"a\": 1}  "));
    }

    #[test]
    fn test_detector_empty_input() {
        assert!(!JsonDetector.detect(&[]).matched);
        assert!(!JsonDetector.detect(&["", "   "]).matched);
    }

    #[test]
    fn test_parse_level_and_message() {
        let parsed = JsonParser::new()
            .parse(r#"{"level":"WARN","message":"deprecated","ts":"2026-01-29T10:00:00Z"}"#)
            .unwrap();

        assert_eq!(parsed.level, Some(Severity::Warning));
        assert_eq!(parsed.message.as_deref(), Some("deprecated"));
        assert!(parsed.timestamp.is_some());
    }

    #[test]
    fn test_parse_alternate_fields() {
        let parsed = JsonParser::new()
            .parse(r#"{"severity":"fatal","content":"disk full","time":1706522400}"#)
            .unwrap();

        assert_eq!(parsed.level, Some(Severity::Error));
        assert_eq!(parsed.message.as_deref(), Some("disk full"));
        assert_eq!(parsed.timestamp.unwrap().timestamp(), 1706522400);
    }

    #[test]
    fn test_millisecond_timestamp() {
        let parsed = JsonParser::new()
            .parse(r#"{"msg":"x","timestamp":1706522400123}"#)
            .unwrap();
        assert_eq!(parsed.timestamp.unwrap().timestamp_millis(), 1706522400123);
    }

    #[test]
    fn test_unknown_level_is_absent() {
        let parsed = JsonParser::new().parse(r#"{"level":"verbose","msg":"x"}"#).unwrap();
        assert_eq!(parsed.level, None);
    }

    #[test]
    fn test_parse_errors() {
        let parser = JsonParser::new();
        assert!(matches!(parser.parse("{broken"), Err(ParseError::InvalidJson(_))));
        assert!(matches!(parser.parse("[1]"), Err(ParseError::NotAnObject)));
    }

    #[test]
    fn test_line_too_large() {
        let parser = JsonParser::with_max_line_bytes(16);
        let err = parser.parse(r#"{"msg":"this line is too long"}"#).unwrap_err();
        assert!(matches!(err, ParseError::LineTooLarge(_, 16)));
    }
}
