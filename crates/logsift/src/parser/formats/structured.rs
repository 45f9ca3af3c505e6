use chrono::{DateTime, Utc};

use crate::parser::traits::*;
use crate::parser::MAX_LINE_SIZE;

/// Minimum `key=value` / `key: value` pairs for a line to count as structured
const MIN_PAIRS: usize = 2;

/// Share of non-empty lines that must be structured (strict majority)
const MAJORITY: f32 = 0.5;

const TIME_KEYS: [&str; 4] = ["ts", "time", "timestamp", "@timestamp"];

pub struct StructuredDetector;

impl FormatDetector for StructuredDetector {
    fn accepts(&self, line: &str) -> bool {
        count_pairs(line) >= MIN_PAIRS
    }

    fn detect(&self, lines: &[&str]) -> DetectionResult {
        match self.acceptance(lines) {
            (share, true) if share > MAJORITY => {
                DetectionResult::match_with_confidence(LogFormat::Structured, share)
            }
            (share, _) => DetectionResult::no_match(LogFormat::Structured, share),
        }
    }

    fn format(&self) -> LogFormat {
        LogFormat::Structured
    }
}

/// Structured parser
///
/// Only the timestamp is extracted. A `level=` token is left in the text:
/// severity for structured lines comes from the pattern registry.
pub struct StructuredParser {
    max_line_bytes: usize,
}

impl StructuredParser {
    pub fn new() -> Self {
        Self {
            max_line_bytes: MAX_LINE_SIZE,
        }
    }

    pub fn with_max_line_bytes(max_line_bytes: usize) -> Self {
        Self { max_line_bytes }
    }
}

impl Default for StructuredParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for StructuredParser {
    fn parse(&self, line: &str) -> Result<ParsedLine, ParseError> {
        if line.len() > self.max_line_bytes {
            return Err(ParseError::LineTooLarge(line.len(), self.max_line_bytes));
        }

        let text = line.trim();

        // Leading timestamp, as written by most logging frameworks
        let leading = text
            .split_whitespace()
            .next()
            .and_then(parse_timestamp);

        let timestamp = leading.or_else(|| {
            parse_logfmt_iter(text)
                .find(|(key, _)| TIME_KEYS.contains(&key.as_str()))
                .and_then(|(_, value)| parse_timestamp(&value))
        });

        Ok(ParsedLine {
            level: None,
            message: None,
            timestamp,
        })
    }

    fn format(&self) -> LogFormat {
        LogFormat::Structured
    }
}

fn is_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Count `key=value` tokens and `key:` tokens followed by a value.
fn count_pairs(line: &str) -> usize {
    let mut pairs = 0;
    let mut tokens = line.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if let Some((key, _)) = token.split_once('=') {
            if is_key(key) {
                pairs += 1;
            }
            continue;
        }

        if let Some(key) = token.strip_suffix(':') {
            if is_key(key) && tokens.peek().is_some() {
                pairs += 1;
                tokens.next();
            }
        }
    }

    pairs
}

/// Iterate `key=value` pairs, honouring double-quoted values with escapes.
/// Bare words without `=` are skipped.
fn parse_logfmt_iter(text: &str) -> impl Iterator<Item = (String, String)> + '_ {
    let mut chars = text.chars().peekable();

    std::iter::from_fn(move || {
        loop {
            while chars.peek().map_or(false, |c| c.is_whitespace()) {
                chars.next();
            }

            chars.peek()?;

            let mut key = String::new();
            while let Some(&c) = chars.peek() {
                if c == '=' || c.is_whitespace() {
                    break;
                }
                key.push(c);
                chars.next();
            }

            if chars.peek() != Some(&'=') {
                // Bare word, keep scanning
                continue;
            }
            chars.next();

            let value = if chars.peek() == Some(&'"') {
                chars.next();
                let mut val = String::new();
                let mut escaped = false;

                for c in chars.by_ref() {
                    if escaped {
                        val.push(c);
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    } else {
                        val.push(c);
                    }
                }
                val
            } else {
                let mut val = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    val.push(c);
                    chars.next();
                }
                val
            };

            if key.is_empty() {
                continue;
            }
            return Some((key, value));
        }
    })
}

/// RFC 3339 or a Unix timestamp (seconds or milliseconds)
pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| s.parse::<i64>().ok().and_then(super::json::from_unix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pairs() {
        assert_eq!(count_pairs("level=info msg=hello ts=2026-01-29"), 3);
        assert_eq!(count_pairs("host: web1 status: ok"), 2);
        assert_eq!(count_pairs("ERROR: Connection failed"), 1);
        assert_eq!(count_pairs("just some plain text"), 0);
        assert_eq!(count_pairs("src/app.py:3:8: F401 unused"), 0);
        assert_eq!(count_pairs("=oops 1=2"), 0);
    }

    #[test]
    fn test_detector_majority() {
        let detector = StructuredDetector;

        let mostly = ["level=info msg=a", "level=warn msg=b", "a plain line"];
        assert!(detector.detect(&mostly).matched);

        let half = ["level=info msg=a", "a plain line"];
        assert!(!detector.detect(&half).matched);
    }

    #[test]
    fn test_blank_lines_do_not_count() {
        let lines = ["level=info msg=a", "", "   ", "level=error msg=b"];
        let result = StructuredDetector.detect(&lines);
        assert!(result.matched);
        assert!((result.confidence - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_logfmt_iter_quoted() {
        let pairs: Vec<_> = parse_logfmt_iter(r#"level=error msg="disk \"sda\" full" bare code=7"#).collect();
        assert_eq!(
            pairs,
            vec![
                ("level".to_string(), "error".to_string()),
                ("msg".to_string(), "disk \"sda\" full".to_string()),
                ("code".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_leading_timestamp() {
        let parsed = StructuredParser::new()
            .parse("2026-01-29T10:00:00Z level=error msg=boom")
            .unwrap();
        assert!(parsed.timestamp.is_some());
        assert_eq!(parsed.level, None);
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn test_parse_keyed_timestamp() {
        let parsed = StructuredParser::new()
            .parse("level=info ts=1706522400 msg=ok")
            .unwrap();
        assert_eq!(parsed.timestamp.unwrap().timestamp(), 1706522400);
    }

    #[test]
    fn test_parse_without_timestamp() {
        let parsed = StructuredParser::new().parse("user=alice action=login").unwrap();
        assert_eq!(parsed, ParsedLine::default());
    }

    #[test]
    fn test_line_too_large() {
        let err = StructuredParser::with_max_line_bytes(4).parse("a=1 b=2").unwrap_err();
        assert!(matches!(err, ParseError::LineTooLarge(7, 4)));
    }
}
