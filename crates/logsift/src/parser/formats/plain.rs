use crate::parser::traits::*;

/// Plain text detector (fallback - always matches)
pub struct PlainTextDetector;

impl FormatDetector for PlainTextDetector {
    fn accepts(&self, _line: &str) -> bool {
        true
    }

    fn detect(&self, _lines: &[&str]) -> DetectionResult {
        DetectionResult::match_with_confidence(LogFormat::PlainText, 1.0)
    }

    fn format(&self) -> LogFormat {
        LogFormat::PlainText
    }
}

/// Plain text parser (pass-through)
///
/// Plain lines carry no level, no timestamp and no separate message. Line
/// length is not checked because nothing is parsed.
pub struct PlainTextParser;

impl LineParser for PlainTextParser {
    fn parse(&self, _line: &str) -> Result<ParsedLine, ParseError> {
        Ok(ParsedLine::default())
    }

    fn format(&self) -> LogFormat {
        LogFormat::PlainText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_detector() {
        let result = PlainTextDetector.detect(&["anything at all"]);
        assert!(result.matched);
        assert_eq!(result.format, LogFormat::PlainText);
        assert!(PlainTextDetector.detect(&[]).matched);
    }

    #[test]
    fn test_plain_parser_never_infers_level() {
        let parsed = PlainTextParser.parse("ERROR: Connection failed").unwrap();
        assert_eq!(parsed.level, None);
        assert_eq!(parsed.message, None);
    }
}
