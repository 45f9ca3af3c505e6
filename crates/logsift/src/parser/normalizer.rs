use std::borrow::Cow;

use super::ansi::strip_ansi_codes;
use super::detector::FormatDetectorOrchestrator;
use super::formats::*;
use super::model::{LogFormat, NormalizedLine, ParsedLog};
use super::traits::LineParser;
use super::MAX_LINE_SIZE;

/// Turns raw text into [`NormalizedLine`]s.
///
/// Format is detected once for the whole input, then every line goes through
/// the parser for that format. A line the parser rejects is kept as a plain,
/// level-less line. Parsing never fails.
pub struct LogParser {
    detector: FormatDetectorOrchestrator,
    max_line_bytes: usize,
}

impl LogParser {
    pub fn new() -> Self {
        Self::with_max_line_bytes(MAX_LINE_SIZE)
    }

    pub fn with_max_line_bytes(max_line_bytes: usize) -> Self {
        Self {
            detector: FormatDetectorOrchestrator::new(),
            max_line_bytes,
        }
    }

    pub fn parse(&self, input: &str) -> ParsedLog {
        let stripped: Vec<Cow<'_, str>> = input.lines().map(strip_ansi_codes).collect();
        let views: Vec<&str> = stripped.iter().map(|l| &**l).collect();

        let detection = self.detector.detect(&views);
        tracing::debug!(
            format = detection.format.as_str(),
            confidence = detection.confidence,
            lines = views.len(),
            "detected log format"
        );

        let parser = self.parser_for(detection.format);
        let mut degraded = 0usize;

        let lines = stripped
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| {
                let line_number = idx + 1;
                let raw = raw.into_owned();

                if raw.trim().is_empty() {
                    return NormalizedLine::plain(line_number, raw);
                }

                match parser.parse(&raw) {
                    Ok(parsed) => NormalizedLine::from_parsed(line_number, raw, parsed),
                    Err(e) => {
                        degraded += 1;
                        tracing::debug!(line = line_number, error = %e, "line kept as plain text");
                        NormalizedLine::plain(line_number, raw)
                    }
                }
            })
            .collect();

        if degraded > 0 {
            tracing::debug!(degraded, "some lines could not be parsed");
        }

        ParsedLog {
            format: detection.format,
            lines,
        }
    }

    fn parser_for(&self, format: LogFormat) -> Box<dyn LineParser> {
        match format {
            LogFormat::Json => Box::new(JsonParser::with_max_line_bytes(self.max_line_bytes)),
            LogFormat::Structured => {
                Box::new(StructuredParser::with_max_line_bytes(self.max_line_bytes))
            }
            LogFormat::PlainText => Box::new(PlainTextParser),
        }
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}
