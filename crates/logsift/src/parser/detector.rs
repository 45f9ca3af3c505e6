use super::formats::*;
use super::traits::*;

/// Whole-input format selection.
///
/// Detectors run in priority order against every line of the input and the
/// first one that claims the input wins. The choice is made once per input,
/// never per line.
pub struct FormatDetectorOrchestrator {
    detectors: Vec<Box<dyn FormatDetector>>,
}

impl FormatDetectorOrchestrator {
    pub fn new() -> Self {
        let detectors: Vec<Box<dyn FormatDetector>> = vec![
            // Order matters! Strictest detector first
            Box::new(JsonDetector),
            Box::new(StructuredDetector),
            Box::new(PlainTextDetector), // Fallback (always matches)
        ];

        Self { detectors }
    }

    pub fn detect(&self, lines: &[&str]) -> DetectionResult {
        for detector in &self.detectors {
            let result = detector.detect(lines);
            tracing::trace!(
                format = detector.format().as_str(),
                confidence = result.confidence,
                matched = result.matched,
                "format detector ran"
            );
            if result.matched {
                return result;
            }
        }

        DetectionResult::match_with_confidence(LogFormat::PlainText, 1.0)
    }
}

impl Default for FormatDetectorOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        let orchestrator = FormatDetectorOrchestrator::new();
        let lines = [
            r#"{"level":"info","msg":"line1"}"#,
            r#"{"level":"warn","msg":"line2"}"#,
            r#"{"level":"error","msg":"line3"}"#,
        ];
        assert_eq!(orchestrator.detect(&lines).format, LogFormat::Json);
    }

    #[test]
    fn test_one_bad_line_demotes_json() {
        let orchestrator = FormatDetectorOrchestrator::new();
        let lines = [r#"{"level":"info","msg":"json"}"#, "plain text line"];
        assert_eq!(orchestrator.detect(&lines).format, LogFormat::PlainText);
    }

    #[test]
    fn test_mixed_json_falls_through_to_structured() {
        let orchestrator = FormatDetectorOrchestrator::new();
        let lines = [
            "level=info msg=start",
            "level=info msg=working",
            r#"{"level":"error","msg":"not all json"}"#,
        ];
        assert_eq!(orchestrator.detect(&lines).format, LogFormat::Structured);
    }

    #[test]
    fn test_detect_plain() {
        let orchestrator = FormatDetectorOrchestrator::new();
        let lines = ["ERROR: Connection failed", "INFO: retry"];
        assert_eq!(orchestrator.detect(&lines).format, LogFormat::PlainText);
    }

    #[test]
    fn test_detect_empty() {
        let orchestrator = FormatDetectorOrchestrator::new();
        assert_eq!(orchestrator.detect(&[]).format, LogFormat::PlainText);
        assert_eq!(orchestrator.detect(&["", ""]).format, LogFormat::PlainText);
    }
}
