pub use super::model::{DetectionResult, LogFormat, ParseError, ParsedLine};

pub trait FormatDetector: Send + Sync {
    /// Whether a single non-empty line looks like this format.
    fn accepts(&self, line: &str) -> bool;

    /// Decide whether the whole input is in this format.
    fn detect(&self, lines: &[&str]) -> DetectionResult;

    fn format(&self) -> LogFormat;

    /// Share of non-empty lines accepted, and whether there were any.
    fn acceptance(&self, lines: &[&str]) -> (f32, bool) {
        let mut total = 0usize;
        let mut accepted = 0usize;
        for line in lines.iter().filter(|l| !l.trim().is_empty()) {
            total += 1;
            if self.accepts(line) {
                accepted += 1;
            }
        }
        if total == 0 {
            return (0.0, false);
        }
        (accepted as f32 / total as f32, true)
    }
}

pub trait LineParser: Send + Sync {
    /// parse one non-empty, ANSI-stripped line
    fn parse(&self, line: &str) -> Result<ParsedLine, ParseError>;
    fn format(&self) -> LogFormat;
}
