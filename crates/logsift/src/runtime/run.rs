//! Run: read the log, analyse it, print the result.

use std::io::{Read, Write};
use std::time::Instant;

use crate::analyzer::{Analyzer, RunInfo};
use crate::output::json;

/// Analyse `log_file`, or stdin when no path is given, and write the JSON
/// result to stdout.
pub fn run(analyzer: &Analyzer, log_file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match log_file {
        Some(path) => {
            let input = std::fs::read_to_string(path)?;
            write_result(analyzer, &input, &RunInfo::for_log_file(path), &mut out)
        }
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            let info = RunInfo {
                command: "analyze -".to_string(),
                ..RunInfo::default()
            };
            write_result(analyzer, &input, &info, &mut out)
        }
    }
}

/// Analyse `input` and write the pretty JSON result to `out`.
///
/// The summary carries `info` unchanged. How long the analysis itself took is
/// logged, not reported as the command's duration.
pub fn write_result<W: Write>(
    analyzer: &Analyzer,
    input: &str,
    info: &RunInfo,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let result = analyzer.analyze(input, info);
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "log analysed");

    writeln!(out, "{}", json::to_json(&result)?)?;
    Ok(())
}
