use std::fmt;

use crate::analyzer::AnalysisResult;
use crate::detect::Issue;
use crate::severity::Severity;

/// Human-readable Markdown report.
pub fn to_markdown(result: &AnalysisResult) -> String {
    Markdown(result).to_string()
}

/// Display adapter, for writing the report straight into a formatter.
pub struct Markdown<'a>(pub &'a AnalysisResult);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "# Log Analysis Results")?;
        writeln!(f)?;

        if result.errors.is_empty() {
            writeln!(f, "**Status:** ✓ Clean, no errors or warnings found")?;
            return Ok(());
        }

        write!(
            f,
            "**Errors:** {} | **Warnings:** {}",
            result.stats.total_errors, result.stats.total_warnings
        )?;
        let info = count(result, Severity::Info);
        if info > 0 {
            write!(f, " | **Info:** {}", info)?;
        }
        writeln!(f)?;

        if result.stats.total_detected > result.errors.len() {
            writeln!(f)?;
            writeln!(
                f,
                "_Showing the first {} of {} detected issues._",
                result.errors.len(),
                result.stats.total_detected
            )?;
        }

        for (severity, title) in [
            (Severity::Error, "Errors"),
            (Severity::Warning, "Warnings"),
            (Severity::Info, "Info"),
        ] {
            let mut issues = result.errors.iter().filter(|i| i.severity == severity).peekable();
            if issues.peek().is_none() {
                continue;
            }

            writeln!(f)?;
            writeln!(f, "## {}", title)?;
            for issue in issues {
                writeln!(f)?;
                write_issue(f, issue)?;
            }
        }

        Ok(())
    }
}

fn count(result: &AnalysisResult, severity: Severity) -> usize {
    result.errors.iter().filter(|i| i.severity == severity).count()
}

fn write_issue(f: &mut fmt::Formatter<'_>, issue: &Issue) -> fmt::Result {
    writeln!(
        f,
        "### {} #{} (Line {})",
        issue.severity.as_str().to_uppercase(),
        issue.id,
        issue.line_in_log
    )?;
    writeln!(f)?;
    writeln!(f, "**Message:** {}", issue.message)?;

    let mut meta = Vec::new();
    if let Some(pattern) = &issue.pattern_matched {
        meta.push(format!("**Pattern:** `{}`", pattern));
    }
    if let Some(code) = &issue.code {
        meta.push(format!("**Code:** `{}`", code));
    }
    if !issue.tags.is_empty() {
        let tags: Vec<String> = issue.tags.iter().map(|t| format!("`{}`", t)).collect();
        meta.push(format!("**Tags:** {}", tags.join(", ")));
    }
    match (&issue.file, issue.file_line) {
        (Some(file), Some(line)) => meta.push(format!("**File:** `{}:{}`", file, line)),
        (Some(file), None) => meta.push(format!("**File:** `{}`", file)),
        _ => {}
    }
    if !meta.is_empty() {
        writeln!(f)?;
        for entry in meta {
            writeln!(f, "{}", entry)?;
        }
    }

    if let Some(suggestion) = &issue.suggestion {
        writeln!(f)?;
        writeln!(f, "**Suggestion:** {}", suggestion.action)?;
        if let Some(fix) = suggestion.automated_fix.as_deref().filter(|c| !c.trim().is_empty()) {
            writeln!(f, "**Fix:** `{}`", fix)?;
        }
    }

    if !issue.context_before.is_empty() || !issue.context_after.is_empty() {
        writeln!(f)?;
        writeln!(f, "**Context:**")?;
        writeln!(f, "```")?;

        let first = issue.line_in_log.saturating_sub(issue.context_before.len());
        for (offset, line) in issue.context_before.iter().enumerate() {
            writeln!(f, "{:>5} | {}", first + offset, line)?;
        }
        writeln!(f, "{:>5} | ▶ {}", issue.line_in_log, issue.message)?;
        for (offset, line) in issue.context_after.iter().enumerate() {
            writeln!(f, "{:>5} | {}", issue.line_in_log + 1 + offset, line)?;
        }

        writeln!(f, "```")?;
    }

    Ok(())
}
