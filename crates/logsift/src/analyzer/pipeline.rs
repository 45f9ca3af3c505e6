use super::error::AnalysisError;
use super::model::{ActionableItem, AnalysisResult, RunInfo, Stats, Summary};
use crate::conf::AnalyzerConfig;
use crate::context::ContextEnricher;
use crate::detect::{Issue, IssueDetector};
use crate::parser::LogParser;
use crate::patterns::{PatternDefinition, PatternRegistry};
use crate::severity::Severity;

/// Runs Parser → Detector → Enricher and assembles the result.
///
/// Holds only immutable state, so one analyzer can serve concurrent calls
/// from several threads.
pub struct Analyzer {
    registry: PatternRegistry,
    config: AnalyzerConfig,
    parser: LogParser,
    detector: IssueDetector,
    enricher: ContextEnricher,
}

impl Analyzer {
    /// Fails on invalid configuration before anything else happens.
    pub fn new(registry: PatternRegistry, config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;

        Ok(Self {
            parser: LogParser::with_max_line_bytes(config.max_line_bytes),
            detector: IssueDetector::new(config.issue_levels.clone()),
            enricher: ContextEnricher::new(config.context_lines),
            registry,
            config,
        })
    }

    pub fn from_definitions(
        definitions: Vec<PatternDefinition>,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        let registry = PatternRegistry::load(definitions)?;
        Self::new(registry, config)
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, input: &str, run: &RunInfo) -> AnalysisResult {
        let parsed = self.parser.parse(input);

        let mut issues = self.detector.detect(&parsed.lines, self.registry.rules());
        let total_detected = issues.len();

        if issues.len() > self.config.max_errors {
            tracing::debug!(
                detected = total_detected,
                kept = self.config.max_errors,
                "truncating issues to max_errors"
            );
            issues.truncate(self.config.max_errors);
        }

        self.enricher.enrich_all(&mut issues, &parsed.lines);

        let actionable_items = actionable_items(&issues);
        let stats = Stats {
            total_errors: count_severity(&issues, Severity::Error),
            total_warnings: count_severity(&issues, Severity::Warning),
            fixable_errors: issues.iter().filter(|i| i.is_fixable()).count(),
            log_size_bytes: input.len(),
            log_lines: parsed.lines.len(),
            total_detected,
        };

        tracing::info!(
            format = parsed.format.as_str(),
            lines = stats.log_lines,
            errors = stats.total_errors,
            warnings = stats.total_warnings,
            detected = total_detected,
            "analysis complete"
        );

        AnalysisResult {
            summary: Summary::from(run),
            errors: issues,
            actionable_items,
            stats,
        }
    }
}

/// One-shot analysis with an explicit registry and configuration.
pub fn analyze(
    input: &str,
    registry: &PatternRegistry,
    config: &AnalyzerConfig,
    run: &RunInfo,
) -> Result<AnalysisResult, AnalysisError> {
    let analyzer = Analyzer::new(registry.clone(), config.clone())?;
    Ok(analyzer.analyze(input, run))
}

fn count_severity(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

fn actionable_items(issues: &[Issue]) -> Vec<ActionableItem> {
    issues
        .iter()
        .filter_map(|issue| issue.suggestion.as_ref().map(|s| (issue, s)))
        .enumerate()
        .map(|(idx, (issue, suggestion))| ActionableItem {
            priority: idx + 1,
            file: issue.file.clone(),
            line: issue.file_line,
            action: suggestion.action.clone(),
            description: suggestion.description.clone(),
            automated: suggestion.is_automated(),
        })
        .collect()
}
