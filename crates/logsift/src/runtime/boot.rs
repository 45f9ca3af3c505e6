//! Boot: logging init, config load, pattern registry and analyzer creation.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::analyzer::Analyzer;
use crate::conf::AnalyzerConfig;
use crate::patterns::PatternRegistry;

/// Initialise the tracing / logging subsystem.
///
/// Logs go to stderr so stdout carries only the JSON result.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logsift=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load config and the built-in pattern library, and build the analyzer.
pub fn boot() -> Result<Analyzer, Box<dyn std::error::Error>> {
    info!("Starting logsift v{}", env!("CARGO_PKG_VERSION"));

    let config = AnalyzerConfig::load()?;
    info!(
        context_lines = config.context_lines,
        max_errors = config.max_errors,
        "loaded configuration"
    );

    let registry = PatternRegistry::builtin()?;
    let analyzer = Analyzer::new(registry, config)?;

    Ok(analyzer)
}
