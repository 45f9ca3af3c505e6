use thiserror::Error;

use crate::conf::ConfigError;
use crate::patterns::PatternError;

/// Failures surfaced by the analyzer. Both happen before any input is read:
/// parsing, detection and enrichment cannot fail.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Patterns(#[from] PatternError),
}
