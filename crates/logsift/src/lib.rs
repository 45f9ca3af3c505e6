// Log analysis pipeline: raw command output in, structured findings out.

// Pipeline stages
pub mod severity;
pub mod patterns;
pub mod parser;
pub mod detect;
pub mod context;
pub mod analyzer;

// Surfaces
pub mod output;
pub mod conf;
pub mod runtime;

pub use analyzer::{analyze, AnalysisError, AnalysisResult, Analyzer, RunInfo};
pub use conf::AnalyzerConfig;
pub use patterns::{PatternDefinition, PatternError, PatternRegistry};
pub use severity::{Confidence, Severity};
