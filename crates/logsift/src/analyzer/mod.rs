/// Analyzer: orchestration and result assembly.

pub mod error;
pub mod model;
pub mod pipeline;

pub use error::AnalysisError;
pub use model::{ActionableItem, AnalysisResult, RunInfo, RunStatus, Stats, Summary};
pub use pipeline::{analyze, Analyzer};
