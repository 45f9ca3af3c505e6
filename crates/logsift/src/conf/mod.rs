//! Conf module: analyzer configuration model, validation and loading.

pub mod error;
pub mod load;
pub mod model;

pub use error::ConfigError;
pub use model::AnalyzerConfig;
