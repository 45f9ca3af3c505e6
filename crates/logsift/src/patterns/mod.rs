/// Pattern registry
///
/// Turns declarative pattern definitions into compiled, validated rules.
///
/// - `model.rs`: raw definitions and compiled rules
/// - `registry.rs`: validation, compilation and load order
/// - `source.rs`: TOML `[[patterns]]` reader
/// - `builtin.rs`: pattern libraries compiled into the crate

pub mod builtin;
pub mod error;
pub mod model;
pub mod registry;
pub mod source;

pub use error::{PatternError, PatternLocation};
pub use model::{PatternDefinition, PatternRule};
pub use registry::PatternRegistry;
