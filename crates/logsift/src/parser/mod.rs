/// Log parsing and normalization module
///
/// Converts raw command output into an ordered sequence of normalized lines,
/// auto-detecting the source format once for the whole input.
///
/// # Architecture
///
/// - `traits.rs`: Core traits for detectors and line parsers
/// - `detector.rs`: Whole-input format selection in fixed priority order
/// - `formats/`: Individual format parser implementations
/// - `normalizer.rs`: Drives detection and per-line parsing
///
/// Lines are 1-based and mirror the input exactly, blank lines included.

pub mod detector;
pub mod formats;
pub mod model;
pub mod normalizer;
pub mod traits;
mod ansi;

pub use ansi::strip_ansi_codes;
pub use model::{LogFormat, NormalizedLine, ParseError, ParsedLine, ParsedLog};
pub use normalizer::LogParser;

// Constants
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
