/// Individual log format parsers and detectors

pub mod json;
pub mod plain;
pub mod structured;

pub use json::{JsonDetector, JsonParser};
pub use plain::{PlainTextDetector, PlainTextParser};
pub use structured::{StructuredDetector, StructuredParser};
