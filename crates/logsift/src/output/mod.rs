/// Rendering of analysis results.

pub mod json;
pub mod markdown;
