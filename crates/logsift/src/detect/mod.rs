/// Issue detection
///
/// Applies explicit levels and the pattern registry to normalized lines.
/// Context windows and file references are attached later by the enricher.

pub mod detector;
pub mod issue;
pub mod template;

pub use detector::IssueDetector;
pub use issue::{Issue, Suggestion};
