/// Context enrichment: surrounding lines and `file:line` references.

pub mod enricher;
pub mod file_ref;

pub use enricher::ContextEnricher;
pub use file_ref::{find_file_ref, FileRef};
