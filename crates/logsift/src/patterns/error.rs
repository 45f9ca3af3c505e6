use std::fmt;

use thiserror::Error;

/// Where a pattern definition sits in the loaded set: its position and, when
/// the definition has one, its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLocation {
    /// 0-based position in the merged definition list
    pub index: usize,
    pub name: Option<String>,
}

impl fmt::Display for PatternLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "#{} (`{}`)", self.index + 1, name),
            None => write!(f, "#{}", self.index + 1),
        }
    }
}

/// Load-time pattern errors. All of them are fatal: the pattern source has to be
/// fixed before any analysis can run.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Pattern {location}: missing required field `{field}`")]
    MissingField {
        field: &'static str,
        location: PatternLocation,
    },

    #[error("Pattern {location}: invalid {field} `{value}` (expected one of: {expected})")]
    InvalidEnum {
        field: &'static str,
        value: String,
        expected: &'static str,
        location: PatternLocation,
    },

    #[error("Pattern {location}: invalid {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
        location: PatternLocation,
    },

    #[error("Pattern {location}: regex does not compile: {source}")]
    InvalidPattern {
        location: PatternLocation,
        #[source]
        source: grep_regex::Error,
    },

    #[error("Duplicate pattern name `{name}` (first defined at #{}, again at #{})", .first_index + 1, .index + 1)]
    DuplicateName {
        name: String,
        first_index: usize,
        index: usize,
    },

    #[error("Invalid pattern source: {0}")]
    Toml(#[from] toml::de::Error),
}
