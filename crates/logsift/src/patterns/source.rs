use serde::Deserialize;

use super::error::PatternError;
use super::model::PatternDefinition;

#[derive(Debug, Default, Deserialize)]
struct PatternFile {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

/// Read the `[[patterns]]` array-of-tables out of a TOML document.
///
/// Only the document shape is checked here. Field validation happens in
/// [`super::PatternRegistry::load`] so that a missing field is reported with
/// the definition's position in the merged set.
pub fn from_toml_str(source: &str) -> Result<Vec<PatternDefinition>, PatternError> {
    let file: PatternFile = toml::from_str(source)?;
    Ok(file.patterns)
}
