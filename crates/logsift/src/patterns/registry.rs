use std::collections::HashMap;
use std::sync::Arc;

use grep_regex::RegexMatcherBuilder;

use super::builtin;
use super::error::{PatternError, PatternLocation};
use super::model::{PatternDefinition, PatternRule};
use crate::severity::{Confidence, Severity};

/// Validated, compiled pattern rules in load order.
///
/// Load order is match priority: the detector stops at the first rule whose
/// regex matches, so callers list specific patterns before general ones.
/// Cloning is cheap and clones share the same immutable rule list.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Arc<[PatternRule]>,
}

impl PatternRegistry {
    /// A registry with no rules. Only explicit levels produce issues.
    pub fn empty() -> Self {
        Self {
            rules: Arc::from(Vec::new()),
        }
    }

    /// Validate and compile `definitions`.
    ///
    /// Fails on the first offending definition. Optional fields that are absent
    /// stay absent on the compiled rule.
    pub fn load(definitions: Vec<PatternDefinition>) -> Result<Self, PatternError> {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(definitions.len());
        let mut rules = Vec::with_capacity(definitions.len());

        for (index, definition) in definitions.into_iter().enumerate() {
            let rule = compile(index, definition)?;
            tracing::trace!(index, pattern = %rule.name, regex = %rule.regex, "pattern compiled");

            if let Some(&first_index) = seen.get(&rule.name) {
                return Err(PatternError::DuplicateName {
                    name: rule.name,
                    first_index,
                    index,
                });
            }
            seen.insert(rule.name.clone(), index);
            rules.push(rule);
        }

        tracing::info!(patterns = rules.len(), "pattern registry loaded");

        Ok(Self { rules: rules.into() })
    }

    /// The pattern library shipped with the crate.
    pub fn builtin() -> Result<Self, PatternError> {
        Self::load(builtin::definitions()?)
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile(index: usize, definition: PatternDefinition) -> Result<PatternRule, PatternError> {
    let PatternDefinition {
        name,
        regex,
        severity,
        description,
        tags,
        suggestion,
        automated_fix,
        confidence,
        context_lines_after,
        message,
    } = definition;

    let location = PatternLocation {
        index,
        name: name.clone().filter(|n| !n.is_empty()),
    };

    let name = require("name", name.filter(|n| !n.is_empty()), &location)?;
    let regex = require("regex", regex.filter(|r| !r.is_empty()), &location)?;
    let severity = require("severity", severity, &location)?;
    let description = require("description", description, &location)?;
    let tags = require("tags", tags, &location)?;

    let severity = severity
        .parse::<Severity>()
        .map_err(|_| PatternError::InvalidEnum {
            field: "severity",
            value: severity.clone(),
            expected: "error, warning, info",
            location: location.clone(),
        })?;

    let confidence = confidence
        .map(|value| {
            value.parse::<Confidence>().map_err(|_| PatternError::InvalidEnum {
                field: "confidence",
                value: value.clone(),
                expected: "high, medium, low",
                location: location.clone(),
            })
        })
        .transpose()?;

    let context_lines_after = context_lines_after
        .map(|lines| {
            usize::try_from(lines)
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| PatternError::InvalidValue {
                    field: "context_lines_after",
                    reason: format!("must be a positive integer, got {}", lines),
                    location: location.clone(),
                })
        })
        .transpose()?;

    let matcher = RegexMatcherBuilder::new()
        .multi_line(false)
        .build(&regex)
        .map_err(|source| PatternError::InvalidPattern {
            location: location.clone(),
            source,
        })?;

    let mut unique_tags: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique_tags.contains(&tag) {
            unique_tags.push(tag);
        }
    }

    Ok(PatternRule {
        name,
        regex,
        matcher,
        severity,
        description,
        tags: unique_tags,
        suggestion,
        automated_fix,
        confidence,
        context_lines_after,
        message,
    })
}

fn require<T>(
    field: &'static str,
    value: Option<T>,
    location: &PatternLocation,
) -> Result<T, PatternError> {
    value.ok_or_else(|| PatternError::MissingField {
        field,
        location: location.clone(),
    })
}
