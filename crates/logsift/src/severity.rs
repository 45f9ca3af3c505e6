use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a detected issue (and of a pattern rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Map a level string found in a structured source onto a severity.
    ///
    /// This is looser than [`FromStr`]: it accepts the spellings emitted by
    /// common logging libraries (`WARN`, `fatal`, `crit`, `debug`, ...).
    /// Debug and trace levels are explicit, non-issue levels and map to `Info`.
    /// Returns `None` for strings that are not a recognisable level.
    pub fn from_level(level: &str) -> Option<Severity> {
        match level.trim().to_ascii_lowercase().as_str() {
            "error" | "err" | "fatal" | "critical" | "crit" | "panic" | "emergency" | "alert" => {
                Some(Severity::Error)
            }
            "warning" | "warn" => Some(Severity::Warning),
            "info" | "notice" | "debug" | "trace" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ();

    /// Strict parse used for pattern definitions: only the three canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(()),
        }
    }
}

/// How sure a pattern author is that its suggestion fixes the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_strict_parse() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert!("ERROR".parse::<Severity>().is_err());
        assert!("warn".parse::<Severity>().is_err());
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_from_level_aliases() {
        assert_eq!(Severity::from_level("ERROR"), Some(Severity::Error));
        assert_eq!(Severity::from_level("fatal"), Some(Severity::Error));
        assert_eq!(Severity::from_level("WARN"), Some(Severity::Warning));
        assert_eq!(Severity::from_level(" warning "), Some(Severity::Warning));
        assert_eq!(Severity::from_level("debug"), Some(Severity::Info));
        assert_eq!(Severity::from_level("verbose"), None);
        assert_eq!(Severity::from_level(""), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        let s: Severity = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(s, Severity::Info);
    }

    #[test]
    fn test_confidence_parse() {
        assert_eq!("medium".parse::<Confidence>(), Ok(Confidence::Medium));
        assert!("certain".parse::<Confidence>().is_err());
    }
}
