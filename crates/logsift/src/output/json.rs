use crate::analyzer::AnalysisResult;

/// Pretty-printed JSON in the stable output schema.
pub fn to_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Single-line JSON, for piping into other tools.
pub fn to_json_compact(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}
