use super::error::PatternError;
use super::model::PatternDefinition;
use super::source;

/// Built-in libraries in match-priority order. Tool specific libraries come
/// first, the generic catch-alls in `common` last.
const LIBRARIES: [(&str, &str); 12] = [
    ("python", include_str!("defaults/python.toml")),
    ("linters", include_str!("defaults/linters.toml")),
    ("cargo", include_str!("defaults/cargo.toml")),
    ("npm", include_str!("defaults/npm.toml")),
    ("make", include_str!("defaults/make.toml")),
    ("pytest", include_str!("defaults/pytest.toml")),
    ("docker", include_str!("defaults/docker.toml")),
    ("brew", include_str!("defaults/brew.toml")),
    ("apt", include_str!("defaults/apt.toml")),
    ("http", include_str!("defaults/http.toml")),
    ("shell", include_str!("defaults/shell.toml")),
    ("common", include_str!("defaults/common.toml")),
];

/// Names of the built-in libraries, in load order.
pub fn library_names() -> impl Iterator<Item = &'static str> {
    LIBRARIES.iter().map(|(name, _)| *name)
}

/// All built-in definitions, concatenated in load order.
pub fn definitions() -> Result<Vec<PatternDefinition>, PatternError> {
    let mut all = Vec::new();
    for (library, text) in LIBRARIES {
        let defs = source::from_toml_str(text)?;
        tracing::debug!(library, patterns = defs.len(), "read built-in pattern library");
        all.extend(defs);
    }
    Ok(all)
}
