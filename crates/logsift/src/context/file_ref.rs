use std::sync::LazyLock;

use grep_matcher::Matcher;
use grep_regex::RegexMatcher;

use crate::detect::template::named_group;

/// `C:\src\main.py:100` or `C:/src/main.py:100:7`
static WINDOWS_PATH: LazyLock<RegexMatcher> = LazyLock::new(|| {
    RegexMatcher::new(r"\b(?P<path>[A-Za-z]:[\\/][\w\\/.-]+\.\w+):(?P<line>\d+)")
        .expect("windows path regex compiles")
});

/// `File "/app/main.py", line 42, in handler`
static PYTHON_FRAME: LazyLock<RegexMatcher> = LazyLock::new(|| {
    RegexMatcher::new(r#"(?i)File\s+"(?P<path>[^"]+)",\s+line\s+(?P<line>\d+)"#)
        .expect("python frame regex compiles")
});

/// `src/app.py:42`, `./lib/util.js:7:12`, `main.rs:3`, `ERROR:src/app.py:3`
///
/// At most one leading `/`, so URL authorities such as `//host.com:443` never
/// count as paths.
static UNIX_PATH: LazyLock<RegexMatcher> = LazyLock::new(|| {
    RegexMatcher::new(
        r#"(?:^|[\s"'(\[=,:])(?P<path>/?[\w.~-](?:[\w./~-]*[\w-])?\.\w+):(?P<line>\d+)"#,
    )
        .expect("unix path regex compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub path: String,
    pub line: usize,
}

/// First `file:line` reference in `text`.
///
/// Shapes are tried most specific first: Windows drive paths, Python
/// traceback frames, then plain `path:line[:col]`.
pub fn find_file_ref(text: &str) -> Option<FileRef> {
    [&*WINDOWS_PATH, &*PYTHON_FRAME, &*UNIX_PATH]
        .into_iter()
        .find_map(|matcher| capture(matcher, text))
}

fn capture(matcher: &RegexMatcher, text: &str) -> Option<FileRef> {
    let mut caps = matcher.new_captures().ok()?;
    if !matcher.captures(text.as_bytes(), &mut caps).ok()? {
        return None;
    }

    let path = named_group("path", matcher, &caps, text)?;
    let line = named_group("line", matcher, &caps, text)?.parse().ok()?;
    Some(FileRef { path, line })
}
