use grep_matcher::{Captures, Matcher};
use grep_regex::{RegexCaptures, RegexMatcher};

/// Expand `$1`, `${1}`, `$name`, `${name}` and `$$` in `template` against the
/// captures of one match. Groups that did not participate, or do not exist,
/// expand to nothing. No shell escaping is applied.
pub fn interpolate(
    template: &str,
    matcher: &RegexMatcher,
    caps: &RegexCaptures,
    haystack: &str,
) -> String {
    let mut dst = Vec::with_capacity(template.len());
    caps.interpolate(
        |name| matcher.capture_index(name),
        haystack.as_bytes(),
        template.as_bytes(),
        &mut dst,
    );
    String::from_utf8_lossy(&dst).into_owned()
}

/// Text of the named group, if the regex has one and it participated.
pub fn named_group(
    name: &str,
    matcher: &RegexMatcher,
    caps: &RegexCaptures,
    haystack: &str,
) -> Option<String> {
    let index = matcher.capture_index(name)?;
    let m = caps.get(index)?;
    haystack.get(m.start()..m.end()).map(str::to_string)
}
