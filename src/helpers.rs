use crate::error::Result;
use fancy_regex::Regex;
use std::borrow::Cow;

/// Run of digits, dots and underscores (`10_15_7`, `14.0.1`).
const VERSION_PATTERN: &str = r"[_0-9.]+";

pub(crate) fn version_regex() -> Result<Regex> {
    Ok(Regex::new(VERSION_PATTERN)?)
}

/// First version-looking run in `s`, with `_` normalized to `.`.
///
/// Borrows from `s` unless a replacement was needed. A regex runtime
/// error counts as no match.
pub(crate) fn find_version<'a>(re: &Regex, s: &'a str) -> Option<Cow<'a, str>> {
    let m = re.find(s).ok().flatten()?;
    let ver = m.as_str();
    if ver.contains('_') {
        Some(Cow::Owned(ver.replace('_', ".")))
    } else {
        Some(Cow::Borrowed(ver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscores_become_dots() {
        let re = version_regex().unwrap();
        assert_eq!(find_version(&re, "Intel Mac OS X 10_15_7").as_deref(), Some("10.15.7"));
        assert!(matches!(find_version(&re, "14.0"), Some(Cow::Borrowed("14.0"))));
    }

    #[test]
    fn leftmost_run_wins() {
        let re = version_regex().unwrap();
        assert_eq!(find_version(&re, "OS 9_0 build 1.2").as_deref(), Some("9.0"));
    }

    #[test]
    fn no_digits() {
        let re = version_regex().unwrap();
        assert_eq!(find_version(&re, "like Mac OS X"), None);
        assert_eq!(find_version(&re, ""), None);
    }
}
