use crate::properties::Properties;

/// Structural tokens that never name a browser on their own.
pub(crate) const NOT_A_BROWSER: &[&str] = &[
    "Chrome",
    "Firefox",
    "Safari",
    "Version",
    "Mobile",
    "Mobile Safari",
    "Mozilla",
    "AppleWebKit",
    "Windows NT",
    "Windows Phone OS",
    "Android",
    "Macintosh",
    "Linux",
    "GSA",
];

/// Last-resort pick of a browser-ish token, in token order.
///
/// Tokens carrying a value are preferred. Unless `versioned_only` is set,
/// a bare token is accepted when no valued one remains.
pub(crate) fn best_match<'a>(props: &Properties<'a>, versioned_only: bool) -> Option<(&'a str, &'a str)> {
    let candidates = || props.iter().filter(|(name, _)| !NOT_A_BROWSER.contains(name));

    let versioned = candidates().find(|(_, value)| !value.is_empty());
    if versioned.is_some() || versioned_only {
        return versioned;
    }
    candidates().next()
}
