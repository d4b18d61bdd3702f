/// Multi-word token families whose last word is a version number
/// (`Windows NT 10.0`, `Android 11`, ...).
const VERSIONED_FAMILIES: &[&str] = &["Linux", "Windows NT", "Windows Phone OS", "MSIE", "Android"];

/// Split a value-less token into `(name, version)` when its prefix before
/// the last space is a known versioned family. Anything else is returned
/// whole with an empty version.
pub(crate) fn split_version(token: &str) -> (&str, &str) {
    match token.rfind(' ') {
        Some(i) if VERSIONED_FAMILIES.contains(&&token[..i]) => (&token[..i], &token[i + 1..]),
        _ => (token, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_families_split() {
        assert_eq!(split_version("Windows NT 10.0"), ("Windows NT", "10.0"));
        assert_eq!(split_version("Android 4.0.3"), ("Android", "4.0.3"));
        assert_eq!(split_version("MSIE 8.0"), ("MSIE", "8.0"));
        assert_eq!(split_version("Windows Phone OS 7.5"), ("Windows Phone OS", "7.5"));
        assert_eq!(split_version("Linux x86_64"), ("Linux", "x86_64"));
    }

    #[test]
    fn unknown_families_stay_whole() {
        assert_eq!(split_version("Intel Mac OS X 10_15_7"), ("Intel Mac OS X 10_15_7", ""));
        assert_eq!(split_version("Windows Phone 8.0"), ("Windows Phone 8.0", ""));
        assert_eq!(split_version("iPhone"), ("iPhone", ""));
    }
}
