use crate::helpers::find_version;
use crate::names;
use crate::properties::Properties;
use fancy_regex::Regex;
use std::borrow::Cow;

/// Where an OS rule reads its version from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum VersionSource {
    /// The value of the trigger token itself.
    Token,
    /// First parseable version among tokens containing `OS` (iOS, macOS).
    Apple,
}

/// Form factor and device label implied by an OS rule.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Form {
    /// Device label from a `<model> Build` token; tablet if the label says so.
    AndroidBuild,
    Mobile(&'static str),
    Tablet(&'static str),
    MobileUnlabelled,
    Desktop,
}

pub(crate) struct OsRule {
    pub token: &'static str,
    pub name: &'static str,
    pub version: VersionSource,
    pub form: Form,
}

/// OS rules, highest priority first. The first rule whose token is present wins.
pub(crate) const OS_RULES: &[OsRule] = &[
    OsRule {
        token: "Android",
        name: names::ANDROID,
        version: VersionSource::Token,
        form: Form::AndroidBuild,
    },
    OsRule {
        token: "iPhone",
        name: names::IOS,
        version: VersionSource::Apple,
        form: Form::Mobile("iPhone"),
    },
    OsRule {
        token: "iPad",
        name: names::IOS,
        version: VersionSource::Apple,
        form: Form::Tablet("iPad"),
    },
    OsRule {
        token: "Windows NT",
        name: names::WINDOWS,
        version: VersionSource::Token,
        form: Form::Desktop,
    },
    OsRule {
        token: "Windows Phone OS",
        name: names::WINDOWS_PHONE,
        version: VersionSource::Token,
        form: Form::MobileUnlabelled,
    },
    OsRule {
        token: "Macintosh",
        name: names::MACOS,
        version: VersionSource::Apple,
        form: Form::Desktop,
    },
    OsRule {
        token: "Linux",
        name: names::LINUX,
        version: VersionSource::Token,
        form: Form::Desktop,
    },
];

/// Operating system part of a classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OsMatch<'a> {
    pub name: &'static str,
    pub version: Cow<'a, str>,
    pub device: &'a str,
    pub mobile: bool,
    pub tablet: bool,
    pub desktop: bool,
}

pub(crate) fn classify<'a>(props: &Properties<'a>, version_re: &Regex) -> OsMatch<'a> {
    let Some(rule) = OS_RULES.iter().find(|r| props.exists(r.token)) else {
        return OsMatch::default();
    };
    tracing::trace!(rule = rule.token, "os rule matched");

    let version = match rule.version {
        VersionSource::Token => Cow::Borrowed(props.value(rule.token)),
        VersionSource::Apple => find_apple_version(props, version_re),
    };
    let mut os = OsMatch {
        name: rule.name,
        version,
        ..Default::default()
    };

    match rule.form {
        Form::AndroidBuild => {
            if let Some(device) = android_device(props) {
                os.device = device;
                os.tablet = device.to_lowercase().contains("tablet");
            }
        }
        Form::Mobile(device) => {
            os.device = device;
            os.mobile = true;
        }
        Form::Tablet(device) => {
            os.device = device;
            os.tablet = true;
        }
        Form::MobileUnlabelled => os.mobile = true,
        Form::Desktop => os.desktop = true,
    }

    os
}

/// Model name from the first `<model> Build` token.
fn android_device<'a>(props: &Properties<'a>) -> Option<&'a str> {
    props
        .names()
        .find_map(|name| name.strip_suffix("Build"))
        .map(str::trim)
}

/// Version for Apple platforms, taken from the first `OS`-bearing token
/// that yields one. The value is tried before the token name, so
/// `CPU iPhone OS 14_2 like Mac OS X` gives `14.2`.
pub(crate) fn find_apple_version<'a>(props: &Properties<'a>, version_re: &Regex) -> Cow<'a, str> {
    props
        .iter()
        .filter(|(name, _)| name.contains("OS"))
        .find_map(|(name, value)| {
            find_version(version_re, value).or_else(|| find_version(version_re, name))
        })
        .unwrap_or(Cow::Borrowed(""))
}
