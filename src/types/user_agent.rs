use super::FormFactor;
use crate::names;
use std::borrow::Cow;

/// Classification of a single User-Agent string.
///
/// String fields borrow from the input where they can; use
/// [`UserAgent::into_owned`] to detach the record from the input buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct UserAgent<'a> {
    /// Browser (or bot) name. Equals `source` when nothing could be identified.
    pub name: Cow<'a, str>,
    pub version: Cow<'a, str>,
    pub os: Cow<'a, str>,
    pub os_version: Cow<'a, str>,
    /// Device label, e.g. `iPhone` or the model before an Android `Build` token.
    pub device: Cow<'a, str>,
    pub mobile: bool,
    pub tablet: bool,
    pub desktop: bool,
    pub bot: bool,
    /// First `http://` or `https://` token embedded in the input.
    pub url: Cow<'a, str>,
    /// The raw header value.
    pub source: Cow<'a, str>,
}

impl<'a> UserAgent<'a> {
    pub fn form_factor(&self) -> Option<FormFactor> {
        if self.tablet {
            Some(FormFactor::Tablet)
        } else if self.mobile {
            Some(FormFactor::Mobile)
        } else if self.desktop {
            Some(FormFactor::Desktop)
        } else {
            None
        }
    }

    pub fn into_owned(self) -> UserAgent<'static> {
        UserAgent {
            name: Cow::Owned(self.name.into_owned()),
            version: Cow::Owned(self.version.into_owned()),
            os: Cow::Owned(self.os.into_owned()),
            os_version: Cow::Owned(self.os_version.into_owned()),
            device: Cow::Owned(self.device.into_owned()),
            mobile: self.mobile,
            tablet: self.tablet,
            desktop: self.desktop,
            bot: self.bot,
            url: Cow::Owned(self.url.into_owned()),
            source: Cow::Owned(self.source.into_owned()),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os == names::WINDOWS
    }
    pub fn is_android(&self) -> bool {
        self.os == names::ANDROID
    }
    pub fn is_macos(&self) -> bool {
        self.os == names::MACOS
    }
    pub fn is_ios(&self) -> bool {
        self.os == names::IOS
    }
    pub fn is_linux(&self) -> bool {
        self.os == names::LINUX
    }

    pub fn is_opera(&self) -> bool {
        self.name == names::OPERA
    }
    pub fn is_opera_mini(&self) -> bool {
        self.name == names::OPERA_MINI
    }
    pub fn is_chrome(&self) -> bool {
        self.name == names::CHROME
    }
    pub fn is_firefox(&self) -> bool {
        self.name == names::FIREFOX
    }
    pub fn is_internet_explorer(&self) -> bool {
        self.name == names::INTERNET_EXPLORER
    }
    pub fn is_safari(&self) -> bool {
        self.name == names::SAFARI
    }
    pub fn is_edge(&self) -> bool {
        self.name == names::EDGE
    }
    pub fn is_googlebot(&self) -> bool {
        self.name == names::GOOGLEBOT
    }
    pub fn is_twitterbot(&self) -> bool {
        self.name == names::TWITTERBOT
    }
    pub fn is_facebookbot(&self) -> bool {
        self.name == names::FACEBOOK_EXTERNAL_HIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_factor_prefers_tablet() {
        let ua = UserAgent {
            tablet: true,
            desktop: true,
            ..Default::default()
        };
        assert_eq!(ua.form_factor(), Some(FormFactor::Tablet));
        assert_eq!(UserAgent::default().form_factor(), None);
    }

    #[test]
    fn into_owned_keeps_fields() {
        let raw = String::from("curl/8.0");
        let ua = UserAgent {
            name: Cow::Borrowed(&raw[..4]),
            version: Cow::Borrowed(&raw[5..]),
            source: Cow::Borrowed(&raw),
            ..Default::default()
        };
        let owned = ua.into_owned();
        drop(raw);
        assert_eq!(owned.name, "curl");
        assert_eq!(owned.version, "8.0");
        assert_eq!(owned.source, "curl/8.0");
    }
}
