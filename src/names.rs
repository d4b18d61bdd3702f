//! Canonical OS and browser names reported in a [`UserAgent`](crate::UserAgent).

pub const WINDOWS: &str = "Windows";
pub const WINDOWS_PHONE: &str = "Windows Phone";
pub const ANDROID: &str = "Android";
pub const MACOS: &str = "macOS";
pub const IOS: &str = "iOS";
pub const LINUX: &str = "Linux";

pub const OPERA: &str = "Opera";
pub const OPERA_MINI: &str = "Opera Mini";
pub const OPERA_TOUCH: &str = "Opera Touch";
pub const CHROME: &str = "Chrome";
pub const FIREFOX: &str = "Firefox";
pub const INTERNET_EXPLORER: &str = "Internet Explorer";
pub const SAFARI: &str = "Safari";
pub const EDGE: &str = "Edge";
pub const VIVALDI: &str = "Vivaldi";
pub const SAMSUNG_BROWSER: &str = "Samsung Browser";
pub const ANDROID_BROWSER: &str = "Android browser";
pub const GOOGLEBOT: &str = "Googlebot";
pub const BINGBOT: &str = "Bingbot";
pub const TWITTERBOT: &str = "Twitterbot";
pub const FACEBOOK_EXTERNAL_HIT: &str = "facebookexternalhit";
