use crate::fallback::best_match;
use crate::names;
use crate::properties::Properties;
use aho_corasick::AhoCorasick;

/// Condition under which a browser rule fires.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trigger {
    Present(&'static str),
    /// Present with a non-empty value.
    Valued(&'static str),
    Both(&'static str, &'static str),
}

impl Trigger {
    fn fires(&self, props: &Properties<'_>) -> bool {
        match *self {
            Self::Present(token) => props.exists(token),
            Self::Valued(token) => props.non_empty(token).is_some(),
            Self::Both(a, b) => props.exists(a) && props.exists(b),
        }
    }
}

/// How a rule decides the mobile/tablet flags.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Mobility {
    /// No opinion; the OS rule alone decides.
    Keep,
    Always,
    /// A `Mobile` or `Mobile Safari` token.
    Hinted,
    /// Gecko style: `Mobile` token for phones, `Tablet` token for tablets.
    Gecko,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Outcome {
    Named {
        name: &'static str,
        token: &'static str,
        mobility: Mobility,
        bot: bool,
    },
    /// Safari reports its marketing version in the `Version` token.
    Safari,
    /// Some other versioned token next to `Chrome` and `Safari`, e.g. a
    /// vendor browser built on Chromium. Falls through to the next rule
    /// when there is none.
    Leftover,
}

pub(crate) struct BrowserRule {
    pub trigger: Trigger,
    pub outcome: Outcome,
}

const fn named(trigger: Trigger, name: &'static str, token: &'static str, mobility: Mobility) -> BrowserRule {
    BrowserRule {
        trigger,
        outcome: Outcome::Named {
            name,
            token,
            mobility,
            bot: false,
        },
    }
}

/// Browser rules, highest priority first.
pub(crate) const BROWSER_RULES: &[BrowserRule] = &[
    BrowserRule {
        trigger: Trigger::Present("Googlebot"),
        outcome: Outcome::Named {
            name: names::GOOGLEBOT,
            token: "Googlebot",
            mobility: Mobility::Hinted,
            bot: true,
        },
    },
    named(Trigger::Valued("Opera Mini"), names::OPERA_MINI, "Opera Mini", Mobility::Always),
    named(Trigger::Valued("OPR"), names::OPERA, "OPR", Mobility::Hinted),
    named(Trigger::Valued("OPT"), names::OPERA_TOUCH, "OPT", Mobility::Hinted),
    named(Trigger::Valued("OPiOS"), names::OPERA, "OPiOS", Mobility::Hinted),
    named(Trigger::Valued("CriOS"), names::CHROME, "CriOS", Mobility::Hinted),
    named(Trigger::Valued("FxiOS"), names::FIREFOX, "FxiOS", Mobility::Hinted),
    named(Trigger::Valued("Firefox"), names::FIREFOX, "Firefox", Mobility::Gecko),
    named(Trigger::Valued("Vivaldi"), names::VIVALDI, "Vivaldi", Mobility::Keep),
    named(Trigger::Present("MSIE"), names::INTERNET_EXPLORER, "MSIE", Mobility::Keep),
    named(Trigger::Valued("Edge"), names::EDGE, "Edge", Mobility::Hinted),
    named(Trigger::Valued("EdgA"), names::EDGE, "EdgA", Mobility::Hinted),
    named(Trigger::Valued("bingbot"), names::BINGBOT, "bingbot", Mobility::Hinted),
    named(Trigger::Valued("SamsungBrowser"), names::SAMSUNG_BROWSER, "SamsungBrowser", Mobility::Hinted),
    BrowserRule {
        trigger: Trigger::Both("Chrome", "Safari"),
        outcome: Outcome::Leftover,
    },
    named(Trigger::Present("Chrome"), names::CHROME, "Chrome", Mobility::Hinted),
    BrowserRule {
        trigger: Trigger::Present("Safari"),
        outcome: Outcome::Safari,
    },
];

/// Browser part of a classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BrowserMatch<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub mobile: bool,
    pub tablet: bool,
    pub bot: bool,
}

impl Outcome {
    fn resolve<'a>(&self, props: &Properties<'a>) -> Option<BrowserMatch<'a>> {
        match *self {
            Self::Named {
                name,
                token,
                mobility,
                bot,
            } => {
                let (mobile, tablet) = match mobility {
                    Mobility::Keep => (false, false),
                    Mobility::Always => (true, false),
                    Mobility::Hinted => (props.has_mobile_hint(), false),
                    Mobility::Gecko => (props.exists("Mobile"), props.exists("Tablet")),
                };
                Some(BrowserMatch {
                    name,
                    version: props.value(token),
                    mobile,
                    tablet,
                    bot,
                })
            }
            Self::Safari => Some(BrowserMatch {
                name: names::SAFARI,
                version: props.get("Version").unwrap_or_else(|| props.value("Safari")),
                mobile: props.has_mobile_hint(),
                ..Default::default()
            }),
            Self::Leftover => best_match(props, true).map(|(name, version)| BrowserMatch {
                name,
                version,
                ..Default::default()
            }),
        }
    }
}

/// Identify the browser from `props`.
///
/// `os` is the already classified OS name and `source` the raw input,
/// reported as the name when nothing else can be. `bot_markers` flags
/// fallback names that look like crawlers.
pub(crate) fn classify<'a>(
    props: &Properties<'a>,
    os: &str,
    source: &'a str,
    bot_markers: &AhoCorasick,
) -> BrowserMatch<'a> {
    let mut fall_through = false;
    for (idx, rule) in BROWSER_RULES.iter().enumerate() {
        if !fall_through && !rule.trigger.fires(props) {
            continue;
        }
        match rule.outcome.resolve(props) {
            Some(m) => {
                tracing::trace!(rule = idx, name = m.name, "browser rule matched");
                return m;
            }
            None => fall_through = true,
        }
    }

    unmatched(props, os, source, bot_markers)
}

fn unmatched<'a>(props: &Properties<'a>, os: &str, source: &'a str, bot_markers: &AhoCorasick) -> BrowserMatch<'a> {
    if os == names::ANDROID {
        if let Some(version) = props.non_empty("Version") {
            return BrowserMatch {
                name: names::ANDROID_BROWSER,
                version,
                mobile: true,
                ..Default::default()
            };
        }
    }

    let (name, version) = best_match(props, false).unwrap_or_else(|| {
        tracing::debug!(ua = source, "no browser token found, reporting raw user agent");
        (source, "")
    });
    BrowserMatch {
        name,
        version,
        mobile: props.has_mobile_hint(),
        tablet: false,
        bot: bot_markers.is_match(name),
    }
}
