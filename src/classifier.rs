use super::browser;
use super::config::Config;
use super::error::Result;
use super::helpers::version_regex;
use super::names;
use super::os;
use super::properties::Properties;
use super::tokenizer::Tokenizer;
use super::types::UserAgent;
use aho_corasick::AhoCorasick;
use fancy_regex::Regex;
use rayon::prelude::*;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

/// Names that are bots even though no rule flags them.
const BOT_NAMES: &[&str] = &[names::TWITTERBOT, names::FACEBOOK_EXTERNAL_HIT];

/// Substrings (any case) marking an otherwise unrecognized name as a bot.
const BOT_MARKERS: &[&str] = &["bot"];

/// User-Agent classifier.
///
/// Holds the immutable lookup tables; build it once and share it. Parsing
/// is a pure function of the input and never fails.
pub struct Classifier {
    tokenizer: Tokenizer,
    version_re: Regex,
    bot_markers: AhoCorasick,
    bot_names: HashSet<String>,
}

impl Classifier {
    /// Classifier with the built-in tables only.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Classifier with the built-in tables extended by `config`.
    pub fn with_config(config: Config) -> Result<Self> {
        let bot_markers = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(
                BOT_MARKERS
                    .iter()
                    .map(|s| s.to_string())
                    .chain(config.extra_bot_markers),
            )?;
        let bot_names: HashSet<String> = BOT_NAMES
            .iter()
            .map(|s| s.to_string())
            .chain(config.extra_bot_names)
            .collect();
        let tokenizer = Tokenizer::new(&config.extra_ignored_tokens);

        tracing::debug!(
            ignored_tokens = tokenizer.ignored_len(),
            bot_names = bot_names.len(),
            bot_markers = bot_markers.patterns_len(),
            "user agent classifier built"
        );

        Ok(Self {
            tokenizer,
            version_re: version_regex()?,
            bot_markers,
            bot_names,
        })
    }

    /// Load a YAML [`Config`] from `path` and build the classifier.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(Config::from_yaml_file(path)?)
    }

    /// Split `ua` into its name/value tokens.
    pub fn tokenize<'a>(&self, ua: &'a str) -> Properties<'a> {
        self.tokenizer.tokenize(ua)
    }

    /// Classify a User-Agent string.
    ///
    /// Unrecognized input yields empty OS fields and the raw string as the
    /// browser name.
    pub fn parse<'a>(&self, ua: &'a str) -> UserAgent<'a> {
        let mut props = self.tokenize(ua);
        tracing::trace!(tokens = props.len(), "tokenized user agent");

        let url = props.take_url();
        if let Some(url) = url {
            tracing::trace!(url, "user agent embeds a url");
        }

        let os = os::classify(&props, &self.version_re);
        let browser = browser::classify(&props, os.name, ua, &self.bot_markers);

        let tablet = os.tablet || browser.tablet;
        let mobile = (os.mobile || browser.mobile) && !tablet;
        let bot = browser.bot || url.is_some() || self.bot_names.contains(browser.name);

        UserAgent {
            name: Cow::Borrowed(browser.name),
            version: Cow::Borrowed(browser.version),
            os: Cow::Borrowed(os.name),
            os_version: os.version,
            device: Cow::Borrowed(os.device),
            mobile,
            tablet,
            desktop: os.desktop,
            bot,
            url: Cow::Borrowed(url.unwrap_or("")),
            source: Cow::Borrowed(ua),
        }
    }

    /// Classify many User-Agent strings in parallel, preserving input order.
    pub fn parse_batch<'a>(&self, uas: &[&'a str]) -> Vec<UserAgent<'a>> {
        uas.par_iter().map(|&ua| self.parse(ua)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new().unwrap()
    }

    #[test]
    fn empty_input_degrades_to_raw_name() {
        let ua = classifier().parse("");
        assert_eq!(ua, UserAgent::default());
    }

    #[test]
    fn url_forces_bot_and_is_not_a_token() {
        let c = classifier();
        let ua = c.parse("facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)");
        assert_eq!(ua.url, "http://www.facebook.com/externalhit_uatext.php");
        assert_eq!(ua.name, names::FACEBOOK_EXTERNAL_HIT);
        assert!(ua.bot);
    }

    #[test]
    fn known_bot_names_force_bot() {
        let ua = classifier().parse("facebookexternalhit/1.1");
        assert_eq!(ua.version, "1.1");
        assert!(ua.bot);
        assert!(ua.url.is_empty());
    }

    #[test]
    fn tablet_clears_mobile() {
        let ua = classifier().parse(
            "Mozilla/5.0 (iPad; CPU OS 13_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/87.0.4280.77 Mobile/15E148 Safari/604.1",
        );
        assert_eq!(ua.os, names::IOS);
        assert_eq!(ua.os_version, "13.3");
        assert_eq!(ua.name, names::CHROME);
        assert!(ua.tablet);
        assert!(!ua.mobile);
    }

    #[test]
    fn iphone_stays_mobile_without_mobile_token() {
        let ua = classifier().parse("Mozilla/5.0 (iPhone; CPU iPhone OS 14_2 like Mac OS X) Version/14.0 Safari/604.1");
        assert_eq!(ua.name, names::SAFARI);
        assert_eq!(ua.os_version, "14.2");
        assert_eq!(ua.device, "iPhone");
        assert!(ua.mobile);
    }

    #[test]
    fn browser_rule_never_clears_os_tablet() {
        let ua = classifier().parse("(Linux; Android 9; Lenovo Tablet Build/PKQ1) Gecko/1 Firefox/68.0");
        assert_eq!(ua.name, names::FIREFOX);
        assert_eq!(ua.device, "Lenovo Tablet");
        assert!(ua.tablet);
        assert!(!ua.mobile);
    }

    #[test]
    fn config_extends_tables() {
        let c = Classifier::with_config(Config {
            extra_ignored_tokens: vec!["Win64".into()],
            extra_bot_names: vec!["LinkPreview".into()],
            extra_bot_markers: vec!["crawler".into()],
        })
        .unwrap();

        assert!(c.parse("LinkPreview/2.0").bot);
        assert!(c.parse("SiteCrawler/1.0").bot);
        assert!(!c.tokenize("(Windows NT 10.0; Win64)").exists("Win64"));
        assert!(c.parse("Twitterbot/1.0").bot);
        assert!(!classifier().parse("SiteCrawler/1.0").bot);
    }

    #[test]
    fn batch_matches_single_parse() {
        let c = classifier();
        let inputs = [
            "curl/7.64.1",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
            "",
        ];
        let batch = c.parse_batch(&inputs);
        assert_eq!(batch.len(), inputs.len());
        for (ua, got) in inputs.iter().zip(&batch) {
            assert_eq!(&c.parse(ua), got);
        }
    }

    #[test]
    fn classifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
