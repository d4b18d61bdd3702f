use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Extra lookup-table entries layered on top of the built-in ones.
///
/// The built-in tables always apply; a config can only add to them.
///
/// ```yaml
/// extra_ignored_tokens: ["Win64"]
/// extra_bot_names: ["Slackbot-LinkExpanding 1.0"]
/// extra_bot_markers: ["crawler", "spider"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tokens dropped by the tokenizer, besides `Mozilla`, `compatible`, ...
    pub extra_ignored_tokens: Vec<String>,
    /// Browser names that always mark the agent as a bot.
    pub extra_bot_names: Vec<String>,
    /// Case-insensitive substrings that mark an otherwise unrecognized
    /// browser name as a bot, besides `bot`.
    pub extra_bot_markers: Vec<String>,
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let cfg = Config::from_yaml_str("extra_bot_markers: [crawler]").unwrap();
        assert_eq!(cfg.extra_bot_markers, vec!["crawler"]);
        assert!(cfg.extra_ignored_tokens.is_empty());
        assert!(cfg.extra_bot_names.is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            Config::from_yaml_str("extra_bot_names: 3"),
            Err(crate::Error::YAML(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            Config::from_yaml_file("does/not/exist.yml"),
            Err(crate::Error::IO(_))
        ));
    }
}
