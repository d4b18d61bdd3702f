mod browser;
mod classifier;
mod config;
mod error;
mod fallback;
mod helpers;
pub mod names;
mod os;
mod properties;
mod tokenizer;
mod types;
mod version;

pub use classifier::Classifier;
pub use config::Config;
pub use error::{Error, Result};
pub use properties::Properties;
pub use types::*;

use std::sync::OnceLock;

static DEFAULT_CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// Classify `ua` with a shared [`Classifier`] using the built-in tables.
pub fn parse(ua: &str) -> UserAgent<'_> {
    DEFAULT_CLASSIFIER
        .get_or_init(|| Classifier::new().expect("built-in tables always compile"))
        .parse(ua)
}
