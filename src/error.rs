/// Errors raised while building a [`Classifier`](crate::Classifier).
///
/// Classification itself never fails; these only surface from config
/// loading and table compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_errors_convert() {
        let err: Error = serde_yaml::from_str::<Vec<String>>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::YAML(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
