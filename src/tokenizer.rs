use crate::properties::Properties;
use crate::version::split_version;
use std::collections::HashSet;

/// Noise tokens dropped during tokenization.
pub(crate) const IGNORED_TOKENS: &[&str] = &["KHTML, like Gecko", "U", "compatible", "Mozilla", "WOW64"];

/// Splits a raw User-Agent into name/value [`Properties`].
///
/// Single left-to-right byte scan. Every delimiter is ASCII, so token
/// boundaries always fall on char boundaries and tokens are borrowed
/// straight from the input.
pub(crate) struct Tokenizer {
    ignored: HashSet<String>,
}

/// In-progress token: `[start, split)` is the name, `(split, end)` the value.
#[derive(Default)]
struct Pending {
    start: usize,
    split: Option<usize>,
    in_url: bool,
}

impl Tokenizer {
    pub fn new(extra_ignored: &[String]) -> Self {
        let ignored = IGNORED_TOKENS
            .iter()
            .map(|s| s.to_string())
            .chain(extra_ignored.iter().cloned())
            .collect();
        Self { ignored }
    }

    pub fn ignored_len(&self) -> usize {
        self.ignored.len()
    }

    pub fn tokenize<'a>(&self, ua: &'a str) -> Properties<'a> {
        let bytes = ua.as_bytes();
        let mut props = Properties::default();
        let mut pending = Pending::default();
        let mut in_parens = false;

        for (i, &c) in bytes.iter().enumerate() {
            match c {
                b')' => {
                    self.flush(ua, &mut pending, i, &mut props);
                    in_parens = false;
                }
                b';' if in_parens => self.flush(ua, &mut pending, i, &mut props),
                b'(' => {
                    self.flush(ua, &mut pending, i, &mut props);
                    in_parens = true;
                }
                b' ' if pending.split.is_some() => self.flush(ua, &mut pending, i, &mut props),
                _ if pending.split.is_some() => {}
                b'/' if !pending.in_url => {
                    let name = &ua[pending.start..i];
                    if bytes.get(i + 1) == Some(&b'/')
                        && (name.ends_with("http:") || name.ends_with("https:"))
                    {
                        pending.in_url = true;
                    } else {
                        pending.split = Some(i);
                    }
                }
                _ => {}
            }
        }
        self.flush(ua, &mut pending, bytes.len(), &mut props);

        props
    }

    /// Emit the pending token ending at `end` (exclusive) and start the
    /// next one just past the delimiter.
    fn flush<'a>(&self, ua: &'a str, pending: &mut Pending, end: usize, props: &mut Properties<'a>) {
        let (name, value) = match pending.split {
            Some(split) => (&ua[pending.start..split], &ua[split + 1..end]),
            None => (&ua[pending.start..end], ""),
        };
        let in_url = pending.in_url;
        *pending = Pending {
            start: end + 1,
            ..Default::default()
        };

        let name = name.trim();
        if name.is_empty() || self.ignored.contains(name) {
            return;
        }
        let name = if in_url {
            name.strip_prefix('+').unwrap_or(name)
        } else {
            name
        };

        if value.is_empty() {
            let (name, version) = split_version(name);
            props.insert(name, version);
        } else {
            props.insert(name, value.trim());
        }
    }
}
