use indexmap::IndexMap;

/// Token name → value mapping extracted from one User-Agent string.
///
/// Keys keep the position of their first occurrence; a repeated key takes
/// the later value. Every "first matching token" lookup follows that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Properties<'a> {
    tokens: IndexMap<&'a str, &'a str>,
}

impl<'a> Properties<'a> {
    pub(crate) fn insert(&mut self, name: &'a str, value: &'a str) {
        self.tokens.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.tokens.get(name).copied()
    }

    /// Value of `name`, or `""` when absent.
    pub fn value(&self, name: &str) -> &'a str {
        self.get(name).unwrap_or("")
    }

    /// Value of `name` only when present and non-empty.
    pub fn non_empty(&self, name: &str) -> Option<&'a str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn exists_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.exists(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.tokens.iter().map(|(k, v)| (*k, *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.keys().copied()
    }

    /// Remove and return the first token that is a bare `http(s)://` URL.
    pub(crate) fn take_url(&mut self) -> Option<&'a str> {
        let idx = self
            .tokens
            .keys()
            .position(|k| k.starts_with("http://") || k.starts_with("https://"))?;
        self.tokens.shift_remove_index(idx).map(|(k, _)| k)
    }

    /// Standard mobile signal: a `Mobile` or `Mobile Safari` token.
    pub(crate) fn has_mobile_hint(&self) -> bool {
        self.exists_any(&["Mobile", "Mobile Safari"])
    }
}
