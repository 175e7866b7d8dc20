//! Query-string construction for the upstream API.

use reqwest::Url;

/// Ordered set of query parameters.
///
/// Keys keep their first-insertion position; setting a key again replaces
/// its value in place. Merging several sources in sequence therefore gives
/// last-source-wins semantics without reshuffling the final query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set `key` when a value is present; `None` leaves the params untouched.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<String>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append `params` to `base` as a percent-encoded query string.
///
/// Entries with an empty value are dropped entirely rather than encoded as
/// `key=`. When nothing survives the filter, the base URL is returned
/// unchanged, without a trailing `?`.
pub fn build_url(base: &Url, params: &QueryParams) -> Url {
    let mut url = base.clone();

    let mut pairs = params.iter().filter(|(_, v)| !v.is_empty()).peekable();
    if pairs.peek().is_none() {
        return url;
    }

    {
        let mut serializer = url.query_pairs_mut();
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
    }

    url
}
