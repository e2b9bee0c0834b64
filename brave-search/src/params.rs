//! Query-parameter construction for the web search endpoint
//!
//! Pure mapping from [`SearchOptions`] to the API's parameter schema.
//! Optional flags are omitted entirely when unset: the API keys some
//! behaviour off parameter presence, not value.

use crate::types::SearchOptions;

/// Ordered query parameters for one request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestParameters {
    pairs: Vec<(&'static str, String)>,
}

impl RequestParameters {
    fn push(&mut self, name: &'static str, value: impl ToString) {
        self.pairs.push((name, value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Parameter names, in request order
    pub fn names(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Borrowed pairs in the shape `reqwest::RequestBuilder::query` expects
    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Build the query parameters for `opts`
pub fn build_params(opts: &SearchOptions) -> RequestParameters {
    let mut params = RequestParameters::default();

    params.push("q", &opts.query);
    params.push("count", opts.count);
    params.push("offset", opts.offset);
    params.push("country", &opts.country);
    params.push("search_lang", &opts.lang);
    params.push("safesearch", opts.safesearch.as_str());
    params.push("spellcheck", u8::from(opts.spellcheck));

    if let Some(freshness) = opts.freshness {
        params.push("freshness", freshness.as_str());
    }
    if opts.extra_snippets {
        params.push("extra_snippets", 1);
    }
    if opts.summary {
        params.push("summary", 1);
    }

    params
}
