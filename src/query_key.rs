use std::fmt;

use reqwest::Url;

use crate::error::{Error, Result};
use crate::types::PlayerQuery;

const NAME_PARAM: &str = "player";
const ID_PARAM: &str = "id";

/// Canonical identity of one outbound player lookup: the endpoint with
/// exactly one of `player=<name>` or `id=<id>` set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestIdentity(Url);

impl RequestIdentity {
    /// Builds the identity for `query` against `endpoint`.
    ///
    /// Works on a copy of the endpoint, so concurrent lookups never share a
    /// request target. A non-empty name takes precedence over the id; an empty
    /// name or an id of 0 counts as missing.
    pub fn build(endpoint: &Url, query: &PlayerQuery) -> Result<Self> {
        let (key, value) = match (query.name.as_deref(), query.id) {
            (Some(name), _) if !name.is_empty() => (NAME_PARAM, name.to_string()),
            (_, Some(id)) if id != 0 => (ID_PARAM, id.to_string()),
            _ => return Err(Error::MissingParameter),
        };

        let mut url = endpoint.clone();
        let kept: Vec<(String, String)> = endpoint
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(key, &value);

        Ok(Self(url))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RequestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
