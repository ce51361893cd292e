//! Catalog endpoint: base URL plus the static credential parameter.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::constants::CREDENTIAL_PARAM;

/// Characters left untouched when encoding a whole URL.
///
/// Alphanumerics, the URI mark characters and the reserved characters all pass
/// through; everything else (spaces, `%`, non-ASCII) is percent-encoded.
const URI_PRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encode a complete URL, keeping its structural characters intact.
///
/// Query values are not escaped individually: an `&` inside a keyword still
/// splits the query string on the remote side.
#[must_use]
pub fn encode_uri(raw: &str) -> String {
    utf8_percent_encode(raw, URI_PRESERVED).to_string()
}

/// Base URL and API key for the remote catalog.
#[derive(Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for CatalogEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEndpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

impl CatalogEndpoint {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, api_key: api_key.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential query parameter, e.g. `apikey=abc123`.
    #[must_use]
    pub fn credential(&self) -> String {
        format!("{CREDENTIAL_PARAM}={}", self.api_key)
    }

    /// Unencoded `{base}/{resource}?{credential}`; callers append further
    /// parameters with `&`.
    #[must_use]
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{resource}?{}", self.base_url, self.credential())
    }
}
