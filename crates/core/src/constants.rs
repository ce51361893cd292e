//! Shared constants for artsearch.

/// Default catalog API host.
pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

/// Name of the query parameter carrying the API credential.
pub const CREDENTIAL_PARAM: &str = "apikey";

/// Page size requested for reference lists (classifications, centuries).
pub const REFERENCE_PAGE_SIZE: usize = 100;

/// Filter value meaning "no filter". Sent to the remote service verbatim.
pub const ANY_FILTER: &str = "any";

/// Separator used when joining query label segments.
pub const LABEL_SEPARATOR: &str = " & ";

/// Default HTTP timeout for catalog requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory name used under the platform cache dir.
pub const CACHE_DIR_NAME: &str = "artsearch";
