//! Reference lists used to populate filter choices.

use serde::{Deserialize, Serialize};

use crate::CatalogEndpoint;
use crate::constants::REFERENCE_PAGE_SIZE;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Classifications,
    Centuries,
}

impl ReferenceKind {
    pub const ALL: [Self; 2] = [Self::Classifications, Self::Centuries];

    /// Key the list is persisted under.
    #[must_use]
    pub const fn store_key(self) -> &'static str {
        match self {
            Self::Classifications => "classifications",
            Self::Centuries => "centuries",
        }
    }

    /// Remote resource path segment.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Classifications => "classification",
            Self::Centuries => "century",
        }
    }

    /// Sort order requested from the remote service.
    #[must_use]
    pub const fn sort_order(self) -> &'static str {
        match self {
            Self::Classifications => "name",
            Self::Centuries => "temporalorder",
        }
    }

    /// Full request URL for this list.
    #[must_use]
    pub fn url(self, endpoint: &CatalogEndpoint) -> String {
        format!(
            "{}&size={REFERENCE_PAGE_SIZE}&sort={}",
            endpoint.resource_url(self.resource()),
            self.sort_order()
        )
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.store_key())
    }
}

impl std::str::FromStr for ReferenceKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classifications" | "classification" => Ok(Self::Classifications),
            "centuries" | "century" => Ok(Self::Centuries),
            _ => Err(CatalogError::InvalidInput(format!("Unknown reference list: {s}"))),
        }
    }
}

/// One entry of a reference list. Fields other than `name` are kept as-is so
/// the persisted value is the raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ReferenceEntry {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), extra: serde_json::Map::new() }
    }
}

pub type ReferenceList = Vec<ReferenceEntry>;

/// `{records}` wrapper returned by reference queries. Any `info` block is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceEnvelope {
    #[serde(default)]
    pub records: ReferenceList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_urls() {
        let endpoint = CatalogEndpoint::new("https://h", "k");
        assert_eq!(
            ReferenceKind::Centuries.url(&endpoint),
            "https://h/century?apikey=k&size=100&sort=temporalorder"
        );
        assert_eq!(
            ReferenceKind::Classifications.url(&endpoint),
            "https://h/classification?apikey=k&size=100&sort=name"
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("centuries".parse::<ReferenceKind>().unwrap(), ReferenceKind::Centuries);
        assert_eq!(
            "classification".parse::<ReferenceKind>().unwrap(),
            ReferenceKind::Classifications
        );
        assert!("cultures".parse::<ReferenceKind>().is_err());
    }

    #[test]
    fn test_entry_keeps_raw_fields() {
        let raw = serde_json::json!({"id": 37, "name": "19th century", "temporalorder": 19});
        let entry: ReferenceEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.name, "19th century");
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }
}
