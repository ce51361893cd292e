//! Wire types returned by the remote catalog.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single object record. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRecord {
    pub title: Option<String>,
    pub dated: Option<String>,
    pub description: Option<String>,
    pub culture: Option<String>,
    pub style: Option<String>,
    pub technique: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub people: Option<Vec<Person>>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub contact: Option<String>,
    pub creditline: Option<String>,
    pub images: Option<Vec<Image>>,
    pub primaryimageurl: Option<String>,
    pub objectnumber: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "null_as_default")]
    pub displayname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub baseimageurl: String,
}

/// Pagination block of a paged listing.
///
/// Only `next` and `prev` drive navigation; the counters are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub next: Option<String>,
    pub prev: Option<String>,
    pub totalrecords: Option<u64>,
    pub totalrecordsperquery: Option<u64>,
    pub pages: Option<u64>,
    pub page: Option<u64>,
}

/// `{info, records}` wrapper returned by object queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: PageInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<CatalogRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tolerates_nulls_and_unknown_fields() {
        let record: CatalogRecord = serde_json::from_value(serde_json::json!({
            "title": null,
            "objectnumber": "1943.2",
            "people": [{"displayname": "A", "role": "Artist"}, {"displayname": null}],
            "accessionyear": 1943,
            "images": null
        }))
        .unwrap();

        assert_eq!(record.title, None);
        assert_eq!(record.objectnumber.as_deref(), Some("1943.2"));
        let people = record.people.unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].displayname, "A");
        assert_eq!(people[1].displayname, "");
        assert_eq!(record.images, None);
    }

    #[test]
    fn test_envelope_with_missing_info() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"records": [{"title": "Vase"}]}"#).unwrap();
        assert_eq!(envelope.info, PageInfo::default());
        assert_eq!(envelope.records.len(), 1);
    }

    #[test]
    fn test_envelope_info_counters() {
        let envelope: ResponseEnvelope = serde_json::from_value(serde_json::json!({
            "info": {
                "totalrecordsperquery": 10,
                "totalrecords": 234,
                "pages": 24,
                "page": 2,
                "next": "https://h/object?page=3",
                "prev": "https://h/object?page=1"
            },
            "records": []
        }))
        .unwrap();
        assert_eq!(envelope.info.pages, Some(24));
        assert_eq!(envelope.info.next.as_deref(), Some("https://h/object?page=3"));
    }
}
