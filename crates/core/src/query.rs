//! Turns filter selections into request URLs and query labels.

use serde::{Deserialize, Serialize};

use crate::constants::{ANY_FILTER, LABEL_SEPARATOR};
use crate::endpoint::{CatalogEndpoint, encode_uri};

/// Current filter state of the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub keyword: String,
    pub classification: String,
    pub century: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            classification: ANY_FILTER.to_owned(),
            century: ANY_FILTER.to_owned(),
        }
    }
}

impl FilterSelection {
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    #[must_use]
    pub fn classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = classification.into();
        self
    }

    #[must_use]
    pub fn century(mut self, century: impl Into<String>) -> Self {
        self.century = century.into();
        self
    }
}

/// A request ready to be fetched, plus the label describing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub url: String,
    pub label: String,
}

/// Build the object-search URL and its display label.
///
/// `"any"` filter values are sent as-is. The label joins the active segments
/// in the order keyword, classification, century and is empty when nothing is
/// selected.
#[must_use]
pub fn build_search(endpoint: &CatalogEndpoint, selection: &FilterSelection) -> SearchRequest {
    let url = encode_uri(&format!(
        "{}&classification={}&century={}&keyword={}",
        endpoint.resource_url("object"),
        selection.classification,
        selection.century,
        selection.keyword,
    ));

    let mut label = String::new();
    if !selection.keyword.is_empty() {
        label.push_str(&selection.keyword);
    }
    for filter in [&selection.classification, &selection.century] {
        if filter != ANY_FILTER {
            if !label.is_empty() {
                label.push_str(LABEL_SEPARATOR);
            }
            label.push_str(filter);
        }
    }

    SearchRequest { url, label }
}

/// Single-field search link, e.g. `culture=Chinese` or `person=Rembrandt`.
#[must_use]
pub fn search_url(endpoint: &CatalogEndpoint, field_name: &str, value: &str) -> String {
    encode_uri(&format!(
        "{}&{}={value}",
        endpoint.resource_url("object"),
        field_name.to_lowercase()
    ))
}

/// The unfiltered object listing.
#[must_use]
pub fn initial_objects_url(endpoint: &CatalogEndpoint) -> String {
    encode_uri(&endpoint.resource_url("object"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> CatalogEndpoint {
        CatalogEndpoint::new("https://api.example.org", "key123")
    }

    #[test]
    fn test_no_filters_gives_empty_label() {
        let request = build_search(&endpoint(), &FilterSelection::default());
        assert_eq!(request.label, "");
        assert_eq!(
            request.url,
            "https://api.example.org/object?apikey=key123&classification=any&century=any&keyword="
        );
    }

    #[test]
    fn test_keyword_only() {
        let request = build_search(&endpoint(), &FilterSelection::default().keyword("vase"));
        assert_eq!(request.label, "vase");
        assert!(request.url.ends_with("&keyword=vase"));
    }

    #[test]
    fn test_all_segments_in_order() {
        let selection = FilterSelection::default()
            .keyword("cat")
            .classification("Prints")
            .century("19th century");
        let request = build_search(&endpoint(), &selection);
        assert_eq!(request.label, "cat & Prints & 19th century");
        assert_eq!(
            request.url,
            "https://api.example.org/object?apikey=key123&classification=Prints&century=19th%20century&keyword=cat"
        );
    }

    #[test]
    fn test_label_never_starts_with_separator() {
        let selections = [
            FilterSelection::default().classification("Prints"),
            FilterSelection::default().century("20th century"),
            FilterSelection::default().classification("Prints").century("20th century"),
            FilterSelection::default().keyword("x").century("20th century"),
        ];
        for selection in &selections {
            let request = build_search(&endpoint(), selection);
            assert!(!request.label.starts_with(LABEL_SEPARATOR), "{}", request.label);
            assert!(request.label.split(LABEL_SEPARATOR).count() <= 3);
        }
        assert_eq!(build_search(&endpoint(), &selections[2]).label, "Prints & 20th century");
    }

    #[test]
    fn test_any_is_passed_through() {
        let request = build_search(&endpoint(), &FilterSelection::default().keyword("bowl"));
        assert!(request.url.contains("classification=any"));
        assert!(request.url.contains("century=any"));
    }

    #[test]
    fn test_search_url_lowercases_field() {
        assert_eq!(
            search_url(&endpoint(), "Person", "Katsushika Hokusai"),
            "https://api.example.org/object?apikey=key123&person=Katsushika%20Hokusai"
        );
        assert_eq!(
            search_url(&endpoint(), "Medium", "Ink on paper"),
            "https://api.example.org/object?apikey=key123&medium=Ink%20on%20paper"
        );
    }

    #[test]
    fn test_initial_objects_url() {
        assert_eq!(initial_objects_url(&endpoint()), "https://api.example.org/object?apikey=key123");
    }
}
