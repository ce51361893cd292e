//! Projection of catalog records into preview cards and detail views.

use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::endpoint::CatalogEndpoint;
use crate::query::search_url;

/// A labelled header value (`Title`, `Dated`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPair {
    pub name: String,
    pub value: Option<String>,
}

/// A fact that triggers a new filtered search when followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactLink {
    /// Fact name as displayed, e.g. `Person` or `Culture`.
    pub field: String,
    pub value: String,
    pub url: String,
}

impl FactLink {
    /// Query label shown after following this link.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} & {}", self.field, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FactContent {
    Text { text: String },
    Search(FactLink),
    Mail { address: String, href: String },
}

impl FactContent {
    /// Text shown for the fact regardless of its kind.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Search(link) => &link.value,
            Self::Mail { address, .. } => address,
        }
    }

    #[must_use]
    pub const fn as_link(&self) -> Option<&FactLink> {
        match self {
            Self::Search(link) => Some(link),
            _ => None,
        }
    }
}

/// One labelled row of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactRow {
    pub title: String,
    pub content: FactContent,
}

/// Everything the detail view shows for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordProjection {
    pub header_fields: Vec<FieldPair>,
    pub fact_rows: Vec<FactRow>,
    pub images: Vec<String>,
}

impl RecordProjection {
    /// Followable search links in row order.
    pub fn links(&self) -> impl Iterator<Item = &FactLink> {
        self.fact_rows.iter().filter_map(|row| row.content.as_link())
    }
}

/// A result-list card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub image: String,
    pub heading: String,
    pub description: String,
}

/// How a fact row is rendered.
#[derive(Clone, Copy)]
enum FactKind {
    Plain,
    Searchable,
    Contact,
}

/// Heading for a record: the title, the parenthesised object number when the
/// title is missing, or both when the title is the literal `Untitled`.
#[must_use]
pub fn display_title(record: &CatalogRecord) -> String {
    let number = format!("({})", record.objectnumber.as_deref().unwrap_or_default());
    match record.title.as_deref() {
        None => number,
        Some("Untitled") => format!("Untitled {number}"),
        Some(title) => title.to_owned(),
    }
}

fn truthy(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn fact_row(endpoint: &CatalogEndpoint, name: &str, value: &str, kind: FactKind) -> FactRow {
    let content = match kind {
        FactKind::Plain => FactContent::Text { text: value.to_owned() },
        FactKind::Searchable => FactContent::Search(FactLink {
            field: name.to_owned(),
            value: value.to_owned(),
            url: search_url(endpoint, name, value),
        }),
        FactKind::Contact => {
            FactContent::Mail { address: value.to_owned(), href: format!("mailto:{value}") }
        },
    };
    FactRow { title: name.to_owned(), content }
}

/// Build the detail view of a record.
#[must_use]
pub fn project_record(endpoint: &CatalogEndpoint, record: &CatalogRecord) -> RecordProjection {
    let header_fields = vec![
        FieldPair { name: "Title".to_owned(), value: Some(display_title(record)) },
        FieldPair { name: "Dated".to_owned(), value: record.dated.clone() },
    ];

    let before_people = [
        ("Description", &record.description, FactKind::Plain),
        ("Culture", &record.culture, FactKind::Searchable),
        ("Style", &record.style, FactKind::Plain),
        ("Technique", &record.technique, FactKind::Searchable),
        ("Medium", &record.medium, FactKind::Searchable),
        ("Dimensions", &record.dimensions, FactKind::Plain),
    ];
    let after_people = [
        ("Department", &record.department, FactKind::Plain),
        ("Division", &record.division, FactKind::Plain),
        ("Contact", &record.contact, FactKind::Contact),
        ("Credit", &record.creditline, FactKind::Plain),
    ];

    let mut fact_rows = Vec::new();
    for (name, value, kind) in before_people {
        if let Some(value) = truthy(value.as_ref()) {
            fact_rows.push(fact_row(endpoint, name, value, kind));
        }
    }
    for person in record.people.iter().flatten() {
        fact_rows.push(fact_row(endpoint, "Person", &person.displayname, FactKind::Searchable));
    }
    for (name, value, kind) in after_people {
        if let Some(value) = truthy(value.as_ref()) {
            fact_rows.push(fact_row(endpoint, name, value, kind));
        }
    }

    let images =
        record.images.iter().flatten().map(|image| image.baseimageurl.clone()).collect();

    RecordProjection { header_fields, fact_rows, images }
}

/// Build the result-list card of a record.
#[must_use]
pub fn project_preview(record: &CatalogRecord) -> PreviewCard {
    PreviewCard {
        image: record.primaryimageurl.clone().unwrap_or_default(),
        heading: display_title(record),
        description: record.description.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Image, Person};

    fn endpoint() -> CatalogEndpoint {
        CatalogEndpoint::new("https://h", "k")
    }

    fn titles(projection: &RecordProjection) -> Vec<&str> {
        projection.fact_rows.iter().map(|row| row.title.as_str()).collect()
    }

    #[test]
    fn test_null_title_uses_object_number() {
        let record = CatalogRecord {
            objectnumber: Some("1943.2".to_owned()),
            ..CatalogRecord::default()
        };
        let projection = project_record(&endpoint(), &record);
        assert_eq!(projection.header_fields[0].value.as_deref(), Some("(1943.2)"));
    }

    #[test]
    fn test_untitled_appends_object_number() {
        let record = CatalogRecord {
            title: Some("Untitled".to_owned()),
            objectnumber: Some("77.5".to_owned()),
            ..CatalogRecord::default()
        };
        assert_eq!(display_title(&record), "Untitled (77.5)");
    }

    #[test]
    fn test_regular_title_kept() {
        let record = CatalogRecord {
            title: Some("Water Lilies".to_owned()),
            objectnumber: Some("1.1".to_owned()),
            dated: Some("1907".to_owned()),
            ..CatalogRecord::default()
        };
        let projection = project_record(&endpoint(), &record);
        assert_eq!(
            projection.header_fields,
            vec![
                FieldPair { name: "Title".to_owned(), value: Some("Water Lilies".to_owned()) },
                FieldPair { name: "Dated".to_owned(), value: Some("1907".to_owned()) },
            ]
        );
    }

    #[test]
    fn test_one_person_row_per_person() {
        let record = CatalogRecord {
            people: Some(vec![
                Person { displayname: "A".to_owned() },
                Person { displayname: "B".to_owned() },
            ]),
            ..CatalogRecord::default()
        };
        let projection = project_record(&endpoint(), &record);
        assert_eq!(titles(&projection), vec!["Person", "Person"]);

        let links: Vec<_> = projection.links().collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].value, "A");
        assert_eq!(links[0].url, "https://h/object?apikey=k&person=A");
        assert_eq!(links[1].value, "B");
        assert_eq!(links[1].url, "https://h/object?apikey=k&person=B");
    }

    #[test]
    fn test_empty_values_are_omitted_and_order_fixed() {
        let record = CatalogRecord {
            description: Some(String::new()),
            culture: Some("Japanese".to_owned()),
            style: None,
            technique: Some("Woodblock".to_owned()),
            medium: Some("Ink and color on paper".to_owned()),
            dimensions: Some("25 x 37 cm".to_owned()),
            people: Some(vec![Person { displayname: "Hokusai".to_owned() }]),
            department: Some("Asian Art".to_owned()),
            division: Some("Asian and Mediterranean Art".to_owned()),
            contact: Some("am_asian@harvard.edu".to_owned()),
            creditline: Some("Gift of X".to_owned()),
            ..CatalogRecord::default()
        };
        let projection = project_record(&endpoint(), &record);
        assert_eq!(
            titles(&projection),
            vec![
                "Culture",
                "Technique",
                "Medium",
                "Dimensions",
                "Person",
                "Department",
                "Division",
                "Contact",
                "Credit"
            ]
        );
    }

    #[test]
    fn test_field_rendering_rules() {
        let record = CatalogRecord {
            culture: Some("Dutch".to_owned()),
            style: Some("Baroque".to_owned()),
            contact: Some("info@museum.org".to_owned()),
            ..CatalogRecord::default()
        };
        let projection = project_record(&endpoint(), &record);

        assert_eq!(
            projection.fact_rows[0].content,
            FactContent::Search(FactLink {
                field: "Culture".to_owned(),
                value: "Dutch".to_owned(),
                url: "https://h/object?apikey=k&culture=Dutch".to_owned(),
            })
        );
        assert_eq!(projection.fact_rows[1].content, FactContent::Text { text: "Baroque".to_owned() });
        assert_eq!(
            projection.fact_rows[2].content,
            FactContent::Mail {
                address: "info@museum.org".to_owned(),
                href: "mailto:info@museum.org".to_owned()
            }
        );
        assert_eq!(projection.links().count(), 1);
    }

    #[test]
    fn test_images_in_source_order() {
        let record = CatalogRecord {
            images: Some(vec![
                Image { baseimageurl: "https://img/1".to_owned() },
                Image { baseimageurl: "https://img/2".to_owned() },
            ]),
            ..CatalogRecord::default()
        };
        let projection = project_record(&endpoint(), &record);
        assert_eq!(projection.images, vec!["https://img/1", "https://img/2"]);
        assert!(project_record(&endpoint(), &CatalogRecord::default()).images.is_empty());
    }

    #[test]
    fn test_preview_card_defaults() {
        let record = CatalogRecord {
            title: Some("Untitled".to_owned()),
            objectnumber: Some("3.3".to_owned()),
            ..CatalogRecord::default()
        };
        assert_eq!(
            project_preview(&record),
            PreviewCard {
                image: String::new(),
                heading: "Untitled (3.3)".to_owned(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_fact_link_label() {
        let link = FactLink {
            field: "Medium".to_owned(),
            value: "Oil on canvas".to_owned(),
            url: String::new(),
        };
        assert_eq!(link.label(), "Medium & Oil on canvas");
    }
}
