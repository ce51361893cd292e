//! Plain-text rendering of previews, detail views and reference lists.

use artsearch_client::ReferenceLists;
use artsearch_core::{
    BrowseState, Direction, FactContent, NavigationState, RecordProjection, ReferenceKind,
};

pub(crate) fn query_label(label: &str) -> String {
    if label.is_empty() { "Results".to_owned() } else { format!("Results for: {label}") }
}

fn control(navigation: &NavigationState, direction: Direction) -> String {
    let name = match direction {
        Direction::Next => "next",
        Direction::Previous => "prev",
    };
    if navigation.is_enabled(direction) { format!("[{name}]") } else { format!("({name} disabled)") }
}

pub(crate) fn previews(state: &BrowseState) -> String {
    let mut out = query_label(state.query_label());
    if let Some(total) = state.total_records() {
        out.push_str(&format!(" ({total} total)"));
    }
    out.push('\n');

    if state.records().is_empty() {
        out.push_str("  no records\n");
    }
    for (index, card) in state.previews().iter().enumerate() {
        out.push_str(&format!("{index:>3}. {}\n", card.heading));
        if !card.description.is_empty() {
            out.push_str(&format!("     {}\n", card.description));
        }
        if !card.image.is_empty() {
            out.push_str(&format!("     {}\n", card.image));
        }
    }

    let navigation = state.navigation();
    out.push_str(&format!(
        "{} {}\n",
        control(navigation, Direction::Previous),
        control(navigation, Direction::Next)
    ));
    out
}

pub(crate) fn detail(projection: &RecordProjection) -> String {
    let mut out = String::new();
    for field in &projection.header_fields {
        if let Some(value) = &field.value {
            out.push_str(&format!("{}: {value}\n", field.name));
        }
    }

    let mut link_index = 0;
    for row in &projection.fact_rows {
        let marker = match &row.content {
            FactContent::Search(_) => {
                let marker = format!(" [{link_index}]");
                link_index += 1;
                marker
            },
            FactContent::Mail { href, .. } => format!(" <{href}>"),
            FactContent::Text { .. } => String::new(),
        };
        out.push_str(&format!("  {:<12} {}{marker}\n", row.title, row.content.display_text()));
    }

    for image in &projection.images {
        out.push_str(&format!("  image: {image}\n"));
    }
    out
}

pub(crate) fn reference_lists(lists: &ReferenceLists) -> String {
    let mut out = String::new();
    for kind in ReferenceKind::ALL {
        match lists.get(kind) {
            Some(list) => {
                out.push_str(&format!("{kind} ({})\n", list.len()));
                for entry in list {
                    out.push_str(&format!("  {}\n", entry.name));
                }
            },
            None => out.push_str(&format!("{kind}: unavailable\n")),
        }
    }
    out
}
