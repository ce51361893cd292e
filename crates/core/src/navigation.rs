//! Next/previous navigation derived from a paged response.

use serde::Serialize;

use crate::catalog::ResponseEnvelope;

/// Which way to page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// Pagination controls. `None` means the control is disabled.
///
/// Always rebuilt from the latest envelope, never merged with a previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
}

impl NavigationState {
    #[must_use]
    pub fn url(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Next => self.next_url.as_deref(),
            Direction::Previous => self.prev_url.as_deref(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self, direction: Direction) -> bool {
        self.url(direction).is_some()
    }
}

fn cursor(value: Option<&String>) -> Option<String> {
    value.filter(|url| !url.is_empty()).cloned()
}

/// Map an envelope's `info.next`/`info.prev` cursors to navigation controls.
#[must_use]
pub fn derive_navigation(envelope: &ResponseEnvelope) -> NavigationState {
    NavigationState {
        next_url: cursor(envelope.info.next.as_ref()),
        prev_url: cursor(envelope.info.prev.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PageInfo;

    fn envelope(next: Option<&str>, prev: Option<&str>) -> ResponseEnvelope {
        ResponseEnvelope {
            info: PageInfo {
                next: next.map(str::to_owned),
                prev: prev.map(str::to_owned),
                ..PageInfo::default()
            },
            records: Vec::new(),
        }
    }

    #[test]
    fn test_absent_cursors_disable_controls() {
        let nav = derive_navigation(&envelope(None, None));
        assert_eq!(nav, NavigationState::default());
        assert!(!nav.is_enabled(Direction::Next));
        assert!(!nav.is_enabled(Direction::Previous));
    }

    #[test]
    fn test_empty_cursor_is_disabled() {
        let nav = derive_navigation(&envelope(Some(""), Some("")));
        assert_eq!(nav.next_url, None);
        assert_eq!(nav.prev_url, None);
    }

    #[test]
    fn test_cursor_is_copied_verbatim() {
        let next = "https://h/object?apikey=k&keyword=a b&page=3";
        let nav = derive_navigation(&envelope(Some(next), Some("https://h/object?page=1")));
        assert_eq!(nav.url(Direction::Next), Some(next));
        assert_eq!(nav.url(Direction::Previous), Some("https://h/object?page=1"));
    }

    #[test]
    fn test_first_page_has_only_next() {
        let nav = derive_navigation(&envelope(Some("https://h/object?page=2"), None));
        assert!(nav.is_enabled(Direction::Next));
        assert!(!nav.is_enabled(Direction::Previous));
    }
}
