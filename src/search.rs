use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Announcement,
    Message,
    /// A dashboard page; `id` is its slug.
    Page,
}

/// Pages search can jump to: slug, title, description.
pub const PAGES: [(&str, &str, &str); 3] = [
    (
        "overview",
        "Dashboard",
        "Main dashboard with overview and quick access to all features",
    ),
    (
        "announcements",
        "Announcements",
        "Stay updated with the latest company announcements and important notices",
    ),
    (
        "chat",
        "Group Chat",
        "Industry discussions and real-time communication",
    ),
];

/// One hit of a dashboard search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub id: String,
    /// Announcement title, message sender or page title.
    pub title: String,
    pub content: String,
    /// Absent for page results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn normalize(query: &str) -> Option<String> {
    let needle = query.trim().to_lowercase();
    (!needle.is_empty()).then_some(needle)
}

/// Case-insensitive substring match over a record's label and body.
/// A blank query matches nothing.
pub fn matching<'a, R: Record + 'a>(
    records: impl IntoIterator<Item = &'a R>,
    query: &str,
    kind: ResultKind,
) -> Vec<SearchResult> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };

    records
        .into_iter()
        .filter(|record| {
            record.label().to_lowercase().contains(&needle)
                || record.body().to_lowercase().contains(&needle)
        })
        .map(|record| SearchResult {
            kind,
            id: record.id().to_string(),
            title: record.label().to_string(),
            content: record.body().to_string(),
            timestamp: Some(record.timestamp()),
        })
        .collect()
}

/// Same matching rules as [`matching`], over [`PAGES`].
pub fn pages(query: &str) -> Vec<SearchResult> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };

    PAGES
        .iter()
        .filter(|(_, title, description)| {
            title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
        })
        .map(|(slug, title, description)| SearchResult {
            kind: ResultKind::Page,
            id: slug.to_string(),
            title: title.to_string(),
            content: description.to_string(),
            timestamp: None,
        })
        .collect()
}
