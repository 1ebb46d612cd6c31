use serde::Deserialize;

use crate::kind::ResourceKind;

/// Raw record as the list endpoint returns it. Optional fields default
/// rather than failing the whole page; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
}

/// A labelled metadata row on a card (e.g. "Views" / "1280").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMetadata {
    pub label: String,
    pub value: String,
}

/// The normalized shape every resource type projects into for display.
/// Built fresh on every successful fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub href: String,
    pub metadata: Vec<CardMetadata>,
}

/// Project raw records into cards. Pure; preserves backend order.
pub fn project_records(kind: ResourceKind, records: &[ResourceRecord]) -> Vec<ResourceCard> {
    records
        .iter()
        .map(|record| ResourceCard {
            title: record.title.clone(),
            description: record.description.clone(),
            tags: record.tags.clone().unwrap_or_default(),
            href: format!("/{}/{}", kind.path_segment(), record.id),
            metadata: vec![
                CardMetadata {
                    label: "Views".to_owned(),
                    value: record.views.unwrap_or(0).to_string(),
                },
                CardMetadata {
                    label: "Likes".to_owned(),
                    value: record.likes.unwrap_or(0).to_string(),
                },
            ],
        })
        .collect()
}
