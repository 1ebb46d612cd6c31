use std::collections::BTreeMap;

use serde::Deserialize;

use crate::kind::ResourceKind;

/// A single selectable value within a filter group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Slug of the label, unique within the group. Render key only; the
    /// label is what gets transmitted. Never recomputed after creation.
    pub id: String,
    /// Display text, also the value sent to the backend.
    pub label: String,
    pub checked: bool,
}

/// A named facet (e.g. "Category") with its selectable options.
/// Groups render in insertion order; the title routes to a backend
/// query parameter via the kind's facet specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub title: String,
    pub options: Vec<FilterOption>,
}

/// Binds a filter group title to the filters-payload key its options are
/// read from and the query parameter its selection is transmitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSpec {
    pub title: &'static str,
    pub response_key: &'static str,
    pub param: &'static str,
}

/// Raw payload of a `/{resource}/filters` endpoint: facet keys mapped to
/// their available display values. Keys vary per resource kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FacetValues(pub BTreeMap<String, Vec<String>>);

/// Normalize a display label into a render-key slug: lowercase, runs of
/// whitespace collapsed to single hyphens.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Materialize the sidebar filter groups for a kind from its facet payload.
///
/// Every facet group is present even when the payload omits its key (an
/// empty group renders nothing, it is not an error). Options start
/// unchecked.
pub fn build_filter_groups(kind: ResourceKind, values: &FacetValues) -> Vec<FilterGroup> {
    kind.facet_specs()
        .iter()
        .map(|spec| FilterGroup {
            title: spec.title.to_owned(),
            options: values
                .0
                .get(spec.response_key)
                .map(|labels| {
                    labels
                        .iter()
                        .map(|label| FilterOption {
                            id: slugify(label),
                            label: label.clone(),
                            checked: false,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[(&str, &[&str])]) -> FacetValues {
        FacetValues(
            entries
                .iter()
                .map(|(k, vs)| ((*k).to_owned(), vs.iter().map(|v| (*v).to_owned()).collect()))
                .collect(),
        )
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Creative Writing"), "creative-writing");
        assert_eq!(slugify("GPT-4"), "gpt-4");
        assert_eq!(slugify("  Data   Analysis  "), "data-analysis");
    }

    #[test]
    fn groups_follow_facet_order_with_options_unchecked() {
        let payload = values(&[
            ("categories", &["Writing", "Coding"]),
            ("use_cases", &["Summarization"]),
            ("models", &["GPT-4"]),
        ]);

        let groups = build_filter_groups(ResourceKind::Prompts, &payload);
        let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Category", "Use Case", "Model"]);

        let category = &groups[0];
        assert_eq!(category.options.len(), 2);
        assert_eq!(category.options[0].id, "writing");
        assert_eq!(category.options[0].label, "Writing");
        assert!(groups.iter().all(|g| g.options.iter().all(|o| !o.checked)));
    }

    #[test]
    fn missing_payload_key_yields_empty_group() {
        let payload = values(&[("models", &["Claude"])]);

        let groups = build_filter_groups(ResourceKind::Tools, &payload);
        assert_eq!(groups.len(), 3);
        assert!(groups[0].options.is_empty());
        assert!(groups[1].options.is_empty());
        assert_eq!(groups[2].options.len(), 1);
    }

    #[test]
    fn facet_payload_deserializes_from_flat_object() {
        let payload: FacetValues =
            serde_json::from_str(r#"{"tags": ["Research"], "tools": [], "models": ["GPT-4"]}"#)
                .unwrap();

        let groups = build_filter_groups(ResourceKind::Agents, &payload);
        assert_eq!(groups[0].title, "Category");
        assert_eq!(groups[0].options[0].label, "Research");
        assert!(groups[1].options.is_empty());
    }
}
