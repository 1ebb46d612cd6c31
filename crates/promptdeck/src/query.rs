use crate::catalog::FilterGroup;
use crate::kind::ResourceKind;

/// Single source of truth for what the user wants to see: search text,
/// per-group filter selections, and the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub filter_groups: Vec<FilterGroup>,
    pub page: u32,
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            filter_groups: Vec::new(),
            page: 1,
        }
    }

    /// Replace the search text. A new search means a new result set, so
    /// the page goes back to 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Set one option's checked flag, located by group title and option id.
    ///
    /// Unknown group or option is a no-op: the sidebar can hold stale ids
    /// briefly after a catalog reload, and that must not panic.
    pub fn set_filter_option(&mut self, group_title: &str, option_id: &str, checked: bool) {
        let Some(group) = self
            .filter_groups
            .iter_mut()
            .find(|g| g.title == group_title)
        else {
            return;
        };

        if let Some(option) = group.options.iter_mut().find(|o| o.id == option_id) {
            option.checked = checked;
        }
    }

    /// Build the outgoing query pairs for the list endpoint.
    ///
    /// `search` is omitted entirely when empty. Each filter group
    /// contributes at most one pair, under the parameter name its facet
    /// spec routes to: the backend matches a single value per parameter,
    /// so only the first checked option's label is transmitted even when
    /// several are checked.
    pub fn to_query_pairs(&self, kind: ResourceKind, page_size: u32) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if !self.search_text.is_empty() {
            pairs.push(("search".to_owned(), self.search_text.clone()));
        }

        for group in &self.filter_groups {
            let Some(spec) = kind.facet_specs().iter().find(|s| s.title == group.title) else {
                continue;
            };

            if let Some(option) = group.options.iter().find(|o| o.checked) {
                pairs.push((spec.param.to_owned(), option.label.clone()));
            }
        }

        pairs.push(("page".to_owned(), self.page.to_string()));
        pairs.push(("limit".to_owned(), page_size.to_string()));
        pairs
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FilterGroup, FilterOption};

    fn group(title: &str, labels: &[&str]) -> FilterGroup {
        FilterGroup {
            title: title.to_owned(),
            options: labels
                .iter()
                .map(|label| FilterOption {
                    id: crate::catalog::slugify(label),
                    label: (*label).to_owned(),
                    checked: false,
                })
                .collect(),
        }
    }

    fn pairs_for(state: &QueryState) -> Vec<(String, String)> {
        state.to_query_pairs(ResourceKind::Prompts, 10)
    }

    #[test]
    fn empty_search_emits_no_search_pair() {
        let state = QueryState::new();
        assert!(pairs_for(&state).iter().all(|(k, _)| k != "search"));
    }

    #[test]
    fn search_text_resets_page() {
        let mut state = QueryState::new();
        state.page = 4;
        state.set_search_text("agents");
        assert_eq!(state.page, 1);
        assert!(
            pairs_for(&state).contains(&("search".to_owned(), "agents".to_owned()))
        );
    }

    #[test]
    fn unknown_group_or_option_is_a_no_op() {
        let mut state = QueryState::new();
        state.filter_groups = vec![group("Model", &["GPT-4"])];

        state.set_filter_option("Nonexistent", "gpt-4", true);
        state.set_filter_option("Model", "nonexistent", true);

        assert!(state.filter_groups[0].options.iter().all(|o| !o.checked));
    }

    #[test]
    fn only_first_checked_option_is_transmitted() {
        let mut state = QueryState::new();
        state.filter_groups = vec![group("Model", &["GPT-4", "Claude", "Gemini"])];
        state.set_filter_option("Model", "claude", true);
        state.set_filter_option("Model", "gpt-4", true);

        let model_pairs: Vec<_> = pairs_for(&state)
            .into_iter()
            .filter(|(k, _)| k == "model")
            .collect();
        // First in list order, not first checked.
        assert_eq!(model_pairs, vec![("model".to_owned(), "GPT-4".to_owned())]);
    }

    #[test]
    fn model_filter_maps_by_label_not_id() {
        for kind in ResourceKind::all() {
            let mut state = QueryState::new();
            state.filter_groups = vec![group("Model", &["GPT-4"])];
            state.set_filter_option("Model", "gpt-4", true);

            let pairs = state.to_query_pairs(kind, 10);
            assert!(
                pairs.contains(&("model".to_owned(), "GPT-4".to_owned())),
                "expected model=GPT-4 for {kind}"
            );
        }
    }

    #[test]
    fn unchecked_groups_contribute_nothing() {
        let mut state = QueryState::new();
        state.filter_groups = vec![group("Category", &["Writing"]), group("Model", &["GPT-4"])];

        let pairs = pairs_for(&state);
        assert_eq!(
            pairs,
            vec![
                ("page".to_owned(), "1".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[test]
    fn page_and_limit_always_present() {
        let mut state = QueryState::new();
        state.page = 3;
        let pairs = state.to_query_pairs(ResourceKind::Agents, 25);
        assert!(pairs.contains(&("page".to_owned(), "3".to_owned())));
        assert!(pairs.contains(&("limit".to_owned(), "25".to_owned())));
    }
}
