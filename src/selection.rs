//! Sidebar selection and expansion state.
//!
//! Owns the loaded category tree, the visible (possibly filtered) view of it,
//! the search query, which category is expanded, and which topic is shown in
//! the detail pane. All changes go through the transition methods below so
//! the invariants hold between any two of them:
//!
//! - at most one category is expanded, and the index is valid for `visible`
//! - `selected`, if set, is a topic of the unfiltered tree

use crate::catalog::{self, CategoryGroup, Topic};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    all: Vec<CategoryGroup>,
    visible: Vec<CategoryGroup>,
    query: String,
    expanded: Option<usize>,
    selected: Option<Topic>,
}

impl SelectionState {
    /// Empty state, as shown while the feed is still loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tree with a freshly loaded one.
    ///
    /// Resets search and expansion, and auto-selects the first topic of the
    /// first group that has any. With no topics at all nothing is selected.
    pub fn load(&mut self, groups: Vec<CategoryGroup>) {
        self.selected = catalog::first_topic(&groups).cloned();
        self.visible = groups.clone();
        self.all = groups;
        self.query.clear();
        self.expanded = None;
    }

    /// Collapse category `index` if it is expanded, otherwise expand it and
    /// collapse any other.
    pub fn toggle_category(&mut self, index: usize) {
        if index >= self.visible.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Show `topic` in the detail pane. Expansion is left alone.
    ///
    /// Returns false, leaving the selection unchanged, when `topic` is not
    /// part of the loaded tree.
    pub fn select_topic(&mut self, topic: Topic) -> bool {
        if !self.all.iter().any(|g| g.topics.contains(&topic)) {
            return false;
        }
        self.selected = Some(topic);
        true
    }

    /// Select topic `topic_index` of visible category `group_index`.
    ///
    /// Returns false when either index is out of range.
    pub fn select_visible(&mut self, group_index: usize, topic_index: usize) -> bool {
        let Some(topic) = self
            .visible
            .get(group_index)
            .and_then(|g| g.topics.get(topic_index))
        else {
            return false;
        };
        self.selected = Some(topic.clone());
        true
    }

    /// Apply a new search query.
    ///
    /// A non-empty query filters the tree and expands the first matching
    /// group. An empty query restores the full tree with nothing expanded.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        if query.is_empty() {
            self.visible = self.all.clone();
            self.expanded = None;
        } else {
            self.visible = catalog::filter(&self.all, query);
            self.expanded = if self.visible.is_empty() { None } else { Some(0) };
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    pub fn all(&self) -> &[CategoryGroup] {
        &self.all
    }

    pub fn visible(&self) -> &[CategoryGroup] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn selected(&self) -> Option<&Topic> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, topic: &Topic) -> bool {
        self.selected.as_ref() == Some(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn topic(title: &str) -> Topic {
        Topic {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn groups() -> Vec<CategoryGroup> {
        vec![
            CategoryGroup {
                category: "Get Started".into(),
                icon_url: None,
                topics: vec![topic("Welcome"), topic("Create account")],
            },
            CategoryGroup {
                category: "Reports".into(),
                icon_url: None,
                topics: vec![topic("Export report")],
            },
        ]
    }

    fn loaded() -> SelectionState {
        let mut state = SelectionState::new();
        state.load(groups());
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = SelectionState::new();
        assert!(state.visible().is_empty());
        assert_eq!(state.expanded(), None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn load_selects_first_topic_and_collapses() {
        let state = loaded();
        assert_eq!(state.selected(), Some(&topic("Welcome")));
        assert_eq!(state.expanded(), None);
        assert_eq!(state.visible(), state.all());
    }

    #[test]
    fn load_skips_empty_leading_group() {
        let mut state = SelectionState::new();
        let mut g = groups();
        g.insert(0, CategoryGroup::new("Empty"));
        state.load(g);
        assert_eq!(state.selected(), Some(&topic("Welcome")));
    }

    #[test]
    fn load_without_topics_selects_nothing() {
        let mut state = SelectionState::new();
        state.load(vec![CategoryGroup::new("Empty")]);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn toggle_twice_collapses() {
        let mut state = loaded();
        state.toggle_category(0);
        assert_eq!(state.expanded(), Some(0));
        state.toggle_category(0);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn toggle_other_switches_expansion() {
        let mut state = loaded();
        state.toggle_category(0);
        state.toggle_category(1);
        assert_eq!(state.expanded(), Some(1));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut state = loaded();
        state.toggle_category(7);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn select_keeps_expansion() {
        let mut state = loaded();
        state.toggle_category(1);
        assert!(state.select_topic(topic("Export report")));
        assert_eq!(state.expanded(), Some(1));
        assert!(state.is_selected(&topic("Export report")));
    }

    #[test]
    fn select_rejects_unknown_topic() {
        let mut state = loaded();
        assert!(!state.select_topic(topic("Not in the sheet")));
        assert_eq!(state.selected(), Some(&topic("Welcome")));

        let mut empty = SelectionState::new();
        assert!(!empty.select_topic(topic("Welcome")));
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn select_visible_bounds() {
        let mut state = loaded();
        assert!(state.select_visible(1, 0));
        assert_eq!(state.selected(), Some(&topic("Export report")));
        assert!(!state.select_visible(1, 5));
        assert!(!state.select_visible(9, 0));
        assert_eq!(state.selected(), Some(&topic("Export report")));
    }

    #[test]
    fn query_expands_first_match() {
        let mut state = loaded();
        state.set_query("export");
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.visible()[0].category, "Reports");
        assert_eq!(state.expanded(), Some(0));
    }

    #[test]
    fn query_without_matches_expands_nothing() {
        let mut state = loaded();
        state.set_query("nothing here");
        assert!(state.visible().is_empty());
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn clearing_query_restores_and_collapses() {
        let mut state = loaded();
        state.set_query("export");
        state.clear_query();
        assert_eq!(state.query(), "");
        assert_eq!(state.visible(), state.all());
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn search_does_not_change_selection() {
        let mut state = loaded();
        state.set_query("export");
        assert_eq!(state.selected(), Some(&topic("Welcome")));
    }

    #[test]
    fn reload_resets_query() {
        let mut state = loaded();
        state.set_query("export");
        state.load(groups());
        assert_eq!(state.query(), "");
        assert_eq!(state.visible().len(), 2);
    }
}
