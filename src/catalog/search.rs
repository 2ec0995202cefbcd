use super::CategoryGroup;

/// Narrow `groups` to topics whose title contains `query`, ignoring case.
///
/// An empty query returns the groups unchanged. Otherwise groups with no
/// matching topic are dropped entirely and the relative order of groups and
/// topics is preserved, which makes the filter idempotent.
pub fn filter(groups: &[CategoryGroup], query: &str) -> Vec<CategoryGroup> {
    if query.is_empty() {
        return groups.to_vec();
    }

    let needle = query.to_lowercase();

    groups
        .iter()
        .filter_map(|group| {
            let topics: Vec<_> = group
                .topics
                .iter()
                .filter(|t| t.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();

            if topics.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category: group.category.clone(),
                    icon_url: group.icon_url.clone(),
                    topics,
                })
            }
        })
        .collect()
}
