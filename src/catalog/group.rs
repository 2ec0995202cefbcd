use super::{CategoryGroup, Topic};
use crate::feed::ArticleRow;
use std::collections::HashMap;

/// Group feed rows by exact category string.
///
/// Groups appear in order of first occurrence and topics keep feed order.
/// Rows with an absent or empty category are skipped. Category keys are
/// compared verbatim, so `"Billing"` and `"billing "` are distinct groups.
pub fn group(rows: &[ArticleRow]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(category) = row.category.as_deref().filter(|c| !c.is_empty()) else {
            skipped += 1;
            continue;
        };

        let idx = *index.entry(category).or_insert_with(|| {
            groups.push(CategoryGroup::new(category));
            groups.len() - 1
        });

        let group = &mut groups[idx];
        if group.icon_url.is_none() {
            group.icon_url = row.icon_url.clone();
        }
        group.topics.push(Topic {
            title: row.title.clone().unwrap_or_default(),
            content: row.content.clone().unwrap_or_default(),
            image: row.image_urls.clone(),
            video: row.video_url.clone(),
        });
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Rows without a category skipped");
    }

    groups
}
