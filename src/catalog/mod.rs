//! Help topics grouped into categories.
//!
//! The feed arrives as a flat row list. [`group`] turns it into the ordered
//! category tree the sidebar shows, and [`filter`] narrows that tree to the
//! titles matching a search query. Both are pure: the same input always
//! yields the same tree, and neither mutates its input.

mod group;
mod outline;
mod search;

pub use group::group;
pub use outline::outline;
pub use search::filter;

/// One help article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub content: String,
    /// Image links in sheet order.
    pub image: Vec<String>,
    pub video: Option<String>,
}

/// A category and its topics, in feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    /// First non-empty `Icon Url` seen for this category.
    pub icon_url: Option<String>,
    pub topics: Vec<Topic>,
}

impl CategoryGroup {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            icon_url: None,
            topics: Vec::new(),
        }
    }
}

/// First topic of the first group that has any.
pub fn first_topic(groups: &[CategoryGroup]) -> Option<&Topic> {
    groups.iter().find_map(|g| g.topics.first())
}

/// Total number of topics across all groups.
pub fn topic_count(groups: &[CategoryGroup]) -> usize {
    groups.iter().map(|g| g.topics.len()).sum()
}
