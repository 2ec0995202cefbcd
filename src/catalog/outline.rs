use std::fmt::Write;

use super::CategoryGroup;
use crate::icons::CategoryIcon;
use crate::util::strip_control_chars;

/// Plain-text tree of categories and topic titles, for `--list`.
///
/// ```
/// use helpdesk::catalog::{outline, CategoryGroup, Topic};
///
/// let mut group = CategoryGroup::new("IVR");
/// group.topics.push(Topic { title: "Call flows".into(), ..Default::default() });
/// assert_eq!(outline(&[group]), "☎ IVR (1)\n  - Call flows\n");
/// ```
pub fn outline(groups: &[CategoryGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let glyph = CategoryIcon::for_category(&group.category).glyph();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{} {} ({})",
            glyph,
            strip_control_chars(&group.category),
            group.topics.len()
        );
        if group.topics.is_empty() {
            out.push_str("  (no articles yet)\n");
        }
        for topic in &group.topics {
            let _ = writeln!(out, "  - {}", strip_control_chars(&topic.title));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Topic;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_groups_print_placeholder() {
        let groups = vec![
            CategoryGroup {
                category: "Custom Section".into(),
                icon_url: None,
                topics: vec![Topic {
                    title: "First".into(),
                    ..Default::default()
                }],
            },
            CategoryGroup::new("Others"),
        ];
        assert_eq!(
            outline(&groups),
            "• Custom Section (1)\n  - First\n… Others (0)\n  (no articles yet)\n"
        );
    }

    #[test]
    fn no_groups_prints_nothing() {
        assert_eq!(outline(&[]), "");
    }
}
