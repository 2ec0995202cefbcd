//! Bold markup expansion for article titles and bodies.
//!
//! The sheet authors mark emphasis with `**double asterisks**`. Nothing else
//! is interpreted: a lone or unmatched `**` stays in the text as-is.

use regex::Regex;
use std::sync::OnceLock;

static BOLD_RE: OnceLock<Regex> = OnceLock::new();

fn bold_re() -> &'static Regex {
    // Non-greedy and line-bound: `.` does not cross newlines.
    BOLD_RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

/// A run of text with or without emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Strong(s) => s,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Segment::Strong(_))
    }
}

/// Split `text` into plain and strong segments.
///
/// Delimiters are stripped, the text between a matched pair becomes a
/// [`Segment::Strong`], and empty segments are omitted.
///
/// ```
/// use helpdesk::markup::{parse_bold, Segment};
///
/// assert_eq!(
///     parse_bold("Hello **world** today"),
///     vec![
///         Segment::Plain("Hello ".into()),
///         Segment::Strong("world".into()),
///         Segment::Plain(" today".into()),
///     ]
/// );
/// ```
pub fn parse_bold(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in bold_re().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Plain(text[last..whole.start()].to_string()));
        }
        if !inner.as_str().is_empty() {
            segments.push(Segment::Strong(inner.as_str().to_string()));
        }
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }

    segments
}

/// Concatenated text of all segments, with delimiters removed.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}
