//! Display model for the detail pane.
//!
//! Turns the selected [`Topic`] into what the renderer draws: bold-expanded
//! title and paragraphs plus a media section with normalized links. Keeping
//! this separate from ratatui lets the shaping be tested without a terminal.

use crate::catalog::Topic;
use crate::links::{to_direct_link, to_preview_link};
use crate::markup::{parse_bold, Segment};
use serde::Deserialize;

/// How image links are rewritten before display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Embeddable preview frame. Works for any shared-drive file type.
    #[default]
    Preview,
    /// Direct-view link, suitable for plain image loading.
    Direct,
}

impl LinkMode {
    pub fn apply(self, url: &str) -> String {
        match self {
            LinkMode::Preview => to_preview_link(url),
            LinkMode::Direct => to_direct_link(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    None,
    /// Video embed link. A video suppresses the topic's images.
    Video(String),
    Images(Vec<String>),
}

impl Media {
    /// Links in display order.
    pub fn links(&self) -> &[String] {
        match self {
            Media::None => &[],
            Media::Video(link) => std::slice::from_ref(link),
            Media::Images(links) => links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    pub title: Vec<Segment>,
    /// One entry per line of the body. Blank lines are kept as empty paragraphs.
    pub paragraphs: Vec<Vec<Segment>>,
    pub media: Media,
}

impl DetailModel {
    pub fn from_topic(topic: &Topic, link_mode: LinkMode) -> Self {
        let paragraphs = if topic.content.is_empty() {
            Vec::new()
        } else {
            topic
                .content
                .split('\n')
                .map(|line| parse_bold(line.strip_suffix('\r').unwrap_or(line)))
                .collect()
        };

        let media = match topic.video.as_deref().filter(|v| !v.is_empty()) {
            Some(video) => Media::Video(to_preview_link(video)),
            None if !topic.image.is_empty() => Media::Images(
                topic
                    .image
                    .iter()
                    .map(|url| link_mode.apply(url))
                    .collect(),
            ),
            None => Media::None,
        };

        Self {
            title: parse_bold(&topic.title),
            paragraphs,
            media,
        }
    }
}
