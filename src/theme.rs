//! Theme system for the TUI.
//!
//! Each `ThemeVariant` builds a `ColorPalette` that assigns a ratatui `Style`
//! to every semantic element the renderers draw.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Sidebar --
    pub sidebar_title: Style,
    pub sidebar_category: Style,
    pub sidebar_icon: Style,
    pub sidebar_topic: Style,
    pub sidebar_selected: Style,
    pub sidebar_cursor: Style,
    pub sidebar_empty: Style,
    pub search_input: Style,

    // -- Detail pane --
    pub detail_title: Style,
    pub detail_body: Style,
    pub detail_strong: Style,
    pub detail_media: Style,
    pub detail_placeholder: Style,
    pub detail_footer: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub status_error: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            sidebar_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            sidebar_category: Style::default().add_modifier(Modifier::BOLD),
            sidebar_icon: Style::default().fg(Color::Cyan),
            sidebar_topic: Style::default().fg(Color::Gray),
            sidebar_selected: Style::default().fg(Color::Yellow),
            sidebar_cursor: Style::default().bg(Color::DarkGray).fg(Color::White),
            sidebar_empty: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            search_input: Style::default().fg(Color::Yellow),

            detail_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default(),
            detail_strong: Style::default().add_modifier(Modifier::BOLD),
            detail_media: Style::default().fg(Color::Blue),
            detail_placeholder: Style::default().fg(Color::DarkGray),
            detail_footer: Style::default().fg(Color::DarkGray),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_error: Style::default().bg(Color::DarkGray).fg(Color::Red),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    fn light() -> Self {
        Self {
            sidebar_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            sidebar_category: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            sidebar_icon: Style::default().fg(Color::Blue),
            sidebar_topic: Style::default().fg(Color::DarkGray),
            sidebar_selected: Style::default().fg(Color::Magenta),
            sidebar_cursor: Style::default().bg(Color::Blue).fg(Color::White),
            sidebar_empty: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            search_input: Style::default().fg(Color::Magenta),

            detail_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default().fg(Color::Black),
            detail_strong: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            detail_media: Style::default().fg(Color::Blue),
            detail_placeholder: Style::default().fg(Color::DarkGray),
            detail_footer: Style::default().fg(Color::DarkGray),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            status_error: Style::default().bg(Color::White).fg(Color::Red),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
