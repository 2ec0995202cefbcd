use crate::app::{App, Focus, SidebarRow};
use crate::icons::CategoryIcon;
use crate::util::{strip_control_chars, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub(super) const NO_ARTICLES: &str = "No articles yet";

/// Render the sidebar: search line on top, category tree below.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 4 {
        return;
    }

    let border_style = if app.focus == Focus::Sidebar {
        app.palette.panel_border_focused
    } else {
        app.palette.panel_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(" Help Center ", app.palette.sidebar_title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    render_search_line(f, app, chunks[0]);
    render_tree(f, app, chunks[2]);
}

fn render_search_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.search_mode {
        Line::from(vec![
            Span::styled("/", app.palette.search_input),
            Span::styled(app.search_input.as_str(), app.palette.search_input),
            Span::styled("_", app.palette.search_input),
        ])
    } else if app.selection.query().is_empty() {
        Line::from(Span::styled("/ Search", app.palette.detail_placeholder))
    } else {
        Line::from(vec![
            Span::styled("Filter: ", app.palette.detail_placeholder),
            Span::styled(app.selection.query(), app.palette.search_input),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_tree(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let visible = app.selection.visible();
    let rows = app.sidebar_rows();

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let cursor = if idx == app.cursor && app.focus == Focus::Sidebar {
                Some(app.palette.sidebar_cursor)
            } else {
                None
            };
            let line = match *row {
                SidebarRow::Category(i) => {
                    let group = &visible[i];
                    let marker = if app.selection.is_expanded(i) { "▾ " } else { "▸ " };
                    let glyph = CategoryIcon::for_category(&group.category).glyph();
                    let name = strip_control_chars(&group.category);
                    let name = truncate_to_width(&name, width.saturating_sub(4)).into_owned();
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(format!("{} ", glyph), app.palette.sidebar_icon),
                        Span::styled(name, app.palette.sidebar_category),
                    ])
                }
                SidebarRow::Topic(i, j) => {
                    let topic = &visible[i].topics[j];
                    let style = if app.selection.is_selected(topic) {
                        app.palette.sidebar_selected
                    } else {
                        app.palette.sidebar_topic
                    };
                    let title = strip_control_chars(&topic.title);
                    let title = truncate_to_width(&title, width.saturating_sub(4)).into_owned();
                    Line::from(vec![Span::raw("    "), Span::styled(title, style)])
                }
                SidebarRow::Placeholder(_) => Line::from(vec![
                    Span::raw("    "),
                    Span::styled(NO_ARTICLES, app.palette.sidebar_empty),
                ]),
            };
            let item = ListItem::new(line);
            match cursor {
                Some(style) => item.style(style),
                None => item,
            }
        })
        .collect();

    if items.is_empty() {
        let text = if app.loading {
            "Loading..."
        } else if !app.selection.query().is_empty() {
            "No matching topics"
        } else {
            ""
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, app.palette.sidebar_empty)),
            area,
        );
        return;
    }

    let list = List::new(items).highlight_style(Style::default());
    let mut state = ListState::default().with_selected(Some(app.cursor));
    f.render_stateful_widget(list, area, &mut state);
}
