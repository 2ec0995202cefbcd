use crate::app::{App, Focus, StatusKind};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let mut style = app.palette.status_bar;

    let text: Cow<'_, str> = if let Some(msg) = &app.status_message {
        if msg.kind == StatusKind::Error {
            style = app.palette.status_error;
        }
        Cow::Borrowed(msg.text.as_ref())
    } else if app.loading {
        let frame = SPINNER[app.spinner_frame % SPINNER.len()];
        Cow::Owned(format!("{} Loading help topics...", frame))
    } else if app.search_mode {
        Cow::Borrowed("Type to filter | Enter keep results | Esc clear")
    } else {
        match app.focus {
            Focus::Sidebar => Cow::Borrowed(
                "[j/k]move [Enter]open [/]search [Tab]article [r]eload [o]pen media [?]help [q]uit",
            ),
            Focus::Detail => Cow::Borrowed(
                "[j/k]scroll [Ctrl+d/u]page [Tab]topics [o]pen media [?]help [q]uit",
            ),
        }
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}
