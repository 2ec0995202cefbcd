//! Frame layout: sidebar and detail pane side by side, status bar below,
//! help overlay on top.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{detail, help, sidebar, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 10;

pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    sidebar::render(f, app, panes[0]);
    detail::render(f, app, panes[1]);
    status::render(f, app, rows[1]);

    if app.show_help {
        help::render(f, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::{build_client, ArticleRow};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        screen_text(&terminal)
    }

    fn loaded_app() -> App {
        let mut app = App::new(&Config::default(), build_client().unwrap());
        let generation = app.begin_load();
        app.finish_load(
            generation,
            Ok(vec![
                ArticleRow {
                    category: Some("Get Started".into()),
                    title: Some("Welcome".into()),
                    content: Some("Start **here**".into()),
                    ..Default::default()
                },
                ArticleRow {
                    category: Some("Others".into()),
                    ..Default::default()
                },
            ]),
        );
        app
    }

    #[tokio::test]
    async fn renders_sidebar_and_detail() {
        let mut app = loaded_app();
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Help Center"));
        assert!(screen.contains("Get Started"));
        assert!(screen.contains("Start here"));
        assert!(screen.contains("Was this article helpful?"));
    }

    #[tokio::test]
    async fn expanded_empty_category_shows_placeholder() {
        let mut app = loaded_app();
        app.cursor = 1;
        app.activate();
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains(sidebar::NO_ARTICLES));
    }

    #[tokio::test]
    async fn empty_selection_shows_prompt() {
        let mut app = App::new(&Config::default(), build_client().unwrap());
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains(detail::EMPTY_SELECTION));
    }

    #[tokio::test]
    async fn small_terminal_shows_warning() {
        let mut app = loaded_app();
        let screen = draw(&mut app, 40, 8);
        assert!(screen.contains("Terminal too small"));
    }

    #[tokio::test]
    async fn help_overlay_lists_bindings() {
        let mut app = loaded_app();
        app.show_help = true;
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("Reload help topics"));
    }
}
