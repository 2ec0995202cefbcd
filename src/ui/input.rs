//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry using the context of
//! the focused pane, except while the help overlay or the search line is
//! active: those capture raw keys first.

use crate::app::{App, AppEvent, Focus};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::util::{validate_url_for_open, MAX_SEARCH_QUERY_LENGTH};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::spawn_feed_load;
use super::Action;

fn focus_to_context(focus: Focus) -> KbContext {
    match focus {
        Focus::Sidebar => KbContext::Sidebar,
        Focus::Detail => KbContext::Detail,
    }
}

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if app.show_help {
        handle_help_input(app, code);
        return Action::Continue;
    }

    if app.search_mode {
        handle_search_input(app, code, modifiers);
        return Action::Continue;
    }

    let action = app
        .keybindings
        .action_for_key(code, modifiers, focus_to_context(app.focus));

    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::Select) => app.activate(),
        Some(KbAction::CycleFocus) => app.cycle_focus(),
        Some(KbAction::Back) => app.back(),
        Some(KbAction::EnterSearch) => app.enter_search(),
        Some(KbAction::ScrollDown) => app.scroll_down(1),
        Some(KbAction::ScrollUp) => app.scroll_up(1),
        Some(KbAction::PageDown) => {
            let page = app.page_size();
            app.scroll_down(page);
        }
        Some(KbAction::PageUp) => {
            let page = app.page_size();
            app.scroll_up(page);
        }
        Some(KbAction::Reload) => {
            if app.loading {
                app.set_status("Already loading...");
            } else {
                spawn_feed_load(app, event_tx);
            }
        }
        Some(KbAction::OpenMedia) => open_media(app),
        Some(KbAction::CycleTheme) => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        Some(KbAction::ExitSearch) | Some(KbAction::CommitSearch) | None => {}
    }
    Action::Continue
}

/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
}

/// Search line editing. Every keystroke refilters the sidebar.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Search)
    {
        Some(KbAction::ExitSearch) => {
            app.exit_search();
            return;
        }
        Some(KbAction::CommitSearch) => {
            app.commit_search();
            return;
        }
        _ => {}
    }

    match code {
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.push_search_char(c) {
                app.set_status(format!(
                    "Search query at max length ({} chars)",
                    MAX_SEARCH_QUERY_LENGTH
                ));
            }
        }
        _ => {}
    }
}

/// Open the first media link of the selected topic in the system browser.
fn open_media(app: &mut App) {
    let Some(link) = app.first_media_link() else {
        app.set_status("No video or image for this topic");
        return;
    };

    if let Err(e) = validate_url_for_open(&link) {
        tracing::warn!(link = %link, error = %e, "Refusing to open media link");
        app.set_error(format!("Cannot open link: {}", e));
    } else if let Err(e) = open::that(&link) {
        tracing::warn!(link = %link, error = %e, "Failed to launch browser");
        app.set_error(format!("Failed to open browser: {}", e));
    } else {
        app.set_status("Opening media in browser...");
    }
}
