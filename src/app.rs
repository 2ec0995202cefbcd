use crate::catalog;
use crate::config::Config;
use crate::detail::{DetailModel, LinkMode};
use crate::feed::{ArticleRow, FetchError};
use crate::keybindings::KeybindingRegistry;
use crate::selection::SelectionState;
use crate::theme::{ColorPalette, ThemeVariant};
use crate::util::MAX_SEARCH_QUERY_LENGTH;
use std::borrow::Cow;
use tokio::time::Instant;

/// Maximum scroll offset for the detail pane (ratatui u16 limit).
pub const MAX_SCROLL: usize = u16::MAX as usize;

/// Notification shown when the feed cannot be loaded.
pub const ERR_FETCH_FAILED: &str = "Unable to fetch data from sheet";

/// Seconds a status notification stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Focus and Sidebar Rows
// ============================================================================

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Detail,
}

/// One line of the flattened sidebar tree.
///
/// Indices refer to the *visible* category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Category(usize),
    Topic(usize, usize),
    /// "No articles yet" under an expanded category with no topics.
    Placeholder(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: Cow<'static, str>,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

// ============================================================================
// Background Events
// ============================================================================

/// Events from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// The feed fetch finished.
    ///
    /// `generation` is the load counter at spawn time; results from a load
    /// that was superseded by a reload are dropped.
    FeedLoaded {
        generation: u64,
        result: Result<Vec<ArticleRow>, FetchError>,
    },
    /// A background task panicked. `generation` identifies the load it
    /// belonged to, as in `FeedLoaded`.
    TaskPanicked {
        task: &'static str,
        generation: u64,
        error: String,
    },
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub http_client: reqwest::Client,
    pub endpoint: String,
    pub link_mode: LinkMode,

    pub theme_variant: ThemeVariant,
    pub palette: ColorPalette,
    pub keybindings: KeybindingRegistry,

    pub selection: SelectionState,
    pub focus: Focus,
    /// Row index into `sidebar_rows()`.
    pub cursor: usize,

    pub search_mode: bool,
    pub search_input: String,

    pub detail_scroll: usize,
    /// Inner height of the detail pane, updated on every render.
    pub detail_visible_lines: usize,
    /// Wrapped line count of the current detail text, updated on every render.
    pub detail_line_count: usize,

    pub status_message: Option<StatusMessage>,

    pub loading: bool,
    pub load_generation: u64,
    pub load_handle: Option<tokio::task::JoinHandle<()>>,
    /// Advanced on each tick while loading.
    pub spinner_frame: usize,

    pub needs_redraw: bool,
    pub show_help: bool,
    pub help_scroll_offset: usize,
}

impl App {
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, using dark");
            ThemeVariant::Dark
        });

        let mut keybindings = KeybindingRegistry::new();
        let warnings = keybindings.apply_overrides(&config.keybindings);
        for warning in &warnings {
            tracing::warn!(warning = %warning, "Keybinding override rejected");
        }

        let mut app = Self {
            http_client,
            endpoint: config.endpoint.clone(),
            link_mode: config.image_links,
            theme_variant,
            palette: theme_variant.palette(),
            keybindings,
            selection: SelectionState::new(),
            focus: Focus::Sidebar,
            cursor: 0,
            search_mode: false,
            search_input: String::new(),
            detail_scroll: 0,
            detail_visible_lines: 0,
            detail_line_count: 0,
            status_message: None,
            loading: false,
            load_generation: 0,
            load_handle: None,
            spinner_frame: 0,
            needs_redraw: true,
            show_help: false,
            help_scroll_offset: 0,
        };

        if let Some(first) = warnings.into_iter().next() {
            app.set_error(first);
        }
        app
    }

    // ------------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------------

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.palette = variant.palette();
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant. Returns its name for the status bar.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------------
    // Feed loading
    // ------------------------------------------------------------------------

    /// Reset every piece of view state and start a new load generation.
    ///
    /// Aborts a load that is still in flight. Returns the generation the
    /// caller must tag its `FeedLoaded` event with.
    pub fn begin_load(&mut self) -> u64 {
        if let Some(handle) = self.load_handle.take() {
            handle.abort();
            tracing::debug!("Aborted in-flight feed load");
        }

        self.selection = SelectionState::new();
        self.focus = Focus::Sidebar;
        self.cursor = 0;
        self.search_mode = false;
        self.search_input.clear();
        self.detail_scroll = 0;
        self.loading = true;
        self.load_generation = self.load_generation.wrapping_add(1);
        self.needs_redraw = true;
        self.load_generation
    }

    /// Apply a finished load. Stale generations are ignored.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<ArticleRow>, FetchError>) {
        if generation != self.load_generation {
            tracing::debug!(
                generation,
                current = self.load_generation,
                "Ignoring stale feed load"
            );
            return;
        }

        self.loading = false;
        self.load_handle = None;

        match result {
            Ok(rows) => {
                let groups = catalog::group(&rows);
                tracing::info!(
                    rows = rows.len(),
                    categories = groups.len(),
                    topics = catalog::topic_count(&groups),
                    "Help center ready"
                );
                self.selection.load(groups);
                self.cursor = 0;
                self.detail_scroll = 0;
            }
            Err(e) => {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Failed to load help topics");
                self.set_error(ERR_FETCH_FAILED);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------------

    /// Flatten the visible tree into display rows.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for (i, group) in self.selection.visible().iter().enumerate() {
            rows.push(SidebarRow::Category(i));
            if self.selection.is_expanded(i) {
                if group.topics.is_empty() {
                    rows.push(SidebarRow::Placeholder(i));
                } else {
                    rows.extend((0..group.topics.len()).map(|j| SidebarRow::Topic(i, j)));
                }
            }
        }
        rows
    }

    pub fn nav_down(&mut self) {
        let len = self.sidebar_rows().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn nav_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Keep the cursor on an existing row after the tree changes shape.
    pub fn clamp_cursor(&mut self) {
        let len = self.sidebar_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn move_cursor_to(&mut self, target: SidebarRow) {
        if let Some(pos) = self.sidebar_rows().iter().position(|r| *r == target) {
            self.cursor = pos;
        } else {
            self.clamp_cursor();
        }
    }

    /// Act on the row under the cursor: toggle a category or open a topic.
    pub fn activate(&mut self) {
        let Some(row) = self.sidebar_rows().get(self.cursor).copied() else {
            return;
        };
        match row {
            SidebarRow::Category(i) => {
                self.selection.toggle_category(i);
                // Collapsing a category above moves this one up
                self.move_cursor_to(SidebarRow::Category(i));
            }
            SidebarRow::Topic(i, j) => {
                if self.selection.select_visible(i, j) {
                    self.detail_scroll = 0;
                }
            }
            SidebarRow::Placeholder(_) => {}
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Detail,
            Focus::Detail => Focus::Sidebar,
        };
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    pub fn enter_search(&mut self) {
        self.search_mode = true;
        self.focus = Focus::Sidebar;
        self.search_input = self.selection.query().to_string();
    }

    /// Append a character and refilter. Returns false at the length cap.
    pub fn push_search_char(&mut self, c: char) -> bool {
        if self.search_input.len() >= MAX_SEARCH_QUERY_LENGTH {
            return false;
        }
        self.search_input.push(c);
        self.apply_search();
        true
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.apply_search();
        }
    }

    fn apply_search(&mut self) {
        self.selection.set_query(&self.search_input);
        self.cursor = 0;
    }

    /// Leave search mode and drop the filter.
    pub fn exit_search(&mut self) {
        self.search_mode = false;
        self.search_input.clear();
        self.selection.clear_query();
        self.cursor = 0;
    }

    /// Leave search mode keeping the filtered tree, cursor on the first hit.
    pub fn commit_search(&mut self) {
        self.search_mode = false;
        let first_topic = self
            .sidebar_rows()
            .iter()
            .position(|r| matches!(r, SidebarRow::Topic(..)));
        self.cursor = first_topic.unwrap_or(0);
    }

    /// Esc outside search: leave the detail pane, then drop an active filter.
    pub fn back(&mut self) {
        if self.focus == Focus::Detail {
            self.focus = Focus::Sidebar;
        } else if !self.selection.query().is_empty() {
            self.exit_search();
        }
    }

    // ------------------------------------------------------------------------
    // Detail pane
    // ------------------------------------------------------------------------

    pub fn detail_model(&self) -> Option<DetailModel> {
        self.selection
            .selected()
            .map(|topic| DetailModel::from_topic(topic, self.link_mode))
    }

    /// First media link of the selected topic, as shown in the detail pane.
    pub fn first_media_link(&self) -> Option<String> {
        self.detail_model()?.media.links().first().cloned()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
        self.clamp_scroll();
    }

    /// Half the pane height, at least one line.
    pub fn page_size(&self) -> usize {
        (self.detail_visible_lines / 2).max(1)
    }

    pub fn clamp_scroll(&mut self) {
        let max_scroll = self
            .detail_line_count
            .saturating_sub(self.detail_visible_lines);
        self.detail_scroll = self.detail_scroll.min(max_scroll).min(MAX_SCROLL);
    }

    // ------------------------------------------------------------------------
    // Status bar
    // ------------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.show_status(msg.into(), StatusKind::Info);
    }

    pub fn set_error(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.show_status(msg.into(), StatusKind::Error);
    }

    fn show_status(&mut self, text: Cow<'static, str>, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text,
            kind,
            shown_at: Instant::now(),
        });
        self.needs_redraw = true;
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|m| m.shown_at.elapsed().as_secs() >= STATUS_TTL_SECS);
        if expired {
            self.status_message = None;
        }
        expired
    }
}

/// Abort the feed load if the app goes away first.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.load_handle.take() {
            handle.abort();
            tracing::debug!("Aborted feed load task on App drop");
        }
    }
}
