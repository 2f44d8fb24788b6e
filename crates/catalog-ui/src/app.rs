//! Main application state and TUI event loop for Catalog Insights.
//!
//! [`App`] owns the theme, the current page, and the report it draws.  The
//! report is computed once before the loop starts; key presses only change
//! which page is shown and where the data preview is scrolled.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};

use catalog_core::models::CatalogTable;
use catalog_runtime::report::{ChartOutcome, DashboardReport, ViewKind};

use crate::charts;
use crate::components::header::Header;
use crate::narrative;
use crate::table_view;
use crate::themes::Theme;

/// Rows moved by PageUp / PageDown on the data page.
const PAGE_SCROLL: usize = 20;

// ── Page ──────────────────────────────────────────────────────────────────────

/// One screen of the dashboard story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Catalog make-up and producing countries.
    Story,
    /// Additions per year by type.
    Timeline,
    /// Rating distribution.
    Audience,
    /// Most prolific directors.
    Talent,
    /// Key metrics and raw record preview.
    Data,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Story,
        Page::Timeline,
        Page::Audience,
        Page::Talent,
        Page::Data,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Story => "Story",
            Page::Timeline => "Timeline",
            Page::Audience => "Audience",
            Page::Talent => "Talent",
            Page::Data => "Data",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Story => 0,
            Page::Timeline => 1,
            Page::Audience => 2,
            Page::Talent => 3,
            Page::Data => 4,
        }
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Page bound to the digit key `c` (`'1'` is the first page).
    pub fn from_digit(c: char) -> Option<Page> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the Catalog Insights TUI.
pub struct App {
    pub theme: Theme,
    pub page: Page,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// First record shown on the data page.
    pub data_offset: usize,
    report: DashboardReport,
    table: Arc<CatalogTable>,
    /// Short dataset name for the header.
    source_label: String,
}

impl App {
    pub fn new(theme_name: &str, report: DashboardReport, table: Arc<CatalogTable>) -> Self {
        let source_label = report
            .source
            .as_deref()
            .map(|s| {
                Path::new(s)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| s.to_string())
            })
            .unwrap_or_else(|| "in-memory".to_string());

        Self {
            theme: Theme::from_name(theme_name),
            page: Page::Story,
            should_quit: false,
            data_offset: 0,
            report,
            table,
            source_label,
        }
    }

    pub fn report(&self) -> &DashboardReport {
        &self.report
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard until `q`, `Q`, or `Ctrl+C` is pressed.
    ///
    /// Raw mode turns Ctrl+C into a key event, so it is handled by
    /// [`App::handle_key`] rather than by a signal handler.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let guard = TerminalGuard::new(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e);
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => self.handle_key(key),
                    Ok(_) => {}
                    Err(e) => break Err(e),
                },
                Ok(false) => {}
                Err(e) => break Err(e),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        drop(guard);
        result
    }

    /// Apply one key press to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.page = self.page.next(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.page = self.page.prev(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(page) = Page::from_digit(c) {
                    self.page = page;
                }
            }
            code if self.page == Page::Data => self.scroll(code),
            _ => {}
        }
    }

    fn scroll(&mut self, code: KeyCode) {
        let max = self.table.len().saturating_sub(1);
        self.data_offset = match code {
            KeyCode::Down | KeyCode::Char('j') => self.data_offset.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.data_offset.saturating_sub(1),
            KeyCode::PageDown => self.data_offset.saturating_add(PAGE_SCROLL),
            KeyCode::PageUp => self.data_offset.saturating_sub(PAGE_SCROLL),
            KeyCode::Home => 0,
            KeyCode::End => max,
            _ => self.data_offset,
        }
        .min(max);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let [header_area, tabs_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = Header::new(&self.source_label, &self.report.overview, &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), header_area);

        let titles: Vec<String> = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{} {}", i + 1, p.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.page.index())
            .style(self.theme.tab_inactive)
            .highlight_style(self.theme.tab_active)
            .divider(Span::styled(" | ", self.theme.separator));
        frame.render_widget(tabs, tabs_area);

        match self.page {
            Page::Story => {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                        .areas(body_area);
                self.render_view(frame, left, ViewKind::TypeDistribution);
                self.render_view(frame, right, ViewKind::TopCountries);
            }
            Page::Timeline => self.render_view(frame, body_area, ViewKind::YearlyAdditions),
            Page::Audience => self.render_view(frame, body_area, ViewKind::TopRatings),
            Page::Talent => self.render_view(frame, body_area, ViewKind::TopDirectors),
            Page::Data => table_view::render_data_view(
                frame,
                body_area,
                &self.table,
                &self.report.overview,
                self.data_offset,
                &self.theme,
            ),
        }

        let hint = match self.page {
            Page::Data => "←/→ page  1-5 jump  ↑/↓ PgUp/PgDn scroll  q quit",
            _ => "←/→ page  1-5 jump  q quit",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, self.theme.dim))),
            footer_area,
        );
    }

    /// Draw one view's chart (or placeholder) with its caption below.
    fn render_view(&self, frame: &mut Frame, area: Rect, kind: ViewKind) {
        let [chart_area, caption_area] =
            Layout::vertical([Constraint::Min(6), Constraint::Length(5)]).areas(area);
        let title = kind.title();

        let caption = match kind {
            ViewKind::YearlyAdditions => match &self.report.yearly_additions {
                ChartOutcome::Ready(summary) if summary.is_empty() => {
                    charts::render_no_data(frame, chart_area, title, &self.theme);
                    narrative::yearly_caption(summary)
                }
                ChartOutcome::Ready(summary) => {
                    charts::render_yearly_chart(frame, chart_area, title, summary, &self.theme);
                    narrative::yearly_caption(summary)
                }
                ChartOutcome::Failed { error } => {
                    charts::render_failed(frame, chart_area, title, error, &self.theme);
                    vec![
                        "Some date_added values could not be read.".to_string(),
                        "Run with --date-policy skip to chart the readable rows.".to_string(),
                    ]
                }
            },
            _ => {
                let Some(outcome) = self.report.category(kind) else {
                    return;
                };
                match outcome {
                    ChartOutcome::Ready(summary) if summary.is_empty() => {
                        charts::render_no_data(frame, chart_area, title, &self.theme);
                    }
                    ChartOutcome::Ready(summary) if kind == ViewKind::TypeDistribution => {
                        charts::render_share_chart(frame, chart_area, title, summary, &self.theme);
                    }
                    ChartOutcome::Ready(summary) => {
                        charts::render_category_chart(
                            frame,
                            chart_area,
                            title,
                            summary,
                            &self.theme,
                        );
                    }
                    ChartOutcome::Failed { error } => {
                        charts::render_failed(frame, chart_area, title, error, &self.theme);
                    }
                }
                match (kind, outcome.ready()) {
                    (_, None) => Vec::new(),
                    (ViewKind::TypeDistribution, Some(s)) => narrative::type_caption(s),
                    (ViewKind::TopCountries, Some(s)) => narrative::countries_caption(s),
                    (ViewKind::TopRatings, Some(s)) => narrative::ratings_caption(s),
                    (_, Some(s)) => narrative::directors_caption(s),
                }
            }
        };

        let lines: Vec<Line> = caption
            .into_iter()
            .map(|s| Line::from(Span::styled(s, self.theme.caption)))
            .collect();
        frame.render_widget(
            Paragraph::new(Text::from(lines))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.theme.separator)
                        .title(" Insight "),
                ),
            caption_area,
        );
    }
}

// ── Terminal restore ─────────────────────────────────────────────────────────

/// Runs `restore` when dropped, so every exit from [`App::run`] after raw
/// mode is enabled leaves the terminal usable.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave the alternate screen, show the cursor and disable raw mode.
///
/// Errors are ignored: this also runs while unwinding from a failed setup.
fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

// ── Tests ──────────────────────────────────────────────────────────────────────
