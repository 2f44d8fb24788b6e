use crate::themes::Theme;
use catalog_core::formatting::{format_count, format_share, percentage};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration controlling visual appearance of a share bar.
pub struct ShareBarConfig {
    /// Width in terminal columns of the bar portion.
    pub width: u16,
    /// Columns reserved for the category label in front of the bar.
    pub label_width: usize,
    pub filled_char: char,
    pub empty_char: char,
}

impl Default for ShareBarConfig {
    fn default() -> Self {
        Self {
            width: 30,
            label_width: 10,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── ShareBar ──────────────────────────────────────────────────────────────────

/// One category's slice of a whole, drawn as a horizontal bar.
///
/// Renders as `label  ████░░░░ 69.6% (6,131)`.  Used in place of a pie chart
/// for the type distribution.
pub struct ShareBar<'a> {
    pub label: &'a str,
    pub count: u64,
    pub total: u64,
    pub theme: &'a Theme,
    pub config: ShareBarConfig,
}

impl<'a> ShareBar<'a> {
    pub fn new(label: &'a str, count: u64, total: u64, theme: &'a Theme) -> Self {
        Self {
            label,
            count,
            total,
            theme,
            config: ShareBarConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ShareBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the bar as a single [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        let pct = percentage(self.count as f64, self.total as f64, 1).min(100.0);
        let filled = ((pct / 100.0) * self.config.width as f64).round() as u16;
        let filled = filled.min(self.config.width);
        let empty = self.config.width - filled;

        let filled_str: String =
            std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let empty_str: String =
            std::iter::repeat_n(self.config.empty_char, empty as usize).collect();

        Line::from(vec![
            Span::styled(
                format!("{} ", pad_to_width(self.label, self.config.label_width)),
                self.theme.label,
            ),
            Span::styled(filled_str, self.theme.share_filled),
            Span::styled(empty_str, self.theme.share_empty),
            Span::styled(
                format!(" {:>6}", format_share(self.count, self.total)),
                self.theme.value,
            ),
            Span::styled(format!(" ({})", format_count(self.count)), self.theme.dim),
        ])
    }
}

// ── Width helpers ─────────────────────────────────────────────────────────────

/// Shorten `text` to at most `max` terminal columns, ending with `…` when
/// anything was cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad `text` to exactly `width` terminal columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
