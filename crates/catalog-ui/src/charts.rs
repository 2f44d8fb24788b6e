//! Chart panels for the dashboard pages.
//!
//! Each `render_*` function draws one bordered panel into `area`.  Callers
//! pick [`render_no_data`] or [`render_failed`] instead when the summary is
//! empty or its view could not be computed.

use ratatui::{
    layout::{Direction, Rect},
    symbols,
    text::{Line, Span, Text},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
    Frame,
};

use catalog_core::formatting::format_count;
use catalog_data::summary::{CategorySummary, YearlySummary};
use unicode_width::UnicodeWidthStr;

use crate::components::share_bar::{truncate_to_width, ShareBar, ShareBarConfig};
use crate::themes::Theme;

/// Widest bar label, in terminal columns.
pub const MAX_LABEL_WIDTH: usize = 18;

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.separator)
        .title(Span::styled(format!(" {title} "), theme.bold))
}

// ── Category bars ─────────────────────────────────────────────────────────────

/// Horizontal bar chart, one bar per entry, in summary order.
pub fn render_category_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    summary: &CategorySummary,
    theme: &Theme,
) {
    let bars: Vec<Bar> = summary
        .entries()
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.count)
                .label(Line::from(truncate_to_width(&entry.label, MAX_LABEL_WIDTH)))
                .text_value(format_count(entry.count))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title, theme))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(theme.bar)
        .value_style(theme.bar_value)
        .label_style(theme.bar_label);

    frame.render_widget(chart, area);
}

// ── Shares ────────────────────────────────────────────────────────────────────

/// Part-of-whole panel: one share bar per entry plus a total line.
pub fn render_share_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    summary: &CategorySummary,
    theme: &Theme,
) {
    let total = summary.total();
    let label_width = summary
        .entries()
        .iter()
        .map(|e| e.label.width())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    // Percentage, count and borders take about 24 columns beside the label.
    let bar_width = area
        .width
        .saturating_sub(label_width as u16 + 24)
        .clamp(5, 50);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for entry in summary.entries() {
        let config = ShareBarConfig {
            width: bar_width,
            label_width,
            ..ShareBarConfig::default()
        };
        lines.push(
            ShareBar::new(&entry.label, entry.count, total, theme)
                .with_config(config)
                .to_line(),
        );
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total titles: ", theme.label),
        Span::styled(format_count(total), theme.value),
    ]));

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(panel(title, theme)),
        area,
    );
}

// ── Yearly lines ──────────────────────────────────────────────────────────────

/// Points of one line in chart coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Convert the yearly summary into one [`LineSeries`] per content type.
pub fn line_series(summary: &YearlySummary) -> Vec<LineSeries> {
    summary
        .series()
        .into_iter()
        .map(|s| LineSeries {
            name: s.kind,
            points: s
                .points
                .into_iter()
                .map(|(year, count)| (year as f64, count as f64))
                .collect(),
        })
        .collect()
}

/// X bounds for `summary`, widened by one year each side when it spans a
/// single year so the axis never collapses.
pub fn year_bounds(summary: &YearlySummary) -> [f64; 2] {
    match summary.year_range() {
        Some((first, last)) if first == last => [(first - 1) as f64, (last + 1) as f64],
        Some((first, last)) => [first as f64, last as f64],
        None => [0.0, 1.0],
    }
}

/// Y upper bound: the largest single count, never below one.
pub fn count_ceiling(summary: &YearlySummary) -> f64 {
    summary
        .entries()
        .iter()
        .map(|e| e.count)
        .max()
        .unwrap_or(0)
        .max(1) as f64
}

/// Line chart with one line per content type, years on the x axis.
pub fn render_yearly_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    summary: &YearlySummary,
    theme: &Theme,
) {
    let series = line_series(summary);
    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme.series_style(i))
                .data(&s.points)
        })
        .collect();

    let [x_min, x_max] = year_bounds(summary);
    let y_max = count_ceiling(summary);
    let x_labels = vec![
        format!("{}", x_min as i32),
        format!("{}", ((x_min + x_max) / 2.0).round() as i32),
        format!("{}", x_max as i32),
    ];
    let y_labels = vec![
        "0".to_string(),
        format_count((y_max / 2.0).round() as u64),
        format_count(y_max as u64),
    ];

    let chart = Chart::new(datasets)
        .block(panel(title, theme))
        .x_axis(
            Axis::default()
                .title(Span::styled("Year added", theme.label))
                .style(theme.axis)
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Titles", theme.label))
                .style(theme.axis)
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

// ── Placeholders ──────────────────────────────────────────────────────────────

/// Placeholder for a view whose summary has no entries.
pub fn render_no_data(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No data", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The dataset has no values for this chart.",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(panel(title, theme)),
        area,
    );
}

/// Placeholder for a view that failed, showing the error message.
pub fn render_failed(frame: &mut Frame, area: Rect, title: &str, error: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Chart unavailable", theme.error)),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text))
            .wrap(Wrap { trim: true })
            .block(panel(title, theme)),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
