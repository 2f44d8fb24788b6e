//! Raw data page: headline metrics above a scrollable preview of records.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use catalog_core::formatting::format_count;
use catalog_core::models::{CatalogRecord, CatalogTable};
use catalog_data::overview::CatalogOverview;

use crate::components::share_bar::truncate_to_width;
use crate::themes::Theme;

/// Column headings of the preview table.
pub const PREVIEW_COLUMNS: [&str; 7] = [
    "ID", "Type", "Title", "Country", "Added", "Director", "Rating",
];

/// Shown in place of a missing value.
const MISSING: &str = "-";

/// Display strings for one record, parallel to [`PREVIEW_COLUMNS`].
pub fn preview_cells(record: &CatalogRecord) -> [String; 7] {
    [
        record.show_id.clone(),
        record.kind.label().to_string(),
        truncate_to_width(record.title.as_deref().unwrap_or(MISSING), 32),
        truncate_to_width(record.country.as_deref().unwrap_or(MISSING), 20),
        record.date_added.clone(),
        truncate_to_width(record.director.as_deref().unwrap_or(MISSING), 24),
        record.rating.clone().unwrap_or_else(|| MISSING.to_string()),
    ]
}

/// Clamp a scroll offset so at least one row stays visible.
pub fn clamp_offset(offset: usize, total_rows: usize) -> usize {
    offset.min(total_rows.saturating_sub(1))
}

/// Key metrics as `label value` pairs on one line.
pub fn overview_line<'a>(overview: &CatalogOverview, theme: &Theme) -> Line<'a> {
    let years = match (overview.first_year_added, overview.last_year_added) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => MISSING.to_string(),
    };
    let pairs = [
        ("Titles", format_count(overview.total_titles)),
        ("Countries", format_count(overview.distinct_countries)),
        ("Directors", format_count(overview.distinct_directors)),
        ("Ratings", format_count(overview.distinct_ratings)),
        ("Years", years),
        ("Undated", format_count(overview.undated_titles)),
    ];

    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (i, (label, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", theme.separator));
        }
        spans.push(Span::styled(format!("{label} "), theme.label));
        spans.push(Span::styled(value, theme.value));
    }
    Line::from(spans)
}

/// Render the metrics line and the record preview starting at `offset`.
pub fn render_data_view(
    frame: &mut Frame,
    area: Rect,
    table: &CatalogTable,
    overview: &CatalogOverview,
    offset: usize,
    theme: &Theme,
) {
    let [metrics_area, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(overview_line(overview, theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.separator)
                .title(" Key metrics "),
        ),
        metrics_area,
    );

    if table.is_empty() {
        render_no_rows(frame, table_area, theme);
        return;
    }

    let header_cells = PREVIEW_COLUMNS
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    // Borders and header take three rows.
    let visible = table_area.height.saturating_sub(3) as usize;
    let start = clamp_offset(offset, table.len());
    let rows: Vec<Row> = table
        .records()
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, record)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(preview_cells(record).map(Cell::from)).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(20),
        Constraint::Length(11),
        Constraint::Length(24),
        Constraint::Length(9),
    ];

    let title = format!(
        " Records {}-{} of {} ",
        format_count(start as u64 + 1),
        format_count((start + rows.len()) as u64),
        format_count(table.len() as u64)
    );

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.separator)
                .title(title),
        )
        .style(theme.text);

    frame.render_widget(widget, table_area);
}

fn render_no_rows(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No records loaded", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The dataset file contains a header but no rows.",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.separator)
                .title(" Records "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
