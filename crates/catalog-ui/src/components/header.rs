use crate::themes::Theme;
use catalog_core::formatting::format_count;
use catalog_data::overview::CatalogOverview;
use ratatui::text::{Line, Span};

/// Decoration placed either side of the application title.
pub const MARQUEE: &str = "▶ ▷ ▶";

/// Dashboard header rendering three lines:
///
/// 1. Application title with marquee decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Dataset information in `[ source | N titles | first-last ]` format.
pub struct Header<'a> {
    /// File name (or path) of the loaded dataset.
    pub source: &'a str,
    /// Headline totals for the loaded table.
    pub overview: &'a CatalogOverview,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(source: &'a str, overview: &'a CatalogOverview, theme: &'a Theme) -> Self {
        Self {
            source,
            overview,
            theme,
        }
    }

    /// Render the header as exactly three lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        let span = match (self.overview.first_year_added, self.overview.last_year_added) {
            (Some(first), Some(last)) if first == last => first.to_string(),
            (Some(first), Some(last)) => format!("{first}-{last}"),
            _ => "no dates".to_string(),
        };

        vec![
            Line::from(vec![
                Span::styled(MARQUEE, self.theme.header_accent),
                Span::styled(" CATALOG INSIGHTS ", self.theme.header),
                Span::styled(MARQUEE, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.source, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(
                    format!("{} titles", format_count(self.overview.total_titles)),
                    self.theme.value,
                ),
                Span::styled(" | ", self.theme.label),
                Span::styled(span, self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_overview() -> CatalogOverview {
        CatalogOverview {
            total_titles: 8807,
            first_year_added: Some(2008),
            last_year_added: Some(2021),
            ..CatalogOverview::default()
        }
    }

    #[test]
    fn test_header_line_count() {
        let theme = Theme::dark();
        let overview = sample_overview();
        let lines = Header::new("titles.csv", &overview, &theme).to_lines();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_header_title_line() {
        let theme = Theme::dark();
        let overview = sample_overview();
        let lines = Header::new("titles.csv", &overview, &theme).to_lines();
        let title = line_text(&lines[0]);
        assert!(title.contains("CATALOG INSIGHTS"), "got: {title}");
        assert!(title.starts_with(MARQUEE));
    }

    #[test]
    fn test_header_separator_width() {
        let theme = Theme::dark();
        let overview = sample_overview();
        let lines = Header::new("titles.csv", &overview, &theme).to_lines();
        let sep = line_text(&lines[1]);
        assert_eq!(sep.chars().count(), 60);
        assert!(sep.chars().all(|c| c == '='));
    }

    #[test]
    fn test_header_info_line() {
        let theme = Theme::dark();
        let overview = sample_overview();
        let lines = Header::new("titles.csv", &overview, &theme).to_lines();
        assert_eq!(line_text(&lines[2]), "[ titles.csv | 8,807 titles | 2008-2021 ]");
    }

    #[test]
    fn test_header_without_dates() {
        let theme = Theme::dark();
        let overview = CatalogOverview::default();
        let lines = Header::new("empty.csv", &overview, &theme).to_lines();
        assert_eq!(line_text(&lines[2]), "[ empty.csv | 0 titles | no dates ]");
    }

    #[test]
    fn test_header_single_year() {
        let theme = Theme::dark();
        let overview = CatalogOverview {
            total_titles: 2,
            first_year_added: Some(2019),
            last_year_added: Some(2019),
            ..CatalogOverview::default()
        };
        let lines = Header::new("a.csv", &overview, &theme).to_lines();
        assert!(line_text(&lines[2]).contains("| 2019 ]"));
    }
}
