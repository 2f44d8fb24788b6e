//! Short captions that describe what each chart shows.
//!
//! Every sentence is derived from the summary it sits under, so the text
//! stays true when the dataset changes.

use catalog_core::formatting::{format_count, format_share};
use catalog_data::summary::{CategorySummary, YearlySummary};

const NO_DATA: &str = "Nothing to describe yet.";

/// Caption for the type distribution.
pub fn type_caption(summary: &CategorySummary) -> Vec<String> {
    let total = summary.total();
    let Some(leader) = summary.leader() else {
        return vec![NO_DATA.to_string()];
    };

    let mut lines = vec![format!(
        "{} makes up {} of the catalog ({} of {} titles).",
        leader.label,
        format_share(leader.count, total),
        format_count(leader.count),
        format_count(total)
    )];

    let rest: Vec<String> = summary.entries()[1..]
        .iter()
        .map(|e| format!("{} {}", e.label, format_share(e.count, total)))
        .collect();
    if !rest.is_empty() {
        lines.push(format!("The remainder: {}.", rest.join(", ")));
    }
    lines
}

/// Caption for the top producing countries.
pub fn countries_caption(summary: &CategorySummary) -> Vec<String> {
    ranked_caption(summary, "countries", "titles produced")
}

/// Caption for the most common ratings.
pub fn ratings_caption(summary: &CategorySummary) -> Vec<String> {
    ranked_caption(summary, "ratings", "titles rated")
}

/// Caption for the most prolific directors.
pub fn directors_caption(summary: &CategorySummary) -> Vec<String> {
    ranked_caption(summary, "directors", "titles directed")
}

fn ranked_caption(summary: &CategorySummary, noun: &str, verb_phrase: &str) -> Vec<String> {
    let Some(leader) = summary.leader() else {
        return vec![NO_DATA.to_string()];
    };
    let total = summary.total();

    let mut lines = vec![format!(
        "{} leads with {} {}, {} of the top {} {}.",
        leader.label,
        format_count(leader.count),
        verb_phrase,
        format_share(leader.count, total),
        summary.len(),
        noun
    )];

    let followers: Vec<String> = summary
        .entries()
        .iter()
        .skip(1)
        .take(2)
        .map(|e| format!("{} ({})", e.label, format_count(e.count)))
        .collect();
    match followers.as_slice() {
        [] => {}
        [one] => lines.push(format!("Followed by {one}.")),
        [first, second, ..] => lines.push(format!("Followed by {first} and {second}.")),
    }
    lines
}

/// Caption for additions per year.
pub fn yearly_caption(summary: &YearlySummary) -> Vec<String> {
    let Some((first, last)) = summary.year_range() else {
        return vec![NO_DATA.to_string()];
    };

    // Peak across all types combined; earliest year wins a tie.
    let mut peak: Option<(i32, u64)> = None;
    for year in first..=last {
        let added: u64 = summary
            .entries()
            .iter()
            .filter(|e| e.year == year)
            .map(|e| e.count)
            .sum();
        if peak.is_none_or(|(_, best)| added > best) {
            peak = Some((year, added));
        }
    }

    let mut lines = Vec::new();
    if let Some((year, added)) = peak {
        lines.push(format!(
            "Additions peaked in {year} with {} titles.",
            format_count(added)
        ));
    }
    lines.push(if first == last {
        format!("All dated additions fall in {first}.")
    } else {
        format!(
            "{} titles were added between {first} and {last}.",
            format_count(summary.total())
        )
    });
    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
