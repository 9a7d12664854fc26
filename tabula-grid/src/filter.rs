//! Search filtering over record fields.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use tabula_core::Record;

/// How the search query is matched against field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring match. Preserves input order.
    #[default]
    Substring,
    /// Fuzzy match via nucleo-matcher. Results ordered by descending score.
    Fuzzy,
}

/// Filter `data` down to the indices whose searched fields match `query`.
///
/// An empty query is the identity: every index is returned in order. Null
/// or absent fields render as the empty string and never match a non-empty
/// query.
///
/// `Substring` mode preserves the relative order of `data`. `Fuzzy` mode
/// orders matches by descending score, ties keeping input order.
pub fn filter(data: &[Record], query: &str, fields: &[String], mode: SearchMode) -> Vec<usize> {
    if query.is_empty() {
        return (0..data.len()).collect();
    }
    match mode {
        SearchMode::Substring => substring_filter(data, query, fields),
        SearchMode::Fuzzy => fuzzy_filter(data, query, fields),
    }
}

fn substring_filter(data: &[Record], query: &str, fields: &[String]) -> Vec<usize> {
    let needle = query.to_lowercase();
    data.iter()
        .enumerate()
        .filter(|(_, record)| {
            fields.iter().any(|field| {
                let text = record.display_string(field);
                !text.is_empty() && text.to_lowercase().contains(&needle)
            })
        })
        .map(|(index, _)| index)
        .collect()
}

fn fuzzy_filter(data: &[Record], query: &str, fields: &[String]) -> Vec<usize> {
    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<(usize, u32)> = data
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            // Best score across the searched fields.
            let score = fields
                .iter()
                .filter_map(|field| {
                    let text = record.display_string(field);
                    if text.is_empty() {
                        return None;
                    }
                    let mut buf = Vec::new();
                    let haystack = Utf32Str::new(&text, &mut buf);
                    pattern.score(haystack, &mut matcher)
                })
                .max()?;
            Some((index, score))
        })
        .collect();

    // Stable sort keeps input order for equal scores.
    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.into_iter().map(|(index, _)| index).collect()
}
