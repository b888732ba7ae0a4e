use crate::player::models::{PlayerRecord, RankedEntry};

fn normalize(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn matches(needle: &str, display_name: &str) -> bool {
    display_name.to_lowercase().contains(needle)
}

/// Case-insensitive substring match on display name. A blank query returns
/// the corpus unchanged.
pub fn search<'a>(
    query: &str,
    corpus: impl IntoIterator<Item = &'a PlayerRecord>,
) -> Vec<PlayerRecord> {
    let needle = normalize(query);
    corpus
        .into_iter()
        .filter(|player| {
            needle
                .as_deref()
                .map_or(true, |needle| matches(needle, &player.display_name))
        })
        .cloned()
        .collect()
}

/// Filters an already ranked list, keeping each entry's rank position.
pub fn filter_ranked(query: &str, ranked: Vec<RankedEntry>) -> Vec<RankedEntry> {
    match normalize(query) {
        None => ranked,
        Some(needle) => ranked
            .into_iter()
            .filter(|entry| matches(&needle, &entry.player.display_name))
            .collect(),
    }
}
