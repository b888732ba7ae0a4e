use std::cmp::Reverse;

use crate::player::models::{PlayerRecord, RankedEntry};

/// Orders `members` and assigns 1-based rank positions.
///
/// Points descending, then display name ascending (case-insensitive), then
/// identity ascending. Identity is unique, so the order is total and only
/// depends on the member set, never on the input order.
pub fn rank<'a>(members: impl IntoIterator<Item = &'a PlayerRecord>) -> Vec<RankedEntry> {
    let mut ordered: Vec<&PlayerRecord> = members.into_iter().collect();

    ordered.sort_by_cached_key(|player| {
        (
            Reverse(player.points),
            player.display_name.to_lowercase(),
            player.identity.clone(),
        )
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, player)| RankedEntry {
            player: player.clone(),
            rank_position: index + 1,
        })
        .collect()
}
