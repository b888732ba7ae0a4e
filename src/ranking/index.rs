use super::CategoryKey;
use crate::player::models::PlayerRecord;

/// Lazily yields the members of `category` out of `players`.
///
/// "overall" yields every player; any other key yields exactly the players
/// holding a badge for it. Order follows the input and carries no meaning.
pub fn members_of<'a>(
    players: impl IntoIterator<Item = &'a PlayerRecord>,
    category: CategoryKey,
) -> impl Iterator<Item = &'a PlayerRecord> {
    players
        .into_iter()
        .filter(move |player| category.is_overall() || player.has_badge(category))
}
