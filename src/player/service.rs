use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    errors::LeaderboardError,
    models::{PlayerRecord, RankedEntry, Region},
    store::PlayerStore,
    types::{AddPlayerRequest, StatsResponse},
};
use crate::admin::AdminGrant;
use crate::ranking::{filter_ranked, members_of, rank, search, CategoryKey};

/// Query and command surface of the leaderboard.
///
/// Every query ranks from one store view taken under the read lock, so the
/// result reflects every mutation completed before the call and none in
/// flight.
pub struct LeaderboardService {
    store: Arc<PlayerStore>,
}

impl LeaderboardService {
    pub fn new(store: Arc<PlayerStore>) -> Self {
        Self { store }
    }

    /// Adds a player. Visible in "overall" and in every badge category on the
    /// next read.
    #[instrument(skip(self, grant, request), fields(session_id = %grant.session_id()))]
    pub async fn add_player(
        &self,
        grant: &AdminGrant,
        request: AddPlayerRequest,
    ) -> Result<PlayerRecord, LeaderboardError> {
        let record = request.into_record().map_err(|e| {
            warn!(error = %e, "Rejected add request");
            e
        })?;
        if !Region::is_known(&record.region) {
            debug!(region = %record.region, "Region has no dedicated display style");
        }

        self.store.add(record.clone()).await?;

        info!(
            identity = %record.identity,
            display_name = %record.display_name,
            badge_count = record.badges.len(),
            "Player added"
        );
        Ok(record)
    }

    /// Removes a player from the store and therefore from every category
    #[instrument(skip(self, grant), fields(session_id = %grant.session_id()))]
    pub async fn remove_player(
        &self,
        grant: &AdminGrant,
        identity: &str,
    ) -> Result<PlayerRecord, LeaderboardError> {
        let removed = self.store.remove(identity).await?;
        info!(identity = %removed.identity, "Player removed");
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn list_category(&self, category: CategoryKey) -> Vec<RankedEntry> {
        let view = self.store.view().await;
        let ranked = rank(members_of(view.all(), category));
        debug!(category = %category, entries = ranked.len(), "Category ranked");
        ranked
    }

    /// Ranks the category, then filters by display name keeping positions
    #[instrument(skip(self))]
    pub async fn list_category_filtered(
        &self,
        category: CategoryKey,
        query: &str,
    ) -> Vec<RankedEntry> {
        filter_ranked(query, self.list_category(category).await)
    }

    pub async fn list_all(&self) -> Vec<RankedEntry> {
        self.list_category(CategoryKey::Overall).await
    }

    /// Unranked matches in overall order, for autocomplete
    #[instrument(skip(self))]
    pub async fn search(&self, text: &str) -> Vec<PlayerRecord> {
        let ordered: Vec<PlayerRecord> = self
            .list_all()
            .await
            .into_iter()
            .map(|entry| entry.player)
            .collect();
        let found = search(text, &ordered);
        debug!(matches = found.len(), "Search completed");
        found
    }

    /// Highest points across the store, 0 when empty
    pub async fn max_points(&self) -> u64 {
        let view = self.store.view().await;
        view.all().map(|player| player.points).max().unwrap_or(0)
    }

    pub async fn entry_count(&self) -> usize {
        self.store.len().await
    }

    /// Max points and entry count read from the same view
    pub async fn stats(&self) -> StatsResponse {
        let view = self.store.view().await;
        StatsResponse {
            max_points: view.all().map(|player| player.points).max().unwrap_or(0),
            entry_count: view.len(),
        }
    }

    pub async fn get_player(&self, identity: &str) -> Result<PlayerRecord, LeaderboardError> {
        self.store
            .get(identity)
            .await
            .ok_or_else(|| LeaderboardError::NotFound(format!("player {identity}")))
    }

    /// Position of one player inside `category`
    #[instrument(skip(self))]
    pub async fn player_rank(
        &self,
        identity: &str,
        category: CategoryKey,
    ) -> Result<RankedEntry, LeaderboardError> {
        let view = self.store.view().await;
        if view.get(identity).is_none() {
            return Err(LeaderboardError::NotFound(format!("player {identity}")));
        }

        rank(members_of(view.all(), category))
            .into_iter()
            .find(|entry| entry.player.identity == identity)
            .ok_or_else(|| {
                LeaderboardError::NotFound(format!("player {identity} in category {category}"))
            })
    }

    /// Every category ranked from the same point in time
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> BTreeMap<CategoryKey, Vec<RankedEntry>> {
        let view = self.store.view().await;
        CategoryKey::all()
            .into_iter()
            .map(|category| (category, rank(members_of(view.all(), category))))
            .collect()
    }
}
