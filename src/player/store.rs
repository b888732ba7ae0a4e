use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info, instrument, warn};

use super::{errors::LeaderboardError, models::PlayerRecord, repository::PlayerRepository};

/// Canonical set of player records, keyed by identity.
///
/// Writers hold the write lock across the durable write and the in-memory
/// apply, so a reader sees a mutation either completely or not at all.
pub struct PlayerStore {
    players: RwLock<HashMap<String, PlayerRecord>>,
    repository: Arc<dyn PlayerRepository>,
}

/// Consistent read-only view of the store, held under the read lock
pub struct StoreView<'a> {
    players: RwLockReadGuard<'a, HashMap<String, PlayerRecord>>,
}

impl StoreView<'_> {
    /// Records in no particular order
    pub fn all(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values()
    }

    pub fn get(&self, identity: &str) -> Option<&PlayerRecord> {
        self.players.get(identity)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerStore {
    /// Creates an empty store in front of `repository`
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
            repository,
        }
    }

    /// Creates a store hydrated from a full scan of `repository`
    #[instrument(skip(repository))]
    pub async fn load(repository: Arc<dyn PlayerRepository>) -> Result<Self, LeaderboardError> {
        let records = repository.list_players().await?;
        let mut players = HashMap::with_capacity(records.len());
        for record in records {
            if let Some(previous) = players.insert(record.identity.clone(), record) {
                warn!(identity = %previous.identity, "Repository returned duplicate identity, keeping last");
            }
        }

        info!(player_count = players.len(), "Player store loaded");
        Ok(Self {
            players: RwLock::new(players),
            repository,
        })
    }

    pub async fn view(&self) -> StoreView<'_> {
        StoreView {
            players: self.players.read().await,
        }
    }

    #[instrument(skip(self, record), fields(identity = %record.identity))]
    pub async fn add(&self, record: PlayerRecord) -> Result<(), LeaderboardError> {
        record.validate()?;

        let mut players = self.players.write().await;
        if players.contains_key(&record.identity) {
            warn!("Player identity already present");
            return Err(LeaderboardError::DuplicateIdentity(record.identity));
        }

        self.repository.upsert_player(&record).await?;
        players.insert(record.identity.clone(), record);

        debug!(player_count = players.len(), "Player added to store");
        Ok(())
    }

    /// Removes the record for `identity` and returns it
    #[instrument(skip(self))]
    pub async fn remove(&self, identity: &str) -> Result<PlayerRecord, LeaderboardError> {
        let mut players = self.players.write().await;
        if !players.contains_key(identity) {
            warn!("Player not found for removal");
            return Err(LeaderboardError::NotFound(format!("player {identity}")));
        }

        self.repository.delete_player(identity).await?;
        let removed = players
            .remove(identity)
            .ok_or_else(|| LeaderboardError::NotFound(format!("player {identity}")))?;

        debug!(player_count = players.len(), "Player removed from store");
        Ok(removed)
    }

    pub async fn get(&self, identity: &str) -> Option<PlayerRecord> {
        self.players.read().await.get(identity).cloned()
    }

    pub async fn all(&self) -> Vec<PlayerRecord> {
        self.players.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.players.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::repository::InMemoryPlayerRepository;
    use crate::shared::test_utils::UnreliablePlayerRepository;

    fn player(identity: &str) -> PlayerRecord {
        PlayerRecord::new(identity, format!("name-{identity}"), "NA")
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let store = PlayerStore::new(Arc::new(InMemoryPlayerRepository::new()));
        store.add(player("p1")).await.unwrap();

        let found = store.get("p1").await.unwrap();
        assert_eq!(found.display_name, "name-p1");
        assert!(store.get("p2").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_identity_rejected() {
        let store = PlayerStore::new(Arc::new(InMemoryPlayerRepository::new()));
        store.add(player("p1")).await.unwrap();

        let second = PlayerRecord::new("p1", "someone else", "EU");
        let result = store.add(second).await;
        assert_eq!(
            result,
            Err(LeaderboardError::DuplicateIdentity("p1".to_string()))
        );
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("p1").await.unwrap().display_name, "name-p1");
    }

    #[tokio::test]
    async fn test_remove_missing_leaves_store_unchanged() {
        let store = PlayerStore::new(Arc::new(InMemoryPlayerRepository::new()));
        store.add(player("p1")).await.unwrap();
        let before = store.all().await;

        let result = store.remove("nonexistent").await;
        assert!(matches!(result, Err(LeaderboardError::NotFound(_))));
        assert_eq!(store.all().await, before);
    }

    #[tokio::test]
    async fn test_remove_returns_record() {
        let store = PlayerStore::new(Arc::new(InMemoryPlayerRepository::new()));
        store.add(player("p1")).await.unwrap();

        let removed = store.remove("p1").await.unwrap();
        assert_eq!(removed.identity, "p1");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalid_record_rejected_before_storage() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let store = PlayerStore::new(repo.clone());

        let result = store.add(PlayerRecord::new("p1", "", "NA")).await;
        assert!(matches!(result, Err(LeaderboardError::Validation(_))));
        assert_eq!(repo.player_count().await, 0);
    }

    #[tokio::test]
    async fn test_writes_through_to_repository() {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        let store = PlayerStore::new(repo.clone());

        store.add(player("p1")).await.unwrap();
        store.add(player("p2")).await.unwrap();
        assert_eq!(repo.player_count().await, 2);

        store.remove("p1").await.unwrap();
        assert_eq!(repo.player_count().await, 1);
    }

    #[tokio::test]
    async fn test_load_hydrates_from_repository() {
        let repo = Arc::new(InMemoryPlayerRepository::with_players(vec![
            player("p1"),
            player("p2"),
        ]));

        let store = PlayerStore::load(repo).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert!(store.get("p2").await.is_some());
    }

    #[tokio::test]
    async fn test_storage_failure_on_add_applies_nothing() {
        let store = PlayerStore::new(Arc::new(UnreliablePlayerRepository::unavailable()));

        let result = store.add(player("p1")).await;
        assert!(matches!(
            result,
            Err(LeaderboardError::StorageUnavailable(_))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_storage_failure_on_remove_keeps_player() {
        let repo = Arc::new(UnreliablePlayerRepository::default());
        let store = PlayerStore::new(repo.clone());
        store.add(player("p1")).await.unwrap();

        repo.set_available(false);
        let result = store.remove("p1").await;
        assert!(matches!(
            result,
            Err(LeaderboardError::StorageUnavailable(_))
        ));
        assert!(store.get("p1").await.is_some());

        repo.set_available(true);
        store.remove("p1").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_load_propagates_storage_failure() {
        let result = PlayerStore::load(Arc::new(UnreliablePlayerRepository::unavailable())).await;
        assert!(matches!(
            result,
            Err(LeaderboardError::StorageUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_view_is_consistent_snapshot() {
        let store = PlayerStore::new(Arc::new(InMemoryPlayerRepository::new()));
        store.add(player("p1")).await.unwrap();
        store.add(player("p2")).await.unwrap();

        let view = store.view().await;
        assert_eq!(view.len(), 2);
        assert_eq!(view.all().count(), 2);
        assert!(view.get("p1").is_some());
        assert!(!view.is_empty());
    }
}
