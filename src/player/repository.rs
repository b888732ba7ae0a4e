use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::{
    errors::LeaderboardError,
    models::{Badge, PlayerRecord},
};

/// Durable storage for player records.
///
/// The store calls `upsert_player`/`delete_player` before applying a change in
/// memory, so a failure here leaves every view untouched.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn upsert_player(&self, player: &PlayerRecord) -> Result<(), LeaderboardError>;
    /// Deleting an absent identity is not an error
    async fn delete_player(&self, identity: &str) -> Result<(), LeaderboardError>;
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, LeaderboardError>;
}

/// In-memory implementation of PlayerRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<HashMap<String, PlayerRecord>>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates an in-memory repository with pre-populated players
    pub fn with_players(players: Vec<PlayerRecord>) -> Self {
        let player_map = players
            .into_iter()
            .map(|player| (player.identity.clone(), player))
            .collect();

        Self {
            players: Arc::new(RwLock::new(player_map)),
        }
    }

    pub async fn player_count(&self) -> usize {
        self.players.read().await.len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player), fields(identity = %player.identity))]
    async fn upsert_player(&self, player: &PlayerRecord) -> Result<(), LeaderboardError> {
        let mut players = self.players.write().await;
        players.insert(player.identity.clone(), player.clone());
        debug!("Player upserted in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, identity: &str) -> Result<(), LeaderboardError> {
        let removed = self.players.write().await.remove(identity).is_some();
        debug!(removed, "Player deleted from memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, LeaderboardError> {
        let players = self.players.read().await;
        debug!(player_count = players.len(), "Listing players in memory");
        Ok(players.values().cloned().collect())
    }
}

/// PostgreSQL implementation of player repository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `players` table when it does not exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), LeaderboardError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS players (
                identity TEXT PRIMARY KEY,
                display_name TEXT NOT NULL,
                region TEXT NOT NULL,
                title TEXT NOT NULL DEFAULT '',
                points BIGINT NOT NULL DEFAULT 0,
                badges TEXT NOT NULL DEFAULT '[]'
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create players table");
            LeaderboardError::StorageUnavailable(e.to_string())
        })?;

        debug!("Players table ready");
        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    #[instrument(skip(self, player), fields(identity = %player.identity))]
    async fn upsert_player(&self, player: &PlayerRecord) -> Result<(), LeaderboardError> {
        debug!("Upserting player in database");

        let badges = serde_json::to_string(&player.badges)
            .map_err(|e| LeaderboardError::StorageUnavailable(e.to_string()))?;
        let points = i64::try_from(player.points).map_err(|_| {
            LeaderboardError::Validation(format!("points {} out of range", player.points))
        })?;

        sqlx::query(
            "INSERT INTO players (identity, display_name, region, title, points, badges)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (identity) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                region = EXCLUDED.region,
                title = EXCLUDED.title,
                points = EXCLUDED.points,
                badges = EXCLUDED.badges",
        )
        .bind(&player.identity)
        .bind(&player.display_name)
        .bind(&player.region)
        .bind(&player.title)
        .bind(points)
        .bind(badges)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to upsert player in database");
            LeaderboardError::StorageUnavailable(e.to_string())
        })?;

        debug!("Player upserted in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, identity: &str) -> Result<(), LeaderboardError> {
        let result = sqlx::query("DELETE FROM players WHERE identity = $1")
            .bind(identity)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to delete player from database");
                LeaderboardError::StorageUnavailable(e.to_string())
            })?;

        debug!(
            rows_affected = result.rows_affected(),
            "Player deleted from database"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerRecord>, LeaderboardError> {
        let rows = sqlx::query(
            "SELECT identity, display_name, region, title, points, badges FROM players",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list players from database");
            LeaderboardError::StorageUnavailable(e.to_string())
        })?;

        let mut players = Vec::with_capacity(rows.len());
        for row in rows {
            let identity: String = row.get("identity");
            let badges_raw: String = row.get("badges");
            let badges: Vec<Badge> = serde_json::from_str(&badges_raw).map_err(|e| {
                warn!(error = %e, identity = %identity, "Stored badges are not valid JSON");
                LeaderboardError::StorageUnavailable(e.to_string())
            })?;
            let points: i64 = row.get("points");

            let mut player = PlayerRecord {
                identity,
                display_name: row.get("display_name"),
                region: row.get("region"),
                title: row.get("title"),
                points: points.max(0) as u64,
                badges: Vec::new(),
            };
            player.set_badges(badges);
            players.push(player);
        }

        debug!(player_count = players.len(), "Players listed from database");
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{CategoryKey, Tier};

    fn create_test_player(identity: &str, name: &str) -> PlayerRecord {
        PlayerRecord::new(identity, name, "EU")
            .with_points(10)
            .with_badge(CategoryKey::Sword, Tier::Ht2)
    }

    #[tokio::test]
    async fn test_upsert_and_list() {
        let repo = InMemoryPlayerRepository::new();
        repo.upsert_player(&create_test_player("p1", "Alex"))
            .await
            .unwrap();
        repo.upsert_player(&create_test_player("p2", "Steve"))
            .await
            .unwrap();

        let players = repo.list_players().await.unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(repo.player_count().await, 2);
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_identity() {
        let repo = InMemoryPlayerRepository::new();
        repo.upsert_player(&create_test_player("p1", "Alex"))
            .await
            .unwrap();
        repo.upsert_player(&create_test_player("p1", "Alex Renamed"))
            .await
            .unwrap();

        let players = repo.list_players().await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].display_name, "Alex Renamed");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryPlayerRepository::with_players(vec![create_test_player("p1", "Alex")]);

        repo.delete_player("p1").await.unwrap();
        repo.delete_player("p1").await.unwrap();
        repo.delete_player("never-existed").await.unwrap();

        assert!(repo.list_players().await.unwrap().is_empty());
    }
}
