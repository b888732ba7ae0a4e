use std::sync::Arc;

use tierboard::{
    AddPlayerRequest, AdminGate, AdminGrant, InMemoryPlayerRepository, LeaderboardService,
    PlayerStore, TokenConfig,
};

pub const TEST_PASSCODE: &str = "integration-passcode";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub repository: Arc<InMemoryPlayerRepository>,
    pub store: Arc<PlayerStore>,
    pub leaderboard: Arc<LeaderboardService>,
    pub admin_gate: Arc<AdminGate>,
    pub grant: AdminGrant,
}

pub struct TestSetupBuilder {
    players: Vec<AddPlayerRequest>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn with_players(mut self, players: Vec<AddPlayerRequest>) -> Self {
        self.players = players;
        self
    }

    pub async fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let store = Arc::new(PlayerStore::new(repository.clone()));
        let leaderboard = Arc::new(LeaderboardService::new(store.clone()));
        let admin_gate = Arc::new(AdminGate::new(
            TEST_PASSCODE.to_string(),
            TokenConfig::new("integration-secret".to_string(), 1),
        ));

        let unlocked = admin_gate
            .unlock(TEST_PASSCODE)
            .expect("passcode should unlock the gate");
        let grant = admin_gate
            .authorize(&unlocked.token)
            .expect("fresh token should authorize");

        for player in self.players {
            leaderboard
                .add_player(&grant, player)
                .await
                .expect("seed player should be added");
        }

        TestSetup {
            repository,
            store,
            leaderboard,
            admin_gate,
            grant,
        }
    }
}
