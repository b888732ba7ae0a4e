// Library crate for the tierboard leaderboard server
// This file exposes the public API for integration tests

pub mod admin;
pub mod config;
pub mod player;
pub mod ranking;
pub mod routes;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use admin::{AdminGate, AdminGrant, GateState, TokenConfig};
pub use config::AppConfig;
pub use player::{
    AddPlayerRequest, InMemoryPlayerRepository, LeaderboardError, LeaderboardService,
    PlayerRecord, PlayerRepository, PlayerStore, RankedEntry,
};
pub use ranking::{CategoryKey, Tier};
pub use routes::build_router;
pub use shared::{AppError, AppState};
