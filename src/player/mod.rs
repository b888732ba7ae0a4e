// Public API - what other modules can use
pub use errors::LeaderboardError;
pub use models::{Badge, PlayerRecord, RankedEntry, Region};
pub use repository::{InMemoryPlayerRepository, PlayerRepository, PostgresPlayerRepository};
pub use service::LeaderboardService;
pub use store::{PlayerStore, StoreView};
pub use types::{AddPlayerRequest, BadgeRequest, CategoryResponse, SearchQuery, StatsResponse};

// Internal modules
mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
mod service;
mod store;
mod types;
