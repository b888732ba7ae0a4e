use std::sync::Arc;
use tierboard::{
    build_router,
    player::{InMemoryPlayerRepository, PlayerRepository, PostgresPlayerRepository},
    AdminGate, AppConfig, AppState, LeaderboardService, PlayerStore, TokenConfig,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tierboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tierboard leaderboard server");

    let config = AppConfig::from_env();

    let repository: Arc<dyn PlayerRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url).await?;
            let repository = PostgresPlayerRepository::new(pool);
            repository.ensure_schema().await?;
            info!("Using PostgreSQL player repository");
            Arc::new(repository)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory player repository");
            Arc::new(InMemoryPlayerRepository::new())
        }
    };

    let store = Arc::new(PlayerStore::load(repository).await?);
    let leaderboard = Arc::new(LeaderboardService::new(store));
    let admin_gate = Arc::new(AdminGate::new(
        config.admin_passcode.clone(),
        TokenConfig::new(config.jwt_secret.clone(), config.admin_session_hours),
    ));

    let app = build_router(AppState::new(leaderboard, admin_gate));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
