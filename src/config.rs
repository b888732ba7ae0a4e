use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ADMIN_PASSCODE: &str = "change-me";
const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_ADMIN_SESSION_HOURS: i64 = 12;

/// Runtime settings read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Absent means the in-memory repository is used
    pub database_url: Option<String>,
    pub admin_passcode: String,
    pub jwt_secret: String,
    pub admin_session_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let admin_passcode = lookup("ADMIN_PASSCODE")
            .filter(|passcode| !passcode.trim().is_empty())
            .unwrap_or_else(|| {
                warn!("ADMIN_PASSCODE not set or blank, using the development default");
                DEFAULT_ADMIN_PASSCODE.to_string()
            });

        let admin_session_hours = lookup("ADMIN_SESSION_HOURS")
            .and_then(|s| s.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(DEFAULT_ADMIN_SESSION_HOURS);

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            admin_passcode,
            jwt_secret: lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            admin_session_hours,
        }
    }
}
