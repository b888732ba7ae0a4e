// Public API - what other modules can use
pub use gate::{AdminGate, AdminGrant, GateState};
pub use handlers::unlock;
pub use middleware::admin_auth;
pub use token::TokenConfig;
pub use types::{AdminClaims, UnlockRequest, UnlockResponse};

// Internal modules
mod gate;
mod handlers;
mod middleware;
mod token;
mod types;
