use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// JWT claims carried by an admin session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminClaims {
    pub session_id: String,
    pub role: String,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}

/// Request payload for unlocking the admin gate
#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    #[serde(default)]
    pub passcode: String,
}

/// Response for a successful unlock
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UnlockResponse {
    pub token: String,
    pub session_id: String,
    pub expires_at: usize,
}
