use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    token::TokenConfig,
    types::{AdminClaims, UnlockResponse},
};
use crate::shared::AppError;

/// Proof that an admin session was unlocked.
///
/// Only the gate hands these out. Mutating leaderboard commands take one as an
/// opaque artifact and never re-check the passcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGrant {
    session_id: String,
}

impl AdminGrant {
    fn from_claims(claims: AdminClaims) -> Self {
        Self {
            session_id: claims.session_id,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

/// Lock state of one presentation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked(AdminGrant),
}

/// Shared-secret gate in front of the privileged commands
pub struct AdminGate {
    passcode: String,
    token_config: TokenConfig,
}

impl AdminGate {
    pub fn new(passcode: String, token_config: TokenConfig) -> Self {
        Self {
            passcode,
            token_config,
        }
    }

    /// Locked -> Unlocked on the correct passcode. A wrong passcode leaves the
    /// session locked; the caller may retry.
    #[instrument(skip(self, passcode))]
    pub fn unlock(&self, passcode: &str) -> Result<UnlockResponse, AppError> {
        if passcode.is_empty() || self.passcode.is_empty() {
            warn!("Admin unlock rejected: empty passcode");
            return Err(AppError::Unauthorized("Passcode is required".to_string()));
        }
        if !passcodes_match(passcode, &self.passcode) {
            warn!("Admin unlock rejected: incorrect passcode");
            return Err(AppError::Unauthorized("Incorrect passcode".to_string()));
        }

        let session_id = Uuid::new_v4().to_string();
        let (token, claims) = self.token_config.create_token(session_id)?;

        info!(session_id = %claims.session_id, "Admin session unlocked");
        Ok(UnlockResponse {
            token,
            session_id: claims.session_id,
            expires_at: claims.exp,
        })
    }

    /// Resolves the state a session token puts the caller in
    pub fn state_for(&self, token: Option<&str>) -> GateState {
        match token.map(|token| self.token_config.validate_token(token)) {
            Some(Ok(claims)) => GateState::Unlocked(AdminGrant::from_claims(claims)),
            Some(Err(e)) => {
                warn!(error = %e, "Admin token rejected");
                GateState::Locked
            }
            None => GateState::Locked,
        }
    }

    /// Returns the grant for a valid token
    pub fn authorize(&self, token: &str) -> Result<AdminGrant, AppError> {
        match self.state_for(Some(token)) {
            GateState::Unlocked(grant) => Ok(grant),
            GateState::Locked => Err(AppError::Unauthorized(
                "Admin session is locked".to_string(),
            )),
        }
    }
}

fn passcodes_match(presented: &str, expected: &str) -> bool {
    let presented = presented.as_bytes();
    let expected = expected.as_bytes();
    if presented.len() != expected.len() {
        return false;
    }
    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new(
            "65515616151".to_string(),
            TokenConfig::new("gate-secret".to_string(), 1),
        )
    }

    #[test]
    fn test_correct_passcode_unlocks() {
        let gate = gate();
        let response = gate.unlock("65515616151").unwrap();

        let grant = gate.authorize(&response.token).unwrap();
        assert_eq!(grant.session_id(), response.session_id);
    }

    #[test]
    fn test_wrong_passcode_stays_locked_and_allows_retry() {
        let gate = gate();

        assert!(matches!(
            gate.unlock("1234"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            gate.unlock("65515616150"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(gate.unlock("65515616151").is_ok());
    }

    #[test]
    fn test_empty_passcode_never_unlocks() {
        assert!(matches!(gate().unlock(""), Err(AppError::Unauthorized(_))));

        let blank = AdminGate::new(
            String::new(),
            TokenConfig::new("gate-secret".to_string(), 1),
        );
        assert!(matches!(blank.unlock(""), Err(AppError::Unauthorized(_))));
        assert!(matches!(blank.unlock("anything"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_no_token_is_locked() {
        assert_eq!(gate().state_for(None), GateState::Locked);
    }

    #[test]
    fn test_garbage_token_is_locked() {
        let gate = gate();
        assert_eq!(gate.state_for(Some("not-a-jwt")), GateState::Locked);
        assert!(matches!(
            gate.authorize("not-a-jwt"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_each_unlock_is_a_new_session() {
        let gate = gate();
        let first = gate.unlock("65515616151").unwrap();
        let second = gate.unlock("65515616151").unwrap();
        assert_ne!(first.session_id, second.session_id);
    }
}
