use keyring::Entry;
use tracing::{info, warn};

use crate::error::ApiError;

const SERVICE: &str = "mohitto-auth-token";
const ACCOUNT: &str = "mohitto";

/// Bearer-token persistence backed by the OS keyring.
pub struct TokenStore {
    service: String,
}

impl TokenStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }

    /// A store under a different keyring service name, so tests never touch
    /// the real session entry.
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry, ApiError> {
        Entry::new(&self.service, ACCOUNT).map_err(|e| {
            warn!("Failed to open keyring entry {}: {}", self.service, e);
            ApiError::TokenStore(e.to_string())
        })
    }

    pub fn save(&self, token: &str) -> Result<(), ApiError> {
        info!("Persisting session token");
        self.entry()?.set_password(token).map_err(|e| {
            warn!("Failed to persist session token: {}", e);
            ApiError::TokenStore(e.to_string())
        })
    }

    /// `Ok(None)` when no token has been stored — a signed-out state, not an
    /// error.
    pub fn load(&self) -> Result<Option<String>, ApiError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                warn!("Failed to read session token: {}", e);
                Err(ApiError::TokenStore(e.to_string()))
            }
        }
    }

    pub fn clear(&self) -> Result<(), ApiError> {
        info!("Clearing session token");
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!("Failed to clear session token: {}", e);
                Err(ApiError::TokenStore(e.to_string()))
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
