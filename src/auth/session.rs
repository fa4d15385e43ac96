use tracing::{info, warn};

use crate::api::MohittoApi;
use crate::error::{ApiError, AuthError};

use super::token::TokenStore;
use super::validate::{check_email, check_name, check_password};

/// Explicit navigation seam injected into the session accessor, instead of an
/// ambient router singleton. The only navigation the accessor triggers is the
/// redirect to the sign-in screen on an authentication failure.
pub trait Navigator {
    fn redirect_to_sign_in(&self);
}

/// Session/profile accessor: sign-in, sign-up, sign-out and the current
/// profile, with client-side validation in front of every mutating call.
pub struct Session<'a, G, N> {
    api: &'a G,
    tokens: &'a TokenStore,
    navigator: &'a N,
}

impl<'a, G: MohittoApi, N: Navigator> Session<'a, G, N> {
    pub fn new(api: &'a G, tokens: &'a TokenStore, navigator: &'a N) -> Self {
        Self {
            api,
            tokens,
            navigator,
        }
    }

    /// Validate, sign in, persist the returned bearer token. Returns the
    /// token so the caller can install it on its API client.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        check_email(email)?;
        check_password(password)?;

        info!("Signing in {}", email);
        let response = self.api.login(email, password).await?;
        let token = response.token.ok_or(AuthError::MissingToken)?;
        self.tokens.save(&token)?;
        Ok(token)
    }

    /// Validate and register a new account. `agreed` is the privacy-policy
    /// consent checkbox; refusing it short-circuits like any other validation
    /// failure.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        agreed: bool,
    ) -> Result<(), AuthError> {
        check_email(email)?;
        check_name(name)?;
        check_password(password)?;
        if !agreed {
            return Err(AuthError::Validation(
                "Please agree to the privacy policy.".to_string(),
            ));
        }

        info!("Signing up {}", email);
        self.api.signup(email, password, name).await?;
        Ok(())
    }

    /// Sign out server-side, then drop the stored token. A token-store
    /// failure after a successful sign-out is logged but not surfaced.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.api.logout().await?;
        if let Err(e) = self.tokens.clear() {
            warn!("Signed out but failed to clear stored token: {}", e);
        }
        Ok(())
    }

    /// Fetch the current profile. An authentication failure triggers the
    /// injected redirect to sign-in before the error is surfaced; every other
    /// failure is surfaced with no navigation side effect.
    pub async fn profile(&self) -> Result<crate::api::types::UserProfile, AuthError> {
        match self.api.profile().await {
            Ok(profile) => Ok(profile),
            Err(ApiError::Unauthenticated) => {
                info!("Profile fetch unauthenticated, redirecting to sign-in");
                self.navigator.redirect_to_sign_in();
                Err(AuthError::Api(ApiError::Unauthenticated))
            }
            Err(e) => Err(AuthError::Api(e)),
        }
    }
}
