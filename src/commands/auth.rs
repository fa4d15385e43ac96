use crate::api::{ApiClient, MohittoApi};
use crate::auth::{Session, TokenStore};
use crate::error::AuthError;

use super::TerminalNavigator;

/// Sign-in screen. Validation failures and server rejections are shown as
/// alerts; nothing here aborts the process.
pub async fn signin(api: &ApiClient, tokens: &TokenStore, email: &str, password: &str) {
    let navigator = TerminalNavigator;
    let session = Session::new(api, tokens, &navigator);
    match session.login(email, password).await {
        Ok(token) => {
            api.set_token(Some(token));
            println!("Signed in.");
        }
        Err(AuthError::Validation(msg)) => println!("{}", msg),
        Err(AuthError::Api(e)) => println!("{}", e.user_message("Sign-in failed.")),
        Err(AuthError::MissingToken) => println!("Sign-in failed."),
    }
}

/// Sign-up screen.
pub async fn signup(
    api: &ApiClient,
    tokens: &TokenStore,
    email: &str,
    password: &str,
    name: &str,
    agreed: bool,
) {
    let navigator = TerminalNavigator;
    let session = Session::new(api, tokens, &navigator);
    match session.signup(email, password, name, agreed).await {
        Ok(()) => println!("Account created. Run `mohitto login {}` to sign in.", email),
        Err(AuthError::Validation(msg)) => println!("{}", msg),
        Err(AuthError::Api(e)) => println!("{}", e.user_message("Sign-up failed.")),
        Err(AuthError::MissingToken) => println!("Sign-up failed."),
    }
}

/// Sign out and drop the stored token.
pub async fn logout(api: &ApiClient, tokens: &TokenStore) {
    let navigator = TerminalNavigator;
    let session = Session::new(api, tokens, &navigator);
    match session.logout().await {
        Ok(()) => {
            api.set_token(None);
            println!("Signed out.");
        }
        Err(AuthError::Api(e)) => println!("{}", e.user_message("Sign-out failed.")),
        Err(_) => println!("Sign-out failed."),
    }
}

/// Welcome greeting (`GET /user/info`). A failure falls back to a generic
/// greeting, as the original welcome screen did.
pub async fn welcome(api: &ApiClient) {
    match api.user_info().await {
        Ok(info) => println!("Hello {}, welcome to Mohitto!", info.name),
        Err(e) => {
            tracing::warn!("Failed to fetch user info: {}", e);
            println!("Hello, welcome to Mohitto!");
        }
    }
}

/// Profile screen header. An authentication failure prints the sign-in
/// redirect hint via the navigator.
pub async fn profile(api: &ApiClient, tokens: &TokenStore) {
    let navigator = TerminalNavigator;
    let session = Session::new(api, tokens, &navigator);
    match session.profile().await {
        Ok(profile) => println!("{} <{}>", profile.nickname, profile.email),
        Err(AuthError::Api(crate::error::ApiError::Unauthenticated)) => {}
        Err(_) => println!("Failed to load profile."),
    }
}
