//! Client-side input validation. Violations short-circuit before any request
//! is dispatched.

use crate::error::AuthError;

/// Minimum sign-up name length after trimming whitespace.
const MIN_NAME_LEN: usize = 2;

/// Checks for a `local@domain.tld` shape: no whitespace, exactly one `@`
/// with a non-empty local part, and a dot inside the domain with non-empty
/// segments on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn check_email(email: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::Validation("Please enter an email.".to_string()));
    }
    if !is_valid_email(email) {
        return Err(AuthError::Validation(
            "The email format is not valid.".to_string(),
        ));
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), AuthError> {
    if password.trim().is_empty() {
        return Err(AuthError::Validation(
            "Please enter a password.".to_string(),
        ));
    }
    Ok(())
}

pub fn check_name(name: &str) -> Result<(), AuthError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AuthError::Validation("Please enter a name.".to_string()));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(AuthError::Validation(
            "The name must be at least 2 characters.".to_string(),
        ));
    }
    Ok(())
}
