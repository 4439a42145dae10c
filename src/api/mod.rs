use crate::types::*;
use leptos::prelude::*;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const NOT_CONFIGURED: &str = "Login is not configured";

/// Login server function - development stand-in for a real authentication backend.
/// Accepts only the configured demo account; issues no session or token.
#[server(Login, "/api")]
pub async fn login(
    username: String,
    password: String,
    remember_me: bool,
) -> Result<SignedInUser, ServerFnError> {
    let account = demo_account()?;

    check_credentials(&account, username, &password, remember_me)
}

/// The demo account the server was started with, provided as request context.
#[cfg(feature = "ssr")]
fn demo_account() -> Result<crate::config::DemoAccount, ServerFnError> {
    use_context::<crate::config::DemoAccount>().ok_or_else(|| {
        log::error!("No demo account in request context");
        ServerFnError::new(NOT_CONFIGURED)
    })
}

#[cfg(feature = "ssr")]
fn check_credentials(
    account: &crate::config::DemoAccount,
    username: String,
    password: &str,
    remember_me: bool,
) -> Result<SignedInUser, ServerFnError> {
    if account.matches(&username, password) {
        log::info!("Login accepted for {:?} (remember_me={})", username, remember_me);
        Ok(SignedInUser {
            username,
            remember_me,
        })
    } else {
        log::warn!("Login rejected for {:?}", username);
        Err(ServerFnError::new(INVALID_CREDENTIALS))
    }
}
