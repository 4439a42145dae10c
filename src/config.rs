//! Server configuration read from the process environment.

use std::net::SocketAddr;

use crate::common::ConfigError;

const DEFAULT_DEMO_USERNAME: &str = "demo";
const DEFAULT_DEMO_PASSWORD: &str = "demo";

/// The single account accepted by the development login handler.
#[derive(Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub username: String,
    pub password: String,
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            username: DEFAULT_DEMO_USERNAME.to_string(),
            password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl DemoAccount {
    /// The password is kept exactly as configured; the form never trims it either.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let username = non_blank(lookup("LOGIN_DEMO_USERNAME")).map(|s| s.trim().to_string());
        let password = non_blank(lookup("LOGIN_DEMO_PASSWORD"));

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            (None, None) => Ok(Self::default()),
            (Some(_), None) => Err(ConfigError::IncompleteDemoAccount("LOGIN_DEMO_PASSWORD")),
            (None, Some(_)) => Err(ConfigError::IncompleteDemoAccount("LOGIN_DEMO_USERNAME")),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// `BIND_ADDR` override; `None` means use the Leptos `site_addr`.
    pub bind_addr: Option<SocketAddr>,
    pub demo_account: DemoAccount,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = non_blank(lookup("BIND_ADDR"))
            .map(|value| value.trim().to_string())
            .map(|value| {
                value
                    .parse::<SocketAddr>()
                    .map_err(|source| ConfigError::InvalidBindAddr { value, source })
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            demo_account: DemoAccount::from_lookup(&lookup)?,
        })
    }

    pub fn bind_addr_or(&self, fallback: SocketAddr) -> SocketAddr {
        self.bind_addr.unwrap_or(fallback)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
