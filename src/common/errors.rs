use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a valid socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Demo account is incomplete: {0} is not set")]
    IncompleteDemoAccount(&'static str),

    #[error("Leptos configuration error: {0}")]
    Leptos(String),
}
