//! Environment-based configuration for the API binary.

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to (`BIND_ADDR`).
    pub bind_addr: String,
    /// SQLite connection URL (`DATABASE_URL`); absent selects the in-memory
    /// repositories (dev/test mode).
    pub database_url: Option<String>,
}

impl ApiConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";

    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_string()),
            database_url: std::env::var("DATABASE_URL").ok(),
        }
    }

    /// In-memory configuration bound to an ephemeral port (tests).
    pub fn ephemeral() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            database_url: None,
        }
    }
}
