use crate::error::{Result as ServerErrorResult, ServerError};

use fin_plaid::{PlaidCredentials, PlaidEnvironment};

use std::net::SocketAddr;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: finboard.db)
    pub database_path: String,

    /// JWT secret for HS256 validation
    pub jwt_secret: Option<String>,

    /// JWT public key for RS256 validation (PEM format)
    pub jwt_public_key: Option<String>,

    /// Per-environment Plaid credential pairs
    pub plaid: PlaidRouting,

    /// Log level (default: info)
    pub log_level: String,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let config = Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "finboard.db".to_string()),

            jwt_secret: std::env::var("JWT_SECRET").ok(),
            jwt_public_key: std::env::var("JWT_PUBLIC_KEY").ok(),

            plaid: PlaidRouting::from_env(),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> ServerErrorResult<()> {
        if self.jwt_secret.is_none() && self.jwt_public_key.is_none() {
            return Err(ServerError::MissingJwtConfig);
        }

        if self.jwt_secret.is_some() && self.jwt_public_key.is_some() {
            log::warn!("Both JWT_SECRET and JWT_PUBLIC_KEY provided, using JWT_SECRET (HS256)");
        }

        // Missing Plaid pairs are not fatal at startup; the affected
        // handlers fail fast per-request instead.
        if self.plaid.resolve(PlaidEnvironment::Production).is_none() {
            log::warn!("Production Plaid credentials not configured");
        }
        if self.plaid.resolve(PlaidEnvironment::Sandbox).is_none() {
            log::warn!("Sandbox Plaid credentials not configured");
        }

        Ok(())
    }
}

/// The two-variant Plaid credential configuration.
///
/// Resolved once per request (by the test-user flag for link token
/// creation, production everywhere else) and threaded through; handlers
/// never read the environment ad hoc.
#[derive(Debug, Clone, Default)]
pub struct PlaidRouting {
    production: Option<PlaidCredentials>,
    sandbox: Option<PlaidCredentials>,
}

impl PlaidRouting {
    pub fn from_env() -> Self {
        Self {
            production: credential_pair(
                PlaidEnvironment::Production,
                "PLAID_CLIENT_ID",
                "PLAID_SECRET",
                "PLAID_PRODUCTION_URL",
            ),
            sandbox: credential_pair(
                PlaidEnvironment::Sandbox,
                "PLAID_SANDBOX_CLIENT_ID",
                "PLAID_SANDBOX_SECRET",
                "PLAID_SANDBOX_URL",
            ),
        }
    }

    pub fn new(
        production: Option<PlaidCredentials>,
        sandbox: Option<PlaidCredentials>,
    ) -> Self {
        Self {
            production,
            sandbox,
        }
    }

    pub fn resolve(&self, environment: PlaidEnvironment) -> Option<&PlaidCredentials> {
        match environment {
            PlaidEnvironment::Production => self.production.as_ref(),
            PlaidEnvironment::Sandbox => self.sandbox.as_ref(),
        }
    }
}

fn credential_pair(
    environment: PlaidEnvironment,
    id_var: &str,
    secret_var: &str,
    url_var: &str,
) -> Option<PlaidCredentials> {
    let client_id = std::env::var(id_var).ok()?;
    let secret = std::env::var(secret_var).ok()?;

    let credentials = PlaidCredentials::new(environment, client_id, secret);

    match std::env::var(url_var) {
        Ok(url) => Some(credentials.with_base_url(url)),
        Err(_) => Some(credentials),
    }
}
