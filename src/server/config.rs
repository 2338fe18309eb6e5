//! Service configuration: environment variables, CLI args, defaults

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;
use tracing::warn;

/// Well API service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Discrete `DB_*` connection parameters, used when no URL is given
    pub database_parts: Option<DatabaseParts>,
    /// Bind address (e.g., "127.0.0.1:8070")
    pub bind_address: String,
    /// Maximum pooled connections (default: 10)
    pub pool_max_connections: u32,
    /// Connections kept open while idle (default: 1)
    pub pool_min_connections: u32,
    /// Seconds to wait for a free pooled connection (default: 10)
    pub acquire_timeout_secs: u64,
    /// Server-side statement timeout in milliseconds (default: 30000)
    pub statement_timeout_ms: u64,
    /// Maximum request body size in bytes (default: 64 MiB)
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            database_parts: None,
            bind_address: "127.0.0.1:8070".to_string(),
            pool_max_connections: 10,
            pool_min_connections: 1,
            acquire_timeout_secs: 10,
            statement_timeout_ms: 30_000,
            max_body_bytes: 64 * 1024 * 1024,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables with CLI overrides
    pub fn from_env(
        database_url: Option<String>,
        bind_address: Option<String>,
        port: Option<u16>,
    ) -> Self {
        let mut config = Self::default();

        // Database: CLI arg > DATABASE_URL > DB_* parts
        match database_url.or_else(|| std::env::var("DATABASE_URL").ok()) {
            Some(url) => config.database_url = url,
            None => config.database_parts = DatabaseParts::from_env(),
        }

        // Bind address: CLI --bind-address > --port > env
        if let Some(addr) = bind_address {
            config.bind_address = addr;
        } else if let Some(p) = port {
            config.bind_address = format!("127.0.0.1:{p}");
        } else if let Ok(addr) = std::env::var("WELL_API_BIND") {
            config.bind_address = addr;
        }

        if let Some(n) = env_parse("WELL_API_POOL_SIZE") {
            config.pool_max_connections = n;
        }
        if let Some(n) = env_parse("WELL_API_POOL_MIN") {
            config.pool_min_connections = n;
        }
        if let Some(n) = env_parse("WELL_API_ACQUIRE_TIMEOUT_SECS") {
            config.acquire_timeout_secs = n;
        }
        if let Some(n) = env_parse("WELL_API_STATEMENT_TIMEOUT_MS") {
            config.statement_timeout_ms = n;
        }
        if let Some(n) = env_parse("WELL_API_MAX_BODY_BYTES") {
            config.max_body_bytes = n;
        }

        if config.pool_min_connections > config.pool_max_connections {
            warn!(
                min = config.pool_min_connections,
                max = config.pool_max_connections,
                "WELL_API_POOL_MIN exceeds pool size, clamping"
            );
            config.pool_min_connections = config.pool_max_connections;
        }

        config
    }

    /// True when either a URL or `DB_*` parameters are configured.
    pub fn has_database(&self) -> bool {
        !self.database_url.is_empty() || self.database_parts.is_some()
    }

    /// Connection options from the URL, falling back to the `DB_*` parameters.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if !self.database_url.is_empty() {
            return PgConnectOptions::from_str(&self.database_url);
        }
        match &self.database_parts {
            Some(parts) => Ok(parts.connect_options()),
            None => Err(sqlx::Error::Configuration(
                "no database configured: set DATABASE_URL or DB_HOST/DB_NAME".into(),
            )),
        }
    }
}

/// Connection parameters from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS`, `DB_NAME`.
///
/// Passed to the driver field by field, so credentials need no URL escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseParts {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
}

impl DatabaseParts {
    /// Returns `None` unless at least `DB_HOST` and `DB_NAME` are set.
    fn from_env() -> Option<Self> {
        let host = std::env::var("DB_HOST").ok()?;
        let name = std::env::var("DB_NAME").ok()?;
        Some(Self {
            host,
            port: env_parse("DB_PORT").unwrap_or(5432),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("DB_PASS").ok(),
            name,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

/// True when `key` is set to `1` or `true` (any case).
pub fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Parse an optional env var, warning (and ignoring it) when malformed.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}
