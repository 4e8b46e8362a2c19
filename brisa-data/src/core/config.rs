/// Store connection configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DB_URL | ws://localhost:8000 | Store endpoint (`mem://`, `rocksdb://<path>`, `ws://host:port`) |
/// | DB_NS | brisa | Namespace |
/// | DB_NAME | brisa | Database name |
/// | DB_USER | (unset) | Root user, remote engines only |
/// | DB_PASS | (unset) | Root password, remote engines only |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// DB_URL=rocksdb:///var/lib/brisa/brisa.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Store endpoint URL; the scheme selects the engine
    pub db_url: String,
    /// SurrealDB namespace
    pub namespace: String,
    /// SurrealDB database name
    pub database: String,
    /// Root credentials for remote engines (unauthenticated when None)
    pub username: Option<String>,
    pub password: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            db_url: std::env::var("DB_URL").unwrap_or_else(|_| "ws://localhost:8000".into()),
            namespace: std::env::var("DB_NS").unwrap_or_else(|_| "brisa".into()),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "brisa".into()),
            username: std::env::var("DB_USER").ok(),
            password: std::env::var("DB_PASS").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the endpoint, keeping everything else from the environment
    ///
    /// Mostly used by tests against the in-memory engine
    pub fn with_overrides(db_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.db_url = db_url.into();
        config.username = None;
        config.password = None;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
