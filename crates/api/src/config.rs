use crate::auth::jwt::AuthConfig;

/// Default database name when `DATABASE_URL` is not provided.
const DEFAULT_DATABASE_NAME: &str = "cast";

/// Server configuration loaded from environment variables.
///
/// All fields except the auth key source have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection settings.
    pub database: DatabaseConfig,
    /// Truncate and load demo data at startup (default: `false`).
    pub seed_database: bool,
    /// Token verification settings.
    pub auth: AuthConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                        |
    /// |----------------------------|------------------------------------------------|
    /// | `HOST`                     | `0.0.0.0`                                      |
    /// | `PORT`                     | `8080`                                         |
    /// | `CORS_ORIGINS`             | `*`                                            |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                           |
    /// | `DATABASE_URL`             | `postgres://postgres@localhost:5432/<name>`    |
    /// | `DATABASE_NAME`            | `cast`                                         |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                                           |
    /// | `SEED_DATABASE`            | `false`                                        |
    ///
    /// Auth variables are documented on [`AuthConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let name =
                std::env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.into());
            default_database_url(&name)
        });

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let seed_database = std::env::var("SEED_DATABASE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database: DatabaseConfig {
                url,
                max_connections,
            },
            seed_database,
            auth: AuthConfig::from_env(),
        }
    }

    /// Whether CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn default_database_url(name: &str) -> String {
    format!("postgres://postgres@localhost:5432/{name}")
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
