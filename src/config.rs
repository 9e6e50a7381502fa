/*!
Backend configuration.

The host application selects a backend with a discriminated configuration
value; this module owns its shape and validation. Store construction itself
lives in [`store::connect`](crate::store::connect), so configuration stays
pure data that can be loaded, logged, and validated without touching a
database.

The serialized shape matches the host's wire format:

```json
{ "type": "sqlite",   "filePath": "agent.db" }
{ "type": "mysql",    "connectionString": "mysql://user:pw@host/db" }
{ "type": "postgres", "connectionString": "postgres://user:pw@host/db" }
```
*/

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Discriminated backend selection plus backend-specific connection
/// parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Embedded single-file engine.
    Sqlite {
        #[serde(rename = "filePath")]
        file_path: String,
    },
    /// Client/server engine, reached by connection URL.
    Mysql {
        #[serde(rename = "connectionString")]
        connection_string: String,
    },
    /// Client/server engine, reached by connection URL.
    Postgres {
        #[serde(rename = "connectionString")]
        connection_string: String,
    },
}

impl StoreConfig {
    /// The discriminant as it appears on the wire. Useful for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Sqlite { .. } => "sqlite",
            StoreConfig::Mysql { .. } => "mysql",
            StoreConfig::Postgres { .. } => "postgres",
        }
    }

    /// Check connection parameters without dialing the backend.
    ///
    /// # Errors
    ///
    /// [`StoreError::Config`] for an empty path, an empty URL, or a URL whose
    /// scheme does not match the selected engine.
    pub fn validate(&self) -> Result<()> {
        match self {
            StoreConfig::Sqlite { file_path } => {
                if file_path.trim().is_empty() {
                    return Err(StoreError::Config {
                        message: "sqlite filePath must not be empty".into(),
                    });
                }
            }
            StoreConfig::Mysql { connection_string } => {
                require_scheme(connection_string, "mysql", &["mysql://"])?;
            }
            StoreConfig::Postgres { connection_string } => {
                require_scheme(connection_string, "postgres", &["postgres://", "postgresql://"])?;
            }
        }
        Ok(())
    }

    /// Resolve a configuration from the process environment (with `.env`
    /// support via dotenvy).
    ///
    /// - `STATEVAULT_BACKEND`: `sqlite` (default), `mysql`, or `postgres`
    /// - `STATEVAULT_SQLITE_PATH`: sqlite file path, default `statevault.db`
    /// - `STATEVAULT_DATABASE_URL`: connection URL for the client/server engines
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let backend =
            std::env::var("STATEVAULT_BACKEND").unwrap_or_else(|_| "sqlite".to_string());
        let config = match backend.as_str() {
            "sqlite" => StoreConfig::Sqlite {
                file_path: std::env::var("STATEVAULT_SQLITE_PATH")
                    .unwrap_or_else(|_| "statevault.db".to_string()),
            },
            "mysql" => StoreConfig::Mysql {
                connection_string: require_env("STATEVAULT_DATABASE_URL", "mysql")?,
            },
            "postgres" => StoreConfig::Postgres {
                connection_string: require_env("STATEVAULT_DATABASE_URL", "postgres")?,
            },
            other => {
                return Err(StoreError::Config {
                    message: format!(
                        "STATEVAULT_BACKEND must be sqlite, mysql, or postgres (got `{other}`)"
                    ),
                });
            }
        };
        config.validate()?;
        Ok(config)
    }
}

fn require_env(var: &str, backend: &str) -> Result<String> {
    std::env::var(var).map_err(|_| StoreError::Config {
        message: format!("{var} must be set for the {backend} backend"),
    })
}

fn require_scheme(url: &str, backend: &str, schemes: &[&str]) -> Result<()> {
    if url.trim().is_empty() {
        return Err(StoreError::Config {
            message: format!("{backend} connectionString must not be empty"),
        });
    }
    if !schemes.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(StoreError::Config {
            message: format!(
                "{backend} connectionString must start with {}",
                schemes.join(" or ")
            ),
        });
    }
    Ok(())
}
