pub mod connection;

pub use connection::MongoConnection;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://schroebiedb:27017";
pub const DEFAULT_DATABASE_NAME: &str = "paintings";
pub const DEFAULT_COLLECTION_NAME: &str = "pwolff";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// Document store configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub connect_timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl MongoConfig {
    /// Create a new configuration from environment variables
    pub fn from_env() -> DatabaseResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, falling back to
    /// the defaults for any key that is not set
    pub fn from_lookup<F>(lookup: F) -> DatabaseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let connect_timeout_secs = match lookup("MONGODB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                DatabaseError::Config(format!(
                    "MONGODB_CONNECT_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => defaults.connect_timeout_secs,
        };

        Ok(Self {
            uri: lookup("MONGODB_URI").unwrap_or(defaults.uri),
            database_name: lookup("MONGODB_DATABASE").unwrap_or(defaults.database_name),
            collection_name: lookup("MONGODB_COLLECTION").unwrap_or(defaults.collection_name),
            connect_timeout_secs,
        })
    }
}

// Error types for document store operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("Ping failed: {0}")]
    Ping(#[source] mongodb::error::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_fixed_deployment() {
        let config = MongoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.uri, "mongodb://schroebiedb:27017");
        assert_eq!(config.database_name, "paintings");
        assert_eq!(config.collection_name, "pwolff");
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_env_overrides() {
        let config = MongoConfig::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("MONGODB_DATABASE", "art"),
            ("MONGODB_COLLECTION", "canvases"),
            ("MONGODB_CONNECT_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "art");
        assert_eq!(config.collection_name, "canvases");
        assert_eq!(config.connect_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = MongoConfig::from_lookup(lookup_from(&[(
            "MONGODB_CONNECT_TIMEOUT_SECS",
            "soon",
        )]))
        .unwrap_err();

        assert!(matches!(err, DatabaseError::Config(_)));
        assert!(err.to_string().contains("soon"));
    }
}
