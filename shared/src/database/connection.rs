use std::time::Duration;

use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Collection, Database,
};
use tracing::{debug, error, info, warn};

use super::{DatabaseError, DatabaseResult, MongoConfig};

const APP_NAME: &str = "gallery-service";

/// Owns the single document store session shared by every request.
///
/// The driver client is internally pooled and safe to use concurrently,
/// so handles returned by [`MongoConnection::collection`] can be cloned
/// freely across tasks.
#[derive(Debug, Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
    config: MongoConfig,
}

impl MongoConnection {
    /// Connect to the configured store and verify it answers a ping
    pub async fn connect(config: MongoConfig) -> DatabaseResult<Self> {
        info!("Connecting to MongoDB...");
        debug!(
            "MongoDB config: uri={}, database={}, collection={}",
            config.uri, config.database_name, config.collection_name
        );

        let client = create_client(&config).await?;
        let database = client.database(&config.database_name);

        ping(&database).await?;

        info!("Connected to MongoDB!");

        Ok(Self {
            client,
            database,
            config,
        })
    }

    /// Typed handle to the configured collection
    pub fn collection<T>(&self) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.database.collection(&self.config.collection_name)
    }

    /// Release the session. Best-effort: in-flight operations are allowed to
    /// finish and nothing is reported back to the caller.
    pub async fn disconnect(self) {
        info!("Disconnecting from MongoDB...");
        self.client.shutdown().await;
        info!("MongoDB session closed");
    }
}

/// Build a driver client from the configuration without touching the network
pub async fn create_client(config: &MongoConfig) -> DatabaseResult<Client> {
    let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
        error!("Invalid MongoDB connection string: {}", e);
        DatabaseError::Connection(e)
    })?;

    let timeout = Duration::from_secs(config.connect_timeout_secs);
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    Client::with_options(options).map_err(|e| {
        error!("Failed to create MongoDB client: {}", e);
        DatabaseError::Connection(e)
    })
}

/// Liveness check against the given database
pub async fn ping(database: &Database) -> DatabaseResult<()> {
    debug!("Pinging MongoDB database '{}'...", database.name());

    database
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| {
            warn!("MongoDB ping failed: {}", e);
            DatabaseError::Ping(e)
        })?;

    debug!("MongoDB ping successful");
    Ok(())
}
