use bson::doc;
use mongodb::Client;
use std::env;
use tracing::info;

use crate::config::{non_empty, ConfigError};
use crate::store::{MongoStore, StoreError, StoreOperation};

const DEFAULT_DATABASE: &str = "dashboard";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = non_empty(&lookup, "MONGODB_URI").ok_or(ConfigError::MissingVar("MONGODB_URI"))?;
        let database =
            non_empty(&lookup, "MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self { uri, database })
    }
}

// Pings so a bad URI fails before anything is deleted.
pub async fn connect(config: &DatabaseConfig) -> Result<MongoStore, StoreError> {
    let connect_error = |e: mongodb::error::Error| StoreError::Operation {
        collection: config.database.clone(),
        operation: StoreOperation::Connect,
        message: e.to_string(),
    };

    let client = Client::with_uri_str(&config.uri).await.map_err(connect_error)?;
    let db = client.database(&config.database);

    db.run_command(doc! { "ping": 1 }).await.map_err(connect_error)?;
    info!(database = %config.database, "Connected to MongoDB");

    Ok(MongoStore::new(client, db))
}
