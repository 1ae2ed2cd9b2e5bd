use anyhow::{Context, Result};
use log::{error, warn};
use mongodb::{Client, Database};
use std::env;

/// Connect to the store named by `MONGODB_URI` / `MONGODB_DB`. Missing or
/// broken configuration is not fatal: the service starts in no-op mode where
/// nothing is recorded and every lookup resolves to "not found".
pub async fn get_database() -> Option<Database> {
    let uri = match env::var("MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            warn!("MONGODB_URI not set; running without persistence");
            return None;
        }
    };

    let name = env::var("MONGODB_DB").unwrap_or_else(|_| String::from("jumplog"));

    match connect(&uri, &name).await {
        Ok(db) => Some(db),
        Err(e) => {
            error!("Store unavailable ({}); running without persistence", e);
            None
        }
    }
}

async fn connect(uri: &str, name: &str) -> Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .context("Invalid MongoDB connection string")?;
    Ok(client.database(name))
}
