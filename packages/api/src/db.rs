//! MongoDB configuration and connection.
//!
//! The server owns exactly one [`mongodb::Client`], created in
//! `launch_server` before the router is built and handed to every request
//! handler as axum state. The driver multiplexes its own connection pool
//! behind the handle, so cloning the returned [`Database`] is cheap and the
//! process needs no teardown beyond exit.
//!
//! Connection settings come from the environment: `MONGODB_URI` (connection
//! string) and `MONGODB_DB_NAME` (database to use), loaded via `dotenvy` so
//! a local `.env` works during development.

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Name of the collection registrations are inserted into.
pub const USERS_COLLECTION: &str = "users";

/// Connection settings read from the process environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub uri: String,
    pub db_name: String,
}

impl DbConfig {
    /// Read `MONGODB_URI` and `MONGODB_DB_NAME`, loading `.env` first.
    ///
    /// Panics when either is missing; this runs once at startup and a
    /// server without a database target cannot do anything useful.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
        let db_name = std::env::var("MONGODB_DB_NAME").expect("MONGODB_DB_NAME must be set");

        Self { uri, db_name }
    }
}

/// Build the shared client and return a handle to the configured database.
///
/// The driver connects lazily, so this succeeds even while the server is
/// unreachable; failures surface per-operation in the handlers instead.
pub async fn connect(config: &DbConfig) -> Result<Database, mongodb::error::Error> {
    let options = ClientOptions::parse(&config.uri).await?;
    let client = Client::with_options(options)?;
    Ok(client.database(&config.db_name))
}
