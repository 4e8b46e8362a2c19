//! Database Module
//!
//! Handles the SurrealDB connection lifecycle

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;

use crate::core::Config;
use repository::{RepoError, RepoResult};

/// Database service — owns the store connection
///
/// The engine is picked from the URL scheme (`mem://`, `rocksdb://<path>`,
/// `ws://host:port`), so tests run against an in-process store and
/// production talks to the managed server with the same code. Repositories
/// hold clones of the handle; dropping the last clone closes the session.
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Open a connection and select namespace/database
    ///
    /// Signs in with root credentials only when the config carries them
    /// (remote engines; embedded engines are unauthenticated).
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let db = surrealdb::engine::any::connect(config.db_url.as_str())
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open store: {e}")))?;

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            db.signin(Root {
                username: user.as_str(),
                password: pass.as_str(),
            })
            .await
            .map_err(|e| RepoError::Database(format!("Store sign-in failed: {e}")))?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await
            .map_err(|e| RepoError::Database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            url = %config.db_url,
            ns = %config.namespace,
            db = %config.database,
            "Store connection established"
        );

        Ok(Self { db })
    }

    /// Shared handle for repositories
    pub fn db(&self) -> Surreal<Any> {
        self.db.clone()
    }
}
