//! Supermarket Repository (read-only)

use super::{BaseRepository, RepoResult, record_id};
use crate::db::models::Supermarket;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "supermercados";

/// Read access to the `supermercados` collection
///
/// Supermarkets are written once by the seed tool; the runtime never
/// mutates them.
#[derive(Clone)]
pub struct SupermarketRepository {
    base: BaseRepository,
}

impl SupermarketRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all supermarkets
    pub async fn find_all(&self) -> RepoResult<Vec<Supermarket>> {
        let markets: Vec<Supermarket> = self
            .base
            .db()
            .query("SELECT * FROM supermercados ORDER BY name")
            .await?
            .take(0)?;
        Ok(markets)
    }

    /// Find supermarket by record key
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<Supermarket>> {
        let market: Option<Supermarket> = self.base.db().select(record_id(TABLE, key)?).await?;
        Ok(market)
    }
}
