//! Cart Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, record_id};
use crate::db::models::{Cart, CartCreate, CartUpdate, Coordinates};
use crate::live::{self, Subscription};
use crate::utils::now_millis;
use serde::Serialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "carrinhos";

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the cart bound to a tablet
    pub async fn find_by_tablet(&self, tablet_id: &str) -> RepoResult<Option<Cart>> {
        let tablet_id = tablet_id.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM carrinhos WHERE tablet_id = $tablet_id LIMIT 1")
            .bind(("tablet_id", tablet_id))
            .await?;
        let carts: Vec<Cart> = result.take(0)?;
        Ok(carts.into_iter().next())
    }

    /// Move a cart to a new floor position
    ///
    /// Partial merge of the `position` field only; the rest of the session
    /// is untouched.
    pub async fn update_position(&self, key: &str, position: Coordinates) -> RepoResult<Cart> {
        #[derive(Serialize)]
        struct PositionUpdateDb {
            position: Coordinates,
            updated_at: i64,
        }

        let updated: Option<Cart> = self
            .base
            .db()
            .update(record_id(TABLE, key)?)
            .merge(PositionUpdateDb {
                position,
                updated_at: now_millis(),
            })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Cart {key} not found")))
    }

    /// Subscribe to one cart
    ///
    /// Yields the current state immediately, then `Some(cart)` after every
    /// write and `None` once the cart is deleted.
    pub async fn watch(&self, key: &str) -> RepoResult<Subscription<Option<Cart>>> {
        live::watch_record(self.base.db(), record_id(TABLE, key)?).await
    }
}

impl Repository<Cart, CartCreate, CartUpdate> for CartRepository {
    async fn find_all(&self) -> RepoResult<Vec<Cart>> {
        let carts: Vec<Cart> = self
            .base
            .db()
            .query("SELECT * FROM carrinhos ORDER BY tablet_id")
            .await?
            .take(0)?;
        Ok(carts)
    }

    async fn find_by_id(&self, key: &str) -> RepoResult<Option<Cart>> {
        let cart: Option<Cart> = self.base.db().select(record_id(TABLE, key)?).await?;
        Ok(cart)
    }

    async fn create(&self, data: CartCreate) -> RepoResult<Cart> {
        let cart = Cart {
            id: None,
            tablet_id: data.tablet_id,
            current_location: data.current_location,
            displayed_offers: data.displayed_offers,
            session_duration: data.session_duration,
            position: None,
            created_at: Some(now_millis()),
            updated_at: None,
        };

        let created: Option<Cart> = self.base.db().create(TABLE).content(cart).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create cart".to_string()))
    }

    async fn update(&self, key: &str, data: CartUpdate) -> RepoResult<Cart> {
        #[derive(Serialize)]
        struct CartUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            tablet_id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            current_location: Option<RecordId>,
            #[serde(skip_serializing_if = "Option::is_none")]
            displayed_offers: Option<Vec<RecordId>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            session_duration: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            position: Option<Coordinates>,
            updated_at: i64,
        }

        let merge = CartUpdateDb {
            tablet_id: data.tablet_id,
            current_location: data.current_location,
            displayed_offers: data.displayed_offers,
            session_duration: data.session_duration,
            position: data.position,
            updated_at: now_millis(),
        };

        let updated: Option<Cart> = self
            .base
            .db()
            .update(record_id(TABLE, key)?)
            .merge(merge)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Cart {key} not found")))
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        let deleted: Option<Cart> = self.base.db().delete(record_id(TABLE, key)?).await?;
        Ok(deleted.is_some())
    }
}
