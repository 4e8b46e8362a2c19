//! Offer Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, record_id};
use crate::db::models::{Offer, OfferCreate, OfferUpdate};
use crate::live::{self, Subscription};
use crate::utils::now_millis;
use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "ofertas";

#[derive(Clone)]
pub struct OfferRepository {
    base: BaseRepository,
}

impl OfferRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all offers targeted at a hotspot
    pub async fn find_by_hotspot(&self, hotspot_key: &str) -> RepoResult<Vec<Offer>> {
        let hotspot = record_id(super::hotspot::TABLE, hotspot_key)?;
        let offers: Vec<Offer> = self
            .base
            .db()
            .query("SELECT * FROM ofertas WHERE hotspot = $hotspot ORDER BY product_name")
            .bind(("hotspot", hotspot))
            .await?
            .take(0)?;
        Ok(offers)
    }

    /// Subscribe to the whole collection
    pub async fn watch_all(&self) -> RepoResult<Subscription<Vec<Offer>>> {
        live::watch_table(self.base.db(), TABLE).await
    }
}

impl Repository<Offer, OfferCreate, OfferUpdate> for OfferRepository {
    async fn find_all(&self) -> RepoResult<Vec<Offer>> {
        let offers: Vec<Offer> = self
            .base
            .db()
            .query("SELECT * FROM ofertas ORDER BY product_name")
            .await?
            .take(0)?;
        Ok(offers)
    }

    async fn find_by_id(&self, key: &str) -> RepoResult<Option<Offer>> {
        let offer: Option<Offer> = self.base.db().select(record_id(TABLE, key)?).await?;
        Ok(offer)
    }

    async fn create(&self, data: OfferCreate) -> RepoResult<Offer> {
        let offer = Offer {
            id: None,
            product_name: data.product_name,
            description: data.description,
            image_url: data.image_url,
            price: data.price,
            category: data.category,
            start_date: data.start_date,
            end_date: data.end_date,
            hotspot: data.hotspot,
            supermarket: data.supermarket,
            created_at: Some(now_millis()),
            updated_at: None,
        };

        let created: Option<Offer> = self.base.db().create(TABLE).content(offer).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create offer".to_string()))
    }

    async fn update(&self, key: &str, data: OfferUpdate) -> RepoResult<Offer> {
        #[derive(Serialize)]
        struct OfferUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            product_name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            price: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            start_date: Option<DateTime<Utc>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            end_date: Option<DateTime<Utc>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            hotspot: Option<RecordId>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supermarket: Option<RecordId>,
            updated_at: i64,
        }

        let merge = OfferUpdateDb {
            product_name: data.product_name,
            description: data.description,
            image_url: data.image_url,
            price: data.price,
            category: data.category,
            start_date: data.start_date,
            end_date: data.end_date,
            hotspot: data.hotspot,
            supermarket: data.supermarket,
            updated_at: now_millis(),
        };

        let updated: Option<Offer> = self
            .base
            .db()
            .update(record_id(TABLE, key)?)
            .merge(merge)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Offer {key} not found")))
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        let deleted: Option<Offer> = self.base.db().delete(record_id(TABLE, key)?).await?;
        Ok(deleted.is_some())
    }
}
