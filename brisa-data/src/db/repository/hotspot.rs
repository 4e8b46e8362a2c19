//! Hotspot Repository

use super::{BaseRepository, RepoError, RepoResult, Repository, record_id};
use crate::db::models::{Coordinates, Hotspot, HotspotCreate, HotspotUpdate};
use crate::live::{self, Subscription};
use crate::utils::now_millis;
use serde::Serialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "hotspots";

#[derive(Clone)]
pub struct HotspotRepository {
    base: BaseRepository,
}

impl HotspotRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all hotspots of a supermarket
    pub async fn find_by_supermarket(&self, supermarket_key: &str) -> RepoResult<Vec<Hotspot>> {
        let supermarket = record_id(super::supermarket::TABLE, supermarket_key)?;
        let hotspots: Vec<Hotspot> = self
            .base
            .db()
            .query("SELECT * FROM hotspots WHERE supermarket = $supermarket ORDER BY name")
            .bind(("supermarket", supermarket))
            .await?
            .take(0)?;
        Ok(hotspots)
    }

    /// Subscribe to the whole collection
    ///
    /// Yields the current hotspot list immediately, then a fresh snapshot
    /// after every change, until the handle is dropped.
    pub async fn watch_all(&self) -> RepoResult<Subscription<Vec<Hotspot>>> {
        live::watch_table(self.base.db(), TABLE).await
    }
}

impl Repository<Hotspot, HotspotCreate, HotspotUpdate> for HotspotRepository {
    async fn find_all(&self) -> RepoResult<Vec<Hotspot>> {
        let hotspots: Vec<Hotspot> = self
            .base
            .db()
            .query("SELECT * FROM hotspots ORDER BY name")
            .await?
            .take(0)?;
        Ok(hotspots)
    }

    async fn find_by_id(&self, key: &str) -> RepoResult<Option<Hotspot>> {
        let hotspot: Option<Hotspot> = self.base.db().select(record_id(TABLE, key)?).await?;
        Ok(hotspot)
    }

    async fn create(&self, data: HotspotCreate) -> RepoResult<Hotspot> {
        let hotspot = Hotspot {
            id: None,
            name: data.name,
            coordinates: data.coordinates,
            supermarket: data.supermarket,
            created_at: Some(now_millis()),
            updated_at: None,
        };

        let created: Option<Hotspot> = self.base.db().create(TABLE).content(hotspot).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create hotspot".to_string()))
    }

    async fn update(&self, key: &str, data: HotspotUpdate) -> RepoResult<Hotspot> {
        #[derive(Serialize)]
        struct HotspotUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            coordinates: Option<Coordinates>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supermarket: Option<RecordId>,
            updated_at: i64,
        }

        let merge = HotspotUpdateDb {
            name: data.name,
            coordinates: data.coordinates,
            supermarket: data.supermarket,
            updated_at: now_millis(),
        };

        let updated: Option<Hotspot> = self
            .base
            .db()
            .update(record_id(TABLE, key)?)
            .merge(merge)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Hotspot {key} not found")))
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        let deleted: Option<Hotspot> = self.base.db().delete(record_id(TABLE, key)?).await?;
        Ok(deleted.is_some())
    }
}
