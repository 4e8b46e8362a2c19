//! Repository Module
//!
//! One repository per collection; every operation is a single dispatch to
//! the store, with no retries, caching or cross-collection coordination.

// Catalog
pub mod hotspot;
pub mod offer;
pub mod supermarket;

// Cart sessions
pub mod cart;

// Re-exports
pub use cart::CartRepository;
pub use hotspot::HotspotRepository;
pub use offer::OfferRepository;
pub use supermarket::SupermarketRepository;

use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
///
/// Store failures are passed through with their original message; the
/// module never retries or reclassifies them.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
///
/// Absence on point reads is a value (`Ok(None)`), not an error; update of
/// a missing record is `NotFound`; delete is idempotent.
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, key: &str) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, key: &str, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, key: &str) -> RepoResult<bool>;
}

/// Build a record id from a collection name and a record key
///
/// Keys are otherwise unvalidated; an empty key is the one misuse rejected
/// here instead of at the store.
pub(crate) fn record_id(table: &str, key: &str) -> RepoResult<RecordId> {
    if key.trim().is_empty() {
        return Err(RepoError::Validation(format!(
            "Empty record key for collection '{table}'"
        )));
    }
    Ok(RecordId::from_table_key(table, key))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
