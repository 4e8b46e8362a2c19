//! Offer Model

use super::{Identified, serde_helpers};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Offer entity (a time-bounded promotion targeted at a hotspot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub price: f64,
    pub category: String,
    /// Validity window
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Record link to the targeted hotspot (not enforced by the store)
    pub hotspot: RecordId,
    /// Record link to the owning supermarket (not enforced by the store)
    pub supermarket: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Identified for Offer {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferCreate {
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub price: f64,
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub hotspot: RecordId,
    pub supermarket: RecordId,
}

/// Update offer payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supermarket: Option<RecordId>,
}
