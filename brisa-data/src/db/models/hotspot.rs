//! Hotspot Model

use super::{Identified, serde_helpers};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Floor coordinates inside a supermarket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Hotspot entity (a physical zone inside a supermarket)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotspot {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub coordinates: Coordinates,
    /// Record link to the owning supermarket (not enforced by the store)
    pub supermarket: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Identified for Hotspot {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

/// Create hotspot payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotCreate {
    pub name: String,
    pub coordinates: Coordinates,
    pub supermarket: RecordId,
}

/// Update hotspot payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HotspotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supermarket: Option<RecordId>,
}
