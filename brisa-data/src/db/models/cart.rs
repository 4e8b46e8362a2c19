//! Cart Model

use super::{Coordinates, Identified, serde_helpers};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Cart entity (one physical cart / tablet session)
///
/// Mutated frequently while a shopper moves through the store; `position`
/// is the live tracking field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub tablet_id: String,
    /// Record link to the hotspot the cart is currently in
    pub current_location: RecordId,
    /// Offers shown on the tablet, in display order
    #[serde(default)]
    pub displayed_offers: Vec<RecordId>,
    /// Session length so far, in minutes
    #[serde(default)]
    pub session_duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Identified for Cart {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

/// Create cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCreate {
    pub tablet_id: String,
    pub current_location: RecordId,
    #[serde(default)]
    pub displayed_offers: Vec<RecordId>,
    #[serde(default)]
    pub session_duration: i64,
}

/// Update cart payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CartUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_offers: Option<Vec<RecordId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Coordinates>,
}
