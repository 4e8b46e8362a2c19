//! Supermarket Model

use super::{Identified, serde_helpers};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Supermarket entity, one per physical retail location
///
/// Written by the seed tool and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supermarket {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Identified for Supermarket {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}
