//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod hotspot;
pub mod offer;
pub mod supermarket;

// Cart sessions
pub mod cart;

// Re-exports
pub use cart::{Cart, CartCreate, CartUpdate};
pub use hotspot::{Coordinates, Hotspot, HotspotCreate, HotspotUpdate};
pub use offer::{Offer, OfferCreate, OfferUpdate};
pub use supermarket::Supermarket;

use surrealdb::RecordId;

/// Entities that know their own record id once persisted
///
/// Live collection feeds key their working snapshot by record id; every
/// persisted model implements this.
pub trait Identified {
    fn record_id(&self) -> Option<&RecordId>;
}
