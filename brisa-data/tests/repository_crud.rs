//! Repository CRUD behavior against an in-memory store

use brisa_data::db::models::{CartCreate, Coordinates, HotspotCreate, HotspotUpdate, OfferCreate};
use brisa_data::{
    CartRepository, Config, DbService, HotspotRepository, OfferRepository, RepoError, Repository,
};
use chrono::{TimeZone, Utc};
use surrealdb::RecordId;

async fn test_service() -> DbService {
    let config = Config::with_overrides("mem://");
    DbService::connect(&config).await.expect("in-memory store")
}

fn sample_hotspot(name: &str) -> HotspotCreate {
    HotspotCreate {
        name: name.to_string(),
        coordinates: Coordinates { x: 1.0, y: 2.0 },
        supermarket: RecordId::from_table_key("supermercados", "sm001"),
    }
}

fn sample_offer(product: &str, hotspot_key: &str) -> OfferCreate {
    OfferCreate {
        product_name: product.to_string(),
        description: String::new(),
        image_url: String::new(),
        price: 9.99,
        category: "geral".to_string(),
        start_date: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2025, 4, 7, 0, 0, 0).unwrap(),
        hotspot: RecordId::from_table_key("hotspots", hotspot_key),
        supermarket: RecordId::from_table_key("supermercados", "sm001"),
    }
}

fn key_of(id: &Option<RecordId>) -> String {
    id.as_ref().expect("persisted record id").key().to_string()
}

#[tokio::test]
async fn test_find_all_empty_collection_is_empty() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_get_roundtrip() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    let created = repo.create(sample_hotspot("Corredor A")).await.unwrap();
    assert!(created.id.is_some());
    assert!(created.created_at.is_some());

    let fetched = repo.find_by_id(&key_of(&created.id)).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Corredor A");
    assert_eq!(fetched.coordinates, Coordinates { x: 1.0, y: 2.0 });
}

#[tokio::test]
async fn test_get_after_delete_returns_none() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    let created = repo.create(sample_hotspot("Corredor B")).await.unwrap();
    let key = key_of(&created.id);

    assert!(repo.delete(&key).await.unwrap());
    assert!(repo.find_by_id(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_record_is_ok() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    // Idempotent: deleting an absent record is not an error
    assert!(!repo.delete("nope").await.unwrap());
}

#[tokio::test]
async fn test_update_merges_partial_fields() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    let created = repo.create(sample_hotspot("Corredor C")).await.unwrap();
    let key = key_of(&created.id);

    let updated = repo
        .update(
            &key,
            HotspotUpdate {
                name: Some("Corredor C - Renovado".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Supplied field changed, untouched fields retained, stamp added
    assert_eq!(updated.name, "Corredor C - Renovado");
    assert_eq!(updated.coordinates, Coordinates { x: 1.0, y: 2.0 });
    assert_eq!(updated.supermarket, created.supermarket);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_update_missing_record_is_not_found() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    let result = repo.update("ghost", HotspotUpdate::default()).await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));
}

#[tokio::test]
async fn test_empty_key_is_rejected() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    let result = repo.find_by_id("").await;
    assert!(matches!(result, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn test_offers_by_hotspot_returns_matching_subset() {
    let service = test_service().await;
    let repo = OfferRepository::new(service.db());

    repo.create(sample_offer("Leite", "hs001")).await.unwrap();
    repo.create(sample_offer("Sabão", "hs002")).await.unwrap();
    repo.create(sample_offer("Queijo", "hs001")).await.unwrap();

    let offers = repo.find_by_hotspot("hs001").await.unwrap();
    assert_eq!(offers.len(), 2);
    assert!(offers.iter().all(|o| o.hotspot.key().to_string() == "hs001"));

    assert!(repo.find_by_hotspot("hs999").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hotspots_by_supermarket() {
    let service = test_service().await;
    let repo = HotspotRepository::new(service.db());

    repo.create(sample_hotspot("Corredor A")).await.unwrap();
    repo.create(HotspotCreate {
        name: "Corredor B".to_string(),
        coordinates: Coordinates { x: 5.0, y: 2.0 },
        supermarket: RecordId::from_table_key("supermercados", "sm002"),
    })
    .await
    .unwrap();

    let hotspots = repo.find_by_supermarket("sm001").await.unwrap();
    assert_eq!(hotspots.len(), 1);
    assert_eq!(hotspots[0].name, "Corredor A");
}

#[tokio::test]
async fn test_cart_find_by_tablet() {
    let service = test_service().await;
    let repo = CartRepository::new(service.db());

    let created = repo
        .create(CartCreate {
            tablet_id: "tb042".to_string(),
            current_location: RecordId::from_table_key("hotspots", "hs001"),
            displayed_offers: vec![],
            session_duration: 0,
        })
        .await
        .unwrap();

    let found = repo.find_by_tablet("tb042").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    assert!(repo.find_by_tablet("tb999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_cart_update_position() {
    let service = test_service().await;
    let repo = CartRepository::new(service.db());

    let created = repo
        .create(CartCreate {
            tablet_id: "tb001".to_string(),
            current_location: RecordId::from_table_key("hotspots", "hs001"),
            displayed_offers: vec![RecordId::from_table_key("ofertas", "of001")],
            session_duration: 12,
        })
        .await
        .unwrap();
    let key = key_of(&created.id);

    let moved = repo
        .update_position(&key, Coordinates { x: 4.5, y: 8.25 })
        .await
        .unwrap();

    assert_eq!(moved.position, Some(Coordinates { x: 4.5, y: 8.25 }));
    // Position merge leaves the rest of the session untouched
    assert_eq!(moved.tablet_id, "tb001");
    assert_eq!(moved.displayed_offers.len(), 1);
    assert_eq!(moved.session_duration, 12);
}
