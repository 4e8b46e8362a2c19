//! Sample data seeding
//!
//! Fixture used by the `brisa-seed` binary and by integration tests. Every
//! record has a fixed id and is written with upsert semantics, so running
//! the tool twice against a live store is safe.

use chrono::{TimeZone, Utc};
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

use crate::db::models::{Cart, Coordinates, Hotspot, Offer, Supermarket};
use crate::db::repository::{RepoResult, cart, hotspot, offer, supermarket};

/// Write the demo data set
pub async fn seed_sample_data(db: &Surreal<Any>) -> RepoResult<()> {
    // Supermercado
    let _: Option<Supermarket> = db
        .upsert((supermarket::TABLE, "sm001"))
        .content(Supermarket {
            id: None,
            name: "Supermercado São João".to_string(),
            address: "Av. Central, 987 - Bairro Centro, Porto Alegre - RS".to_string(),
            created_at: None,
            updated_at: None,
        })
        .await?;
    tracing::info!("Seeded supermercados");

    // Hotspots
    let sm001 = RecordId::from_table_key(supermarket::TABLE, "sm001");
    let _: Option<Hotspot> = db
        .upsert((hotspot::TABLE, "hs001"))
        .content(Hotspot {
            id: None,
            name: "Corredor de Frios e Laticínios".to_string(),
            coordinates: Coordinates { x: 3.0, y: 7.0 },
            supermarket: sm001.clone(),
            created_at: None,
            updated_at: None,
        })
        .await?;
    let _: Option<Hotspot> = db
        .upsert((hotspot::TABLE, "hs002"))
        .content(Hotspot {
            id: None,
            name: "Corredor de Higiene e Limpeza".to_string(),
            coordinates: Coordinates { x: 5.0, y: 2.0 },
            supermarket: sm001.clone(),
            created_at: None,
            updated_at: None,
        })
        .await?;
    tracing::info!("Seeded hotspots");

    // Ofertas
    let start = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 4, 7, 0, 0, 0).unwrap();
    let _: Option<Offer> = db
        .upsert((offer::TABLE, "of001"))
        .content(Offer {
            id: None,
            product_name: "Leite Integral 1L - Marca BomLeite".to_string(),
            description: "Promoção por tempo limitado: leve 3 e pague 2!".to_string(),
            image_url: "https://example.com/imagens/leite-bomleite.jpg".to_string(),
            price: 4.49,
            category: "laticínios".to_string(),
            start_date: start,
            end_date: end,
            hotspot: RecordId::from_table_key(hotspot::TABLE, "hs001"),
            supermarket: sm001.clone(),
            created_at: None,
            updated_at: None,
        })
        .await?;
    let _: Option<Offer> = db
        .upsert((offer::TABLE, "of002"))
        .content(Offer {
            id: None,
            product_name: "Sabão em Pó Omo 2kg".to_string(),
            description: "Desconto exclusivo! Apenas R$17,99 esta semana.".to_string(),
            image_url: "https://example.com/imagens/sabao-omo.jpg".to_string(),
            price: 17.99,
            category: "limpeza".to_string(),
            start_date: start,
            end_date: end,
            hotspot: RecordId::from_table_key(hotspot::TABLE, "hs002"),
            supermarket: sm001,
            created_at: None,
            updated_at: None,
        })
        .await?;
    tracing::info!("Seeded ofertas");

    // Carrinho
    let _: Option<Cart> = db
        .upsert((cart::TABLE, "carrinho001"))
        .content(Cart {
            id: None,
            tablet_id: "tb001".to_string(),
            current_location: RecordId::from_table_key(hotspot::TABLE, "hs001"),
            displayed_offers: vec![
                RecordId::from_table_key(offer::TABLE, "of001"),
                RecordId::from_table_key(offer::TABLE, "of002"),
            ],
            session_duration: 12,
            position: None,
            created_at: None,
            updated_at: None,
        })
        .await?;
    tracing::info!("Seeded carrinhos");

    Ok(())
}
