//! Explicit client lifecycle against an on-disk engine

use brisa_data::{Config, DbService, SupermarketRepository, seed};

#[tokio::test]
async fn test_reconnect_sees_previous_writes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("rocksdb://{}", dir.path().join("brisa.db").display());

    {
        let service = DbService::connect(&Config::with_overrides(url.as_str()))
            .await
            .expect("first connection");
        seed::seed_sample_data(&service.db).await.expect("seed");
        // Dropping the handle closes the session
    }

    let service = DbService::connect(&Config::with_overrides(url.as_str()))
        .await
        .expect("second connection");
    let market = SupermarketRepository::new(service.db())
        .find_by_id("sm001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(market.name, "Supermercado São João");
}
