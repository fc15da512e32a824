#[path = "setup.rs"]
mod setup;

use schemacrawler::{Crawler, Facet, FacetKind, IndexMetadata};
use setup::shop_catalog;

#[tokio::test]
async fn test_table_metadata_matches_catalog() {
    let crawler = Crawler::new(shop_catalog());
    for name in crawler.list_tables().await.unwrap_or_default() {
        let table = crawler.table_metadata(&name).await;
        assert_eq!(table.table_name, name);
        for key in &table.primary_keys {
            assert!(table.column(key).is_some(), "{name}.{key}");
        }
        for column in &table.columns {
            assert_eq!(column.is_primary_key, table.primary_keys.contains(&column.name));
        }
    }
}

#[tokio::test]
async fn test_column_counts() {
    let crawler = Crawler::new(shop_catalog());
    let counts = crawler
        .all_tables()
        .await
        .into_iter()
        .map(|t| (t.table_name, t.columns.len()))
        .collect::<Vec<_>>();
    assert_eq!(
        counts,
        [("orders".to_string(), 4), ("order_item".to_string(), 3), ("user_role".to_string(), 2)]
    );
}

#[tokio::test]
async fn test_composite_unique_index() {
    let crawler = Crawler::new(shop_catalog());
    let indexes = crawler.indexes("orders").await;
    assert_eq!(
        indexes,
        Facet::Available(vec![IndexMetadata {
            name: "uq_orders_email_placed".to_string(),
            columns: vec!["customer_email".to_string(), "placed_at".to_string()],
            is_unique: true,
            is_primary: false,
        }])
    );
    assert_eq!(crawler.indexes("order_item").await, Facet::Available(vec![]));
}

#[tokio::test]
async fn test_unreachable_catalog_is_distinguishable_from_empty() {
    let crawler = Crawler::new(shop_catalog().offline());
    assert!(crawler.check_connection().await.is_err());
    let tables = crawler.list_tables().await;
    assert!(tables.cause().is_some());
    assert!(tables.unwrap_or_default().is_empty());

    let crawler = Crawler::new(schemacrawler::catalog::MemoryCatalog::new());
    assert!(crawler.check_connection().await.is_ok());
    assert_eq!(crawler.list_tables().await, Facet::Available(vec![]));
}

#[tokio::test]
async fn test_crawled_table_reports_failed_facets() {
    let crawler = Crawler::new(shop_catalog().failing(FacetKind::ForeignKeys));
    let crawled = crawler.crawl_table("order_item").await;
    let failed = crawled.unavailable().into_iter().map(|(kind, _)| kind).collect::<Vec<_>>();
    assert_eq!(failed, [FacetKind::ForeignKeys]);

    let json = serde_json::to_value(&crawled).unwrap();
    assert_eq!(json["foreignKeys"]["status"], "unavailable");
    assert_eq!(json["columns"]["status"], "available");
}
