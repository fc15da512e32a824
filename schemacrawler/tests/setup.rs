/// Shared fixtures for the integration tests.
/// Import it from a test like so:
/// ```
/// #[path = "setup.rs"]
/// mod setup;
/// ```
use schemacrawler::catalog::MemoryCatalog;

/// `orders`, `order_item` and a `user_role` junction table, plus catalog noise.
#[allow(dead_code)]
pub fn shop_catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .table("shop", "orders")
        .table("shop", "order_item")
        .table("shop", "user_role")
        .table("information_schema", "COLUMNS")
        // orders
        .column("orders", "id", "BIGINT")
        .column("orders", "customer_email", "VARCHAR")
        .column("orders", "total", "DECIMAL")
        .column("orders", "placed_at", "DATETIME")
        .primary_key("orders", "id")
        .index("orders", "PRIMARY", "id", true)
        .index("orders", "uq_orders_email_placed", "customer_email", true)
        .index("orders", "uq_orders_email_placed", "placed_at", true)
        // order_item
        .column("order_item", "id", "BIGINT")
        .column("order_item", "order_id", "BIGINT")
        .column("order_item", "qty", "INT")
        .primary_key("order_item", "id")
        .foreign_key("order_item", "fk_order_item_order", "order_id", "orders", "id")
        .index("order_item", "PRIMARY", "id", true)
        // user_role
        .column("user_role", "user_id", "BIGINT")
        .column("user_role", "role_id", "BIGINT")
        .primary_key("user_role", "user_id")
        .primary_key("user_role", "role_id")
        .foreign_key("user_role", "fk_user_role_user", "user_id", "app_user", "id")
        .foreign_key("user_role", "fk_user_role_role", "role_id", "role", "id")
}
