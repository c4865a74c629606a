use crate::domain::inventory::{ProductInventory, StockLog};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProductInventoryDto {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub zone_id: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductInventory> for ProductInventoryDto {
    fn from(inv: ProductInventory) -> Self {
        Self {
            id: inv.id.into(),
            product_id: inv.product_id.into(),
            warehouse_id: inv.warehouse_id.into(),
            zone_id: inv.zone_id.into(),
            quantity: inv.quantity,
            created_at: inv.created_at,
            updated_at: inv.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StockLogDto {
    pub id: i64,
    pub inventory_id: i64,
    pub log_type: String,
    pub quantity_before: i64,
    pub quantity_change: i64,
    pub quantity_after: i64,
    pub reference_kind: Option<String>,
    pub reference_id: Option<String>,
    pub note: Option<String>,
    pub actor: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StockLog> for StockLogDto {
    fn from(log: StockLog) -> Self {
        Self {
            id: log.id,
            inventory_id: log.inventory_id.into(),
            log_type: log.log_type.as_str().to_string(),
            quantity_before: log.quantity_before,
            quantity_change: log.quantity_change,
            quantity_after: log.quantity_after,
            reference_kind: log.reference_kind.map(|k| k.as_str().to_string()),
            reference_id: log.reference_id,
            note: log.note,
            actor: log.actor,
            created_at: log.created_at,
        }
    }
}
