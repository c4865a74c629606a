// src/infrastructure/repositories/mod.rs
mod postgres_audit_log;
mod postgres_catalog;
mod postgres_stock_ledger;

pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_catalog::{
    PostgresProductCategoryRepository, PostgresProductRepository,
    PostgresUnitOfMeasureRepository, PostgresWarehouseRepository,
    PostgresWarehouseZoneRepository,
};
pub use postgres_stock_ledger::PostgresStockLedgerStore;

use crate::domain::errors::DomainError;

const CNT_PRODUCT_SKU: &str = "products_sku_key";
const CNT_PRODUCT_BARCODE: &str = "products_barcode_key";
const CNT_WAREHOUSE_CODE: &str = "warehouses_code_key";
const CNT_ZONE_CODE: &str = "warehouse_zones_code_key";
const CNT_ZONE_NAME: &str = "warehouse_zones_warehouse_id_name_key";
const CNT_INVENTORY_LOCATION: &str = "uk_product_location";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_SKU => DomainError::Conflict("sku already exists".into()),
                    CNT_PRODUCT_BARCODE => DomainError::Conflict("barcode already exists".into()),
                    CNT_WAREHOUSE_CODE => {
                        DomainError::Conflict("warehouse code already exists".into())
                    }
                    CNT_ZONE_CODE => DomainError::Conflict("zone code already exists".into()),
                    CNT_ZONE_NAME => {
                        DomainError::Conflict("zone name already exists in warehouse".into())
                    }
                    CNT_INVENTORY_LOCATION => DomainError::Conflict(
                        "inventory record already exists for this location".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
