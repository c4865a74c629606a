// src/application/commands/stock/adjust.rs
use super::StockCommandService;
use crate::{
    application::{
        dto::{Actor, ProductInventoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, NewAuditLog},
        catalog::value_objects::{ProductId, WarehouseId, ZoneId},
        inventory::{NewProductInventory, NewStockLog, ReferenceKind, StockLogType},
    },
};

pub struct AdjustStockCommand {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub zone_id: i64,
    /// Signed: positive increases stock, negative decreases it.
    pub quantity_change: i64,
    pub note: Option<String>,
    pub reference_kind: Option<ReferenceKind>,
    pub reference_id: Option<String>,
}

impl StockCommandService {
    /// Single-location quantity change. Find-or-creates the inventory record,
    /// rejects any change that would take the quantity below zero, and
    /// appends exactly one ledger row plus one audit entry, all in one
    /// atomic unit of work.
    pub async fn adjust(
        &self,
        actor: Option<&Actor>,
        command: AdjustStockCommand,
    ) -> ApplicationResult<ProductInventoryDto> {
        let product_id = ProductId::new(command.product_id)?;
        let warehouse_id = WarehouseId::new(command.warehouse_id)?;
        let zone_id = ZoneId::new(command.zone_id)?;

        if command.quantity_change == 0 {
            return Err(ApplicationError::validation(
                "quantity change cannot be zero",
            ));
        }

        self.resolve_zone(product_id, warehouse_id, zone_id).await?;

        let now = self.clock.now();
        let mut tx = self.store.begin().await?;

        let inventory = match tx
            .find_inventory_for_update(product_id, warehouse_id, zone_id)
            .await?
        {
            Some(existing) => existing,
            None => {
                tx.create_inventory(NewProductInventory {
                    product_id,
                    warehouse_id,
                    zone_id,
                    quantity: 0,
                    created_at: now,
                    updated_at: now,
                })
                .await?
            }
        };

        let quantity_before = inventory.quantity;
        let new_quantity = quantity_before
            .checked_add(command.quantity_change)
            .ok_or_else(|| {
                ApplicationError::validation("quantity change overflows the stock counter")
            })?;
        if new_quantity < 0 {
            return Err(ApplicationError::conflict(format!(
                "adjustment would result in negative stock, current quantity is {quantity_before}"
            )));
        }

        tx.save_quantity(inventory.id, new_quantity, now).await?;

        let log_type = if command.quantity_change > 0 {
            StockLogType::AdjustmentIn
        } else {
            StockLogType::AdjustmentOut
        };
        tx.append_stock_log(NewStockLog::record(
            inventory.id,
            log_type,
            quantity_before,
            command.quantity_change,
            command.reference_kind,
            command.reference_id,
            command.note,
            actor.map(Actor::label),
            now,
        )?)
        .await?;

        tx.append_audit_log(NewAuditLog {
            actor: actor.map(Actor::label),
            action: AuditAction::AdjustStock,
            table_affected: "product_inventories".into(),
            object_id: inventory.id.to_string(),
            note: Some(format!(
                "Adjusted stock by {} for product {product_id} in zone {zone_id}, new quantity {new_quantity}",
                command.quantity_change
            )),
            created_at: now,
        })
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = command.product_id,
            zone_id = command.zone_id,
            quantity = new_quantity,
            "inventory adjusted"
        );

        let mut updated = inventory;
        updated.quantity = new_quantity;
        updated.updated_at = now;
        Ok(updated.into())
    }
}
