// src/application/commands/stock/move_stock.rs
use super::StockCommandService;
use crate::{
    application::{
        dto::Actor,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, NewAuditLog},
        catalog::value_objects::{ProductId, WarehouseId, ZoneId},
        inventory::{NewProductInventory, NewStockLog, ReferenceKind, StockLogType},
    },
};

pub struct MoveStockCommand {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub source_zone_id: i64,
    pub destination_zone_id: i64,
    /// Whole units to move, at least 1.
    pub quantity: i64,
    pub note: Option<String>,
}

impl StockCommandService {
    /// Paired decrement/increment across two zones of the same warehouse.
    /// Issues a `GOODS_ISSUE` row on the source and a `GOODS_RECEIPT` row on
    /// the destination, both cross-referencing the destination inventory id,
    /// and commits everything or nothing. The source record must already
    /// exist; the destination is find-or-created.
    pub async fn move_stock(
        &self,
        actor: Option<&Actor>,
        command: MoveStockCommand,
    ) -> ApplicationResult<()> {
        let product_id = ProductId::new(command.product_id)?;
        let warehouse_id = WarehouseId::new(command.warehouse_id)?;
        let source_zone_id = ZoneId::new(command.source_zone_id)?;
        let destination_zone_id = ZoneId::new(command.destination_zone_id)?;

        if command.quantity < 1 {
            return Err(ApplicationError::validation(
                "move quantity must be at least 1",
            ));
        }
        if source_zone_id == destination_zone_id {
            return Err(ApplicationError::conflict(
                "source and destination zones cannot be the same",
            ));
        }

        self.resolve_zone(product_id, warehouse_id, source_zone_id)
            .await?;
        self.resolve_zone(product_id, warehouse_id, destination_zone_id)
            .await?;

        let now = self.clock.now();
        let mut tx = self.store.begin().await?;

        let (source, destination) = tx
            .find_zone_pair_for_update(product_id, warehouse_id, source_zone_id, destination_zone_id)
            .await?;

        let source = source.ok_or_else(|| {
            ApplicationError::not_found(format!(
                "no inventory for product {product_id} in source zone {source_zone_id}"
            ))
        })?;

        if source.quantity < command.quantity {
            return Err(ApplicationError::conflict(format!(
                "insufficient stock in source zone, available {}",
                source.quantity
            )));
        }

        let destination = match destination {
            Some(existing) => existing,
            None => {
                tx.create_inventory(NewProductInventory {
                    product_id,
                    warehouse_id,
                    zone_id: destination_zone_id,
                    quantity: 0,
                    created_at: now,
                    updated_at: now,
                })
                .await?
            }
        };

        let source_before = source.quantity;
        tx.save_quantity(source.id, source_before - command.quantity, now)
            .await?;
        tx.append_stock_log(NewStockLog::record(
            source.id,
            StockLogType::GoodsIssue,
            source_before,
            -command.quantity,
            Some(ReferenceKind::TransferCounterpart),
            Some(destination.id.to_string()),
            command.note.clone(),
            actor.map(Actor::label),
            now,
        )?)
        .await?;

        let destination_before = destination.quantity;
        let destination_after = destination_before
            .checked_add(command.quantity)
            .ok_or_else(|| {
                ApplicationError::validation(
                    "move quantity overflows the destination stock counter",
                )
            })?;
        tx.save_quantity(destination.id, destination_after, now)
            .await?;
        tx.append_stock_log(NewStockLog::record(
            destination.id,
            StockLogType::GoodsReceipt,
            destination_before,
            command.quantity,
            Some(ReferenceKind::TransferCounterpart),
            Some(destination.id.to_string()),
            command.note,
            actor.map(Actor::label),
            now,
        )?)
        .await?;

        tx.append_audit_log(NewAuditLog {
            actor: actor.map(Actor::label),
            action: AuditAction::MoveStock,
            table_affected: "product_inventories".into(),
            object_id: source.id.to_string(),
            note: Some(format!(
                "Moved {} units of product {product_id} from zone {source_zone_id} to zone {destination_zone_id}",
                command.quantity
            )),
            created_at: now,
        })
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = command.product_id,
            quantity = command.quantity,
            source_zone_id = command.source_zone_id,
            destination_zone_id = command.destination_zone_id,
            "inventory moved"
        );

        Ok(())
    }
}
