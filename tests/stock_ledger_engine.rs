// tests/stock_ledger_engine.rs
use std::sync::Arc;

mod support;

use stockroom::application::commands::stock::{
    AdjustStockCommand, MoveStockCommand, StockCommandService,
};
use stockroom::application::dto::Actor;
use stockroom::application::error::ApplicationError;
use stockroom::domain::audit::AuditAction;
use stockroom::domain::catalog::{
    Barcode, Product, Sku, Warehouse, WarehouseCode, WarehouseZone, ZoneCode,
    value_objects::{CategoryId, ProductId, UnitId, WarehouseId, ZoneId},
};
use stockroom::domain::inventory::{ReferenceKind, StockLedgerStore, StockLogType};

use support::{
    FixedClock, InMemoryLedger, InMemoryProductRepository, InMemoryWarehouseRepository,
    InMemoryWarehouseZoneRepository, fixed_instant,
};

struct World {
    ledger: Arc<InMemoryLedger>,
    service: StockCommandService,
}

fn world() -> World {
    let now = fixed_instant();

    let products = Arc::new(InMemoryProductRepository::default());
    products.seed(vec![Product {
        id: ProductId::new(1).unwrap(),
        sku: Sku::new("ELE-GAMEMO-PCS").unwrap(),
        barcode: Barcode::new("1234567890128").unwrap(),
        name: "Game Mouse".into(),
        description: None,
        category_id: CategoryId::new(1).unwrap(),
        unit_id: UnitId::new(1).unwrap(),
        minimum_stock: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }]);

    let warehouses = Arc::new(InMemoryWarehouseRepository::default());
    warehouses.seed(vec![Warehouse {
        id: WarehouseId::new(1).unwrap(),
        code: WarehouseCode::new("MAINWAREHO").unwrap(),
        name: "Main Warehouse".into(),
        address: None,
        created_at: now,
        updated_at: now,
    }]);

    let zones = Arc::new(InMemoryWarehouseZoneRepository::default());
    zones.seed(vec![
        WarehouseZone {
            id: ZoneId::new(1).unwrap(),
            warehouse_id: WarehouseId::new(1).unwrap(),
            code: ZoneCode::new("MAINWAREHO-RECE").unwrap(),
            name: "Receiving".into(),
            created_at: now,
        },
        WarehouseZone {
            id: ZoneId::new(2).unwrap(),
            warehouse_id: WarehouseId::new(1).unwrap(),
            code: ZoneCode::new("MAINWAREHO-PICK").unwrap(),
            name: "Picking".into(),
            created_at: now,
        },
    ]);

    let ledger = Arc::new(InMemoryLedger::default());
    let store: Arc<dyn StockLedgerStore> = ledger.clone();
    let service = StockCommandService::new(
        store,
        products,
        warehouses,
        zones,
        Arc::new(FixedClock::new()),
    );

    World { ledger, service }
}

fn actor() -> Actor {
    Actor {
        id: 7,
        username: "warehouse.clerk".into(),
    }
}

fn adjust(quantity_change: i64) -> AdjustStockCommand {
    AdjustStockCommand {
        product_id: 1,
        warehouse_id: 1,
        zone_id: 1,
        quantity_change,
        note: None,
        reference_kind: None,
        reference_id: None,
    }
}

fn move_units(quantity: i64) -> MoveStockCommand {
    MoveStockCommand {
        product_id: 1,
        warehouse_id: 1,
        source_zone_id: 1,
        destination_zone_id: 2,
        quantity,
        note: None,
    }
}

#[tokio::test]
async fn first_adjustment_creates_inventory_and_logs_from_zero() {
    let w = world();
    let caller = actor();

    let dto = w.service.adjust(Some(&caller), adjust(50)).await.unwrap();
    assert_eq!(dto.quantity, 50);

    let logs = w.ledger.stock_logs().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].log_type, StockLogType::AdjustmentIn);
    assert_eq!(logs[0].quantity_before, 0);
    assert_eq!(logs[0].quantity_change, 50);
    assert_eq!(logs[0].quantity_after, 50);
    assert_eq!(logs[0].actor.as_deref(), Some("warehouse.clerk"));

    let audits = w.ledger.audit_entries().await;
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].action, AuditAction::AdjustStock);
}

#[tokio::test]
async fn adjustments_are_cumulative_not_idempotent() {
    let w = world();

    w.service.adjust(None, adjust(50)).await.unwrap();
    let dto = w.service.adjust(None, adjust(50)).await.unwrap();

    assert_eq!(dto.quantity, 100);
    assert_eq!(w.ledger.stock_logs().await.len(), 2);
}

#[tokio::test]
async fn negative_adjustment_uses_adjustment_out() {
    let w = world();

    w.service.adjust(None, adjust(50)).await.unwrap();
    let dto = w.service.adjust(None, adjust(-20)).await.unwrap();
    assert_eq!(dto.quantity, 30);

    let logs = w.ledger.stock_logs().await;
    assert_eq!(logs[1].log_type, StockLogType::AdjustmentOut);
    assert_eq!(logs[1].quantity_change, -20);
    assert_eq!(logs[1].quantity_after, 30);
}

#[tokio::test]
async fn adjustment_below_zero_is_a_conflict_and_writes_nothing() {
    let w = world();

    w.service.adjust(None, adjust(50)).await.unwrap();
    let err = w.service.adjust(None, adjust(-60)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    // The failed attempt must leave no trace.
    let state = w.ledger.snapshot().await;
    assert_eq!(state.inventories[0].quantity, 50);
    assert_eq!(state.stock_logs.len(), 1);
    assert_eq!(state.audit_entries.len(), 1);
}

#[tokio::test]
async fn adjustment_overflowing_the_counter_is_rejected_and_writes_nothing() {
    let w = world();

    w.service.adjust(None, adjust(1)).await.unwrap();
    let err = w.service.adjust(None, adjust(i64::MAX)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let state = w.ledger.snapshot().await;
    assert_eq!(state.inventories[0].quantity, 1);
    assert_eq!(state.stock_logs.len(), 1);
}

#[tokio::test]
async fn zero_adjustment_is_rejected() {
    let w = world();
    let err = w.service.adjust(None, adjust(0)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn adjustment_against_unknown_zone_is_not_found() {
    let w = world();
    let mut command = adjust(10);
    command.zone_id = 99;
    let err = w.service.adjust(None, command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn move_writes_paired_issue_and_receipt_rows() {
    let w = world();
    let caller = actor();

    w.service.adjust(Some(&caller), adjust(50)).await.unwrap();
    w.service
        .move_stock(Some(&caller), move_units(20))
        .await
        .unwrap();

    let state = w.ledger.snapshot().await;
    let source = state.inventories.iter().find(|i| i.zone_id.0 == 1).unwrap();
    let destination = state.inventories.iter().find(|i| i.zone_id.0 == 2).unwrap();
    assert_eq!(source.quantity, 30);
    assert_eq!(destination.quantity, 20);

    let issue = &state.stock_logs[1];
    let receipt = &state.stock_logs[2];
    assert_eq!(issue.log_type, StockLogType::GoodsIssue);
    assert_eq!(issue.quantity_before, 50);
    assert_eq!(issue.quantity_change, -20);
    assert_eq!(issue.quantity_after, 30);
    assert_eq!(receipt.log_type, StockLogType::GoodsReceipt);
    assert_eq!(receipt.quantity_before, 0);
    assert_eq!(receipt.quantity_change, 20);
    assert_eq!(receipt.quantity_after, 20);

    // Both rows cross-reference the destination inventory record.
    let destination_id = destination.id.to_string();
    assert_eq!(issue.reference_kind, Some(ReferenceKind::TransferCounterpart));
    assert_eq!(issue.reference_id.as_deref(), Some(destination_id.as_str()));
    assert_eq!(
        receipt.reference_kind,
        Some(ReferenceKind::TransferCounterpart)
    );
    assert_eq!(
        receipt.reference_id.as_deref(),
        Some(destination_id.as_str())
    );

    // One audit entry for the whole move, on top of the adjustment's.
    assert_eq!(state.audit_entries.len(), 2);
    assert_eq!(state.audit_entries[1].action, AuditAction::MoveStock);
}

#[tokio::test]
async fn move_into_existing_destination_accumulates() {
    let w = world();

    w.service.adjust(None, adjust(50)).await.unwrap();
    w.service.move_stock(None, move_units(10)).await.unwrap();
    w.service.move_stock(None, move_units(15)).await.unwrap();

    let inventories = w.ledger.inventories().await;
    let source = inventories.iter().find(|i| i.zone_id.0 == 1).unwrap();
    let destination = inventories.iter().find(|i| i.zone_id.0 == 2).unwrap();
    assert_eq!(source.quantity, 25);
    assert_eq!(destination.quantity, 25);
}

#[tokio::test]
async fn move_with_insufficient_stock_is_a_conflict_and_writes_nothing() {
    let w = world();

    w.service.adjust(None, adjust(10)).await.unwrap();
    let err = w
        .service
        .move_stock(None, move_units(20))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let state = w.ledger.snapshot().await;
    assert_eq!(state.inventories.len(), 1);
    assert_eq!(state.inventories[0].quantity, 10);
    assert_eq!(state.stock_logs.len(), 1);
}

#[tokio::test]
async fn move_overflowing_the_destination_is_rejected_and_rolls_back() {
    let w = world();

    // Destination already at the counter maximum; the receipt side must fail
    // and take the already-staged issue side down with it.
    let mut fill_destination = adjust(i64::MAX);
    fill_destination.zone_id = 2;
    w.service.adjust(None, fill_destination).await.unwrap();
    w.service.adjust(None, adjust(5)).await.unwrap();

    let err = w
        .service
        .move_stock(None, move_units(5))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let inventories = w.ledger.inventories().await;
    let source = inventories.iter().find(|i| i.zone_id.0 == 1).unwrap();
    let destination = inventories.iter().find(|i| i.zone_id.0 == 2).unwrap();
    assert_eq!(source.quantity, 5);
    assert_eq!(destination.quantity, i64::MAX);
    assert_eq!(w.ledger.stock_logs().await.len(), 2);
}

#[tokio::test]
async fn move_from_missing_source_is_not_found() {
    let w = world();
    let err = w
        .service
        .move_stock(None, move_units(5))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn move_between_identical_zones_is_a_conflict() {
    let w = world();
    let mut command = move_units(5);
    command.destination_zone_id = 1;
    let err = w.service.move_stock(None, command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn move_quantity_below_one_is_rejected() {
    let w = world();
    for quantity in [0, -5] {
        let err = w
            .service
            .move_stock(None, move_units(quantity))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }
}

#[tokio::test]
async fn system_operations_record_no_actor() {
    let w = world();

    w.service.adjust(None, adjust(5)).await.unwrap();

    let logs = w.ledger.stock_logs().await;
    assert_eq!(logs[0].actor, None);
    let audits = w.ledger.audit_entries().await;
    assert_eq!(audits[0].actor, None);
}
