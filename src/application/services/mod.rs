// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{catalog::CatalogCommandService, stock::StockCommandService},
        ports::{identity::ActorProvider, random::BarcodePayloadSource, time::Clock},
        queries::{AuditQueryService, CatalogQueryService, InventoryQueryService},
    },
    domain::{
        audit::AuditLogRepository,
        catalog::{
            ProductCategoryRepository, ProductRepository, UnitOfMeasureRepository,
            WarehouseRepository, WarehouseZoneRepository, services::CodeGeneratorService,
        },
        inventory::{StockLedgerReader, StockLedgerStore},
    },
};

/// Container wiring every repository, port and domain service into the
/// command/query services the presentation layer consumes.
pub struct ApplicationServices {
    pub stock_commands: Arc<StockCommandService>,
    pub catalog_commands: Arc<CatalogCommandService>,
    pub inventory_queries: Arc<InventoryQueryService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    actor_provider: Arc<dyn ActorProvider>,
}

pub struct ApplicationDependencies {
    pub store: Arc<dyn StockLedgerStore>,
    pub ledger_reader: Arc<dyn StockLedgerReader>,
    pub products: Arc<dyn ProductRepository>,
    pub warehouses: Arc<dyn WarehouseRepository>,
    pub zones: Arc<dyn WarehouseZoneRepository>,
    pub categories: Arc<dyn ProductCategoryRepository>,
    pub units: Arc<dyn UnitOfMeasureRepository>,
    pub audit: Arc<dyn AuditLogRepository>,
    pub actor_provider: Arc<dyn ActorProvider>,
    pub barcode_source: Arc<dyn BarcodePayloadSource>,
    pub clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDependencies) -> Self {
        let generator = Arc::new(CodeGeneratorService::new(
            Arc::clone(&deps.products),
            Arc::clone(&deps.warehouses),
            Arc::clone(&deps.zones),
            Arc::clone(&deps.barcode_source),
        ));

        let stock_commands = Arc::new(StockCommandService::new(
            Arc::clone(&deps.store),
            Arc::clone(&deps.products),
            Arc::clone(&deps.warehouses),
            Arc::clone(&deps.zones),
            Arc::clone(&deps.clock),
        ));

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&deps.products),
            Arc::clone(&deps.warehouses),
            Arc::clone(&deps.zones),
            Arc::clone(&deps.categories),
            Arc::clone(&deps.units),
            Arc::clone(&generator),
            Arc::clone(&deps.audit),
            Arc::clone(&deps.clock),
        ));

        let inventory_queries = Arc::new(InventoryQueryService::new(Arc::clone(
            &deps.ledger_reader,
        )));
        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&deps.products),
            Arc::clone(&deps.warehouses),
            Arc::clone(&deps.zones),
            Arc::clone(&deps.categories),
            Arc::clone(&deps.units),
        ));
        let audit_queries = Arc::new(AuditQueryService::new(Arc::clone(&deps.audit)));

        Self {
            stock_commands,
            catalog_commands,
            inventory_queries,
            catalog_queries,
            audit_queries,
            actor_provider: deps.actor_provider,
        }
    }

    pub fn actor_provider(&self) -> Arc<dyn ActorProvider> {
        Arc::clone(&self.actor_provider)
    }
}
