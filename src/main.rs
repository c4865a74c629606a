use anyhow::Result;
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use stockroom::application::{
    ports::{identity::ActorProvider, random::BarcodePayloadSource, time::Clock},
    services::{ApplicationDependencies, ApplicationServices},
};
use stockroom::config::AppConfig;
use stockroom::domain::{
    audit::AuditLogRepository,
    catalog::{
        ProductCategoryRepository, ProductRepository, UnitOfMeasureRepository, WarehouseRepository,
        WarehouseZoneRepository,
    },
    inventory::{StockLedgerReader, StockLedgerStore},
};
use stockroom::infrastructure::{
    database,
    identity::ForwardedIdentityProvider,
    random::ThreadRngBarcodeSource,
    repositories::{
        PostgresAuditLogRepository, PostgresProductCategoryRepository, PostgresProductRepository,
        PostgresStockLedgerStore, PostgresUnitOfMeasureRepository, PostgresWarehouseRepository,
        PostgresWarehouseZoneRepository,
    },
    time::SystemClock,
};
use stockroom::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_db_connections()).await?;
    database::run_migrations(&pool).await?;

    let ledger = PostgresStockLedgerStore::new(pool.clone());
    let store: Arc<dyn StockLedgerStore> = Arc::new(ledger.clone());
    let ledger_reader: Arc<dyn StockLedgerReader> = Arc::new(ledger);

    let products: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let warehouses: Arc<dyn WarehouseRepository> =
        Arc::new(PostgresWarehouseRepository::new(pool.clone()));
    let zones: Arc<dyn WarehouseZoneRepository> =
        Arc::new(PostgresWarehouseZoneRepository::new(pool.clone()));
    let categories: Arc<dyn ProductCategoryRepository> =
        Arc::new(PostgresProductCategoryRepository::new(pool.clone()));
    let units: Arc<dyn UnitOfMeasureRepository> =
        Arc::new(PostgresUnitOfMeasureRepository::new(pool.clone()));
    let audit: Arc<dyn AuditLogRepository> = Arc::new(PostgresAuditLogRepository::new(pool));

    let actor_provider: Arc<dyn ActorProvider> = Arc::new(ForwardedIdentityProvider);
    let barcode_source: Arc<dyn BarcodePayloadSource> = Arc::new(ThreadRngBarcodeSource);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(ApplicationDependencies {
        store,
        ledger_reader,
        products,
        warehouses,
        zones,
        categories,
        units,
        audit,
        actor_provider,
        barcode_source,
        clock,
    }));

    let state = HttpState { services };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
