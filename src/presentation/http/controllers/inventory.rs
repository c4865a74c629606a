use crate::application::commands::stock::{AdjustStockCommand, MoveStockCommand};
use crate::application::dto::{Page, ProductInventoryDto, StockLogDto, pagination};
use crate::domain::inventory::ReferenceKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestActor;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    pagination::DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustStockRequest {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub zone_id: i64,
    pub quantity_change: i64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub reference_kind: Option<String>,
    #[serde(default)]
    pub reference_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveStockRequest {
    pub product_id: i64,
    pub warehouse_id: i64,
    pub source_zone_id: i64,
    pub destination_zone_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
}

pub async fn adjust_stock(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Json(body): Json<AdjustStockRequest>,
) -> HttpResult<Json<ProductInventoryDto>> {
    let reference_kind = body
        .reference_kind
        .as_deref()
        .map(ReferenceKind::parse)
        .transpose()
        .map_err(|err| HttpError::from_error(err.into()))?;

    let dto = state
        .services
        .stock_commands
        .adjust(
            actor.as_ref(),
            AdjustStockCommand {
                product_id: body.product_id,
                warehouse_id: body.warehouse_id,
                zone_id: body.zone_id,
                quantity_change: body.quantity_change,
                note: body.note,
                reference_kind,
                reference_id: body.reference_id,
            },
        )
        .await
        .into_http()?;
    Ok(Json(dto))
}

pub async fn move_stock(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Json(body): Json<MoveStockRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .stock_commands
        .move_stock(
            actor.as_ref(),
            MoveStockCommand {
                product_id: body.product_id,
                warehouse_id: body.warehouse_id,
                source_zone_id: body.source_zone_id,
                destination_zone_id: body.destination_zone_id,
                quantity: body.quantity,
                note: body.note,
            },
        )
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_inventory(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ProductInventoryDto>>> {
    let page = state
        .services
        .inventory_queries
        .list_inventory(params.limit, params.offset)
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn list_stock_logs(
    Extension(state): Extension<HttpState>,
    Path(inventory_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<StockLogDto>>> {
    let page = state
        .services
        .inventory_queries
        .list_stock_logs(inventory_id, params.limit, params.offset)
        .await
        .into_http()?;
    Ok(Json(page))
}
