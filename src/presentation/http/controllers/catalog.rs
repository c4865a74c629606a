use crate::application::commands::catalog::{
    CreateProductCategoryCommand, CreateProductCommand, CreateUnitOfMeasureCommand,
    CreateWarehouseCommand, CreateZoneCommand,
};
use crate::application::dto::{
    Page, ProductCategoryDto, ProductDto, UnitOfMeasureDto, WarehouseDto, WarehouseZoneDto,
};
use crate::presentation::http::controllers::inventory::PageParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestActor;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub sku: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: i64,
    pub unit_id: i64,
    #[serde(default)]
    pub minimum_stock: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateWarehouseRequest {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateZoneRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUnitRequest {
    pub name: String,
    pub abbreviation: String,
}

pub async fn create_product(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Json(body): Json<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let dto = state
        .services
        .catalog_commands
        .create_product(
            actor.as_ref(),
            CreateProductCommand {
                sku: body.sku,
                name: body.name,
                description: body.description,
                category_id: body.category_id,
                unit_id: body.unit_id,
                minimum_stock: body.minimum_stock,
                is_active: body.is_active,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ProductDto>>> {
    let page = state
        .services
        .catalog_queries
        .list_products(params.limit, params.offset)
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn create_warehouse(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Json(body): Json<CreateWarehouseRequest>,
) -> HttpResult<(StatusCode, Json<WarehouseDto>)> {
    let dto = state
        .services
        .catalog_commands
        .create_warehouse(
            actor.as_ref(),
            CreateWarehouseCommand {
                name: body.name,
                address: body.address,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_warehouses(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<WarehouseDto>>> {
    let page = state
        .services
        .catalog_queries
        .list_warehouses(params.limit, params.offset)
        .await
        .into_http()?;
    Ok(Json(page))
}

pub async fn create_zone(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Path(warehouse_id): Path<i64>,
    Json(body): Json<CreateZoneRequest>,
) -> HttpResult<(StatusCode, Json<WarehouseZoneDto>)> {
    let dto = state
        .services
        .catalog_commands
        .create_zone(
            actor.as_ref(),
            CreateZoneCommand {
                warehouse_id,
                name: body.name,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_zones(
    Extension(state): Extension<HttpState>,
    Path(warehouse_id): Path<i64>,
) -> HttpResult<Json<Vec<WarehouseZoneDto>>> {
    let zones = state
        .services
        .catalog_queries
        .list_zones(warehouse_id)
        .await
        .into_http()?;
    Ok(Json(zones))
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Json(body): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<ProductCategoryDto>)> {
    let dto = state
        .services
        .catalog_commands
        .create_category(actor.as_ref(), CreateProductCategoryCommand { name: body.name })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProductCategoryDto>>> {
    let categories = state
        .services
        .catalog_queries
        .list_categories()
        .await
        .into_http()?;
    Ok(Json(categories))
}

pub async fn create_unit(
    Extension(state): Extension<HttpState>,
    RequestActor(actor): RequestActor,
    Json(body): Json<CreateUnitRequest>,
) -> HttpResult<(StatusCode, Json<UnitOfMeasureDto>)> {
    let dto = state
        .services
        .catalog_commands
        .create_unit(
            actor.as_ref(),
            CreateUnitOfMeasureCommand {
                name: body.name,
                abbreviation: body.abbreviation,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list_units(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<UnitOfMeasureDto>>> {
    let units = state.services.catalog_queries.list_units().await.into_http()?;
    Ok(Json(units))
}
