use crate::application::dto::{AuditLogDto, Page};
use crate::presentation::http::controllers::inventory::PageParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<AuditLogDto>>> {
    let page = state
        .services
        .audit_queries
        .list_audit_logs(params.limit, params.offset)
        .await
        .into_http()?;
    Ok(Json(page))
}
