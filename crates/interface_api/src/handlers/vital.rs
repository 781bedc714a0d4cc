//! Vital record handlers
//!
//! Thin pass-throughs from the REST surface to the vital store: no business
//! rules live here, only status-code and shape mapping.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::page::{PageQuery, PageResponse};
use crate::dto::vital::{VitalRequest, VitalResponse};
use crate::error::ApiError;
use crate::VitalState;

use super::health::HealthResponse;

/// Creates a new vital record
///
/// Returns 201 with a Location header pointing at the new resource and the
/// stored record, id included.
pub async fn create_vital(
    State(state): State<VitalState>,
    Json(request): Json<VitalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let vital = state.store.insert(request.into()).await?;
    let location = format!("/api/v1/vital/{}", vital.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VitalResponse::from(vital)),
    ))
}

/// Overwrites an existing vital record
///
/// The path id wins over anything in the body. Returns 204 on success, 422
/// when no record with that id exists.
pub async fn update_vital(
    State(state): State<VitalState>,
    Path(id): Path<i32>,
    Json(request): Json<VitalRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    state.store.update(id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a vital record
pub async fn delete_vital(
    State(state): State<VitalState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Gets a vital record by id
pub async fn get_vital(
    State(state): State<VitalState>,
    Path(id): Path<i32>,
) -> Result<Json<VitalResponse>, ApiError> {
    let vital = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Vital with id {id} not found")))?;

    Ok(Json(VitalResponse::from(vital)))
}

/// Lists vital records with pagination
pub async fn list_vitals(
    State(state): State<VitalState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<VitalResponse>>, ApiError> {
    let request = query.into_page_request()?;
    let page = state.store.list(request).await?;

    Ok(Json(PageResponse::from(page.map(VitalResponse::from))))
}

/// Readiness check (pings the store)
pub async fn readiness_check(
    State(state): State<VitalState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    state
        .store
        .ping()
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
