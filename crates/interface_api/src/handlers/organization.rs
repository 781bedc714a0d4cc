//! Organization handlers
//!
//! Same CRUD shape as the vital service, over organization records.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::organization::{OrganizationRequest, OrganizationResponse};
use crate::dto::page::{PageQuery, PageResponse};
use crate::error::ApiError;
use crate::OrganizationState;

use super::health::HealthResponse;

/// Creates a new organization
pub async fn create_organization(
    State(state): State<OrganizationState>,
    Json(request): Json<OrganizationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let organization = state.store.insert(request.into()).await?;
    let location = format!("/api/v1/organization/{}", organization.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OrganizationResponse::from(organization)),
    ))
}

/// Overwrites an existing organization, its address collection included
pub async fn update_organization(
    State(state): State<OrganizationState>,
    Path(id): Path<i32>,
    Json(request): Json<OrganizationRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    state.store.update(id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an organization and its addresses
pub async fn delete_organization(
    State(state): State<OrganizationState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Gets an organization by id
pub async fn get_organization(
    State(state): State<OrganizationState>,
    Path(id): Path<i32>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let organization = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Organization with id {id} not found")))?;

    Ok(Json(OrganizationResponse::from(organization)))
}

/// Lists organizations with pagination
pub async fn list_organizations(
    State(state): State<OrganizationState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<OrganizationResponse>>, ApiError> {
    let request = query.into_page_request()?;
    let page = state.store.list(request).await?;

    Ok(Json(PageResponse::from(
        page.map(OrganizationResponse::from),
    )))
}

/// Readiness check (pings the store)
pub async fn readiness_check(
    State(state): State<OrganizationState>,
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
