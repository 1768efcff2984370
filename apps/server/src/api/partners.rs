use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest},
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use promocode_factory_core::partners::PartnerServiceTrait;
use uuid::Uuid;

#[utoipa::path(get, path = "/api/v1/partners", responses((status = 200, body = [Partner])))]
pub async fn get_partners(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Partner>>> {
    let partners = state.partner_service.get_partners().await?;
    Ok(Json(partners.into_iter().map(Partner::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/partners/{id}/limits/{limit_id}",
    params(
        ("id" = Uuid, Path, description = "Partner id"),
        ("limit_id" = Uuid, Path, description = "Limit id"),
    ),
    responses((status = 200, body = PartnerPromoCodeLimit), (status = 404))
)]
pub async fn get_partner_limit(
    Path((id, limit_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PartnerPromoCodeLimit>> {
    let limit = state.partner_service.get_partner_limit(id, limit_id).await?;
    Ok(Json(PartnerPromoCodeLimit::from(limit)))
}

/// Installs a new promo-code limit, cancelling the current one.
#[utoipa::path(
    post,
    path = "/api/v1/partners/{id}/limits",
    params(("id" = Uuid, Path, description = "Partner id")),
    request_body = SetPartnerPromoCodeLimitRequest,
    responses(
        (status = 201, body = PartnerPromoCodeLimit),
        (status = 400, description = "Partner is not active or limit is not positive"),
        (status = 404, description = "Partner not found"),
    )
)]
pub async fn set_partner_promo_code_limit(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetPartnerPromoCodeLimitRequest>,
) -> ApiResult<impl IntoResponse> {
    let limit = state
        .partner_service
        .set_partner_promo_code_limit(id, request.into())
        .await?;
    let location = format!("/api/v1/partners/{}/limits/{}", id, limit.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PartnerPromoCodeLimit::from(limit)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/partners/{id}/canceledLimits",
    params(("id" = Uuid, Path, description = "Partner id")),
    responses((status = 204), (status = 400), (status = 404))
)]
pub async fn cancel_partner_promo_code_limit(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .partner_service
        .cancel_partner_promo_code_limit(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/partners", get(get_partners))
        .route("/partners/{id}/limits", post(set_partner_promo_code_limit))
        .route("/partners/{id}/limits/{limit_id}", get(get_partner_limit))
        .route(
            "/partners/{id}/canceledLimits",
            post(cancel_partner_promo_code_limit),
        )
}
