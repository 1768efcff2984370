use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest},
};

pub mod partners;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        partners::get_partners,
        partners::get_partner_limit,
        partners::set_partner_promo_code_limit,
        partners::cancel_partner_promo_code_limit,
    ),
    components(schemas(Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest)),
    tags((name = "promocode-factory"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect::<Vec<HeaderValue>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(partners::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
