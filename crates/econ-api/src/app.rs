//! 전체 라우터 조립.
//!
//! API 라우트, Swagger UI, `/metrics`에 공통 미들웨어(메트릭, 트레이스,
//! 타임아웃, CORS)를 적용합니다.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use econ_core::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::middleware::metrics_layer;
use crate::openapi::swagger_ui_router;
use crate::routes::create_api_router;
use crate::state::AppState;

/// CORS 레이어 생성.
///
/// `origins`가 비어 있으면 개발 모드로 간주하여 요청의 origin, 메서드, 헤더를
/// 그대로 허용합니다 (자격 증명 포함). 설정되어 있으면 해당 origin만 허용합니다.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    if allowed.is_empty() {
        if !origins.is_empty() {
            warn!("server.cors_origins contains no valid origins, allowing any");
        }
        return CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
            .max_age(Duration::from_secs(3600));
    }

    info!("CORS configured with {} allowed origins", allowed.len());
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// /metrics 엔드포인트 핸들러.
async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

/// 전체 라우터 생성.
///
/// `metrics_handle`이 있으면 `/metrics`를 노출합니다.
pub fn create_router(
    state: Arc<AppState>,
    server: &ServerConfig,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let mut router = Router::new()
        .merge(create_api_router().with_state(state))
        .merge(swagger_ui_router());

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics_handler))
                .with_state(handle),
        );
    }

    router
        .layer(middleware::from_fn(metrics_layer))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server.request_timeout(),
        ))
        .layer(cors_layer(&server.cors_origins))
}
