//! 헬스 체크 endpoint.
//!
//! - `GET /`: 서비스 안내 메시지
//! - `GET /health`: liveness 체크
//! - `GET /health/ready`: 업스트림 설정과 캐시 상태를 포함한 readiness 체크

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// 루트 안내 메시지.
pub const ROOT_MESSAGE: &str = "Economic Dashboard Backend is running";

/// 루트 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// 헬스 체크 응답 구조체.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// 전체 서비스 상태 ("healthy" | "degraded")
    pub status: String,

    /// API 버전
    pub version: String,

    /// 서버 업타임(초)
    pub uptime_secs: i64,

    /// 현재 시간 (ISO 8601)
    pub timestamp: String,

    /// 개별 컴포넌트 상태
    pub components: ComponentHealth,
}

/// 개별 컴포넌트 상태.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    /// FRED API 키 설정 상태
    pub fred: ComponentStatus,

    /// 응답 캐시 상태 (저장된 항목 수)
    pub cache: ComponentStatus,
}

/// 컴포넌트 상태.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// 상태 ("up" | "not_configured")
    pub status: String,

    /// 추가 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentStatus {
    pub fn up() -> Self {
        Self {
            status: "up".to_string(),
            message: None,
        }
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self {
            status: "not_configured".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn up_with_info(message: impl Into<String>) -> Self {
        Self {
            status: "up".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 서비스 안내 메시지.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "서비스 실행 중", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// 간단한 헬스 체크 (liveness 체크용).
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "서버 응답 가능", body = String)
    ),
    tag = "health"
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 상세 헬스 체크 (readiness 체크용).
///
/// FRED API 키가 없으면 `degraded`로 보고하지만 200을 반환합니다.
/// 시세 엔드포인트는 키 없이도 동작하기 때문입니다.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "서버 상태", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let fred_status = if state.fred_configured {
        ComponentStatus::up()
    } else {
        ComponentStatus::not_configured("FRED_API_KEY is not set")
    };

    let cache_entries = state.cache.len().await;
    let cache_status = ComponentStatus::up_with_info(format!(
        "{} entries, ttl {}s",
        cache_entries,
        state.cache.ttl().num_seconds()
    ));

    let response = HealthResponse {
        status: if state.fred_configured {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: state.version.clone(),
        uptime_secs: state.uptime_secs(),
        timestamp: state.clock.now().to_rfc3339(),
        components: ComponentHealth {
            fred: fred_status,
            cache: cache_status,
        },
    };

    (StatusCode::OK, Json(response))
}

/// 헬스 체크 라우터 생성.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(health_ready))
}
