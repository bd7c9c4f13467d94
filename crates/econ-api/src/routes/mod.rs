//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/` - 서비스 안내 메시지
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/quote/{symbol}` - 연초 이후 주식 시세
//! - `/fred/{series_id}` - FRED 매크로 시계열

pub mod fred;
pub mod health;
pub mod quote;

pub use fred::{fred_router, FredQuery};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse, RootResponse};
pub use quote::quote_router;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::root))
        .nest("/health", health_router())
        .nest("/quote", quote_router())
        .nest("/fred", fred_router())
}
