//! 경제 대시보드 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (`/`, `/health`, `/quote/{symbol}`, `/fred/{series_id}`)
//! - 30분 TTL 응답 캐시
//! - Prometheus 메트릭
//! - OpenAPI 문서 및 Swagger UI
//!
//! # 모듈 구성
//!
//! - [`app`]: 전체 라우터 조립 및 CORS
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`cache`]: TTL 응답 캐시
//! - [`routes`]: REST API 엔드포인트
//! - [`metrics`]: Prometheus 메트릭 수집
//! - [`middleware`]: HTTP 미들웨어
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod app;
pub mod cache;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use app::{cors_layer, create_router};
pub use cache::{Payload, TtlCache};
pub use error::{ApiErrorResponse, ApiResult};
pub use metrics::setup_metrics_recorder;
pub use middleware::metrics_layer;
pub use routes::*;
pub use state::AppState;
