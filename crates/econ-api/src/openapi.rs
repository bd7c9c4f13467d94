//! OpenAPI 문서화 설정.
//!
//! utoipa로 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새 엔드포인트를 추가할 때:
//!
//! 1. 응답 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use econ_core::{QuoteHistory, QuoteResult, SeriesResult, TimeSeriesPoint};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorResponse;
use crate::routes::{ComponentHealth, ComponentStatus, HealthResponse, RootResponse};

/// Economic Dashboard API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Economic Dashboard API",
        description = r#"
# 경제 대시보드 백엔드

FRED 매크로 시계열과 Yahoo Finance 주식 시세를 프록시하는 REST API입니다.

## 주요 기능

- **시세**: 연초 이후 일별 종가와 연초 대비 변동률
- **매크로 시계열**: FRED 시계열 조회, 전년 대비 변환 (`?transform=yoy`)
- **캐시**: 응답은 30분간 메모리에 캐시됩니다
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "quote", description = "시세 - Yahoo Finance 일별 종가"),
        (name = "fred", description = "매크로 - FRED 시계열")
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ComponentHealth,
            ComponentStatus,
            ApiErrorResponse,
            QuoteResult,
            QuoteHistory,
            SeriesResult,
            TimeSeriesPoint,
        )
    ),
    paths(
        crate::routes::health::root,
        crate::routes::health::health_check,
        crate::routes::health::health_ready,
        crate::routes::quote::get_quote,
        crate::routes::fred::get_fred_series,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// 다음 경로에 문서 UI를 마운트합니다:
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
