//! API 에러 응답 타입.
//!
//! 모든 엔드포인트는 실패 시 `{"error": ..., "code": ...}` 본문을 반환합니다.
//!
//! # 상태 코드 매핑
//!
//! | 에러 | 기본 | `distinct_error_status` |
//! |---|---|---|
//! | `NotFound` | 500 | 404 |
//! | `EmptyResult` | 500 | 404 |
//! | `Upstream` | 500 | 502 |

use axum::http::StatusCode;
use axum::Json;
use econ_core::EconError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API 에러 응답.
///
/// ```json
/// {
///   "error": "No data returned for FRED series NOPE",
///   "code": "NOT_FOUND"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
    /// 에러 코드 (예: "NOT_FOUND", "UPSTREAM_ERROR")
    pub code: String,
}

impl ApiErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

impl From<&EconError> for ApiErrorResponse {
    fn from(err: &EconError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.error)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 에러에 대응하는 HTTP 상태 코드.
pub fn status_for(err: &EconError, distinct: bool) -> StatusCode {
    match (err, distinct) {
        (_, false) => StatusCode::INTERNAL_SERVER_ERROR,
        (EconError::NotFound(_) | EconError::EmptyResult(_), true) => StatusCode::NOT_FOUND,
        (EconError::Upstream(_), true) => StatusCode::BAD_GATEWAY,
    }
}

/// 도메인 에러를 핸들러 에러로 변환합니다.
pub fn to_api_error(err: &EconError, distinct: bool) -> (StatusCode, Json<ApiErrorResponse>) {
    (status_for(err, distinct), Json(ApiErrorResponse::from(err)))
}
